use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{RasoiError, Result};

/// Status a new order starts in when the payload does not say otherwise.
pub const DEFAULT_STATUS: &str = "pending";

// ---------------------------------------------------------------------------
// Order
// ---------------------------------------------------------------------------

/// A purchase order placed by a vendor against a supplier.
///
/// `vendor_id` and `supplier_id` are not checked against the other two
/// collections; dangling references are an accepted, documented gap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: u64,
    pub vendor_id: u64,
    pub supplier_id: u64,
    pub items: Vec<serde_json::Value>,
    pub total_amount: f64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// OrderDraft
// ---------------------------------------------------------------------------

/// Incoming order payload. Both party ids are required; item shapes are
/// passed through opaquely.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderDraft {
    #[serde(default)]
    pub vendor_id: Option<u64>,
    #[serde(default)]
    pub supplier_id: Option<u64>,
    #[serde(default)]
    pub items: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    pub total_amount: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
}

impl OrderDraft {
    pub(crate) fn into_order(self, id: u64) -> Result<Order> {
        let (vendor_id, supplier_id) = match (self.vendor_id, self.supplier_id) {
            (Some(v), Some(s)) => (v, s),
            _ => return Err(RasoiError::OrderPartiesRequired),
        };

        Ok(Order {
            id,
            vendor_id,
            supplier_id,
            items: self.items.unwrap_or_default(),
            total_amount: self.total_amount.unwrap_or(0.0),
            status: self.status.unwrap_or_else(|| DEFAULT_STATUS.to_string()),
            created_at: Utc::now(),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_applies_defaults() {
        let draft = OrderDraft {
            vendor_id: Some(2),
            supplier_id: Some(5),
            ..Default::default()
        };
        let order = draft.into_order(1).unwrap();

        assert_eq!(order.vendor_id, 2);
        assert_eq!(order.supplier_id, 5);
        assert!(order.items.is_empty());
        assert_eq!(order.total_amount, 0.0);
        assert_eq!(order.status, "pending");
    }

    #[test]
    fn draft_keeps_provided_fields() {
        let draft = OrderDraft {
            vendor_id: Some(1),
            supplier_id: Some(1),
            items: Some(vec![serde_json::json!({"sku": "turmeric", "qty": 4})]),
            total_amount: Some(129.5),
            status: Some("confirmed".into()),
        };
        let order = draft.into_order(9).unwrap();

        assert_eq!(order.id, 9);
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.total_amount, 129.5);
        assert_eq!(order.status, "confirmed");
    }

    #[test]
    fn missing_vendor_id_is_rejected() {
        let draft = OrderDraft {
            supplier_id: Some(1),
            ..Default::default()
        };
        assert_eq!(
            draft.into_order(1).unwrap_err(),
            RasoiError::OrderPartiesRequired
        );
    }

    #[test]
    fn missing_supplier_id_is_rejected() {
        let draft = OrderDraft {
            vendor_id: Some(1),
            ..Default::default()
        };
        let err = draft.into_order(1).unwrap_err();
        assert_eq!(err.to_string(), "Vendor ID and Supplier ID are required");
    }
}
