use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{RasoiError, Result};

// ---------------------------------------------------------------------------
// Vendor
// ---------------------------------------------------------------------------

/// A street-food vendor buying from suppliers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vendor {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub restaurant_type: String,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// VendorDraft
// ---------------------------------------------------------------------------

/// Incoming vendor payload. Only `name` is required.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VendorDraft {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub restaurant_type: Option<String>,
}

impl VendorDraft {
    pub(crate) fn into_vendor(self, id: u64) -> Result<Vendor> {
        let name = self
            .name
            .filter(|n| !n.trim().is_empty())
            .ok_or(RasoiError::NameRequired)?;

        Ok(Vendor {
            id,
            name,
            email: self.email.unwrap_or_default(),
            phone: self.phone.unwrap_or_default(),
            address: self.address.unwrap_or_default(),
            restaurant_type: self.restaurant_type.unwrap_or_default(),
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
    fn draft_applies_empty_defaults() {
        let draft = VendorDraft {
            name: Some("Chaat Corner".into()),
            ..Default::default()
        };
        let vendor = draft.into_vendor(1).unwrap();

        assert_eq!(vendor.name, "Chaat Corner");
        assert_eq!(vendor.email, "");
        assert_eq!(vendor.restaurant_type, "");
    }

    #[test]
    fn draft_keeps_restaurant_type() {
        let draft = VendorDraft {
            name: Some("Dosa Hut".into()),
            restaurant_type: Some("south-indian".into()),
            ..Default::default()
        };
        let vendor = draft.into_vendor(3).unwrap();

        assert_eq!(vendor.id, 3);
        assert_eq!(vendor.restaurant_type, "south-indian");
    }

    #[test]
    fn missing_name_is_rejected() {
        let err = VendorDraft::default().into_vendor(1).unwrap_err();
        assert_eq!(err, RasoiError::NameRequired);
    }
}
