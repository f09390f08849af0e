use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{RasoiError, Result};

// ---------------------------------------------------------------------------
// Supplier
// ---------------------------------------------------------------------------

/// A registered raw-ingredient supplier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplier {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub specialties: Vec<String>,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// SupplierDraft
// ---------------------------------------------------------------------------

/// Incoming supplier payload. Only `name` is required; every other field
/// falls back to an empty default when omitted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SupplierDraft {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub specialties: Option<Vec<String>>,
}

impl SupplierDraft {
    /// Materialize the draft into a stored record with the given id,
    /// applying defaults for omitted optional fields.
    pub(crate) fn into_supplier(self, id: u64) -> Result<Supplier> {
        let name = self
            .name
            .filter(|n| !n.trim().is_empty())
            .ok_or(RasoiError::NameRequired)?;

        Ok(Supplier {
            id,
            name,
            email: self.email.unwrap_or_default(),
            phone: self.phone.unwrap_or_default(),
            address: self.address.unwrap_or_default(),
            specialties: self.specialties.unwrap_or_default(),
            created_at: Utc::now(),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
