use tokio::sync::Mutex;

use crate::error::Result;
use crate::order::{Order, OrderDraft};
use crate::supplier::{Supplier, SupplierDraft};
use crate::vendor::{Vendor, VendorDraft};

// ---------------------------------------------------------------------------
// ResourceStore
// ---------------------------------------------------------------------------

/// In-memory holder of the three record collections.
///
/// Each collection sits behind its own mutex so reading the length for id
/// assignment and the append happen in one critical section; concurrent
/// creates can never hand out the same id. No deletes exist, so ids stay
/// sequential and insertion order equals id order. Everything vanishes when
/// the process exits.
#[derive(Debug, Default)]
pub struct ResourceStore {
    suppliers: Mutex<Vec<Supplier>>,
    vendors: Mutex<Vec<Vendor>>,
    orders: Mutex<Vec<Order>>,
}

impl ResourceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append a supplier, assigning the next sequential id.
    /// A failed validation leaves the collection untouched.
    pub async fn create_supplier(&self, draft: SupplierDraft) -> Result<Supplier> {
        let mut suppliers = self.suppliers.lock().await;
        let supplier = draft.into_supplier(suppliers.len() as u64 + 1)?;
        suppliers.push(supplier.clone());
        Ok(supplier)
    }

    /// All suppliers in insertion order.
    pub async fn suppliers(&self) -> Vec<Supplier> {
        self.suppliers.lock().await.clone()
    }

    pub async fn create_vendor(&self, draft: VendorDraft) -> Result<Vendor> {
        let mut vendors = self.vendors.lock().await;
        let vendor = draft.into_vendor(vendors.len() as u64 + 1)?;
        vendors.push(vendor.clone());
        Ok(vendor)
    }

    pub async fn vendors(&self) -> Vec<Vendor> {
        self.vendors.lock().await.clone()
    }

    pub async fn create_order(&self, draft: OrderDraft) -> Result<Order> {
        let mut orders = self.orders.lock().await;
        let order = draft.into_order(orders.len() as u64 + 1)?;
        orders.push(order.clone());
        Ok(order)
    }

    pub async fn orders(&self) -> Vec<Order> {
        self.orders.lock().await.clone()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
