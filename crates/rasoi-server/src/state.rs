use std::sync::Arc;

use rasoi_core::ResourceStore;

/// Shared application state passed to all route handlers.
///
/// The store is owned here rather than living in a global; tests get
/// isolation by building a fresh state (via `build_router`) per test.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ResourceStore>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            store: Arc::new(ResourceStore::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn new_state_starts_empty() {
        let state = AppState::new();
        assert!(state.store.suppliers().await.is_empty());
    }

    #[tokio::test]
    async fn clones_share_one_store() {
        let state = AppState::new();
        let clone = state.clone();

        state
            .store
            .create_supplier(rasoi_core::supplier::SupplierDraft {
                name: Some("shared".into()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(clone.store.suppliers().await.len(), 1);
    }
}
