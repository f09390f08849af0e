use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use rasoi_core::supplier::{Supplier, SupplierDraft};

use crate::error::AppError;
use crate::state::AppState;

/// GET /api/suppliers — all suppliers with a count.
pub async fn list_suppliers(State(app): State<AppState>) -> Json<serde_json::Value> {
    let suppliers = app.store.suppliers().await;
    let count = suppliers.len();
    Json(serde_json::json!({
        "suppliers": suppliers,
        "count": count,
    }))
}

/// POST /api/suppliers — create a supplier.
///
/// A missing, empty, or malformed JSON body collapses to an empty draft and
/// fails the same required-field check as a body without `name`.
pub async fn create_supplier(
    State(app): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Supplier>), AppError> {
    let draft: SupplierDraft = serde_json::from_slice(&body).unwrap_or_default();
    let supplier = app.store.create_supplier(draft).await?;
    tracing::info!(id = supplier.id, "created supplier");
    Ok((StatusCode::CREATED, Json(supplier)))
}
