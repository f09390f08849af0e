use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use rasoi_core::vendor::{Vendor, VendorDraft};

use crate::error::AppError;
use crate::state::AppState;

/// GET /api/vendors — all vendors with a count.
pub async fn list_vendors(State(app): State<AppState>) -> Json<serde_json::Value> {
    let vendors = app.store.vendors().await;
    let count = vendors.len();
    Json(serde_json::json!({
        "vendors": vendors,
        "count": count,
    }))
}

/// POST /api/vendors — create a vendor.
pub async fn create_vendor(
    State(app): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Vendor>), AppError> {
    let draft: VendorDraft = serde_json::from_slice(&body).unwrap_or_default();
    let vendor = app.store.create_vendor(draft).await?;
    tracing::info!(id = vendor.id, "created vendor");
    Ok((StatusCode::CREATED, Json(vendor)))
}
