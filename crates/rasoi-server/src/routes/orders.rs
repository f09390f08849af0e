use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use rasoi_core::order::{Order, OrderDraft};

use crate::error::AppError;
use crate::state::AppState;

/// GET /api/orders — all orders with a count.
pub async fn list_orders(State(app): State<AppState>) -> Json<serde_json::Value> {
    let orders = app.store.orders().await;
    let count = orders.len();
    Json(serde_json::json!({
        "orders": orders,
        "count": count,
    }))
}

/// POST /api/orders — create an order.
///
/// Party ids are required but never checked against the supplier and vendor
/// collections.
pub async fn create_order(
    State(app): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Order>), AppError> {
    let draft: OrderDraft = serde_json::from_slice(&body).unwrap_or_default();
    let order = app.store.create_order(draft).await?;
    tracing::info!(id = order.id, "created order");
    Ok((StatusCode::CREATED, Json(order)))
}
