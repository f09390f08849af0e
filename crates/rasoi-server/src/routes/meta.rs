use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;

/// GET / — service metadata and the endpoint map.
pub async fn home() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Rasoi Connect Hub Backend API",
        "status": "running",
        "timestamp": Utc::now(),
        "endpoints": {
            "suppliers": "/api/suppliers",
            "vendors": "/api/vendors",
            "orders": "/api/orders",
            "health": "/health",
        },
    }))
}

/// GET /health — static healthy status with a timestamp.
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": Utc::now(),
        "message": "Backend is running successfully!",
    }))
}

/// Fallback for any unmatched (verb, path) pair.
pub async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "Endpoint not found" })),
    )
}
