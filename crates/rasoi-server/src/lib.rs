pub mod error;
pub mod routes;
pub mod state;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the axum Router with all API routes and middleware.
///
/// Every call constructs a fresh, empty `ResourceStore`; the store is shared
/// across requests through `AppState`, so integration tests clone the
/// returned router instead of rebuilding it.
pub fn build_router() -> Router {
    let app_state = state::AppState::new();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::meta::home))
        .route("/health", get(routes::meta::health))
        // Suppliers
        .route("/api/suppliers", get(routes::suppliers::list_suppliers))
        .route("/api/suppliers", post(routes::suppliers::create_supplier))
        // Vendors
        .route("/api/vendors", get(routes::vendors::list_vendors))
        .route("/api/vendors", post(routes::vendors::create_vendor))
        // Orders
        .route("/api/orders", get(routes::orders::list_orders))
        .route("/api/orders", post(routes::orders::create_order))
        .fallback(routes::meta::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}

/// Start the API server, binding all interfaces on the given port.
pub async fn serve(port: u16) -> anyhow::Result<()> {
    let app = build_router();

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Rasoi Connect Hub backend listening on http://localhost:{port}");

    axum::serve(listener, app).await?;
    Ok(())
}
