//! API Routes
//!
//! Configures the Axum router with all maintenance endpoints.

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    clear_handler, health_handler, lookup_handler, metrics_handler, reset_metrics_handler,
    store_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `PUT /cache` - Store a response payload under a fingerprint
/// - `GET /cache/:key` - Look up a fingerprint (miss is 200 + hit:false)
/// - `DELETE /cache` - Clear the cache (maintenance)
/// - `GET /metrics` - Performance metrics snapshot
/// - `POST /metrics/reset` - Zero all metrics counters (maintenance)
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/cache", put(store_handler).delete(clear_handler))
        .route("/cache/:key", get(lookup_handler))
        .route("/metrics", get(metrics_handler))
        .route("/metrics/reset", post(reset_metrics_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
