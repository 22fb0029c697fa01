//! API Routes
//!
//! Configures the Axum router with all index service endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    clear_handler, event_handler, health_handler, list_handler, resolve_handler, stats_handler,
    AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /events` - Apply a relay event, returns the relay action
/// - `GET /mirrors` - List mirrors, most recently used first
/// - `GET /mirrors/:source` - Resolve the mirror of a source message
/// - `DELETE /mirrors` - Clear the index
/// - `GET /stats` - Index statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/events", post(event_handler))
        .route("/mirrors", get(list_handler).delete(clear_handler))
        .route("/mirrors/:source", get(resolve_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
