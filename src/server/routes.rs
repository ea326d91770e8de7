//! Router configuration for the web server.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use super::handlers;
use super::AppState;

/// Transport body cap. Sits well above the pipeline's 10 MiB rule so an
/// oversize upload gets the pipeline's error message instead of a bare
/// length rejection from the extractor layer.
const BODY_LIMIT_BYTES: usize = 64 * 1024 * 1024;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api", get(handlers::root))
        .route("/api/health", get(handlers::health))
        .route("/api/analyze-document", post(handlers::analyze_document))
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
