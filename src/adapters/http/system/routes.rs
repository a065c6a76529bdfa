//! HTTP routes for service-level endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{health, rate_limit};
use crate::adapters::http::AppState;

/// Creates the system router.
///
/// Routes:
/// - `GET /health` - Health check with configuration flags
/// - `GET /api/github/rate-limit` - Host API quota
pub fn system_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/api/github/rate-limit", get(rate_limit))
}
