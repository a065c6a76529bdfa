//! HTTP routes for profile endpoints.

use axum::routing::post;
use axum::Router;

use super::handlers::generate_profile;
use crate::adapters::http::AppState;

/// Creates the profile router.
///
/// Routes:
/// - `POST /api/profile/generate` - Generate a profile from repository history
pub fn profile_routes() -> Router<AppState> {
    Router::new().route("/api/profile/generate", post(generate_profile))
}
