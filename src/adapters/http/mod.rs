//! HTTP adapters - REST API implementations.
//!
//! Each endpoint group has its own module exposing a router over the shared
//! [`AppState`]; [`api_router`] merges them.

pub mod error;
pub mod profile;
pub mod proposal;
mod state;
pub mod system;

use axum::Router;

pub use error::ErrorResponse;
pub use profile::profile_routes;
pub use proposal::proposal_routes;
pub use state::AppState;
pub use system::system_routes;

/// Builds the full API router.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .merge(system_routes())
        .merge(profile_routes())
        .merge(proposal_routes())
        .with_state(state)
}
