//! HTTP adapter for health and quota endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{HealthResponse, RateLimitResponse};
pub use routes::system_routes;
