//! HTTP adapter for proposal endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{GenerateProposalRequest, GenerateProposalResponse};
pub use routes::proposal_routes;
