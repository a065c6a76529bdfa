//! GitHub adapter - RepositoryHost over the GitHub REST API.
//!
//! - `GitHubClient` - Paced reqwest client with listing, enrichment and quota
//! - `RequestPacer` - Process-wide minimum spacing between requests

mod client;
mod pacer;
mod types;

pub use client::{GitHubClient, GitHubConfig};
pub use pacer::RequestPacer;
