//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `github` - Host API client (reqwest)
//! - `ai` - Text-generation providers and the transcription writer
//! - `http` - REST endpoints (axum)

pub mod ai;
pub mod github;
pub mod http;

pub use ai::{LlmTranscriptionWriter, MockAIProvider, OpenAIConfig, OpenAIProvider};
pub use github::{GitHubClient, GitHubConfig};
pub use http::{api_router, AppState};
