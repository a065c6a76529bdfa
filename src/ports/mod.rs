//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Upstream Ports
//!
//! - `RepositoryHost` - Code-hosting REST API (users, repositories, quota)
//! - `AIProvider` - Chat-completion text generation
//!
//! ## Capability Ports
//!
//! - `TranscriptionWriter` - Produces the spoken self-introduction

mod ai_provider;
mod repository_host;
mod transcription_writer;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, RequestMetadata, TokenUsage,
};
pub use repository_host::{HostCredentials, HostError, HostRateLimit, RepositoryHost};
pub use transcription_writer::TranscriptionWriter;
