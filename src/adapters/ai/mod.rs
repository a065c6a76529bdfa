//! AI Provider Adapters.
//!
//! ## Available Adapters
//!
//! - `OpenAIProvider` - OpenAI chat completions
//! - `MockAIProvider` - Configurable mock for testing
//! - `LlmTranscriptionWriter` - TranscriptionWriter on top of any AIProvider

mod mock_provider;
mod openai_provider;
mod transcription_writer;

pub use mock_provider::{MockAIProvider, MockError, MockResponse};
pub use openai_provider::{OpenAIConfig, OpenAIProvider};
pub use transcription_writer::LlmTranscriptionWriter;
