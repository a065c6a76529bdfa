//! TranscriptionWriter port for the spoken self-introduction.
//!
//! The profile generator hands a structured summary of the user to this
//! capability and receives plain introduction text back. Whether the text
//! comes from an LLM or a fixture is up to the implementation.

use async_trait::async_trait;

use crate::domain::profile::TranscriptionContext;

use super::AIError;

/// Produces a spoken self-introduction from structured context.
#[async_trait]
pub trait TranscriptionWriter: Send + Sync {
    /// Writes the introduction text, without speaking tips.
    async fn write_transcription(&self, context: &TranscriptionContext) -> Result<String, AIError>;
}
