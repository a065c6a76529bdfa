//! LLM-backed TranscriptionWriter.
//!
//! Frames the profile context as a chat prompt and returns the model's
//! introduction text, trimmed.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::profile::TranscriptionContext;
use crate::ports::{
    AIError, AIProvider, CompletionRequest, MessageRole, RequestMetadata, TranscriptionWriter,
};

const SYSTEM_PROMPT: &str = "You are a professional profile writer specializing in creating engaging self-introductions for freelancers.";

const MAX_TOKENS: u32 = 300;
const TEMPERATURE: f32 = 0.7;
const PRESENCE_PENALTY: f32 = 0.1;
const FREQUENCY_PENALTY: f32 = 0.1;

/// Writes transcriptions through an [`AIProvider`].
pub struct LlmTranscriptionWriter {
    ai_provider: Arc<dyn AIProvider>,
}

impl LlmTranscriptionWriter {
    pub fn new(ai_provider: Arc<dyn AIProvider>) -> Self {
        Self { ai_provider }
    }

    /// Renders the context block embedded in the user prompt.
    fn context_block(context: &TranscriptionContext) -> String {
        let or_default = |items: Vec<String>, default: &str| {
            if items.is_empty() {
                default.to_string()
            } else {
                items.join(", ")
            }
        };

        let project_types: Vec<String> = context
            .project_types
            .iter()
            .map(|t| t.label().to_string())
            .collect();

        format!(
            "Name: {}\nGitHub Username: {}\nExperience: {} years of coding\nTotal Projects: {}\nTop Programming Languages: {}\nProject Types: {}\nNotable Projects: {}",
            context.name.as_deref().unwrap_or("Software Developer"),
            context.username,
            context.years_of_experience,
            context.total_projects,
            or_default(context.top_languages.clone(), "Various"),
            or_default(project_types, "Various software projects"),
            or_default(context.notable_projects.clone(), "Various projects"),
        )
    }

    fn user_prompt(context: &TranscriptionContext) -> String {
        format!(
            r#"Generate a professional 2-minute self-introduction transcription for an Upwork profile.

Context:
{}

Requirements:
- Keep it under 200 words (approximately 2 minutes when spoken)
- Make it conversational and engaging
- Include key skills and notable projects
- End with enthusiasm about opportunities
- Make it sound natural and professional

Generate only the transcription text (no speaking tips or formatting):"#,
            Self::context_block(context)
        )
    }
}

#[async_trait]
impl TranscriptionWriter for LlmTranscriptionWriter {
    async fn write_transcription(&self, context: &TranscriptionContext) -> Result<String, AIError> {
        let metadata = RequestMetadata::new(format!("transcription-{}", uuid::Uuid::new_v4()));
        let request = CompletionRequest::new(metadata)
            .with_system_prompt(SYSTEM_PROMPT)
            .with_message(MessageRole::User, Self::user_prompt(context))
            .with_max_tokens(MAX_TOKENS)
            .with_temperature(TEMPERATURE)
            .with_penalties(PRESENCE_PENALTY, FREQUENCY_PENALTY);

        let response = self.ai_provider.complete(request).await?;
        let text = response.content.trim();
        if text.is_empty() {
            return Err(AIError::parse("Empty transcription in response"));
        }

        tracing::info!(
            username = %context.username,
            tokens = response.usage.total_tokens,
            "Transcription generated"
        );
        Ok(text.to_string())
    }
}
