//! Profile Generator - turns an analysis into profile copy.
//!
//! Title, overview, skills and portfolio are pure templating. The spoken
//! introduction is delegated to an injected [`TranscriptionWriter`]; when
//! none is configured, or the writer fails, generation fails as a whole.

use std::sync::Arc;

use crate::domain::analysis::RepositoryAnalysis;
use crate::domain::foundation::{DomainError, ErrorCode, Timestamp};
use crate::domain::repository::{RepositoryRecord, UserRecord};
use crate::ports::{AIError, TranscriptionWriter};

use super::{
    generate_overview, generate_portfolio, generate_skills, generate_title, skills_summary,
    with_speaking_tips, ProfileRecord, TranscriptionContext,
};

/// Assembles the five profile fields.
#[derive(Clone)]
pub struct ProfileGenerator {
    transcription_writer: Option<Arc<dyn TranscriptionWriter>>,
}

impl ProfileGenerator {
    pub fn new(transcription_writer: Arc<dyn TranscriptionWriter>) -> Self {
        Self {
            transcription_writer: Some(transcription_writer),
        }
    }

    /// A generator that cannot produce transcriptions.
    pub fn without_transcription() -> Self {
        Self {
            transcription_writer: None,
        }
    }

    pub fn from_optional(transcription_writer: Option<Arc<dyn TranscriptionWriter>>) -> Self {
        Self {
            transcription_writer,
        }
    }

    pub fn can_transcribe(&self) -> bool {
        self.transcription_writer.is_some()
    }

    pub async fn generate(
        &self,
        user: &UserRecord,
        repos: &[RepositoryRecord],
        analysis: &RepositoryAnalysis,
    ) -> Result<ProfileRecord, DomainError> {
        self.generate_at(user, repos, analysis, Timestamp::now()).await
    }

    /// Generates the profile with experience measured up to `now`.
    ///
    /// # Errors
    ///
    /// - `GenerationUnavailable` if no writer is configured or the provider
    ///   rejects our credentials
    /// - `AIProviderError` for any other writer failure
    pub async fn generate_at(
        &self,
        user: &UserRecord,
        repos: &[RepositoryRecord],
        analysis: &RepositoryAnalysis,
        now: Timestamp,
    ) -> Result<ProfileRecord, DomainError> {
        let title = generate_title(analysis);
        let overview = generate_overview(user, repos.len(), analysis, &now);
        let skills = generate_skills(analysis);
        let portfolio_projects = generate_portfolio(repos, analysis);

        let context = TranscriptionContext::build(user, repos, analysis, &now);
        let transcription = self.transcribe(&context).await?;

        Ok(ProfileRecord {
            title,
            overview,
            skills,
            portfolio_projects,
            transcription,
        })
    }

    /// Comma-separated summary of the strongest skills.
    pub fn skills_summary(&self, analysis: &RepositoryAnalysis) -> String {
        skills_summary(analysis)
    }

    async fn transcribe(&self, context: &TranscriptionContext) -> Result<String, DomainError> {
        let writer = self.transcription_writer.as_ref().ok_or_else(|| {
            DomainError::new(
                ErrorCode::GenerationUnavailable,
                AIError::NotConfigured.to_string(),
            )
        })?;

        match writer.write_transcription(context).await {
            Ok(text) => Ok(with_speaking_tips(&text)),
            Err(err) => {
                tracing::error!(error = %err, username = %context.username, "Transcription failed");
                let code = if err.is_unavailable() {
                    ErrorCode::GenerationUnavailable
                } else {
                    ErrorCode::AIProviderError
                };
                Err(DomainError::new(
                    code,
                    format!("Failed to generate AI transcription: {}", err),
                ))
            }
        }
    }
}
