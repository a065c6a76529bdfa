//! GenerateProposal - Command handler for proposal requests.
//!
//! Proposal writing itself is not implemented yet; the handler validates the
//! request and reports what it received.

use crate::domain::foundation::DomainError;

/// Tone used when the request names none.
pub const DEFAULT_TONE: &str = "professional";

/// Command to generate a job proposal.
#[derive(Debug, Clone, Default)]
pub struct GenerateProposalCommand {
    pub job_description: Option<String>,
    pub tone: Option<String>,
}

/// Acknowledgement of an accepted proposal request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateProposalResult {
    pub message: String,
    pub tone: String,
    /// Length of the job description in characters.
    pub job_description_length: usize,
}

/// Handler for proposal requests.
#[derive(Debug, Default)]
pub struct GenerateProposalHandler;

impl GenerateProposalHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        cmd: GenerateProposalCommand,
    ) -> Result<GenerateProposalResult, DomainError> {
        let description = cmd
            .job_description
            .filter(|d| !d.trim().is_empty())
            .ok_or_else(|| {
                DomainError::validation("job_description", "Job description is required")
            })?;

        let tone = cmd
            .tone
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_TONE.to_string());

        Ok(GenerateProposalResult {
            message: "Proposal generation endpoint ready".to_string(),
            tone,
            job_description_length: description.chars().count(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    #[test]
    fn echoes_tone_and_length() {
        let result = GenerateProposalHandler::new()
            .handle(GenerateProposalCommand {
                job_description: Some("Build a café website".to_string()),
                tone: Some("friendly".to_string()),
            })
            .unwrap();

        assert_eq!(result.message, "Proposal generation endpoint ready");
        assert_eq!(result.tone, "friendly");
        assert_eq!(result.job_description_length, 20);
    }

    #[test]
    fn tone_defaults_to_professional() {
        let result = GenerateProposalHandler::new()
            .handle(GenerateProposalCommand {
                job_description: Some("x".to_string()),
                tone: None,
            })
            .unwrap();
        assert_eq!(result.tone, "professional");
    }

    #[test]
    fn blank_description_is_rejected() {
        let err = GenerateProposalHandler::new()
            .handle(GenerateProposalCommand {
                job_description: Some("  ".to_string()),
                tone: None,
            })
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::ValidationFailed);
        assert_eq!(err.message(), "Job description is required");
    }
}
