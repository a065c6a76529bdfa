//! Shared application state for the HTTP layer.

use std::sync::Arc;

use crate::application::handlers::{GenerateProfileHandler, GenerateProposalHandler};
use crate::domain::profile::ProfileGenerator;
use crate::ports::RepositoryHost;

/// Dependencies every route handler can reach.
#[derive(Clone)]
pub struct AppState {
    pub host: Arc<dyn RepositoryHost>,
    pub generator: ProfileGenerator,
    pub default_max_repos: usize,
}

impl AppState {
    pub fn new(host: Arc<dyn RepositoryHost>, generator: ProfileGenerator) -> Self {
        Self {
            host,
            generator,
            default_max_repos: 10,
        }
    }

    pub fn with_default_max_repos(mut self, default_max_repos: usize) -> Self {
        self.default_max_repos = default_max_repos;
        self
    }

    pub fn generate_profile_handler(&self) -> GenerateProfileHandler {
        GenerateProfileHandler::new(self.host.clone(), self.generator.clone())
            .with_default_max_repos(self.default_max_repos)
    }

    pub fn generate_proposal_handler(&self) -> GenerateProposalHandler {
        GenerateProposalHandler::new()
    }
}
