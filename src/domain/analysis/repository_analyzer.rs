//! Repository Analyzer - aggregates a user's repositories into a skills picture.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::domain::foundation::Timestamp;
use crate::domain::repository::RepositoryRecord;

use super::rules::{classify_project, technologies_in, ProjectType};

/// Days a repository may go without updates and still count as recent.
pub const RECENT_WINDOW_DAYS: i64 = 180;

/// Maximum number of entries in [`RepositoryAnalysis::top_projects`].
pub const TOP_PROJECTS_LIMIT: usize = 5;

/// Derived view of a user's repositories.
///
/// Every field is computed from the repository list alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RepositoryAnalysis {
    /// Language name to weight (primary-language occurrences plus bytes).
    pub languages: BTreeMap<String, u64>,
    /// Lower-cased technology keywords.
    pub technologies: BTreeSet<String>,
    /// One entry per repository, in repository order.
    pub project_types: Vec<ProjectType>,
    pub total_stars: u64,
    pub total_forks: u64,
    pub avg_repo_size: f64,
    /// Repositories updated within the last [`RECENT_WINDOW_DAYS`].
    pub recent_projects: Vec<RepositoryRecord>,
    /// Most-starred repositories, at most [`TOP_PROJECTS_LIMIT`].
    pub top_projects: Vec<RepositoryRecord>,
}

impl RepositoryAnalysis {
    /// Languages ordered by weight descending, ties alphabetical.
    pub fn top_languages(&self, limit: usize) -> Vec<&str> {
        let mut ranked: Vec<(&String, &u64)> = self.languages.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(a.1));
        ranked
            .into_iter()
            .take(limit)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Project types without duplicates, in first-seen order.
    pub fn unique_project_types(&self) -> Vec<ProjectType> {
        let mut seen = Vec::new();
        for project_type in &self.project_types {
            if !seen.contains(project_type) {
                seen.push(*project_type);
            }
        }
        seen
    }

    pub fn has_project_type(&self, project_type: ProjectType) -> bool {
        self.project_types.contains(&project_type)
    }
}

/// Repository analysis functions.
pub struct RepositoryAnalyzer;

impl RepositoryAnalyzer {
    /// Analyzes repositories relative to the current time.
    pub fn analyze(repos: &[RepositoryRecord]) -> RepositoryAnalysis {
        Self::analyze_at(repos, Timestamp::now())
    }

    /// Analyzes repositories relative to `now`.
    ///
    /// # Algorithm
    /// For each repository, in order:
    /// 1. primary language weight += 1
    /// 2. every language in the byte map: weight += bytes
    /// 3. topics (lower-cased) and vocabulary hits in the description join
    ///    the technology set
    /// 4. the first matching project-type rule is recorded
    /// 5. stars and forks are summed
    ///
    /// # Edge Cases
    /// - Empty input: zero-valued analysis
    /// - Unparseable `updated_at`: repository is left out of `recent_projects`
    pub fn analyze_at(repos: &[RepositoryRecord], now: Timestamp) -> RepositoryAnalysis {
        let mut analysis = RepositoryAnalysis::default();

        if repos.is_empty() {
            return analysis;
        }

        for repo in repos {
            if let Some(language) = repo.primary_language() {
                *analysis.languages.entry(language.to_string()).or_insert(0) += 1;
            }

            for entry in &repo.languages {
                *analysis.languages.entry(entry.language.clone()).or_insert(0) += entry.bytes;
            }

            Self::extract_technologies(repo, &mut analysis.technologies);

            analysis
                .project_types
                .push(classify_project(&repo.name, repo.description_text()));

            analysis.total_stars += repo.stars;
            analysis.total_forks += repo.forks;
        }

        let total_size: u64 = repos.iter().map(|r| r.size).sum();
        analysis.avg_repo_size = total_size as f64 / repos.len() as f64;

        analysis.recent_projects = Self::recent_projects(repos, now);
        analysis.top_projects = Self::top_projects(repos);

        analysis
    }

    fn extract_technologies(repo: &RepositoryRecord, technologies: &mut BTreeSet<String>) {
        for topic in &repo.topics {
            technologies.insert(topic.to_lowercase());
        }
        for tech in technologies_in(repo.description_text()) {
            technologies.insert(tech.to_string());
        }
    }

    /// Repositories updated strictly after `now - RECENT_WINDOW_DAYS`.
    pub fn recent_projects(repos: &[RepositoryRecord], now: Timestamp) -> Vec<RepositoryRecord> {
        let cutoff = now.minus_days(RECENT_WINDOW_DAYS);
        repos
            .iter()
            .filter(|repo| match repo.updated_at() {
                Some(updated) => updated.is_after(&cutoff),
                None => {
                    tracing::debug!(
                        repo = %repo.name,
                        "Skipping repository with unparseable updated_at"
                    );
                    false
                }
            })
            .cloned()
            .collect()
    }

    /// Repositories by star count descending; equal counts keep input order.
    pub fn top_projects(repos: &[RepositoryRecord]) -> Vec<RepositoryRecord> {
        let mut ranked: Vec<&RepositoryRecord> = repos.iter().collect();
        ranked.sort_by(|a, b| b.stars.cmp(&a.stars));
        ranked
            .into_iter()
            .take(TOP_PROJECTS_LIMIT)
            .cloned()
            .collect()
    }
}
