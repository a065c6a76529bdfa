//! Portfolio project blurbs.

use crate::domain::analysis::RepositoryAnalysis;
use crate::domain::repository::RepositoryRecord;

/// Rendered when the user has no repositories at all.
pub const NO_PROJECTS: &str = "No projects available";

const PORTFOLIO_LIMIT: usize = 3;
const EXTRA_LANGUAGE_LIMIT: usize = 2;

/// Renders up to three numbered project blurbs joined with `<br>`.
///
/// Uses the analysis' top projects, falling back to the first repositories
/// when the analysis has none.
pub fn generate_portfolio(repos: &[RepositoryRecord], analysis: &RepositoryAnalysis) -> String {
    if repos.is_empty() {
        return NO_PROJECTS.to_string();
    }

    let source = if analysis.top_projects.is_empty() {
        repos
    } else {
        analysis.top_projects.as_slice()
    };

    source
        .iter()
        .take(PORTFOLIO_LIMIT)
        .enumerate()
        .map(|(i, repo)| format!("**Project {}:** {}", i + 1, describe_project(repo)))
        .collect::<Vec<_>>()
        .join("<br>")
}

/// `name - description (Lang, Other, Other) [N stars, M forks]`, leaving out
/// empty parts.
pub fn describe_project(repo: &RepositoryRecord) -> String {
    let mut parts = Vec::new();

    parts.push(match repo.description_text() {
        Some(description) => format!("{} - {}", repo.name, description),
        None => repo.name.clone(),
    });

    let primary = repo.primary_language();
    let mut languages: Vec<&str> = primary.into_iter().collect();
    languages.extend(
        repo.languages
            .iter()
            .map(|entry| entry.language.as_str())
            .filter(|language| Some(*language) != primary)
            .take(EXTRA_LANGUAGE_LIMIT),
    );
    if !languages.is_empty() {
        parts.push(format!("({})", languages.join(", ")));
    }

    let mut stats = Vec::new();
    if repo.stars > 0 {
        stats.push(format!("{} stars", repo.stars));
    }
    if repo.forks > 0 {
        stats.push(format!("{} forks", repo.forks));
    }
    if !stats.is_empty() {
        parts.push(format!("[{}]", stats.join(", ")));
    }

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repository::fixtures::repo;
    use crate::domain::repository::LanguageBytes;

    #[test]
    fn empty_repository_list_renders_fixed_message() {
        assert_eq!(
            generate_portfolio(&[], &RepositoryAnalysis::default()),
            "No projects available"
        );
    }

    #[test]
    fn bare_name_when_nothing_else_is_known() {
        assert_eq!(describe_project(&repo("notes")), "notes");
    }

    #[test]
    fn full_description_lists_distinct_languages_and_stats() {
        let mut r = repo("shop");
        r.description = Some("Online store".to_string());
        r.language = Some("TypeScript".to_string());
        r.languages = vec![
            LanguageBytes::new("TypeScript", 9000),
            LanguageBytes::new("CSS", 800),
            LanguageBytes::new("HTML", 300),
            LanguageBytes::new("Shell", 20),
        ];
        r.stars = 4;

        assert_eq!(
            describe_project(&r),
            "shop - Online store (TypeScript, CSS, HTML) [4 stars]"
        );
    }

    #[test]
    fn forks_only_stats() {
        let mut r = repo("lib");
        r.forks = 2;
        assert_eq!(describe_project(&r), "lib [2 forks]");
    }

    #[test]
    fn falls_back_to_first_repositories_and_caps_at_three() {
        let repos: Vec<_> = ["a", "b", "c", "d"].iter().map(|n| repo(n)).collect();
        let rendered = generate_portfolio(&repos, &RepositoryAnalysis::default());
        assert_eq!(rendered, "**Project 1:** a<br>**Project 2:** b<br>**Project 3:** c");
    }

    #[test]
    fn prefers_top_projects() {
        let repos = vec![repo("a"), repo("b")];
        let mut analysis = RepositoryAnalysis::default();
        analysis.top_projects = vec![repo("b")];
        assert_eq!(generate_portfolio(&repos, &analysis), "**Project 1:** b");
    }
}
