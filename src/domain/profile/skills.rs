//! Categorized skills list and the short skills summary.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::domain::analysis::{first_match, KeywordRule, RepositoryAnalysis};

/// Number of languages considered by [`skills_summary`].
const SUMMARY_LANGUAGE_LIMIT: usize = 5;
/// Number of technologies considered by [`skills_summary`].
const SUMMARY_TECHNOLOGY_LIMIT: usize = 5;
/// Maximum entries in [`skills_summary`].
const SUMMARY_LIMIT: usize = 8;

/// Skill category; declaration order is rendering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SkillCategory {
    ProgrammingLanguages,
    Frontend,
    Backend,
    Database,
    DevOps,
    Tools,
}

impl SkillCategory {
    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::ProgrammingLanguages => "Programming Languages",
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::Database => "Database",
            SkillCategory::DevOps => "DevOps",
            SkillCategory::Tools => "Tools",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Exact-name membership tables for languages. First table containing the
/// name wins, so "Git" and "Docker" land in DevOps.
pub const LANGUAGE_CATEGORIES: &[(SkillCategory, &[&str])] = &[
    (
        SkillCategory::ProgrammingLanguages,
        &[
            "Python", "JavaScript", "TypeScript", "Java", "C#", "C++", "C", "Go", "Rust", "PHP",
            "Ruby", "Swift", "Kotlin",
        ],
    ),
    (
        SkillCategory::Frontend,
        &[
            "HTML", "CSS", "React", "Vue", "Angular", "Svelte", "Bootstrap", "Tailwind", "Sass",
            "Less",
        ],
    ),
    (
        SkillCategory::Backend,
        &[
            "Node.js", "Express", "Django", "Flask", "FastAPI", "Spring", "ASP.NET", "Laravel",
            "Rails",
        ],
    ),
    (
        SkillCategory::Database,
        &["PostgreSQL", "MySQL", "MongoDB", "Redis", "SQLite", "Oracle", "SQL Server"],
    ),
    (
        SkillCategory::DevOps,
        &["Docker", "Kubernetes", "AWS", "Azure", "GCP", "Heroku", "Netlify", "CI/CD", "Git"],
    ),
    (
        SkillCategory::Tools,
        &["Git", "Docker", "VS Code", "IntelliJ", "Postman", "Jira", "Slack"],
    ),
];

/// Substring rules for technologies, in priority order. Unmatched
/// technologies are `Tools`.
pub const TECHNOLOGY_CATEGORY_RULES: &[KeywordRule<SkillCategory>] = &[
    KeywordRule {
        keywords: &["react", "vue", "angular", "html", "css", "bootstrap"],
        label: SkillCategory::Frontend,
    },
    KeywordRule {
        keywords: &["node", "express", "django", "flask", "spring"],
        label: SkillCategory::Backend,
    },
    KeywordRule {
        keywords: &["postgres", "mysql", "mongo", "redis"],
        label: SkillCategory::Database,
    },
    KeywordRule {
        keywords: &["docker", "kubernetes", "aws", "azure", "heroku"],
        label: SkillCategory::DevOps,
    },
];

/// Category for a language name, `ProgrammingLanguages` when unlisted.
pub fn categorize_language(language: &str) -> SkillCategory {
    LANGUAGE_CATEGORIES
        .iter()
        .find(|(_, members)| members.contains(&language))
        .map(|(category, _)| *category)
        .unwrap_or(SkillCategory::ProgrammingLanguages)
}

/// Category for a technology keyword, `Tools` when no rule matches.
pub fn categorize_technology(technology: &str) -> SkillCategory {
    let lowered = technology.to_lowercase();
    first_match(TECHNOLOGY_CATEGORY_RULES, &[&lowered]).unwrap_or(SkillCategory::Tools)
}

/// Renders every language and technology grouped by category.
///
/// Each non-empty category becomes `**Category:** a, b, c` with items sorted
/// alphabetically; categories are joined with `<br>`. An item already present
/// in its category is not repeated.
pub fn generate_skills(analysis: &RepositoryAnalysis) -> String {
    let mut grouped: BTreeMap<SkillCategory, BTreeSet<&str>> = BTreeMap::new();

    for language in analysis.languages.keys() {
        grouped
            .entry(categorize_language(language))
            .or_default()
            .insert(language.as_str());
    }
    for technology in &analysis.technologies {
        grouped
            .entry(categorize_technology(technology))
            .or_default()
            .insert(technology.as_str());
    }

    grouped
        .iter()
        .filter(|(_, items)| !items.is_empty())
        .map(|(category, items)| {
            let items: Vec<&str> = items.iter().copied().collect();
            format!("**{}:** {}", category, items.join(", "))
        })
        .collect::<Vec<_>>()
        .join("<br>")
}

/// Short comma-separated skills line: top languages by weight, then
/// technologies, without duplicates, at most eight entries.
pub fn skills_summary(analysis: &RepositoryAnalysis) -> String {
    let mut skills: Vec<&str> = Vec::new();
    let candidates = analysis
        .top_languages(SUMMARY_LANGUAGE_LIMIT)
        .into_iter()
        .chain(
            analysis
                .technologies
                .iter()
                .take(SUMMARY_TECHNOLOGY_LIMIT)
                .map(String::as_str),
        );
    for skill in candidates {
        if !skills.contains(&skill) {
            skills.push(skill);
        }
    }
    skills.truncate(SUMMARY_LIMIT);
    skills.join(", ")
}
