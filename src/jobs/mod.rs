//! Job postings: query building, providers and the merging board
//!
//! Providers report failures through `anyhow`; the board logs and skips them
//! so a search never fails as a whole.

pub mod file_source;

pub use file_source::FileJobSource;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub company: String,
    pub title: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    #[serde(default)]
    pub source: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JobQuery {
    pub role: String,
    pub skills: Vec<String>,
    pub location: String,
    pub max_results: usize,
    /// Candidate score used to pick the seniority of the search
    pub score: u32,
}

impl JobQuery {
    pub fn new(role: impl Into<String>, skills: Vec<String>) -> Self {
        Self {
            role: role.into(),
            skills,
            location: "India".to_string(),
            max_results: 5,
            score: 50,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn with_score(mut self, score: u32) -> Self {
        self.score = score;
        self
    }

    /// Free-text search string tuned to the candidate's level.
    ///
    /// Weak profiles search for junior positions, strong ones for senior.
    pub fn search_terms(&self) -> String {
        let role = if !self.role.trim().is_empty() {
            self.role.trim().to_string()
        } else if !self.skills.is_empty() {
            self.skills.iter().take(3).cloned().collect::<Vec<_>>().join(" ")
        } else {
            return "software developer".to_string();
        };

        if self.score < 40 {
            format!("junior {}", role)
        } else if self.score >= 85 {
            format!("senior {}", role)
        } else {
            role
        }
    }
}

/// A provider of job postings
pub trait JobSource: Send + Sync {
    fn name(&self) -> &str;

    fn search(&self, query: &JobQuery) -> anyhow::Result<Vec<JobPosting>>;
}

/// Ordered set of job sources merged into one result list
#[derive(Default)]
pub struct JobBoard {
    sources: Vec<Box<dyn JobSource>>,
}

impl JobBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(mut self, source: impl JobSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Query sources in order until `max_results` postings from distinct
    /// companies are collected. Failing sources are skipped.
    pub fn search(&self, query: &JobQuery) -> Vec<JobPosting> {
        let mut postings: Vec<JobPosting> = Vec::new();
        let mut seen_companies: HashSet<String> = HashSet::new();

        for source in &self.sources {
            if postings.len() >= query.max_results {
                break;
            }

            let remaining = JobQuery {
                max_results: query.max_results - postings.len(),
                ..query.clone()
            };

            match source.search(&remaining) {
                Ok(found) => {
                    debug!("{} returned {} postings", source.name(), found.len());
                    for posting in found {
                        if seen_companies.insert(posting.company.to_lowercase()) {
                            postings.push(posting);
                        }
                    }
                }
                Err(e) => warn!("{} job source failed: {:#}", source.name(), e),
            }
        }

        postings.truncate(query.max_results);
        postings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    struct FixedSource(Vec<JobPosting>);

    impl JobSource for FixedSource {
        fn name(&self) -> &str {
            "fixed"
        }

        fn search(&self, query: &JobQuery) -> anyhow::Result<Vec<JobPosting>> {
            Ok(self.0.iter().take(query.max_results).cloned().collect())
        }
    }

    struct FailingSource;

    impl JobSource for FailingSource {
        fn name(&self) -> &str {
            "failing"
        }

        fn search(&self, _query: &JobQuery) -> anyhow::Result<Vec<JobPosting>> {
            Err(anyhow!("connection refused"))
        }
    }

    fn posting(company: &str, title: &str) -> JobPosting {
        JobPosting {
            company: company.to_string(),
            title: title.to_string(),
            location: "Remote".to_string(),
            url: String::new(),
            salary: None,
            source: "test".to_string(),
        }
    }

    #[test]
    fn test_search_terms_by_score() {
        let query = JobQuery::new("Data Analyst", Vec::new());
        assert_eq!(query.clone().with_score(39).search_terms(), "junior Data Analyst");
        assert_eq!(query.clone().with_score(40).search_terms(), "Data Analyst");
        assert_eq!(query.clone().with_score(84).search_terms(), "Data Analyst");
        assert_eq!(query.with_score(85).search_terms(), "senior Data Analyst");
    }

    #[test]
    fn test_search_terms_fallbacks() {
        let skills: Vec<String> =
            ["rust", "tokio", "serde", "git"].iter().map(|s| s.to_string()).collect();
        let from_skills = JobQuery::new("", skills).with_score(60);
        assert_eq!(from_skills.search_terms(), "rust tokio serde");

        let nothing = JobQuery::new("  ", Vec::new()).with_score(10);
        assert_eq!(nothing.search_terms(), "software developer");
    }

    #[test]
    fn test_board_dedupes_companies() {
        let board = JobBoard::new()
            .with_source(FixedSource(vec![posting("Acme", "Engineer"), posting("acme", "Analyst")]))
            .with_source(FixedSource(vec![posting("ACME", "Lead"), posting("Globex", "Engineer")]));

        let results = board.search(&JobQuery::new("engineer", Vec::new()));
        let companies: Vec<&str> = results.iter().map(|p| p.company.as_str()).collect();
        assert_eq!(companies, vec!["Acme", "Globex"]);
    }

    #[test]
    fn test_board_skips_failing_sources() {
        let board = JobBoard::new()
            .with_source(FailingSource)
            .with_source(FixedSource(vec![posting("Initech", "Engineer")]));

        let results = board.search(&JobQuery::new("engineer", Vec::new()));
        assert_eq!(results.len(), 1);
        let board = JobBoard::new().with_source(FailingSource);
        assert!(board.search(&JobQuery::new("x", Vec::new())).is_empty());
    }

    #[test]
    fn test_board_stops_at_cap() {
        let many: Vec<JobPosting> =
            (0..10).map(|i| posting(&format!("Company {i}"), "Engineer")).collect();
        let board = JobBoard::new()
            .with_source(FixedSource(many))
            .with_source(FailingSource);

        let results = board.search(&JobQuery::new("engineer", Vec::new()).with_max_results(3));
        assert_eq!(results.len(), 3);
        let none = JobQuery::new("engineer", Vec::new()).with_max_results(0);
        assert!(board.search(&none).is_empty());
    }
}
