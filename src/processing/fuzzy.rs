//! Fuzzy skill/role name matching
//!
//! Two names are equivalent when the first rule of [`MatchRule::ORDER`] that
//! accepts them fires. The order is part of the contract: exact equality,
//! substring containment, the abbreviation table, then edit-distance
//! similarity.

use crate::processing::normalizer::normalize;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use strsim::normalized_levenshtein;

/// Default similarity threshold for skill names
pub const SKILL_THRESHOLD: f64 = 0.7;

/// Looser threshold for free-text role names
pub const ROLE_THRESHOLD: f64 = 0.6;

/// Substring containment only applies above this normalized length
const MIN_SUBSTRING_LEN: usize = 2;

/// One-directional abbreviation table. `ci/cd` expands but `ci` does not.
const ABBREVIATIONS: &[(&str, &str)] = &[
    ("ml", "machine learning"),
    ("dl", "deep learning"),
    ("ds", "data structures"),
    ("dsa", "data structures"),
    ("algo", "algorithms"),
    ("js", "javascript"),
    ("ts", "typescript"),
    ("py", "python"),
    ("ai", "artificial intelligence"),
    ("nlp", "natural language processing"),
    ("cv", "computer vision"),
    ("k8s", "kubernetes"),
    ("tf", "tensorflow"),
    ("aws", "amazon web services"),
    ("gcp", "google cloud platform"),
    ("oop", "object oriented programming"),
    ("ci/cd", "continuous integration"),
    ("react.js", "react"),
    ("reactjs", "react"),
    ("node", "node.js"),
    ("nodejs", "node.js"),
    ("vue", "vue.js"),
    ("vuejs", "vue.js"),
    ("express", "express.js"),
    ("expressjs", "express.js"),
    ("postgres", "postgresql"),
    ("mongo", "mongodb"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchRule {
    Exact,
    Substring,
    Abbreviation,
    Similarity,
}

impl MatchRule {
    pub const ORDER: [MatchRule; 4] = [
        MatchRule::Exact,
        MatchRule::Substring,
        MatchRule::Abbreviation,
        MatchRule::Similarity,
    ];
}

/// Skill matcher holding the abbreviation dictionary
#[derive(Debug, Clone)]
pub struct FuzzyMatcher {
    abbreviations: HashMap<&'static str, &'static str>,
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl FuzzyMatcher {
    pub fn new() -> Self {
        Self {
            abbreviations: ABBREVIATIONS.iter().copied().collect(),
        }
    }

    /// Whether two names refer to the same skill (or role)
    pub fn matches(&self, a: &str, b: &str, threshold: f64) -> bool {
        self.explain(a, b, threshold).is_some()
    }

    /// The rule that declared the two names equivalent, if any
    pub fn explain(&self, a: &str, b: &str, threshold: f64) -> Option<MatchRule> {
        let a = normalize(a);
        let b = normalize(b);

        MatchRule::ORDER
            .into_iter()
            .find(|rule| self.applies(*rule, &a, &b, threshold))
    }

    /// Evaluate a single rule on already-normalized names
    pub fn applies(&self, rule: MatchRule, a: &str, b: &str, threshold: f64) -> bool {
        match rule {
            MatchRule::Exact => a == b,
            MatchRule::Substring => {
                a.chars().count() > MIN_SUBSTRING_LEN
                    && b.chars().count() > MIN_SUBSTRING_LEN
                    && (a.contains(b) || b.contains(a))
            }
            MatchRule::Abbreviation => {
                let a_expanded = self.expand(a);
                let b_expanded = self.expand(b);
                a_expanded == b_expanded || a_expanded == b || a == b_expanded
            }
            MatchRule::Similarity => normalized_levenshtein(a, b) >= threshold,
        }
    }

    fn expand<'a>(&self, name: &'a str) -> &'a str {
        self.abbreviations.get(name).copied().unwrap_or(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_after_normalization() {
        let m = FuzzyMatcher::new();
        assert_eq!(
            m.explain("Scikit-Learn", "scikit learn", SKILL_THRESHOLD),
            Some(MatchRule::Exact)
        );
        assert_eq!(m.explain(" SQL ", "sql", SKILL_THRESHOLD), Some(MatchRule::Exact));
    }

    #[test]
    fn test_substring_requires_three_characters() {
        let m = FuzzyMatcher::new();
        assert_eq!(m.explain("react.js", "react", SKILL_THRESHOLD), Some(MatchRule::Substring));
        assert_eq!(
            m.explain("kotlin", "kotlin multiplatform", SKILL_THRESHOLD),
            Some(MatchRule::Substring)
        );
        // "r" is contained in "rust" but is too short for containment
        assert!(!m.matches("r", "rust", SKILL_THRESHOLD));
    }

    #[test]
    fn test_abbreviations() {
        let m = FuzzyMatcher::new();
        let abbreviation = Some(MatchRule::Abbreviation);
        assert_eq!(m.explain("ml", "machine learning", SKILL_THRESHOLD), abbreviation);
        assert_eq!(m.explain("machine learning", "ML", SKILL_THRESHOLD), abbreviation);
        assert_eq!(m.explain("k8s", "kubernetes", SKILL_THRESHOLD), Some(MatchRule::Abbreviation));
        assert_eq!(m.explain("dsa", "ds", SKILL_THRESHOLD), Some(MatchRule::Abbreviation));
        assert!(m.matches("postgres", "postgresql", SKILL_THRESHOLD));
    }

    #[test]
    fn test_abbreviation_table_is_one_directional() {
        let m = FuzzyMatcher::new();
        assert!(m.matches("ci/cd", "continuous integration", SKILL_THRESHOLD));
        assert!(!m.matches("ci", "continuous integration", SKILL_THRESHOLD));
    }

    #[test]
    fn test_similarity_rule() {
        let m = FuzzyMatcher::new();
        assert_eq!(m.explain("pythn", "python", SKILL_THRESHOLD), Some(MatchRule::Similarity));
        assert!(!m.matches("java", "jira", SKILL_THRESHOLD));
        assert!(!m.matches("sql", "excel", SKILL_THRESHOLD));
    }

    #[test]
    fn test_role_threshold_is_looser() {
        let m = FuzzyMatcher::new();
        // 6 edits over 16 characters
        assert!(m.matches("network admin", "network engineer", ROLE_THRESHOLD));
        assert!(!m.matches("network admin", "network engineer", SKILL_THRESHOLD));
        assert!(m.matches("data analist", "data analyst", ROLE_THRESHOLD));
        assert!(!m.matches("", "data analyst", ROLE_THRESHOLD));
    }

    #[test]
    fn test_matching_is_symmetric() {
        let m = FuzzyMatcher::new();
        let names = [
            "ml", "machine learning", "js", "javascript", "react", "react.js", "node",
            "node.js", "sql", "mysql", "pythn", "python", "c", "c++", "ci/cd", "",
        ];
        for a in names {
            for b in names {
                assert_eq!(
                    m.matches(a, b, SKILL_THRESHOLD),
                    m.matches(b, a, SKILL_THRESHOLD),
                    "asymmetric for {a:?} / {b:?}"
                );
            }
        }
    }
}
