//! Per-posting eligibility from a candidate score and the posting's seniority

use serde::{Deserialize, Serialize};
use std::fmt;

const MIN_ELIGIBILITY: u32 = 10;
const MAX_ELIGIBILITY: u32 = 100;

/// Keywords checked in order; the first level with a hit wins
const LEVEL_KEYWORDS: &[(JobLevel, &[&str])] = &[
    (JobLevel::Intern, &["intern", "trainee", "apprentice", "fresher"]),
    (JobLevel::Junior, &["junior", "jr", "entry", "associate", "graduate"]),
    (
        JobLevel::Senior,
        &["senior", "sr", "lead", "principal", "staff", "architect", "head", "director", "vp"],
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobLevel {
    Intern,
    Junior,
    Mid,
    Senior,
}

impl JobLevel {
    /// Infer the seniority of a posting from its title.
    ///
    /// Plain substring checks, so `"Internal Tools Engineer"` reads as an
    /// internship. Titles without a keyword are mid-level.
    pub fn classify(title: &str) -> Self {
        let title = title.to_lowercase();

        LEVEL_KEYWORDS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|kw| title.contains(kw)))
            .map(|(level, _)| *level)
            .unwrap_or(JobLevel::Mid)
    }
}

impl fmt::Display for JobLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JobLevel::Intern => "intern",
            JobLevel::Junior => "junior",
            JobLevel::Mid => "mid",
            JobLevel::Senior => "senior",
        };
        f.write_str(name)
    }
}

/// Eligibility percentage of a candidate with `score` for a posting titled `job_title`
pub fn eligibility(score: u32, job_title: &str) -> u32 {
    debug_assert!(score <= 100, "candidate score {} out of range", score);
    let s = score.min(100);

    let raw = match JobLevel::classify(job_title) {
        JobLevel::Intern => match s {
            0..=30 => 85 + s.min(15),
            31..=50 => 70 + (50 - s),
            // Overqualified
            _ => 50u32.max(90u32.saturating_sub(s)),
        },
        JobLevel::Junior => match s {
            0..=20 => 55 + s,
            21..=50 => 75 + (s - 20).min(20),
            51..=70 => 85 - (s - 50),
            _ => 40u32.max(75u32.saturating_sub(s)),
        },
        JobLevel::Senior => match s {
            85.. => 85 + (s - 85).min(15),
            70..=84 => 65 + (s - 70),
            50..=69 => 40 + (s - 50),
            _ => 15u32.max(s),
        },
        JobLevel::Mid => match s {
            0..=30 => 40 + s,
            31..=60 => 65 + (s - 30).min(25),
            61..=85 => 80 + (s - 60).min(15),
            _ => 90 + (s - 85).min(10),
        },
    };

    let clamped = raw.clamp(MIN_ELIGIBILITY, MAX_ELIGIBILITY);
    debug_assert!(
        (MIN_ELIGIBILITY..=MAX_ELIGIBILITY).contains(&raw),
        "eligibility {} escaped its range",
        raw
    );
    clamped
}
