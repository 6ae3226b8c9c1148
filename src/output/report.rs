//! Report payloads handed to the output formatters

use crate::knowledge::{CompanyTier, FallbackCompany};
use crate::processing::analyzer::{CareerReport, Roadmap};
use crate::processing::ats_scorer::AtsResult;
use crate::processing::eligibility::{eligibility, JobLevel};
use crate::processing::role_scorer::{MatchResult, RoleRanking};
use serde::Serialize;

/// Everything the CLI can render.
///
/// Serialized untagged so JSON output is the bare payload.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Report {
    Match(MatchResult),
    Rankings(Vec<RoleRanking>),
    Ats(AtsReport),
    Skills(SkillsReport),
    Eligibility(EligibilityReport),
    Companies(CompanyReport),
    Roadmap(Roadmap),
    Career(Box<CareerReport>),
}

impl Report {
    /// Heading used by the console and markdown formatters
    pub fn title(&self) -> String {
        match self {
            Report::Match(result) => format!("Skill Match: {}", result.target_role),
            Report::Rankings(_) => "Best Matching Roles".to_string(),
            Report::Ats(report) => match &report.target_role {
                Some(role) => format!("ATS Compatibility: {}", role),
                None => "ATS Compatibility".to_string(),
            },
            Report::Skills(_) => "Extracted Skills".to_string(),
            Report::Eligibility(_) => "Job Eligibility".to_string(),
            Report::Companies(report) => format!("Companies ({} tier)", report.tier),
            Report::Roadmap(roadmap) => format!("Learning Roadmap: {}", roadmap.role),
            Report::Career(report) => format!("Career Report: {}", report.match_result.target_role),
        }
    }

    /// Short stem used when suggesting a filename
    pub fn kind(&self) -> &'static str {
        match self {
            Report::Match(_) => "match",
            Report::Rankings(_) => "rankings",
            Report::Ats(_) => "ats",
            Report::Skills(_) => "skills",
            Report::Eligibility(_) => "eligibility",
            Report::Companies(_) => "companies",
            Report::Roadmap(_) => "roadmap",
            Report::Career(_) => "career",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AtsReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_role: Option<String>,
    #[serde(flatten)]
    pub result: AtsResult,
}

impl AtsReport {
    pub fn new(result: AtsResult, target_role: &str) -> Self {
        let target_role = target_role.trim();
        Self {
            target_role: (!target_role.is_empty()).then(|| target_role.to_string()),
            result,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillsReport {
    pub source: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EligibilityReport {
    pub candidate_score: u32,
    pub job_title: String,
    pub level: JobLevel,
    pub eligibility: u32,
}

impl EligibilityReport {
    pub fn new(candidate_score: u32, job_title: &str) -> Self {
        Self {
            candidate_score,
            job_title: job_title.to_string(),
            level: JobLevel::classify(job_title),
            eligibility: eligibility(candidate_score, job_title),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CompanyReport {
    pub tier: CompanyTier,
    pub companies: Vec<FallbackCompany>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eligibility_report() {
        let report = EligibilityReport::new(90, "Senior Backend Engineer");
        assert_eq!(report.level, JobLevel::Senior);
        assert!((90..=100).contains(&report.eligibility));
    }

    #[test]
    fn test_ats_report_blank_role() {
        let report = AtsReport::new(AtsResult::unreadable(), "  ");
        assert!(report.target_role.is_none());
        assert_eq!(Report::Ats(report).title(), "ATS Compatibility");
    }

    #[test]
    fn test_untagged_json() {
        let report = Report::Skills(SkillsReport {
            source: "resume.txt".to_string(),
            skills: vec!["Python".to_string()],
        });
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["skills"][0], "Python");
        assert_eq!(report.kind(), "skills");
    }
}
