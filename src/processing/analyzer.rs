//! Analysis engine combining role scoring, ATS checks, job postings and a roadmap

use crate::config::{Config, JobsConfig};
use crate::error::Result;
use crate::jobs::{JobBoard, JobPosting, JobQuery};
use crate::knowledge::KnowledgeBase;
use crate::processing::ats_scorer::{AtsResult, AtsScorer};
use crate::processing::eligibility::{eligibility, JobLevel};
use crate::processing::normalizer::{normalize, parse_skills, title_case, SkillsInput};
use crate::processing::role_scorer::{MatchResult, RoleScorer};
use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::time::Instant;

const FALLBACK_COMPANY_COUNT: usize = 5;

const DEFAULT_PROJECTS: &[&str] =
    &["Portfolio Project", "Open Source Contribution", "Team Project"];
const INTERVIEW_PREP: &[&str] = &[
    "Build Portfolio",
    "Practice Interviews",
    "Optimize Resume",
    "Network on LinkedIn",
];

/// A job posting with the candidate's eligibility for it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedPosting {
    #[serde(flatten)]
    pub posting: JobPosting,
    pub level: JobLevel,
    pub eligibility: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roadmap {
    pub role: String,
    pub foundation: Vec<String>,
    pub advanced: Vec<String>,
    pub projects: Vec<String>,
    pub prep: Vec<String>,
}

impl Roadmap {
    fn generic(role: &str) -> Self {
        let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();

        Self {
            role: title_case(role.trim()),
            foundation: owned(&["Core Concepts", "Programming Basics", "Version Control"]),
            advanced: owned(&["Advanced Topics", "Best Practices", "Industry Tools"]),
            projects: owned(&["Personal Project", "Open Source Contribution", "Team Project"]),
            prep: owned(&["Portfolio Building", "Interview Prep", "Networking"]),
        }
    }
}

/// Everything produced for one resume or profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerReport {
    pub match_result: MatchResult,
    /// Only present for resume analysis
    pub ats: Option<AtsResult>,
    pub extracted_skills: Vec<String>,
    pub jobs: Vec<RankedPosting>,
    /// Posting companies, or fallback companies when no postings were found
    pub companies: Vec<String>,
    pub roadmap: Roadmap,
    pub generated_at: DateTime<Utc>,
    pub processing_time_ms: u64,
}

/// Main analysis engine that coordinates the scorers
pub struct AnalysisEngine<'kb> {
    role_scorer: RoleScorer<'kb>,
    ats_scorer: AtsScorer<'kb>,
    jobs: JobsConfig,
}

impl<'kb> AnalysisEngine<'kb> {
    pub fn new(kb: &'kb KnowledgeBase, config: &Config) -> Result<Self> {
        Ok(Self {
            role_scorer: RoleScorer::with_settings(kb, config.matching.clone())?,
            ats_scorer: AtsScorer::with_settings(kb, config.matching.clone()),
            jobs: config.jobs.clone(),
        })
    }

    pub fn role_scorer(&self) -> &RoleScorer<'kb> {
        &self.role_scorer
    }

    pub fn ats_scorer(&self) -> &AtsScorer<'kb> {
        &self.ats_scorer
    }

    /// Analyse extracted resume text
    pub fn analyze_resume(&self, text: &str, target_role: &str, board: &JobBoard) -> CareerReport {
        let start_time = Instant::now();

        if text.trim().is_empty() {
            info!("Resume text is empty; skipping analysis");
            let match_result = MatchResult::placeholder(
                target_role,
                "Upload a valid PDF or DOCX file with readable text.",
                "Could not extract text from the uploaded resume.",
            );
            let companies = self.fallback_company_names(&match_result);

            return CareerReport {
                ats: Some(self.ats_scorer.score_ats(text, target_role)),
                extracted_skills: Vec::new(),
                jobs: Vec::new(),
                companies,
                roadmap: self.roadmap(target_role),
                match_result,
                generated_at: Utc::now(),
                processing_time_ms: start_time.elapsed().as_millis() as u64,
            };
        }

        let extracted_skills = self.role_scorer.extract_skills_from_text(text);
        info!("Extracted {} skills from resume", extracted_skills.len());

        let match_result = self.role_scorer.score_skills(&extracted_skills, target_role);
        let ats = self.ats_scorer.score_ats(text, target_role);

        self.finish(
            match_result,
            Some(ats),
            extracted_skills.clone(),
            extracted_skills,
            board,
            start_time,
        )
    }

    /// Analyse a manually entered skill list
    pub fn analyze_profile<'a>(
        &self,
        skills: impl Into<SkillsInput<'a>>,
        target_role: &str,
        board: &JobBoard,
    ) -> CareerReport {
        let start_time = Instant::now();
        let skills = parse_skills(skills.into());
        let match_result = self.role_scorer.score_skills(&skills, target_role);

        self.finish(match_result, None, Vec::new(), skills, board, start_time)
    }

    /// Learning roadmap for a catalogue role, or a generic one
    pub fn roadmap(&self, role: &str) -> Roadmap {
        let key = normalize(role);
        let Some(profile) = self.role_scorer.knowledge_base().role(&key) else {
            debug!("No catalogue role '{}'; using generic roadmap", key);
            return Roadmap::generic(role);
        };

        let projects = match self.role_scorer.knowledge_base().project_ideas(&key) {
            Some(ideas) => ideas.to_vec(),
            None => DEFAULT_PROJECTS.iter().map(|s| s.to_string()).collect(),
        };

        Roadmap {
            role: profile.title(),
            foundation: profile.core.iter().map(|s| title_case(s)).collect(),
            advanced: profile.important.iter().take(5).map(|s| title_case(s)).collect(),
            projects,
            prep: INTERVIEW_PREP.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn finish(
        &self,
        match_result: MatchResult,
        ats: Option<AtsResult>,
        extracted_skills: Vec<String>,
        skills: Vec<String>,
        board: &JobBoard,
        start_time: Instant,
    ) -> CareerReport {
        let query = JobQuery::new(match_result.target_role.clone(), skills)
            .with_location(self.jobs.location.clone())
            .with_max_results(self.jobs.max_results)
            .with_score(match_result.score);
        debug!("Searching jobs for '{}'", query.search_terms());

        let jobs: Vec<RankedPosting> = board
            .search(&query)
            .into_iter()
            .map(|posting| RankedPosting {
                level: JobLevel::classify(&posting.title),
                eligibility: eligibility(match_result.score, &posting.title),
                posting,
            })
            .collect();

        let companies = if jobs.is_empty() {
            self.fallback_company_names(&match_result)
        } else {
            jobs.iter()
                .map(|job| {
                    if job.posting.title.is_empty() {
                        job.posting.company.clone()
                    } else {
                        format!("{} - {}", job.posting.company, job.posting.title)
                    }
                })
                .collect()
        };

        CareerReport {
            roadmap: self.roadmap(&match_result.target_role),
            match_result,
            ats,
            extracted_skills,
            jobs,
            companies,
            generated_at: Utc::now(),
            processing_time_ms: start_time.elapsed().as_millis() as u64,
        }
    }

    fn fallback_company_names(&self, match_result: &MatchResult) -> Vec<String> {
        self.role_scorer
            .fallback_companies(match_result.company_tier, FALLBACK_COMPANY_COUNT)
            .into_iter()
            .map(|c| format!("{} ({})", c.name, c.kind))
            .collect()
    }
}
