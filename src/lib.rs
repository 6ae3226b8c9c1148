//! skillfit library: skill-to-role matching, ATS compatibility and job eligibility scoring

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod jobs;
pub mod knowledge;
pub mod output;
pub mod processing;

pub use config::Config;
pub use error::{Result, SkillFitError};
pub use knowledge::KnowledgeBase;
pub use processing::analyzer::AnalysisEngine;
pub use processing::ats_scorer::AtsScorer;
pub use processing::eligibility::eligibility;
pub use processing::role_scorer::RoleScorer;
