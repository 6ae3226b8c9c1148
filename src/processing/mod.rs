//! Skill matching, scoring and analysis

pub mod normalizer;
pub mod fuzzy;
pub mod role_resolver;
pub mod role_scorer;
pub mod ats_scorer;
pub mod eligibility;
pub mod analyzer;
