//! Role/skill knowledge base
//!
//! Holds the tiered role catalogue, the fallback company table and the
//! per-role project ideas. A knowledge base is built once (from the built-in
//! tables or a TOML catalogue file), validated, and then only ever borrowed.

mod catalogue;

use crate::error::{Result, SkillFitError};
use crate::processing::normalizer::{normalize, title_case};
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

pub const DEFAULT_CATEGORY: &str = "IT / Software";

/// Catalogue importance bucket of a skill within a role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillTier {
    Core,
    Important,
    Nice,
}

impl SkillTier {
    pub const ALL: [SkillTier; 3] = [SkillTier::Core, SkillTier::Important, SkillTier::Nice];

    pub fn weight(self) -> u32 {
        match self {
            SkillTier::Core => 3,
            SkillTier::Important => 2,
            SkillTier::Nice => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SkillTier::Core => "core",
            SkillTier::Important => "important",
            SkillTier::Nice => "nice",
        }
    }
}

impl fmt::Display for SkillTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalogue role and its tiered skill requirements.
///
/// Skill names are stored exactly as written in the catalogue; matching
/// normalizes them on the fly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleProfile {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub core: Vec<String>,
    #[serde(default)]
    pub important: Vec<String>,
    #[serde(default)]
    pub nice: Vec<String>,
}

impl RoleProfile {
    pub fn skills(&self, tier: SkillTier) -> &[String] {
        match tier {
            SkillTier::Core => &self.core,
            SkillTier::Important => &self.important,
            SkillTier::Nice => &self.nice,
        }
    }

    /// Every catalogue skill of this role, tier by tier
    pub fn all_skills(&self) -> impl Iterator<Item = (SkillTier, &str)> + '_ {
        SkillTier::ALL
            .into_iter()
            .flat_map(move |tier| self.skills(tier).iter().map(move |s| (tier, s.as_str())))
    }

    pub fn skill_count(&self) -> usize {
        self.core.len() + self.important.len() + self.nice.len()
    }

    pub fn total_weight(&self) -> u32 {
        SkillTier::ALL
            .iter()
            .map(|tier| self.skills(*tier).len() as u32 * tier.weight())
            .sum()
    }

    pub fn category(&self) -> &str {
        self.category.as_deref().unwrap_or(DEFAULT_CATEGORY)
    }

    pub fn title(&self) -> String {
        title_case(&self.name)
    }
}

/// Coarse company bucket derived from a match score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompanyTier {
    High,
    Mid,
    Entry,
}

impl CompanyTier {
    pub fn from_score(score: u32) -> Self {
        if score >= 85 {
            CompanyTier::High
        } else if score >= 55 {
            CompanyTier::Mid
        } else {
            CompanyTier::Entry
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CompanyTier::High => "high",
            CompanyTier::Mid => "mid",
            CompanyTier::Entry => "entry",
        }
    }
}

impl fmt::Display for CompanyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompanyTier {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(CompanyTier::High),
            "mid" => Ok(CompanyTier::Mid),
            "entry" => Ok(CompanyTier::Entry),
            other => Err(format!("Invalid company tier: {}. Supported: high, mid, entry", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallbackCompany {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub careers_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyTable {
    #[serde(default)]
    pub high: Vec<FallbackCompany>,
    #[serde(default)]
    pub mid: Vec<FallbackCompany>,
    #[serde(default)]
    pub entry: Vec<FallbackCompany>,
}

impl CompanyTable {
    pub fn tier(&self, tier: CompanyTier) -> &[FallbackCompany] {
        match tier {
            CompanyTier::High => &self.high,
            CompanyTier::Mid => &self.mid,
            CompanyTier::Entry => &self.entry,
        }
    }
}

impl Default for CompanyTable {
    fn default() -> Self {
        fn owned(entries: &[catalogue::CompanyEntry]) -> Vec<FallbackCompany> {
            entries
                .iter()
                .map(|c| FallbackCompany {
                    name: c.name.to_string(),
                    kind: c.kind.to_string(),
                    careers_url: c.careers_url.to_string(),
                })
                .collect()
        }

        Self {
            high: owned(catalogue::HIGH_TIER_COMPANIES),
            mid: owned(catalogue::MID_TIER_COMPANIES),
            entry: owned(catalogue::ENTRY_TIER_COMPANIES),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectIdeas {
    pub role: String,
    pub projects: Vec<String>,
}

fn builtin_project_ideas() -> Vec<ProjectIdeas> {
    catalogue::PROJECT_IDEAS
        .iter()
        .map(|(role, projects)| ProjectIdeas {
            role: role.to_string(),
            projects: projects.iter().map(|p| p.to_string()).collect(),
        })
        .collect()
}

/// The read-only catalogue every scorer borrows.
///
/// Role order is significant: fuzzy role resolution and best-role
/// auto-detection both take the first qualifying role in this order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeBase {
    roles: Vec<RoleProfile>,
    #[serde(default)]
    companies: CompanyTable,
    #[serde(default = "builtin_project_ideas")]
    projects: Vec<ProjectIdeas>,
}

impl KnowledgeBase {
    /// The built-in catalogue of engineering, IT and design roles
    pub fn builtin() -> Self {
        let roles = catalogue::ROLES
            .iter()
            .map(|entry| RoleProfile {
                name: entry.name.to_string(),
                category: entry.category.map(str::to_string),
                core: entry.core.iter().map(|s| s.to_string()).collect(),
                important: entry.important.iter().map(|s| s.to_string()).collect(),
                nice: entry.nice.iter().map(|s| s.to_string()).collect(),
            })
            .collect();

        Self {
            roles,
            companies: CompanyTable::default(),
            projects: builtin_project_ideas(),
        }
    }

    /// Build a knowledge base from explicit roles, keeping the built-in
    /// company table and project ideas
    pub fn from_roles(roles: Vec<RoleProfile>) -> Self {
        Self {
            roles,
            companies: CompanyTable::default(),
            projects: builtin_project_ideas(),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| SkillFitError::Catalogue(format!("Failed to parse catalogue: {}", e)))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let kb = Self::from_toml_str(&content)?;
        info!("Loaded catalogue with {} roles from {}", kb.roles.len(), path.display());
        Ok(kb)
    }

    /// Load the configured catalogue (or the built-in one) and validate it
    pub fn from_source(path: Option<&Path>, default_role: &str) -> Result<Self> {
        let kb = match path {
            Some(path) => Self::load(path)?,
            None => Self::builtin(),
        };
        kb.validate(default_role)?;
        Ok(kb)
    }

    /// Reject catalogues the scorers cannot work with
    pub fn validate(&self, default_role: &str) -> Result<()> {
        if self.roles.is_empty() {
            return Err(SkillFitError::Catalogue("Catalogue contains no roles".to_string()));
        }

        let mut seen = HashSet::new();
        for role in &self.roles {
            if normalize(&role.name) != role.name {
                return Err(SkillFitError::Catalogue(format!(
                    "Role key '{}' must be lowercase and normalized",
                    role.name
                )));
            }
            if !seen.insert(role.name.as_str()) {
                return Err(SkillFitError::Catalogue(format!("Duplicate role '{}'", role.name)));
            }
            if role.skill_count() == 0 {
                return Err(SkillFitError::Catalogue(format!(
                    "Role '{}' lists no skills",
                    role.name
                )));
            }
            if role.all_skills().any(|(_, skill)| skill.trim().is_empty()) {
                return Err(SkillFitError::Catalogue(format!(
                    "Role '{}' contains an empty skill name",
                    role.name
                )));
            }
        }

        if !self.contains(default_role) {
            return Err(SkillFitError::Catalogue(format!(
                "Default role '{}' is not in the catalogue",
                default_role
            )));
        }

        Ok(())
    }

    pub fn roles(&self) -> &[RoleProfile] {
        &self.roles
    }

    pub fn role(&self, key: &str) -> Option<&RoleProfile> {
        self.roles.iter().find(|r| r.name == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.role(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Union of every catalogue skill across roles and tiers, first occurrence wins
    pub fn skill_vocabulary(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.roles
            .iter()
            .flat_map(|r| r.all_skills().map(|(_, skill)| skill))
            .filter(|skill| seen.insert(*skill))
            .collect()
    }

    pub fn fallback_companies(&self, tier: CompanyTier, count: usize) -> Vec<FallbackCompany> {
        self.companies.tier(tier).iter().take(count).cloned().collect()
    }

    pub fn project_ideas(&self, role: &str) -> Option<&[String]> {
        self.projects
            .iter()
            .find(|p| p.role == role)
            .map(|p| p.projects.as_slice())
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalogue_is_valid() {
        let kb = KnowledgeBase::builtin();
        assert!(kb.validate("software engineer").is_ok());
        assert_eq!(kb.len(), 35);
        assert_eq!(kb.roles()[0].name, "data scientist");
    }

    #[test]
    fn test_tier_weights() {
        assert_eq!(SkillTier::Core.weight(), 3);
        assert_eq!(SkillTier::Important.weight(), 2);
        assert_eq!(SkillTier::Nice.weight(), 1);
    }

    #[test]
    fn test_role_accessors() {
        let kb = KnowledgeBase::builtin();
        let analyst = kb.role("data analyst").unwrap();
        assert_eq!(
            analyst.core,
            vec!["sql", "excel", "data analysis", "python", "data visualization"]
        );
        assert_eq!(analyst.total_weight(), 5 * 3 + 8 * 2 + 8);
        assert_eq!(analyst.category(), DEFAULT_CATEGORY);
        assert_eq!(analyst.title(), "Data Analyst");

        let structural = kb.role("structural engineer").unwrap();
        assert_eq!(structural.category(), "Civil Engineering");
    }

    #[test]
    fn test_company_tier_bands() {
        assert_eq!(CompanyTier::from_score(100), CompanyTier::High);
        assert_eq!(CompanyTier::from_score(85), CompanyTier::High);
        assert_eq!(CompanyTier::from_score(84), CompanyTier::Mid);
        assert_eq!(CompanyTier::from_score(55), CompanyTier::Mid);
        assert_eq!(CompanyTier::from_score(54), CompanyTier::Entry);
        assert_eq!(CompanyTier::from_score(0), CompanyTier::Entry);
        assert_eq!("MID".parse::<CompanyTier>().unwrap(), CompanyTier::Mid);
        assert!("top".parse::<CompanyTier>().is_err());
    }

    #[test]
    fn test_fallback_companies() {
        let kb = KnowledgeBase::builtin();
        let high = kb.fallback_companies(CompanyTier::High, 5);
        assert_eq!(high.len(), 5);
        assert_eq!(high[0].name, "Google");
        assert_eq!(high[0].kind, "Top Tech");

        let entry = kb.fallback_companies(CompanyTier::Entry, 10);
        assert_eq!(entry.len(), 6);
        assert!(kb.fallback_companies(CompanyTier::Mid, 0).is_empty());
    }

    #[test]
    fn test_skill_vocabulary_is_deduplicated() {
        let kb = KnowledgeBase::builtin();
        let vocab = kb.skill_vocabulary();
        assert_eq!(vocab.iter().filter(|s| **s == "python").count(), 1);
        assert!(vocab.contains(&"kotlin multiplatform"));
    }

    #[test]
    fn test_validation_rejects_bad_catalogues() {
        let empty = KnowledgeBase::from_roles(Vec::new());
        assert!(empty.validate("software engineer").is_err());

        let role = RoleProfile {
            name: "Data Wrangler".to_string(),
            category: None,
            core: vec!["sql".to_string()],
            important: Vec::new(),
            nice: Vec::new(),
        };
        let unnormalized = KnowledgeBase::from_roles(vec![role.clone()]);
        assert!(unnormalized.validate("data wrangler").is_err());

        let mut normalized = role;
        normalized.name = "data wrangler".to_string();
        let dup = KnowledgeBase::from_roles(vec![normalized.clone(), normalized.clone()]);
        assert!(dup.validate("data wrangler").is_err());

        let single = KnowledgeBase::from_roles(vec![normalized]);
        assert!(single.validate("data wrangler").is_ok());
        assert!(single.validate("software engineer").is_err());
    }

    #[test]
    fn test_catalogue_from_toml() {
        let content = r#"
[[roles]]
name = "rust developer"
category = "Systems"
core = ["rust", "cargo"]
important = ["tokio"]

[[roles]]
name = "software engineer"
core = ["git"]
"#;
        let kb = KnowledgeBase::from_toml_str(content).unwrap();
        assert!(kb.validate("software engineer").is_ok());
        assert_eq!(kb.role("rust developer").unwrap().category(), "Systems");
        assert!(kb.role("rust developer").unwrap().nice.is_empty());
        // Company table and project ideas fall back to the built-in ones
        assert_eq!(kb.fallback_companies(CompanyTier::Mid, 1)[0].name, "TCS");
        assert!(kb.project_ideas("data scientist").is_some());
    }

    #[test]
    fn test_malformed_toml_is_a_catalogue_error() {
        let err = KnowledgeBase::from_toml_str("roles = 5").unwrap_err();
        assert!(matches!(err, SkillFitError::Catalogue(_)));
    }
}
