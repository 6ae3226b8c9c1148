//! Weighted skill-to-role scoring and gap analysis

use crate::config::MatchingConfig;
use crate::error::{Result, SkillFitError};
use crate::knowledge::{CompanyTier, FallbackCompany, KnowledgeBase, RoleProfile, SkillTier};
use crate::processing::fuzzy::FuzzyMatcher;
use crate::processing::normalizer::{normalize, parse_skills, round_score, title_case, SkillsInput};
use crate::processing::role_resolver::{RoleResolver, RoleRule};
use aho_corasick::{AhoCorasick, MatchKind};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

const MAX_SUGGESTIONS: usize = 5;

/// Title-cased skill names grouped by tier
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TierBreakdown {
    pub core: Vec<String>,
    pub important: Vec<String>,
    pub nice: Vec<String>,
}

impl TierBreakdown {
    pub fn tier(&self, tier: SkillTier) -> &[String] {
        match tier {
            SkillTier::Core => &self.core,
            SkillTier::Important => &self.important,
            SkillTier::Nice => &self.nice,
        }
    }

    fn tier_mut(&mut self, tier: SkillTier) -> &mut Vec<String> {
        match tier {
            SkillTier::Core => &mut self.core,
            SkillTier::Important => &mut self.important,
            SkillTier::Nice => &mut self.nice,
        }
    }

    /// Core, important and nice names concatenated
    pub fn all(&self) -> Vec<String> {
        SkillTier::ALL
            .iter()
            .flat_map(|tier| self.tier(*tier).iter().cloned())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.core.len() + self.important.len() + self.nice.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sum of tier weights over every listed skill
    pub fn weight(&self) -> u32 {
        SkillTier::ALL
            .iter()
            .map(|tier| self.tier(*tier).len() as u32 * tier.weight())
            .sum()
    }
}

/// Result of scoring a skill list against one role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub score: u32,
    pub target_role: String,
    /// How the target role was chosen; `None` when no skills were given
    pub resolution: Option<RoleRule>,
    pub matched: TierBreakdown,
    pub missing: TierBreakdown,
    pub company_tier: CompanyTier,
    pub suggestions: Vec<String>,
    pub summary: String,
}

impl MatchResult {
    /// Zero-score result for input that could not be analysed
    pub(crate) fn placeholder(target_role: &str, suggestion: &str, summary: &str) -> Self {
        let target_role = if target_role.trim().is_empty() {
            "General".to_string()
        } else {
            target_role.to_string()
        };

        Self {
            score: 0,
            target_role,
            resolution: None,
            matched: TierBreakdown::default(),
            missing: TierBreakdown::default(),
            company_tier: CompanyTier::Entry,
            suggestions: vec![suggestion.to_string()],
            summary: summary.to_string(),
        }
    }

    fn no_skills(target_role: &str) -> Self {
        Self::placeholder(
            target_role,
            "Please enter at least one skill to get an analysis.",
            "No skills were provided for analysis.",
        )
    }

    pub fn matched_skills(&self) -> Vec<String> {
        self.matched.all()
    }

    pub fn missing_skills(&self) -> Vec<String> {
        self.missing.all()
    }
}

/// One row of the all-roles ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleRanking {
    pub role: String,
    pub score: u32,
    pub matched_count: usize,
    pub total_count: usize,
    pub missing_count: usize,
    pub category: String,
}

/// Scores skill lists against the roles of a borrowed knowledge base
pub struct RoleScorer<'kb> {
    kb: &'kb KnowledgeBase,
    matcher: FuzzyMatcher,
    settings: MatchingConfig,
    vocabulary: AhoCorasick,
    /// Title-cased catalogue names for each automaton pattern
    vocabulary_names: Vec<Vec<String>>,
}

impl<'kb> RoleScorer<'kb> {
    pub fn new(kb: &'kb KnowledgeBase) -> Result<Self> {
        Self::with_settings(kb, MatchingConfig::default())
    }

    pub fn with_settings(kb: &'kb KnowledgeBase, settings: MatchingConfig) -> Result<Self> {
        let mut patterns: Vec<String> = Vec::new();
        let mut vocabulary_names: Vec<Vec<String>> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for skill in kb.skill_vocabulary() {
            let pattern = normalize(skill);
            if pattern.is_empty() {
                continue;
            }
            let slot = *index.entry(pattern.clone()).or_insert_with(|| {
                patterns.push(pattern);
                vocabulary_names.push(Vec::new());
                patterns.len() - 1
            });
            vocabulary_names[slot].push(title_case(skill));
        }

        let vocabulary = AhoCorasick::builder()
            .match_kind(MatchKind::Standard)
            .build(&patterns)
            .map_err(|e| {
                SkillFitError::Catalogue(format!("Failed to build skill matcher: {}", e))
            })?;

        debug!("Role scorer ready with {} roles and {} skill patterns", kb.len(), patterns.len());

        Ok(Self {
            kb,
            matcher: FuzzyMatcher::new(),
            settings,
            vocabulary,
            vocabulary_names,
        })
    }

    pub fn knowledge_base(&self) -> &'kb KnowledgeBase {
        self.kb
    }

    pub fn settings(&self) -> &MatchingConfig {
        &self.settings
    }

    /// Score the user's skills against `target_role`.
    ///
    /// The role is resolved exactly, then fuzzily, then auto-detected from
    /// the skills, and finally falls back to the configured default.
    pub fn score_skills<'a>(
        &self,
        input: impl Into<SkillsInput<'a>>,
        target_role: &str,
    ) -> MatchResult {
        let user_skills = parse_skills(input.into());
        if user_skills.is_empty() {
            return MatchResult::no_skills(target_role);
        }

        let Some((role, resolution)) = self.resolve_role(target_role, &user_skills) else {
            // Only reachable with a catalogue that lacks the default role
            return MatchResult::no_skills(target_role);
        };
        debug!("Resolved '{}' to '{}' ({:?})", target_role, role.name, resolution);

        let (matched, missing) = self.match_role(role, &user_skills);
        let score = weighted_score(&matched, role);
        let title = role.title();

        MatchResult {
            score,
            suggestions: build_suggestions(&matched, &missing, score, &title),
            summary: build_summary(score, &title, &matched, &missing),
            target_role: title,
            resolution: Some(resolution),
            matched,
            missing,
            company_tier: CompanyTier::from_score(score),
        }
    }

    /// Score the skills against every catalogue role without resolving one.
    ///
    /// Sorted by score descending, then role title ascending.
    pub fn find_best_roles<'a>(&self, input: impl Into<SkillsInput<'a>>) -> Vec<RoleRanking> {
        let user_skills = parse_skills(input.into());
        if user_skills.is_empty() {
            return Vec::new();
        }

        let mut rankings: Vec<RoleRanking> = self
            .kb
            .roles()
            .iter()
            .map(|role| {
                let (matched, missing) = self.match_role(role, &user_skills);
                RoleRanking {
                    role: role.title(),
                    score: weighted_score(&matched, role),
                    matched_count: matched.len(),
                    total_count: role.skill_count(),
                    missing_count: missing.len(),
                    category: role.category().to_string(),
                }
            })
            .collect();

        rankings.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.role.cmp(&b.role)));
        rankings
    }

    /// Catalogue skills literally present in the text, title-cased and sorted
    pub fn extract_skills_from_text(&self, text: &str) -> Vec<String> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let haystack = normalize(text);
        let found: BTreeSet<String> = self
            .vocabulary
            .find_overlapping_iter(&haystack)
            .flat_map(|m| self.vocabulary_names[m.pattern().as_usize()].iter().cloned())
            .collect();

        debug!("Extracted {} catalogue skills from text", found.len());
        found.into_iter().collect()
    }

    pub fn fallback_companies(&self, tier: CompanyTier, count: usize) -> Vec<FallbackCompany> {
        self.kb.fallback_companies(tier, count)
    }

    /// Resolve free text to a catalogue role using every rule
    pub fn resolve_role(
        &self,
        target_role: &str,
        user_skills: &[String],
    ) -> Option<(&'kb RoleProfile, RoleRule)> {
        RoleResolver::new(self.kb, &self.matcher, &self.settings).resolve(
            target_role,
            user_skills,
            &RoleRule::ORDER,
        )
    }

    /// Split the role's catalogue skills into matched and missing
    fn match_role(
        &self,
        role: &RoleProfile,
        user_skills: &[String],
    ) -> (TierBreakdown, TierBreakdown) {
        let mut matched = TierBreakdown::default();
        let mut missing = TierBreakdown::default();

        for (tier, skill) in role.all_skills() {
            let found = user_skills.iter().any(|user_skill| {
                self.matcher.matches(user_skill, skill, self.settings.skill_threshold)
            });

            let bucket = if found { &mut matched } else { &mut missing };
            bucket.tier_mut(tier).push(title_case(skill));
        }

        (matched, missing)
    }
}

fn weighted_score(matched: &TierBreakdown, role: &RoleProfile) -> u32 {
    let total = role.total_weight();
    if total == 0 {
        return 0;
    }
    round_score(f64::from(matched.weight()) / f64::from(total) * 100.0)
}

fn build_suggestions(
    matched: &TierBreakdown,
    missing: &TierBreakdown,
    score: u32,
    role_title: &str,
) -> Vec<String> {
    let mut suggestions = Vec::new();

    if !missing.core.is_empty() {
        let top = missing.core.iter().take(3).cloned().collect::<Vec<_>>().join(", ");
        suggestions.push(format!(
            "🔴 Critical: Learn {}. These are must-have skills for a {}.",
            top, role_title
        ));
    }

    if !missing.important.is_empty() {
        let top = missing.important.iter().take(2).cloned().collect::<Vec<_>>().join(", ");
        suggestions.push(format!(
            "🟡 Important: Add {} to strengthen your profile significantly.",
            top
        ));
    }

    if score < 40 {
        suggestions.push(format!(
            "📚 Consider taking a structured course or bootcamp focused on {} fundamentals.",
            role_title
        ));
    } else if score < 70 {
        suggestions.push(
            "💻 Build 2-3 portfolio projects showcasing your skills to stand out to employers.".to_string(),
        );
    } else {
        suggestions.push(
            "🚀 Great foundation! Focus on real-world projects and open-source contributions to reach top-tier level."
                .to_string(),
        );
    }

    if matched.nice.is_empty() {
        if let Some(bonus) = missing.nice.first() {
            suggestions.push(format!(
                "✨ Bonus: Learning {} would give you an extra edge over other candidates.",
                bonus
            ));
        }
    }

    if score < 85 {
        suggestions.push(
            "📝 Tailor your resume to highlight skills most relevant to your target role.".to_string(),
        );
    }

    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

fn build_summary(
    score: u32,
    role_title: &str,
    matched: &TierBreakdown,
    missing: &TierBreakdown,
) -> String {
    match score {
        85.. => format!(
            "Excellent profile for {}! You have strong coverage of core and advanced skills. \
             You're well-positioned for top-tier companies.",
            role_title
        ),
        70..=84 => format!(
            "Strong profile for {} with {} relevant skills matched. \
             Fill a few skill gaps to reach the next level.",
            role_title,
            matched.len()
        ),
        50..=69 => {
            let core_total = matched.core.len() + missing.core.len();
            // A role without core skills counts as fully covered
            let coverage = if core_total == 0 {
                1.0
            } else {
                matched.core.len() as f64 / core_total as f64
            };
            if coverage >= 0.6 {
                format!(
                    "Good foundation for {}. Core skills are mostly covered. \
                     Focus on building important complementary skills.",
                    role_title
                )
            } else {
                format!(
                    "Moderate match for {}. Several core skills are missing. \
                     Prioritize learning these to become a competitive candidate.",
                    role_title
                )
            }
        }
        30..=49 => format!(
            "Early-stage profile for {}. You have some relevant skills, but need to develop core competencies. \
             Consider structured learning paths.",
            role_title
        ),
        _ => format!(
            "Your current skills have limited overlap with {} requirements. \
             Start with foundational skills and build up progressively.",
            role_title
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer(kb: &KnowledgeBase) -> RoleScorer<'_> {
        RoleScorer::new(kb).unwrap()
    }

    #[test]
    fn test_empty_input() {
        let kb = KnowledgeBase::builtin();
        let scorer = scorer(&kb);

        let result = scorer.score_skills(" , ,", "");
        assert_eq!(result.score, 0);
        assert_eq!(result.target_role, "General");
        assert_eq!(result.resolution, None);
        assert_eq!(result.company_tier, CompanyTier::Entry);
        assert_eq!(result.suggestions, vec!["Please enter at least one skill to get an analysis."]);
        assert_eq!(result.summary, "No skills were provided for analysis.");

        let with_role = scorer.score_skills("", "pilot");
        assert_eq!(with_role.target_role, "pilot");
        assert!(scorer.find_best_roles("").is_empty());
    }

    #[test]
    fn test_data_analyst_partial_match() {
        let kb = KnowledgeBase::builtin();
        let result = scorer(&kb).score_skills("python, sql, excel", "data analyst");

        assert_eq!(result.target_role, "Data Analyst");
        assert_eq!(result.resolution, Some(RoleRule::Exact));
        assert_eq!(result.matched.core, vec!["Sql", "Excel", "Python"]);
        assert_eq!(result.missing.core, vec!["Data Analysis", "Data Visualization"]);
        // 3 core skills earn 9 of 39
        assert_eq!(result.score, 23);
        assert_eq!(result.company_tier, CompanyTier::Entry);
        assert!(result.suggestions[0].starts_with("🔴 Critical: Learn Data Analysis, Data Visualization."));
        assert!(result.suggestions[1].starts_with("🟡 Important: Add Tableau, Power Bi"));
        assert!(result.suggestions[2].starts_with("📚"));
        assert!(result.suggestions.len() <= MAX_SUGGESTIONS);
        assert!(result.summary.starts_with("Your current skills have limited overlap with Data Analyst"));
    }

    #[test]
    fn test_tier_accounting_is_exhaustive() {
        let kb = KnowledgeBase::builtin();
        let scorer = scorer(&kb);
        let skills = "python, react, docker, sql, git, figma, c++";

        for role in kb.roles() {
            let result = scorer.score_skills(skills, &role.name);
            assert_eq!(result.target_role, role.title());
            assert_eq!(result.matched.weight() + result.missing.weight(), role.total_weight());
            assert_eq!(result.matched.len() + result.missing.len(), role.skill_count());
        }
    }

    #[test]
    fn test_score_is_monotonic_in_matching_skills() {
        let kb = KnowledgeBase::builtin();
        let scorer = scorer(&kb);
        let role = kb.role("web developer").unwrap();

        let mut skills: Vec<String> = Vec::new();
        let mut previous = 0;
        for (_, skill) in role.all_skills() {
            skills.push(skill.to_string());
            let score = scorer.score_skills(&skills, "web developer").score;
            assert!(score >= previous, "score dropped after adding {skill}");
            previous = score;
        }
        assert_eq!(previous, 100);
    }

    #[test]
    fn test_full_coverage_is_high_tier() {
        let kb = KnowledgeBase::builtin();
        let role = kb.role("data analyst").unwrap();
        let skills: Vec<String> = role.all_skills().map(|(_, s)| s.to_string()).collect();
        let result = scorer(&kb).score_skills(&skills, "data analyst");

        assert_eq!(result.score, 100);
        assert_eq!(result.company_tier, CompanyTier::High);
        assert!(result.missing.is_empty());
        assert!(result.summary.starts_with("Excellent profile for Data Analyst!"));
        assert!(!result.suggestions.iter().any(|s| s.starts_with("📝")));
    }

    #[test]
    fn test_auto_detected_role() {
        let kb = KnowledgeBase::builtin();
        let result = scorer(&kb).score_skills("solidity, ethereum, smart contracts", "");
        assert_eq!(result.target_role, "Blockchain Developer");
        assert_eq!(result.resolution, Some(RoleRule::AutoDetect));
    }

    #[test]
    fn test_find_best_roles_android() {
        let kb = KnowledgeBase::builtin();
        let rankings = scorer(&kb).find_best_roles("java, kotlin, android sdk");

        assert_eq!(rankings.len(), kb.len());
        assert_eq!(rankings[0].role, "Android Developer");
        assert_eq!(rankings[0].score, 28);
        assert_eq!(rankings[0].category, "IT / Software");

        let construction = rankings.iter().find(|r| r.role == "Construction Manager").unwrap();
        assert!(rankings[0].score >= construction.score);
        assert!(rankings.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_ranking_ties_sorted_by_title() {
        let kb = KnowledgeBase::builtin();
        let rankings = scorer(&kb).find_best_roles("zzzz");
        assert!(rankings.iter().all(|r| r.score == 0));
        assert_eq!(rankings[0].role, "Ai Engineer");
        assert!(rankings.windows(2).all(|w| w[0].role <= w[1].role));
    }

    #[test]
    fn test_extract_skills_from_text() {
        let kb = KnowledgeBase::builtin();
        let scorer = scorer(&kb);
        let text = "Built REST APIs with Node.js and PostgreSQL. Deployed with Docker on AWS.";
        let skills = scorer.extract_skills_from_text(text);

        assert!(skills.contains(&"Node.Js".to_string()));
        assert!(skills.contains(&"Postgresql".to_string()));
        assert!(skills.contains(&"Docker".to_string()));
        assert!(skills.contains(&"Aws".to_string()));
        let mut sorted = skills.clone();
        sorted.sort();
        assert_eq!(skills, sorted);
        assert!(scorer.extract_skills_from_text("   ").is_empty());
    }

    #[test]
    fn test_extract_matches_hyphenated_catalogue_names() {
        let kb = KnowledgeBase::builtin();
        let skills = scorer(&kb).extract_skills_from_text("Models in Scikit-Learn");
        assert!(skills.contains(&"Scikit-Learn".to_string()));
    }

    #[test]
    fn test_fallback_companies_passthrough() {
        let kb = KnowledgeBase::builtin();
        let companies = scorer(&kb).fallback_companies(CompanyTier::Mid, 5);
        assert_eq!(companies.len(), 5);
        assert_eq!(companies[0].name, "TCS");
    }
}
