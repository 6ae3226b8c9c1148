//! Resolution of free-text target roles to catalogue roles
//!
//! Rules are tried in order and the first one that yields a role wins.
//! Keyword relevance in the ATS scorer only uses the name-based rules;
//! skill scoring falls through to auto-detection and the default role.

use crate::config::MatchingConfig;
use crate::knowledge::{KnowledgeBase, RoleProfile};
use crate::processing::fuzzy::FuzzyMatcher;
use crate::processing::normalizer::normalize;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleRule {
    /// Normalized role text is a catalogue key
    Exact,
    /// First catalogue role fuzzy-matching the role text
    Fuzzy,
    /// Role with the largest overlap with the user's skills
    AutoDetect,
    /// Configured fallback role
    Default,
}

impl RoleRule {
    pub const ORDER: [RoleRule; 4] = [
        RoleRule::Exact,
        RoleRule::Fuzzy,
        RoleRule::AutoDetect,
        RoleRule::Default,
    ];

    pub const NAME_ONLY: [RoleRule; 2] = [RoleRule::Exact, RoleRule::Fuzzy];

    pub fn describe(self) -> &'static str {
        match self {
            RoleRule::Exact => "exact match",
            RoleRule::Fuzzy => "fuzzy match",
            RoleRule::AutoDetect => "auto-detected from skills",
            RoleRule::Default => "default role",
        }
    }
}

/// Resolved roles borrow from the knowledge base (`'kb`), not from the
/// matcher and settings the resolver is built around (`'a`)
pub struct RoleResolver<'kb, 'a> {
    kb: &'kb KnowledgeBase,
    matcher: &'a FuzzyMatcher,
    settings: &'a MatchingConfig,
}

impl<'kb, 'a> RoleResolver<'kb, 'a> {
    pub fn new(
        kb: &'kb KnowledgeBase,
        matcher: &'a FuzzyMatcher,
        settings: &'a MatchingConfig,
    ) -> Self {
        Self { kb, matcher, settings }
    }

    /// Apply `rules` in order to the target role text
    pub fn resolve(
        &self,
        target_role: &str,
        user_skills: &[String],
        rules: &[RoleRule],
    ) -> Option<(&'kb RoleProfile, RoleRule)> {
        let key = normalize(target_role);

        rules
            .iter()
            .find_map(|rule| self.apply(*rule, &key, user_skills).map(|role| (role, *rule)))
    }

    fn apply(&self, rule: RoleRule, key: &str, user_skills: &[String]) -> Option<&'kb RoleProfile> {
        match rule {
            RoleRule::Exact => self.kb.role(key),
            RoleRule::Fuzzy => self
                .kb
                .roles()
                .iter()
                .find(|role| self.matcher.matches(key, &role.name, self.settings.role_threshold)),
            RoleRule::AutoDetect => self.best_role_for(user_skills),
            RoleRule::Default => self.kb.role(&self.settings.default_role),
        }
    }

    /// The role whose skill set is fuzzy-matched by the most user skills.
    ///
    /// Each user skill counts at most once per role. Ties go to the role that
    /// comes first in the catalogue; no role is returned when nothing overlaps.
    pub fn best_role_for(&self, user_skills: &[String]) -> Option<&'kb RoleProfile> {
        let mut best: Option<(&'kb RoleProfile, usize)> = None;

        for role in self.kb.roles() {
            let overlap = user_skills
                .iter()
                .filter(|user_skill| {
                    role.all_skills().any(|(_, skill)| {
                        self.matcher.matches(user_skill, skill, self.settings.skill_threshold)
                    })
                })
                .count();

            if overlap > best.map_or(0, |(_, count)| count) {
                best = Some((role, overlap));
            }
        }

        best.map(|(role, _)| role)
    }
}
