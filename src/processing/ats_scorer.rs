//! ATS (Applicant Tracking System) compatibility scoring
//!
//! Ten independent heuristics, each scored 0-100 and weighted into an
//! overall score and letter grade.

use crate::config::MatchingConfig;
use crate::knowledge::{KnowledgeBase, SkillTier};
use crate::processing::fuzzy::FuzzyMatcher;
use crate::processing::normalizer::{round_score, title_case};
use crate::processing::role_resolver::{RoleResolver, RoleRule};
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

const SECTION_HEADERS: &[&str] = &[
    "education", "experience", "work experience", "professional experience",
    "skills", "technical skills", "projects", "certifications", "summary",
    "objective", "achievements", "awards", "publications", "volunteer",
    "internship", "internships", "training", "languages", "interests",
    "references", "contact", "profile", "about me",
];

const ESSENTIAL_SECTIONS: &[&str] = &["education", "experience", "skills"];

const ACTION_VERBS: &[&str] = &[
    "achieved", "analyzed", "architected", "automated", "built", "collaborated",
    "conducted", "configured", "created", "decreased", "delivered", "deployed",
    "designed", "developed", "drove", "engineered", "enhanced", "established",
    "executed", "expanded", "generated", "grew", "implemented", "improved",
    "increased", "initiated", "integrated", "launched", "led", "managed",
    "mentored", "migrated", "negotiated", "optimized", "orchestrated",
    "organized", "oversaw", "performed", "planned", "presented", "produced",
    "published", "reduced", "refactored", "resolved", "restructured",
    "scaled", "secured", "simplified", "spearheaded", "streamlined",
    "supervised", "transformed", "upgraded",
];

const DEGREES: &[&str] = &[
    "b.tech", "btech", "b.e", "b.sc", "bsc", "m.tech", "mtech", "m.sc", "msc",
    "m.s.", "b.s.", "bachelor", "master", "mba", "phd", "ph.d", "diploma",
    "associate", "b.a.", "m.a.", "b.com", "m.com", "bca", "mca",
];

/// Glyphs and divider runs that confuse ATS parsers
const FORMATTING_PATTERNS: &[&str] = &[
    r"[│┤├┬┴┼╔╗╚╝═║]",
    r"[\u{2022}\u{2023}\u{25E6}\u{2043}\u{2219}]",
    r"[★☆●○◆◇▶►]",
    r"\|{2,}",
    r"_{5,}",
    r"={5,}",
    r"-{5,}",
    r"\.{5,}",
];

const SPECIAL_BULLETS: &[char] = &['•', '◦', '▪'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CriterionStatus {
    Good,
    Warn,
    Bad,
}

impl CriterionStatus {
    pub fn from_score(score: u32) -> Self {
        if score >= 70 {
            CriterionStatus::Good
        } else if score >= 40 {
            CriterionStatus::Warn
        } else {
            CriterionStatus::Bad
        }
    }
}

/// Declaration order is the order tips are listed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipPriority {
    High,
    Medium,
    Low,
}

impl fmt::Display for TipPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TipPriority::High => "high",
            TipPriority::Medium => "medium",
            TipPriority::Low => "low",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AtsGrade {
    #[serde(rename = "A+")]
    APlus,
    A,
    #[serde(rename = "B+")]
    BPlus,
    B,
    #[serde(rename = "C+")]
    CPlus,
    C,
    D,
    F,
}

impl AtsGrade {
    pub fn from_score(score: u32) -> Self {
        match score {
            95.. => AtsGrade::APlus,
            85..=94 => AtsGrade::A,
            75..=84 => AtsGrade::BPlus,
            65..=74 => AtsGrade::B,
            55..=64 => AtsGrade::CPlus,
            45..=54 => AtsGrade::C,
            35..=44 => AtsGrade::D,
            _ => AtsGrade::F,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AtsGrade::APlus => "A+",
            AtsGrade::A => "A",
            AtsGrade::BPlus => "B+",
            AtsGrade::B => "B",
            AtsGrade::CPlus => "C+",
            AtsGrade::C => "C",
            AtsGrade::D => "D",
            AtsGrade::F => "F",
        }
    }
}

impl fmt::Display for AtsGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionResult {
    pub name: String,
    pub score: u32,
    pub weight: u32,
    pub status: CriterionStatus,
    /// Empty when the criterion passed
    pub tip: String,
    pub tip_priority: TipPriority,
    pub details: String,
}

impl CriterionResult {
    fn new(
        name: &str,
        weight: u32,
        score: u32,
        tip: impl Into<String>,
        tip_priority: TipPriority,
        details: impl Into<String>,
    ) -> Self {
        let status = CriterionStatus::from_score(score);
        let tip = if status == CriterionStatus::Good {
            String::new()
        } else {
            tip.into()
        };

        Self {
            name: name.to_string(),
            score,
            weight,
            status,
            tip,
            tip_priority,
            details: details.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsTip {
    pub text: String,
    pub priority: TipPriority,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtsSummary {
    pub passed: usize,
    pub warnings: usize,
    pub failed: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsResult {
    pub ats_score: u32,
    pub ats_grade: AtsGrade,
    pub criteria: Vec<CriterionResult>,
    pub tips: Vec<AtsTip>,
    pub summary: AtsSummary,
}

impl AtsResult {
    pub fn unreadable() -> Self {
        Self {
            ats_score: 0,
            ats_grade: AtsGrade::F,
            criteria: Vec::new(),
            tips: vec![AtsTip {
                text: "Upload a readable resume.".to_string(),
                priority: TipPriority::High,
            }],
            summary: AtsSummary::default(),
        }
    }
}

/// Views of the resume text shared by the checks
struct ResumeText<'t> {
    raw: &'t str,
    lower: String,
    lines: Vec<&'t str>,
    word_count: usize,
}

impl<'t> ResumeText<'t> {
    fn new(raw: &'t str) -> Self {
        Self {
            raw,
            lower: raw.to_lowercase(),
            lines: raw.trim().split('\n').collect(),
            word_count: raw.split_whitespace().count(),
        }
    }
}

/// ATS scorer with its patterns compiled once
pub struct AtsScorer<'kb> {
    kb: &'kb KnowledgeBase,
    matcher: FuzzyMatcher,
    settings: MatchingConfig,
    email_regex: Regex,
    phone_regex: Regex,
    linkedin_regex: Regex,
    portfolio_regex: Regex,
    metric_regex: Regex,
    number_regex: Regex,
    formatting_regexes: Vec<Regex>,
    institution_regex: Regex,
    year_regex: Regex,
    grade_regex: Regex,
    dash_date_regex: Regex,
    slash_date_regex: Regex,
    month_date_regex: Regex,
    past_tense_regex: Regex,
    present_tense_regex: Regex,
    noise_regex: Regex,
}

impl<'kb> AtsScorer<'kb> {
    pub fn new(kb: &'kb KnowledgeBase) -> Self {
        Self::with_settings(kb, MatchingConfig::default())
    }

    pub fn with_settings(kb: &'kb KnowledgeBase, settings: MatchingConfig) -> Self {
        let formatting_regexes = FORMATTING_PATTERNS
            .iter()
            .map(|p| Regex::new(p).expect("Invalid formatting regex"))
            .collect();

        Self {
            kb,
            matcher: FuzzyMatcher::new(),
            settings,
            email_regex: Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}")
                .expect("Invalid email regex"),
            phone_regex: Regex::new(r"\+?[\d\s\-\(\)]{7,15}").expect("Invalid phone regex"),
            linkedin_regex: Regex::new(r"(?i)linkedin").expect("Invalid LinkedIn regex"),
            portfolio_regex: Regex::new(r"(?i)github\.com|portfolio|website")
                .expect("Invalid portfolio regex"),
            metric_regex: Regex::new(
                r"(?i)\d+[%xX]|\$[\d,]+[KkMm]?|\d{2,}\+|\d+\s*(?:users|customers|clients|projects|team|members|revenue|sales|increase|decrease|growth|reduction)",
            )
            .expect("Invalid metric regex"),
            number_regex: Regex::new(r"\b\d{2,}\b").expect("Invalid number regex"),
            formatting_regexes,
            institution_regex: Regex::new(r"university|college|institute|iit|nit|iiit|school")
                .expect("Invalid institution regex"),
            year_regex: Regex::new(r"20[0-3]\d|19[89]\d").expect("Invalid year regex"),
            grade_regex: Regex::new(r"gpa|cgpa|percentage|grade|first class|distinction")
                .expect("Invalid grade regex"),
            dash_date_regex: Regex::new(r"\b\d{4}\s*[-–]\s*\d{4}\b")
                .expect("Invalid date regex"),
            slash_date_regex: Regex::new(r"\b\d{1,2}/\d{4}\b").expect("Invalid date regex"),
            month_date_regex: Regex::new(
                r"(?i)\b(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\s+\d{4}\b",
            )
            .expect("Invalid date regex"),
            past_tense_regex: Regex::new(r"\b\w+ed\b").expect("Invalid tense regex"),
            present_tense_regex: Regex::new(
                r"(?i)\b(?:manage|develop|create|build|lead|design|implement|maintain|optimize|deploy)s?\b",
            )
            .expect("Invalid tense regex"),
            noise_regex: Regex::new(r"(?i)page\s+\d+\s+of\s+\d+|confidential|all rights reserved")
                .expect("Invalid noise regex"),
        }
    }

    /// Score resume text for ATS compatibility against an optional target role
    pub fn score_ats(&self, text: &str, target_role: &str) -> AtsResult {
        if text.trim().is_empty() {
            return AtsResult::unreadable();
        }

        let resume = ResumeText::new(text);
        let criteria = vec![
            self.check_contact_info(&resume),
            check_section_headers(&resume),
            self.check_quantified_impact(&resume),
            check_action_verbs(&resume),
            check_length(&resume),
            self.check_keywords(&resume, target_role),
            self.check_formatting(&resume),
            self.check_education(&resume),
            self.check_consistency(&resume),
            self.check_parsability(&resume),
        ];

        let total_weight: u32 = criteria.iter().map(|c| c.weight).sum();
        let raw: u32 = criteria.iter().map(|c| c.score * c.weight).sum();
        let ats_score = if total_weight == 0 {
            0
        } else {
            round_score(f64::from(raw) / f64::from(total_weight))
        };

        let count = |status| criteria.iter().filter(|c| c.status == status).count();
        let summary = AtsSummary {
            passed: count(CriterionStatus::Good),
            warnings: count(CriterionStatus::Warn),
            failed: count(CriterionStatus::Bad),
        };

        let mut tips: Vec<AtsTip> = criteria
            .iter()
            .filter(|c| c.status != CriterionStatus::Good && !c.tip.is_empty())
            .map(|c| AtsTip {
                text: c.tip.clone(),
                priority: c.tip_priority,
            })
            .collect();
        tips.sort_by_key(|tip| tip.priority);

        debug!(
            "ATS score {} ({} passed, {} warnings, {} failed)",
            ats_score, summary.passed, summary.warnings, summary.failed
        );

        AtsResult {
            ats_score,
            ats_grade: AtsGrade::from_score(ats_score),
            criteria,
            tips,
            summary,
        }
    }

    fn check_contact_info(&self, resume: &ResumeText<'_>) -> CriterionResult {
        let mut found = 0.0;
        let mut details = Vec::new();

        for (regex, label) in [
            (&self.email_regex, "Email"),
            (&self.phone_regex, "Phone"),
            (&self.linkedin_regex, "LinkedIn"),
        ] {
            if regex.is_match(resume.raw) {
                found += 1.0;
                details.push(format!("{} found", label));
            } else {
                details.push(format!("{} missing", label));
            }
        }

        if self.portfolio_regex.is_match(resume.raw) {
            found += 0.5;
            details.push("Portfolio/GitHub found".to_string());
        }

        CriterionResult::new(
            "Contact Information",
            10,
            round_score(found / 2.5 * 100.0).min(100),
            "Add email, phone, and LinkedIn URL. A portfolio or GitHub link is a bonus.",
            TipPriority::High,
            details.join(" · "),
        )
    }

    fn check_quantified_impact(&self, resume: &ResumeText<'_>) -> CriterionResult {
        let metrics = self.metric_regex.find_iter(resume.raw).count();
        let numbers = self.number_regex.find_iter(resume.raw).count().min(10);
        let score = (metrics * 18 + numbers * 5).min(100) as u32;

        CriterionResult::new(
            "Quantified Impact",
            12,
            score,
            "Quantify your impact: 'increased revenue by 30%', 'managed team of 8', 'reduced load time by 2s'.",
            TipPriority::Medium,
            format!("{} metrics, {} numeric values", metrics, numbers),
        )
    }

    fn check_keywords(&self, resume: &ResumeText<'_>, target_role: &str) -> CriterionResult {
        let resolver = RoleResolver::new(self.kb, &self.matcher, &self.settings);
        let Some((role, _)) = resolver.resolve(target_role, &[], &RoleRule::NAME_ONLY) else {
            return CriterionResult {
                name: "Keyword Relevance".to_string(),
                score: 50,
                weight: 20,
                status: CriterionStatus::Warn,
                tip: "Specify a target role to unlock keyword analysis.".to_string(),
                tip_priority: TipPriority::Medium,
                details: "No target role detected".to_string(),
            };
        };

        let mut weighted = 0;
        let mut found_total = 0;
        let mut core_found = 0;
        for (tier, keyword) in role.all_skills() {
            if resume.lower.contains(&keyword.to_lowercase()) {
                weighted += tier.weight();
                found_total += 1;
                if tier == SkillTier::Core {
                    core_found += 1;
                }
            }
        }

        let max_weighted = role.total_weight();
        let ratio = if max_weighted == 0 {
            0.0
        } else {
            f64::from(weighted) / f64::from(max_weighted)
        };

        CriterionResult::new(
            "Keyword Relevance",
            20,
            round_score(ratio * 120.0).min(100),
            format!(
                "Add more {} keywords, especially the core skills listed in the skill breakdown.",
                target_role
            ),
            TipPriority::High,
            format!(
                "{}/{} keywords · Core: {}/{}",
                found_total,
                role.skill_count(),
                core_found,
                role.core.len()
            ),
        )
    }

    fn check_formatting(&self, resume: &ResumeText<'_>) -> CriterionResult {
        let issues: usize = self
            .formatting_regexes
            .iter()
            .map(|regex| regex.find_iter(resume.raw).count())
            .sum();
        let score = 100u32.saturating_sub((issues as u32).saturating_mul(15));

        let details = if issues == 0 {
            "No issues detected".to_string()
        } else {
            format!("{} problematic characters found", issues)
        };

        CriterionResult::new(
            "Clean Formatting",
            8,
            score,
            "Remove decorative symbols, table characters, and long divider lines. Use simple bullets (- or *).",
            TipPriority::High,
            details,
        )
    }

    fn check_education(&self, resume: &ResumeText<'_>) -> CriterionResult {
        let mut found = 0.0;

        if DEGREES.iter().any(|d| resume.lower.contains(d)) {
            found += 1.0;
        }
        if self.institution_regex.is_match(&resume.lower) {
            found += 1.0;
        }
        if self.year_regex.is_match(&resume.lower) {
            found += 1.0;
        }
        if self.grade_regex.is_match(&resume.lower) {
            found += 0.5;
        }

        CriterionResult::new(
            "Education Details",
            7,
            round_score(found / 3.0 * 100.0).min(100),
            "Include degree name, university, graduation year, and GPA/CGPA if strong.",
            TipPriority::Medium,
            format!("{}/3 key details present", found.trunc() as u32),
        )
    }

    fn check_consistency(&self, resume: &ResumeText<'_>) -> CriterionResult {
        let mut issues = 0;
        let mut details = Vec::new();

        let date_formats = [&self.dash_date_regex, &self.slash_date_regex, &self.month_date_regex]
            .iter()
            .filter(|regex| regex.is_match(resume.raw))
            .count();
        match date_formats {
            0 => details.push("No dates detected"),
            1 => details.push("Consistent date format"),
            _ => {
                issues += 1;
                details.push("Mixed date formats");
            }
        }

        let trimmed: Vec<&str> = resume.lines.iter().map(|l| l.trim()).collect();
        let bullet_styles = [
            trimmed.iter().any(|l| l.starts_with('-')),
            trimmed.iter().any(|l| l.starts_with('*')),
            trimmed.iter().any(|l| l.starts_with(SPECIAL_BULLETS)),
        ]
        .iter()
        .filter(|used| **used)
        .count();
        match bullet_styles {
            0 => {}
            1 => details.push("Consistent bullets"),
            _ => {
                issues += 1;
                details.push("Mixed bullet styles");
            }
        }

        let past = self.past_tense_regex.find_iter(resume.raw).count();
        let present = self.present_tense_regex.find_iter(resume.raw).count();
        if past > 3 && present > 3 {
            let ratio = past.min(present) as f64 / past.max(present) as f64;
            if ratio > 0.4 {
                issues += 1;
                details.push("Mixed verb tenses");
            } else {
                details.push("Consistent tense");
            }
        } else {
            details.push("Tense OK");
        }

        CriterionResult::new(
            "Consistency",
            5,
            100u32.saturating_sub(issues * 30),
            "Keep formatting consistent: use one date format, one bullet style, and past tense for previous roles.",
            TipPriority::Low,
            details.join(" · "),
        )
    }

    fn check_parsability(&self, resume: &ResumeText<'_>) -> CriterionResult {
        let mut issues = 0;
        let mut details = Vec::new();

        let total = resume.lines.len().max(1);
        let blank = resume.lines.iter().filter(|l| l.trim().is_empty()).count();
        let blank_ratio = blank as f64 / total as f64;
        if blank_ratio > 0.4 {
            issues += 1;
            details.push("Too many blank lines".to_string());
        } else if blank_ratio < 0.05 && total > 10 {
            issues += 1;
            details.push("No spacing between sections".to_string());
        } else {
            details.push("Good spacing".to_string());
        }

        let long_lines = resume
            .lines
            .iter()
            .filter(|l| l.trim().chars().count() > 150)
            .count();
        if long_lines > 3 {
            issues += 1;
            details.push(format!("{} overly long lines", long_lines));
        } else {
            details.push("Line lengths OK".to_string());
        }

        if self.noise_regex.is_match(&resume.lines.join(" ")) {
            issues += 1;
            details.push("Header/footer noise detected".to_string());
        } else {
            details.push("Clean structure".to_string());
        }

        CriterionResult::new(
            "File Parsability",
            5,
            100u32.saturating_sub(issues * 25),
            "Remove page headers/footers, avoid huge text blocks, and add spacing between sections.",
            TipPriority::Low,
            details.join(" · "),
        )
    }
}

fn check_section_headers(resume: &ResumeText<'_>) -> CriterionResult {
    let mut found: Vec<&str> = Vec::new();

    for line in &resume.lines {
        let lowered = line.trim().to_lowercase();
        let clean = lowered.trim_end_matches(':');
        if let Some(header) = SECTION_HEADERS.iter().find(|h| clean.starts_with(**h)) {
            if !found.contains(header) {
                found.push(header);
            }
        }
    }

    let has = |essential: &str| found.iter().any(|f| f.contains(essential));
    let essential_found = ESSENTIAL_SECTIONS.iter().filter(|e| has(e)).count();
    let total = found.len();
    let coverage = essential_found as f64 / 3.0 * 60.0 + total.min(6) as f64 / 6.0 * 40.0;
    let score = round_score(coverage).min(100);

    let missing: Vec<String> = ESSENTIAL_SECTIONS
        .iter()
        .filter(|e| !has(e))
        .map(|e| title_case(e))
        .collect();
    let mut details = format!("{} sections detected", total);
    if !missing.is_empty() {
        details.push_str(&format!(" · Missing: {}", missing.join(", ")));
    }

    CriterionResult::new(
        "Section Headers",
        15,
        score,
        "Use clear section headers: Education, Experience, Skills, Projects, Certifications.",
        TipPriority::High,
        details,
    )
}

fn check_action_verbs(resume: &ResumeText<'_>) -> CriterionResult {
    let found: Vec<&str> = ACTION_VERBS
        .iter()
        .copied()
        .filter(|verb| resume.lower.contains(verb))
        .collect();
    let score = (found.len() as u32 * 14).min(100);

    let mut details = format!("{} found", found.len());
    if !found.is_empty() {
        let listed = found.iter().take(5).copied().collect::<Vec<_>>().join(", ");
        details.push_str(&format!(" ({})", listed));
    }

    CriterionResult::new(
        "Action Verbs",
        10,
        score,
        "Start bullet points with action verbs: Developed, Implemented, Optimized, Delivered, Led.",
        TipPriority::Medium,
        details,
    )
}

fn check_length(resume: &ResumeText<'_>) -> CriterionResult {
    let words = resume.word_count;
    let (score, verdict) = match words {
        300..=800 => (100, "optimal length"),
        200..=299 => (70, "slightly short"),
        801..=1200 => (70, "slightly long"),
        100..=199 => (40, "too short"),
        1201.. => (40, "too long, consider trimming"),
        _ => (20, "very short"),
    };

    CriterionResult::new(
        "Resume Length",
        8,
        score,
        "Aim for 300-800 words. 1 page for < 5 years experience, 2 pages max.",
        TipPriority::Low,
        format!("{} words: {}", words, verdict),
    )
}
