//! Output formatters for console, JSON and Markdown

use crate::config::{OutputConfig, OutputFormat};
use crate::error::{Result, SkillFitError};
use crate::output::report::*;
use crate::processing::analyzer::{CareerReport, RankedPosting, Roadmap};
use crate::processing::ats_scorer::{AtsResult, CriterionStatus, TipPriority};
use crate::processing::role_scorer::{MatchResult, RoleRanking, TierBreakdown};
use crate::knowledge::SkillTier;
use colored::{Color, Colorize};
use std::path::Path;

/// Missing skills shown per tier unless detailed output is on
const COMPACT_LIST_LIMIT: usize = 5;

/// Trait for rendering reports
pub trait OutputFormatter {
    fn format_report(&self, report: &Report) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Terminal formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for scripting and integration
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for sharing reports
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Dispatches a report to the formatter for the requested format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            3 => "▒",
            _ => "░",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            3 => Color::Yellow,
            _ => Color::White,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: u32) -> String {
        let (badge, color) = match score {
            90..=100 => ("EXCELLENT", Color::Green),
            75..=89 => ("STRONG", Color::BrightGreen),
            55..=74 => ("FAIR", Color::Yellow),
            35..=54 => ("WEAK", Color::Red),
            _ => ("POOR", Color::BrightRed),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_status_icon(&self, status: CriterionStatus) -> String {
        let (icon, text_icon, color) = match status {
            CriterionStatus::Good => ("✅", "[ok]", Color::Green),
            CriterionStatus::Warn => ("⚠️", "[!]", Color::Yellow),
            CriterionStatus::Bad => ("❌", "[x]", Color::Red),
        };

        if self.use_colors {
            format!("{} ", icon.color(color))
        } else {
            format!("{} ", text_icon)
        }
    }

    fn format_priority_icon(&self, priority: TipPriority) -> String {
        if self.use_colors {
            let icon = match priority {
                TipPriority::High => "🚨",
                TipPriority::Medium => "📋",
                TipPriority::Low => "💡",
            };
            format!("{} ", icon)
        } else {
            format!("[{}] ", priority)
        }
    }

    fn format_list(&self, items: &[String], color: Color) -> String {
        let mut output = String::new();
        for item in items {
            output.push_str(&format!("  • {}\n", self.colorize(item, color)));
        }
        output
    }

    fn format_tiers(&self, breakdown: &TierBreakdown, color: Color) -> String {
        let mut output = String::new();
        for tier in SkillTier::ALL {
            let skills = breakdown.tier(tier);
            if skills.is_empty() {
                continue;
            }

            let shown = if self.detailed {
                skills.len()
            } else {
                skills.len().min(COMPACT_LIST_LIMIT)
            };
            let mut line = skills[..shown]
                .iter()
                .map(|skill| self.colorize(skill, color))
                .collect::<Vec<_>>()
                .join(", ");
            if shown < skills.len() {
                line.push_str(&format!(" (+{} more)", skills.len() - shown));
            }

            let label = format!("{}:", capitalize(tier.as_str()));
            output.push_str(&format!("  {:<10} {}\n", label, line));
        }
        output
    }

    fn render_match(&self, output: &mut String, result: &MatchResult) {
        output.push_str(&format!(
            "Match Score: {}% {}\n",
            result.score,
            self.format_score_badge(result.score)
        ));
        if let Some(rule) = result.resolution {
            output.push_str(&format!(
                "Role: {} {}\n",
                result.target_role,
                self.colorize(&format!("({})", rule.describe()), Color::BrightBlack)
            ));
        }
        output.push_str(&format!("Company tier: {}\n", result.company_tier));
        output.push_str(&format!("Summary: {}\n", self.colorize(&result.summary, Color::Cyan)));

        if !result.matched.is_empty() {
            output.push_str(&self.format_header(
                &format!("✅ Matched Skills ({})", result.matched.len()),
                3,
            ));
            output.push_str(&self.format_tiers(&result.matched, Color::Green));
        }

        if !result.missing.is_empty() {
            output.push_str(&self.format_header(
                &format!("🎯 Missing Skills ({})", result.missing.len()),
                3,
            ));
            output.push_str(&self.format_tiers(&result.missing, Color::Yellow));
        }

        if !result.suggestions.is_empty() {
            output.push_str(&self.format_header("📋 Suggestions", 3));
            output.push_str(&self.format_list(&result.suggestions, Color::White));
        }
    }

    fn render_rankings(&self, output: &mut String, rankings: &[RoleRanking]) {
        if rankings.is_empty() {
            output.push_str("No roles to rank.\n");
            return;
        }

        for (i, ranking) in rankings.iter().enumerate() {
            let role = format!("{:<28}", ranking.role);
            output.push_str(&format!(
                "{:>3}. {} {:>3}% {}  {}/{} skills  {}\n",
                i + 1,
                if i == 0 { self.colorize(&role, Color::Green) } else { role },
                ranking.score,
                self.format_score_badge(ranking.score),
                ranking.matched_count,
                ranking.total_count,
                self.colorize(&ranking.category, Color::BrightBlack)
            ));
        }
    }

    fn render_ats(&self, output: &mut String, result: &AtsResult) {
        output.push_str(&format!(
            "ATS Score: {}/100 (grade {}) {}\n",
            result.ats_score,
            result.ats_grade,
            self.format_score_badge(result.ats_score)
        ));
        output.push_str(&format!(
            "Checks: {} passed, {} warnings, {} failed\n",
            self.colorize(&result.summary.passed.to_string(), Color::Green),
            self.colorize(&result.summary.warnings.to_string(), Color::Yellow),
            self.colorize(&result.summary.failed.to_string(), Color::Red)
        ));

        if !result.criteria.is_empty() {
            output.push_str(&self.format_header("Criteria", 3));
            for criterion in &result.criteria {
                if !self.detailed && criterion.status == CriterionStatus::Good {
                    continue;
                }
                output.push_str(&format!(
                    "  {}{:<22} {:>3}/100 (weight {}%)\n",
                    self.format_status_icon(criterion.status),
                    criterion.name,
                    criterion.score,
                    criterion.weight
                ));
                if !criterion.details.is_empty() {
                    output.push_str(&format!(
                        "       {}\n",
                        self.colorize(&criterion.details, Color::BrightBlack)
                    ));
                }
            }
        }

        if !result.tips.is_empty() {
            output.push_str(&self.format_header("💡 Tips", 3));
            for tip in &result.tips {
                let icon = self.format_priority_icon(tip.priority);
                output.push_str(&format!("  {}{}\n", icon, tip.text));
            }
        }
    }

    fn render_postings(&self, output: &mut String, jobs: &[RankedPosting]) {
        for job in jobs {
            let posting = &job.posting;
            output.push_str(&format!(
                "  • {} - {} {}\n",
                self.colorize(&posting.company, Color::White),
                posting.title,
                self.colorize(
                    &format!("({}, {}% eligible)", job.level, job.eligibility),
                    Color::BrightBlack
                )
            ));
            if self.detailed {
                if !posting.location.is_empty() {
                    output.push_str(&format!("      📍 {}\n", posting.location));
                }
                if let Some(salary) = &posting.salary {
                    output.push_str(&format!("      💰 {}\n", salary));
                }
                if !posting.url.is_empty() {
                    output.push_str(&format!("      🔗 {}\n", posting.url));
                }
            }
        }
    }

    fn render_roadmap(&self, output: &mut String, roadmap: &Roadmap) {
        let sections = [
            ("1. Foundation", &roadmap.foundation),
            ("2. Advanced", &roadmap.advanced),
            ("3. Projects", &roadmap.projects),
            ("4. Job Preparation", &roadmap.prep),
        ];
        for (title, items) in sections {
            if items.is_empty() {
                continue;
            }
            output.push_str(&self.format_header(title, 4));
            output.push_str(&self.format_list(items, Color::White));
        }
    }

    fn render_career(&self, output: &mut String, report: &CareerReport) {
        output.push_str(&format!(
            "Generated: {} | Processing time: {}ms\n",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.processing_time_ms
        ));

        output.push_str(&self.format_header("Skill Match", 2));
        self.render_match(output, &report.match_result);

        if let Some(ats) = &report.ats {
            output.push_str(&self.format_header("ATS Compatibility", 2));
            self.render_ats(output, ats);
        }

        if !report.extracted_skills.is_empty() {
            output.push_str(&self.format_header(
                &format!("🔍 Skills Found in Resume ({})", report.extracted_skills.len()),
                2,
            ));
            output.push_str(&format!("  {}\n", report.extracted_skills.join(", ")));
        }

        if !report.jobs.is_empty() {
            output.push_str(&self.format_header("💼 Job Postings", 2));
            self.render_postings(output, &report.jobs);
        }

        if !report.companies.is_empty() {
            output.push_str(&self.format_header("🏢 Companies to Target", 2));
            output.push_str(&self.format_list(&report.companies, Color::Cyan));
        }

        let heading = format!("🗺️ Roadmap: {}", report.roadmap.role);
        output.push_str(&self.format_header(&heading, 2));
        self.render_roadmap(output, &report.roadmap);
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &Report) -> Result<String> {
        let mut output = String::new();
        output.push_str(&self.format_header(&report.title().to_uppercase(), 1));

        match report {
            Report::Match(result) => self.render_match(&mut output, result),
            Report::Rankings(rankings) => self.render_rankings(&mut output, rankings),
            Report::Ats(report) => self.render_ats(&mut output, &report.result),
            Report::Skills(report) => {
                output.push_str(&format!(
                    "Found {} skills in {}\n",
                    report.skills.len(),
                    report.source
                ));
                output.push_str(&self.format_list(&report.skills, Color::Green));
            }
            Report::Eligibility(report) => {
                output.push_str(&format!("Job title: {}\n", report.job_title));
                output.push_str(&format!("Level: {}\n", report.level));
                output.push_str(&format!("Candidate score: {}%\n", report.candidate_score));
                output.push_str(&format!(
                    "Eligibility: {}% {}\n",
                    report.eligibility,
                    self.format_score_badge(report.eligibility)
                ));
            }
            Report::Companies(report) => {
                for company in &report.companies {
                    output.push_str(&format!(
                        "  • {} {} {}\n",
                        self.colorize(&company.name, Color::Cyan),
                        self.colorize(&format!("({})", company.kind), Color::BrightBlack),
                        company.careers_url
                    ));
                }
            }
            Report::Roadmap(roadmap) => self.render_roadmap(&mut output, roadmap),
            Report::Career(report) => self.render_career(&mut output, report),
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &Report) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn markdown_score_badge(score: u32) -> &'static str {
        match score {
            90..=100 => "🟢 Excellent",
            75..=89 => "🟢 Strong",
            55..=74 => "🟡 Fair",
            35..=54 => "🟠 Weak",
            _ => "🔴 Poor",
        }
    }

    fn status_icon(status: CriterionStatus) -> &'static str {
        match status {
            CriterionStatus::Good => "✅",
            CriterionStatus::Warn => "⚠️",
            CriterionStatus::Bad => "❌",
        }
    }

    fn bullet_list(output: &mut String, items: &[String]) {
        for item in items {
            output.push_str(&format!("- {}\n", item));
        }
        output.push('\n');
    }

    fn tier_table(output: &mut String, matched: &TierBreakdown, missing: &TierBreakdown) {
        output.push_str("| Tier | Matched | Missing |\n");
        output.push_str("|------|---------|---------|\n");
        for tier in SkillTier::ALL {
            let cell = |skills: &[String]| {
                if skills.is_empty() {
                    "-".to_string()
                } else {
                    skills.join(", ")
                }
            };
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                capitalize(tier.as_str()),
                cell(matched.tier(tier)),
                cell(missing.tier(tier))
            ));
        }
        output.push('\n');
    }

    fn render_match(&self, output: &mut String, result: &MatchResult) {
        output.push_str(&format!(
            "**Match Score:** {}% {}\n\n",
            result.score,
            Self::markdown_score_badge(result.score)
        ));
        if let Some(rule) = result.resolution {
            output.push_str(&format!("**Role:** {} ({})\n\n", result.target_role, rule.describe()));
        }
        output.push_str(&format!("**Company tier:** {}\n\n", result.company_tier));
        output.push_str(&format!("> {}\n\n", result.summary));

        if !result.matched.is_empty() || !result.missing.is_empty() {
            Self::tier_table(output, &result.matched, &result.missing);
        }

        if !result.suggestions.is_empty() {
            output.push_str("### 📋 Suggestions\n\n");
            Self::bullet_list(output, &result.suggestions);
        }
    }

    fn render_ats(&self, output: &mut String, result: &AtsResult) {
        output.push_str(&format!(
            "**ATS Score:** {}/100 (grade **{}**) {}\n\n",
            result.ats_score,
            result.ats_grade,
            Self::markdown_score_badge(result.ats_score)
        ));
        output.push_str(&format!(
            "{} passed · {} warnings · {} failed\n\n",
            result.summary.passed, result.summary.warnings, result.summary.failed
        ));

        if !result.criteria.is_empty() {
            output.push_str("| Criterion | Score | Weight | Status | Details |\n");
            output.push_str("|-----------|-------|--------|--------|---------|\n");
            for criterion in &result.criteria {
                output.push_str(&format!(
                    "| {} | {} | {}% | {} | {} |\n",
                    criterion.name,
                    criterion.score,
                    criterion.weight,
                    Self::status_icon(criterion.status),
                    criterion.details.replace('|', "\\|")
                ));
            }
            output.push('\n');
        }

        if !result.tips.is_empty() {
            output.push_str("### 💡 Tips\n\n");
            for tip in &result.tips {
                output.push_str(&format!("- **{}** {}\n", tip.priority, tip.text));
            }
            output.push('\n');
        }
    }

    fn render_roadmap(output: &mut String, roadmap: &Roadmap, heading: &str) {
        let sections = [
            ("Foundation", &roadmap.foundation),
            ("Advanced", &roadmap.advanced),
            ("Projects", &roadmap.projects),
            ("Job Preparation", &roadmap.prep),
        ];
        for (title, items) in sections {
            if items.is_empty() {
                continue;
            }
            output.push_str(&format!("{} {}\n\n", heading, title));
            Self::bullet_list(output, items);
        }
    }

    fn render_career(&self, output: &mut String, report: &CareerReport) {
        output.push_str("## Skill Match\n\n");
        self.render_match(output, &report.match_result);

        if let Some(ats) = &report.ats {
            output.push_str("## ATS Compatibility\n\n");
            self.render_ats(output, ats);
        }

        if !report.extracted_skills.is_empty() {
            output.push_str("## 🔍 Skills Found in Resume\n\n");
            output.push_str(&format!("{}\n\n", report.extracted_skills.join(", ")));
        }

        if !report.jobs.is_empty() {
            output.push_str("## 💼 Job Postings\n\n");
            output.push_str("| Company | Title | Location | Level | Eligibility |\n");
            output.push_str("|---------|-------|----------|-------|-------------|\n");
            for job in &report.jobs {
                let title = if job.posting.url.is_empty() {
                    job.posting.title.clone()
                } else {
                    format!("[{}]({})", job.posting.title, job.posting.url)
                };
                output.push_str(&format!(
                    "| {} | {} | {} | {} | {}% |\n",
                    job.posting.company, title, job.posting.location, job.level, job.eligibility
                ));
            }
            output.push('\n');
        }

        if !report.companies.is_empty() {
            output.push_str("## 🏢 Companies to Target\n\n");
            Self::bullet_list(output, &report.companies);
        }

        output.push_str(&format!("## 🗺️ Roadmap: {}\n\n", report.roadmap.role));
        Self::render_roadmap(output, &report.roadmap, "###");
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &Report) -> Result<String> {
        let mut output = String::new();
        output.push_str(&format!("# {}\n\n", report.title()));

        if self.include_metadata {
            if let Report::Career(career) = report {
                output.push_str(&format!(
                    "**Generated:** {} | **Processing Time:** {}ms\n\n",
                    career.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                    career.processing_time_ms
                ));
            }
        }

        match report {
            Report::Match(result) => self.render_match(&mut output, result),
            Report::Rankings(rankings) => {
                output.push_str("| # | Role | Score | Skills | Category |\n");
                output.push_str("|---|------|-------|--------|----------|\n");
                for (i, ranking) in rankings.iter().enumerate() {
                    output.push_str(&format!(
                        "| {} | {} | {}% | {}/{} | {} |\n",
                        i + 1,
                        ranking.role,
                        ranking.score,
                        ranking.matched_count,
                        ranking.total_count,
                        ranking.category
                    ));
                }
                output.push('\n');
            }
            Report::Ats(report) => self.render_ats(&mut output, &report.result),
            Report::Skills(report) => {
                output.push_str(&format!(
                    "Found **{}** skills in `{}`\n\n",
                    report.skills.len(),
                    report.source
                ));
                Self::bullet_list(&mut output, &report.skills);
            }
            Report::Eligibility(report) => {
                output.push_str(&format!("- **Job title:** {}\n", report.job_title));
                output.push_str(&format!("- **Level:** {}\n", report.level));
                output.push_str(&format!("- **Candidate score:** {}%\n", report.candidate_score));
                output.push_str(&format!(
                    "- **Eligibility:** {}% {}\n\n",
                    report.eligibility,
                    Self::markdown_score_badge(report.eligibility)
                ));
            }
            Report::Companies(report) => {
                for company in &report.companies {
                    output.push_str(&format!(
                        "- [{}]({}) ({})\n",
                        company.name, company.careers_url, company.kind
                    ));
                }
                output.push('\n');
            }
            Report::Roadmap(roadmap) => Self::render_roadmap(&mut output, roadmap, "##"),
            Report::Career(report) => self.render_career(&mut output, report),
        }

        Ok(output.trim_end().to_string() + "\n")
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
        }
    }

    pub fn with_options(
        use_colors: bool,
        detailed: bool,
        pretty_json: bool,
        include_metadata: bool,
    ) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    pub fn from_config(output: &OutputConfig) -> Self {
        Self::with_options(output.color_output, output.detailed, true, true)
    }

    pub fn generate_report(&self, report: &Report, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if file_path.is_dir() {
        return Err(SkillFitError::OutputFormatting(format!(
            "Cannot write report to a directory: {}",
            file_path.display()
        )));
    }
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: OutputFormat, report: &Report, timestamp: bool) -> String {
    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    let extension = match format {
        OutputFormat::Console => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
    };

    format!("skillfit_{}{}.{}", report.kind(), timestamp_suffix, extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::KnowledgeBase;
    use crate::processing::ats_scorer::AtsScorer;
    use crate::processing::role_scorer::RoleScorer;

    fn plain() -> ReportGenerator {
        ReportGenerator::with_options(false, false, true, true)
    }

    fn match_report(kb: &KnowledgeBase) -> Report {
        let scorer = RoleScorer::new(kb).unwrap();
        Report::Match(scorer.score_skills("python, sql, excel", "data analyst"))
    }

    #[test]
    fn test_console_match() {
        let kb = KnowledgeBase::builtin();
        let output = plain().generate_report(&match_report(&kb), OutputFormat::Console).unwrap();

        assert!(output.contains("SKILL MATCH: DATA ANALYST"));
        assert!(output.contains("Match Score: 23% [POOR]"));
        assert!(output.contains("(exact match)"));
        assert!(output.contains("Sql, Excel, Python"));
        assert!(output.contains("more)"));
        assert!(!output.contains('\u{1b}'));
    }

    #[test]
    fn test_detailed_console_lists_everything() {
        let kb = KnowledgeBase::builtin();
        let detailed = ReportGenerator::with_options(false, true, true, true);
        let output = detailed.generate_report(&match_report(&kb), OutputFormat::Console).unwrap();
        assert!(!output.contains("more)"));
    }

    #[test]
    fn test_json_is_bare_payload() {
        let kb = KnowledgeBase::builtin();
        let output = plain().generate_report(&match_report(&kb), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["score"], 23);
        assert_eq!(value["resolution"], "exact");
        assert_eq!(value["company_tier"], "entry");
    }

    #[test]
    fn test_markdown_ats_table() {
        let kb = KnowledgeBase::builtin();
        let scorer = AtsScorer::new(&kb);
        let text = "Jane Doe\njane@example.com\n\nExperience\n- Built dashboards in SQL\n\nEducation\nB.Tech 2020\n";
        let result = scorer.score_ats(text, "data analyst");
        let report = Report::Ats(AtsReport::new(result, "data analyst"));
        let output = plain().generate_report(&report, OutputFormat::Markdown).unwrap();

        assert!(output.starts_with("# ATS Compatibility: data analyst\n"));
        assert!(output.contains("| Criterion | Score | Weight | Status | Details |"));
        assert!(output.contains("| Contact Information |"));
    }

    #[test]
    fn test_unreadable_ats_console() {
        let report = Report::Ats(AtsReport::new(AtsResult::unreadable(), ""));
        let output = plain().generate_report(&report, OutputFormat::Console).unwrap();

        assert!(output.contains("ATS Score: 0/100 (grade F) [POOR]"));
        assert!(output.contains("[high] Upload a readable resume."));
    }

    #[test]
    fn test_rankings_markdown() {
        let kb = KnowledgeBase::builtin();
        let scorer = RoleScorer::new(&kb).unwrap();
        let rankings: Vec<_> =
            scorer.find_best_roles("java, kotlin, android sdk").into_iter().take(3).collect();
        let output = plain()
            .generate_report(&Report::Rankings(rankings), OutputFormat::Markdown)
            .unwrap();

        assert!(output.contains("| 1 | Android Developer |"));
        assert_eq!(output.matches("\n| ").count(), 4);
    }

    #[test]
    fn test_supports_format() {
        assert_eq!(ConsoleFormatter::new(false, false).supports_format(), OutputFormat::Console);
        assert_eq!(JsonFormatter::new(false).supports_format(), OutputFormat::Json);
        assert_eq!(MarkdownFormatter::new(false).supports_format(), OutputFormat::Markdown);
    }

    #[test]
    fn test_save_and_filename() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports").join("out.md");
        save_report_to_file("# Report\n", &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# Report\n");

        assert!(matches!(
            save_report_to_file("x", dir.path()),
            Err(SkillFitError::OutputFormatting(_))
        ));

        let report = Report::Roadmap(Roadmap {
            role: "Data Analyst".to_string(),
            foundation: vec![],
            advanced: vec![],
            projects: vec![],
            prep: vec![],
        });
        assert_eq!(suggest_filename(OutputFormat::Json, &report, false), "skillfit_roadmap.json");
    }
}
