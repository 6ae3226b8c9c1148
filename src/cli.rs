//! CLI interface for skillfit

use crate::config::OutputFormat;
use crate::knowledge::CompanyTier;
use clap::{ArgGroup, Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "skillfit")]
#[command(about = "Skill-to-role matching, ATS scoring and job eligibility tool")]
#[command(long_about = "Score skills against a catalogue of job roles, check resumes for ATS compatibility and estimate eligibility for job postings")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format: console, json, markdown
    #[arg(short, long, global = true, value_parser = parse_output_format)]
    pub output: Option<OutputFormat>,

    /// Show every skill, criterion and posting detail
    #[arg(short, long, global = true)]
    pub detailed: bool,

    /// Save output to file instead of printing it
    #[arg(long, global = true)]
    pub save: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a skill list against a target role
    Score {
        /// Skills, comma separated
        #[arg(short, long)]
        skills: String,

        /// Target role; auto-detected from the skills when omitted
        #[arg(short, long, default_value = "")]
        role: String,
    },

    /// Rank every catalogue role for a skill list
    Rank {
        /// Skills, comma separated
        #[arg(short, long)]
        skills: String,

        /// Number of roles to show
        #[arg(short = 'n', long, default_value_t = 5)]
        top: usize,
    },

    /// Check a resume for ATS compatibility
    Ats {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short = 'f', long)]
        resume: PathBuf,

        /// Role used for keyword relevance
        #[arg(short, long, default_value = "")]
        role: String,
    },

    /// List catalogue skills mentioned in a resume
    Extract {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short = 'f', long)]
        resume: PathBuf,
    },

    /// Estimate eligibility for a job title
    Eligibility {
        /// Candidate match score (0-100)
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..=100))]
        score: u32,

        /// Job posting title
        #[arg(short, long)]
        title: String,
    },

    /// Suggest companies for a tier
    Companies {
        /// Company tier: high, mid, entry
        #[arg(short, long, value_parser = parse_company_tier)]
        tier: CompanyTier,

        /// Number of companies to list
        #[arg(short = 'n', long, default_value_t = 5)]
        count: usize,
    },

    /// Show a learning roadmap for a role
    Roadmap {
        /// Role name
        #[arg(short, long)]
        role: String,
    },

    /// Full career report from a resume or a skill list
    #[command(group(ArgGroup::new("input").required(true).args(["resume", "skills"])))]
    Analyze {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short = 'f', long)]
        resume: Option<PathBuf>,

        /// Skills, comma separated
        #[arg(short, long)]
        skills: Option<String>,

        /// Target role
        #[arg(short, long, default_value = "")]
        role: String,

        /// JSON file with job postings
        #[arg(short, long)]
        jobs: Option<PathBuf>,

        /// Job search location
        #[arg(short, long)]
        location: Option<String>,

        /// Maximum number of postings
        #[arg(short, long)]
        max_results: Option<usize>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file path
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    format.parse()
}

pub fn parse_company_tier(tier: &str) -> Result<CompanyTier, String> {
    tier.parse()
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
