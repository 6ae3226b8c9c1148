//! skillfit: skill matching, ATS scoring and job eligibility from the command line

use clap::Parser;
use log::{error, info};
use skillfit::cli::{self, Cli, Commands, ConfigAction};
use skillfit::config::Config;
use skillfit::error::{Result, SkillFitError};
use skillfit::input::InputManager;
use skillfit::input::file_detector::SUPPORTED_EXTENSIONS;
use skillfit::jobs::{FileJobSource, JobBoard};
use skillfit::knowledge::KnowledgeBase;
use skillfit::output::report::{AtsReport, CompanyReport, EligibilityReport, SkillsReport};
use skillfit::output::{save_report_to_file, suggest_filename, Report, ReportGenerator};
use skillfit::processing::analyzer::AnalysisEngine;
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load_from(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(cli: Cli, mut config: Config) -> Result<()> {
    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);

    if let Commands::Config { action } = &cli.command {
        match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration ({})\n", config_path.display());
                print!("{}", config.to_toml_string()?);
            }
            Some(ConfigAction::Reset) => {
                Config::default().save_to(&config_path)?;
                println!("✅ Configuration reset to defaults: {}", config_path.display());
            }
            Some(ConfigAction::Path) => println!("{}", config_path.display()),
        }
        return Ok(());
    }

    let kb = KnowledgeBase::from_source(
        config.matching.catalogue.as_deref(),
        &config.matching.default_role,
    )?;
    info!("Loaded catalogue with {} roles", kb.len());

    if let Commands::Analyze { location, max_results, jobs, .. } = &cli.command {
        if let Some(location) = location {
            config.jobs.location = location.clone();
        }
        if let Some(max_results) = max_results {
            config.jobs.max_results = *max_results;
        }
        if jobs.is_some() {
            config.jobs.postings_file = jobs.clone();
        }
    }

    let engine = AnalysisEngine::new(&kb, &config)?;
    let mut input_manager = InputManager::new();

    let report = match cli.command {
        Commands::Score { skills, role } => {
            Report::Match(engine.role_scorer().score_skills(skills.as_str(), &role))
        }

        Commands::Rank { skills, top } => {
            let mut rankings = engine.role_scorer().find_best_roles(skills.as_str());
            rankings.truncate(top);
            Report::Rankings(rankings)
        }

        Commands::Ats { resume, role } => {
            let text = input_manager.extract_text_or_empty(&resume).await;
            let result = engine.ats_scorer().score_ats(&text, &role);
            Report::Ats(AtsReport::new(result, &role))
        }

        Commands::Extract { resume } => {
            cli::validate_file_extension(&resume, SUPPORTED_EXTENSIONS)
                .map_err(|e| SkillFitError::InvalidInput(format!("Resume file: {}", e)))?;

            let text = input_manager.extract_text(&resume).await?;
            Report::Skills(SkillsReport {
                source: resume.display().to_string(),
                skills: engine.role_scorer().extract_skills_from_text(&text),
            })
        }

        Commands::Eligibility { score, title } => {
            Report::Eligibility(EligibilityReport::new(score, &title))
        }

        Commands::Companies { tier, count } => Report::Companies(CompanyReport {
            tier,
            companies: kb.fallback_companies(tier, count),
        }),

        Commands::Roadmap { role } => Report::Roadmap(engine.roadmap(&role)),

        Commands::Analyze { resume, skills, role, .. } => {
            let board = build_job_board(config.jobs.postings_file.as_deref())?;

            let career = match (resume, skills) {
                (Some(resume), _) => {
                    info!("Analyzing resume: {}", resume.display());
                    let text = input_manager.extract_text_or_empty(&resume).await;
                    engine.analyze_resume(&text, &role, &board)
                }
                (None, Some(skills)) => engine.analyze_profile(skills.as_str(), &role, &board),
                (None, None) => {
                    return Err(SkillFitError::InvalidInput(
                        "Either --resume or --skills is required".to_string(),
                    ))
                }
            };
            Report::Career(Box::new(career))
        }

        Commands::Config { .. } => return Ok(()),
    };

    let format = cli.output.unwrap_or(config.output.format);
    config.output.detailed |= cli.detailed;
    let generator = ReportGenerator::from_config(&config.output);
    let content = generator.generate_report(&report, format)?;

    // A directory target gets a generated filename
    let save = cli.save.map(|path| {
        if path.is_dir() {
            path.join(suggest_filename(format, &report, true))
        } else {
            path
        }
    });

    emit(&content, save)
}

fn build_job_board(postings_file: Option<&Path>) -> Result<JobBoard> {
    let Some(path) = postings_file else {
        return Ok(JobBoard::new());
    };

    cli::validate_file_extension(path, &["json"])
        .map_err(|e| SkillFitError::InvalidInput(format!("Postings file: {}", e)))?;

    let source = FileJobSource::open(path)?;
    Ok(JobBoard::new().with_source(source))
}

fn emit(content: &str, save: Option<PathBuf>) -> Result<()> {
    match save {
        Some(path) => {
            save_report_to_file(content, &path)?;
            println!("💾 Report saved to {}", path.display());
        }
        None => println!("{}", content.trim_end()),
    }
    Ok(())
}
