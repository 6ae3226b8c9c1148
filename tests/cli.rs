//! End-to-end tests for the skillfit binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Temp dir holding a config with colors off
fn workspace() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "[output]\ncolor_output = false\n").unwrap();
    (dir, config)
}

fn skillfit(config: &PathBuf) -> Command {
    let mut cmd = Command::cargo_bin("skillfit").unwrap();
    cmd.arg("--config").arg(config);
    cmd
}

#[test]
fn test_score_console() {
    let (_dir, config) = workspace();
    skillfit(&config)
        .args(["score", "--skills", "python, sql, excel", "--role", "data analyst"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Match Score: 23%"))
        .stdout(predicate::str::contains("Company tier: entry"));
}

#[test]
fn test_score_json() {
    let (_dir, config) = workspace();
    let output = skillfit(&config)
        .args(["-o", "json", "score", "-s", "python, sql, excel", "-r", "data analyst"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["score"], 23);
    assert_eq!(value["matched"]["core"], serde_json::json!(["Sql", "Excel", "Python"]));
}

#[test]
fn test_rank_top() {
    let (_dir, config) = workspace();
    skillfit(&config)
        .args(["rank", "-s", "java, kotlin, android sdk", "-n", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Android Developer"))
        .stdout(predicate::str::contains("2. Mobile Developer"))
        .stdout(predicate::str::contains("3.").not());
}

#[test]
fn test_eligibility_json() {
    let (_dir, config) = workspace();
    skillfit(&config)
        .args(["--output", "json", "eligibility", "--score", "90"])
        .args(["--title", "Senior Backend Engineer"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"level\": \"senior\""))
        .stdout(predicate::str::contains("\"eligibility\": 90"));
}

#[test]
fn test_companies() {
    let (_dir, config) = workspace();
    skillfit(&config)
        .args(["companies", "--tier", "entry", "--count", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Internshala (Internships)"));

    skillfit(&config)
        .args(["companies", "--tier", "platinum"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid company tier"));
}

#[test]
fn test_ats_resume() {
    let (_dir, config) = workspace();
    skillfit(&config)
        .args(["ats", "-f", "tests/fixtures/sample_resume.txt", "-r", "data analyst"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"ATS Score: \d+/100 \(grade [A-F]\+?\)").unwrap())
        .stdout(predicate::str::contains("Resume Length"));
}

#[test]
fn test_ats_unreadable_resume_scores_zero() {
    let (_dir, config) = workspace();
    skillfit(&config)
        .args(["ats", "-f", "tests/fixtures/unsupported.xyz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ATS Score: 0/100 (grade F)"));
}

#[test]
fn test_extract_rejects_unsupported_file() {
    let (_dir, config) = workspace();
    skillfit(&config)
        .args(["extract", "-f", "tests/fixtures/unsupported.xyz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported file extension"));
}

#[test]
fn test_extract_markdown() {
    let (_dir, config) = workspace();
    skillfit(&config)
        .args(["extract", "-f", "tests/fixtures/sample_resume.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tableau"))
        .stdout(predicate::str::contains("Sql"));
}

#[test]
fn test_analyze_skills_with_postings_saved_as_markdown() {
    let (dir, config) = workspace();
    let report = dir.path().join("out").join("report.md");

    skillfit(&config)
        .args(["-o", "markdown", "analyze", "-s", "sql, excel, python, tableau"])
        .args(["-r", "data analyst"])
        .args(["--jobs", "tests/fixtures/jobs.json", "--max-results", "2"])
        .arg("--save")
        .arg(&report)
        .assert()
        .success()
        .stdout(predicate::str::contains("Report saved"));

    let content = fs::read_to_string(&report).unwrap();
    assert!(content.starts_with("# Career Report: Data Analyst"));
    assert!(content.contains("## 💼 Job Postings"));
    // A 28% match searches for junior roles, so the junior posting comes first
    assert!(content.contains("| Northwind |"));
    assert!(content.contains("| Acme Analytics |"));
    assert!(!content.contains("Brightline"));
}

#[test]
fn test_analyze_requires_input() {
    let (_dir, config) = workspace();
    skillfit(&config).args(["analyze", "-r", "data analyst"]).assert().failure();
}

#[test]
fn test_analyze_rejects_non_json_postings() {
    let (_dir, config) = workspace();
    skillfit(&config)
        .args(["analyze", "-s", "python", "--jobs", "tests/fixtures/sample_resume.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Postings file"));
}

#[test]
fn test_config_commands() {
    let (_dir, config) = workspace();

    skillfit(&config)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));

    skillfit(&config)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("color_output = false"));

    skillfit(&config).args(["config", "reset"]).assert().success();
    let content = fs::read_to_string(&config).unwrap();
    assert!(content.contains("color_output = true"));
    assert!(content.contains("default_role = \"software engineer\""));
}

#[test]
fn test_invalid_config_fails() {
    let (_dir, config) = workspace();
    fs::write(&config, "[matching]\nskill_threshold = 1.5\n").unwrap();

    skillfit(&config)
        .args(["score", "-s", "python"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_save_into_directory_uses_generated_name() {
    let (dir, config) = workspace();
    let reports = dir.path().join("reports");
    fs::create_dir(&reports).unwrap();

    skillfit(&config)
        .args(["-o", "json", "roadmap", "-r", "data analyst", "--save"])
        .arg(&reports)
        .assert()
        .success();

    let saved: Vec<_> =
        fs::read_dir(&reports).unwrap().map(|entry| entry.unwrap().path()).collect();
    assert_eq!(saved.len(), 1);
    let name = saved[0].file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("skillfit_roadmap_") && name.ends_with(".json"));

    let roadmap = fs::read_to_string(&saved[0]).unwrap();
    let roadmap: serde_json::Value = serde_json::from_str(&roadmap).unwrap();
    assert_eq!(roadmap["role"], "Data Analyst");
}
