//! Integration tests for the gradesheet CLI
//!
//! These tests drive the binary end to end against worksheets and feeds
//! written to temporary directories.

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const HEADER: &str = "Identifier,Full name,Email address,Status,Grade,Last modified (grade),Feedback comments";

/// Helper function to create a gradesheet command with an empty config
fn gradesheet(config_dir: &Path) -> assert_cmd::Command {
    let config = config_dir.join("config.toml");
    if !config.exists() {
        fs::write(&config, "").unwrap();
    }
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("gradesheet"));
    cmd.arg("--config").arg(config).env_remove("GRADESHEET_STUDENTS_TO_IGNORE");
    cmd
}

fn raw_worksheet() -> String {
    format!(
        "{HEADER}\n\
         1,Zed,z@x.com,Submitted for grading,,,\n\
         2,Amy,a@x.com,Submitted - follow up submission received,40.00,,\n\
         3,Mo,m@x.com,No submission,,,\n\
         4,Test Student,t@x.com,Submitted for grading,,,\n"
    )
}

const FEED: &str = r#"{
  "assignments": [
    {
      "id": 1, "cmid": 11, "name": "Week 1",
      "submissions": [
        {"userid": 1, "status": "submitted", "timemodified": 3000, "gradingstatus": "released"},
        {"userid": 2, "status": "submitted", "timemodified": 1000, "gradingstatus": "released"},
        {"userid": 3, "status": "submitted", "timemodified": 1000, "gradingstatus": "notgraded"},
        {"userid": 4, "status": "draft", "timemodified": 1000}
      ],
      "grades": [
        {"userid": 1, "timemodified": 2000, "grade": "50.00000"},
        {"userid": 2, "timemodified": 2000, "grade": "80.00000"}
      ]
    }
  ]
}"#;

// =============================================================================
// BASICS
// =============================================================================

#[test]
fn test_version() {
    let temp = TempDir::new().unwrap();
    gradesheet(temp.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gradesheet v"));
}

#[test]
fn test_version_json() {
    let temp = TempDir::new().unwrap();
    gradesheet(temp.path())
        .args(["--json", "version"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"version\""));
}

#[test]
fn test_help() {
    let temp = TempDir::new().unwrap();
    gradesheet(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("normalize"))
        .stdout(predicate::str::contains("ungraded"));
}

// =============================================================================
// NORMALIZE
// =============================================================================

#[test]
fn test_normalize_file() {
    let temp = TempDir::new().unwrap();
    let sheet = temp.path().join("grades.csv");
    fs::write(&sheet, raw_worksheet()).unwrap();

    gradesheet(temp.path())
        .arg("normalize")
        .arg(&sheet)
        .assert()
        .success()
        .stdout(predicate::str::contains("grades_processed.csv"))
        .stdout(predicate::str::contains("2 new submission(s), 1 resubmission(s)"));

    assert!(!sheet.exists());
    let output = fs::read_to_string(temp.path().join("grades_processed.csv")).unwrap();
    assert_eq!(
        output,
        format!(
            "{HEADER}\n\
             2,Amy,a@x.com,Submitted - follow up submission received,40.00,,\n\
             4,Test Student,t@x.com,Submitted for grading,,,\n\
             1,Zed,z@x.com,Submitted for grading,,,\n"
        )
    );
}

#[test]
fn test_normalize_respects_ignore_list() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("config.toml"), "[students_to_ignore]\n4 = \"Test Student\"\n")
        .unwrap();
    let sheet = temp.path().join("grades.csv");
    fs::write(&sheet, raw_worksheet()).unwrap();

    gradesheet(temp.path()).args(["--json", "normalize"]).arg(&sheet).assert().success();

    let output = fs::read_to_string(temp.path().join("grades_processed.csv")).unwrap();
    assert!(!output.contains("Test Student"));
}

#[test]
fn test_normalize_ignore_list_from_env() {
    let temp = TempDir::new().unwrap();
    let sheet = temp.path().join("grades.csv");
    fs::write(&sheet, raw_worksheet()).unwrap();

    gradesheet(temp.path())
        .env("GRADESHEET_STUDENTS_TO_IGNORE", "4=Test Student")
        .arg("normalize")
        .arg(&sheet)
        .assert()
        .success();

    let output = fs::read_to_string(temp.path().join("grades_processed.csv")).unwrap();
    assert!(!output.contains("Test Student"));
}

#[test]
fn test_normalize_folder_json() {
    let temp = TempDir::new().unwrap();
    let downloads = temp.path().join("downloads");
    fs::create_dir_all(&downloads).unwrap();
    fs::write(downloads.join("ex1.csv"), raw_worksheet()).unwrap();
    fs::write(downloads.join("ex2.csv"), raw_worksheet()).unwrap();
    fs::write(downloads.join("roster.csv"), "id,name\n1,Amy\n").unwrap();

    let output = gradesheet(temp.path())
        .args(["--json", "normalize"])
        .arg(&downloads)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["worksheets"].as_array().unwrap().len(), 2);
    assert_eq!(json["skipped"].as_array().unwrap().len(), 1);
    assert_eq!(json["total_new_submissions"], 4);
    assert_eq!(json["total_resubmissions"], 2);

    assert!(downloads.join("ex1_processed.csv").exists());
    assert!(downloads.join("roster.csv").exists());
}

#[test]
fn test_normalize_invalid_file_fails() {
    let temp = TempDir::new().unwrap();
    let sheet = temp.path().join("roster.csv");
    fs::write(&sheet, "id,name\n1,Amy\n").unwrap();

    gradesheet(temp.path())
        .arg("normalize")
        .arg(&sheet)
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing required columns"));

    assert!(sheet.exists());
}

#[test]
fn test_normalize_requires_a_path() {
    let temp = TempDir::new().unwrap();
    gradesheet(temp.path()).arg("normalize").assert().failure();
}

#[test]
fn test_bad_config_fails() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("config.toml"), "[students_to_ignore]\nabc = \"Someone\"\n")
        .unwrap();
    let sheet = temp.path().join("grades.csv");
    fs::write(&sheet, raw_worksheet()).unwrap();

    gradesheet(temp.path()).arg("normalize").arg(&sheet).assert().failure();
    assert!(sheet.exists());
}

// =============================================================================
// UNGRADED
// =============================================================================

#[test]
fn test_ungraded_report() {
    let temp = TempDir::new().unwrap();
    let feed = temp.path().join("feed.json");
    fs::write(&feed, FEED).unwrap();

    gradesheet(temp.path())
        .arg("ungraded")
        .arg(&feed)
        .assert()
        .success()
        .stdout(predicate::str::contains("Week 1"))
        .stdout(predicate::str::contains("resubmissions 1"));
}

#[test]
fn test_ungraded_json() {
    let temp = TempDir::new().unwrap();
    let feed = temp.path().join("feed.json");
    fs::write(&feed, FEED).unwrap();

    let output = gradesheet(temp.path()).args(["--json", "ungraded"]).arg(&feed).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["total_submissions"], 4);
    assert_eq!(json["total_ungraded"], 2);
    assert_eq!(json["total_resubmissions"], 1);
    assert_eq!(json["total_unreleased"], 0);
    assert_eq!(json["exercises"]["Week 1"]["ungraded"], 2);
}

#[test]
fn test_ungraded_ignored_student() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("config.toml"), "[students_to_ignore]\n3 = \"Test Student\"\n")
        .unwrap();
    let feed = temp.path().join("feed.json");
    fs::write(&feed, FEED).unwrap();

    let output = gradesheet(temp.path()).args(["--json", "ungraded"]).arg(&feed).output().unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(json["total_ungraded"], 1);
    assert_eq!(json["exercises"]["Week 1"]["ignored"], 1);
}

#[test]
fn test_ungraded_missing_feed_fails() {
    let temp = TempDir::new().unwrap();
    gradesheet(temp.path())
        .arg("ungraded")
        .arg(temp.path().join("absent.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read feed"));
}
