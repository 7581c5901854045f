//! Integration tests for the veripaper CLI
//!
//! These tests drive the full binary: analyzing files and stdin, listing
//! the pattern registry, and checking the JSON output shape.

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper function to create a veripaper command
fn veripaper() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("veripaper"))
}

const SUSPICIOUS: &str = "Our system achieved 100% accuracy across the full benchmark. \
    Statistical testing produced p < 0.0001 for the first cohort. \
    Another pass gave p < 0.0001 on held out data. \
    A final check returned p < 0.0001 under strict settings.";

// =============================================================================
// ANALYZE COMMAND TESTS
// =============================================================================

/// Analyzing a suspicious file reports a high-risk verdict
#[test]
fn test_analyze_file_human_output() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("paper.txt");
    fs::write(&path, SUSPICIOUS).unwrap();

    veripaper()
        .args(["analyze", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fake probability"))
        .stdout(predicate::str::contains("Perfect Results Claims"))
        .stdout(predicate::str::contains("Recommendations"));
}

/// JSON output carries the verdict fields and stays within bounds
#[test]
fn test_analyze_file_json_output() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("paper.txt");
    fs::write(&path, SUSPICIOUS).unwrap();

    let output = veripaper()
        .args(["analyze", path.to_str().unwrap(), "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let verdict: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let probability = verdict["fake_probability"].as_u64().unwrap();
    assert!((5..=95).contains(&probability));
    assert_eq!(verdict["analysis_method"], "local_only");
    assert_eq!(verdict["file_name"], "paper.txt");
    assert!(verdict["detected_issues"].as_array().unwrap().len() >= 2);
}

/// Text can be piped in over stdin
#[test]
fn test_analyze_stdin() {
    veripaper()
        .args(["analyze", "--stdin", "--json"])
        .write_stdin("A short ordinary note with nothing remarkable in it.")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"fake_probability\""));
}

/// Empty stdin still produces a verdict, not an error
#[test]
fn test_analyze_empty_stdin_is_stable() {
    let output = veripaper()
        .args(["analyze", "--stdin", "--json"])
        .write_stdin("")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let verdict: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(verdict["structural_profile"]["word_count"], 0);
    assert_eq!(verdict["structural_profile"]["has_proper_structure"], false);
}

/// No file and no --stdin is a usage error
#[test]
fn test_analyze_without_input_fails() {
    veripaper().arg("analyze").assert().failure();
}

/// A missing file is reported, not swallowed
#[test]
fn test_analyze_missing_file_fails() {
    veripaper()
        .args(["analyze", "/nonexistent/paper.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

/// A config file can adjust the engine behavior
#[test]
fn test_analyze_with_config_file() {
    let temp = TempDir::new().unwrap();
    let paper = temp.path().join("paper.txt");
    fs::write(&paper, SUSPICIOUS).unwrap();

    let config = temp.path().join("veripaper.toml");
    fs::write(&config, "[scoring]\ngeneric_phrases_feed_suspicion = true\n").unwrap();

    veripaper()
        .args([
            "analyze",
            paper.to_str().unwrap(),
            "--config",
            config.to_str().unwrap(),
        ])
        .assert()
        .success();
}

/// An invalid config file is a startup error
#[test]
fn test_analyze_with_invalid_config_fails() {
    let temp = TempDir::new().unwrap();
    let paper = temp.path().join("paper.txt");
    fs::write(&paper, "some text").unwrap();

    let config = temp.path().join("veripaper.toml");
    fs::write(&config, "[scoring]\nscore_floor = 95\nscore_ceiling = 5\n").unwrap();

    veripaper()
        .args([
            "analyze",
            paper.to_str().unwrap(),
            "--config",
            config.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid configuration"));
}

// =============================================================================
// PATTERNS COMMAND TESTS
// =============================================================================

/// The registry listing names the patterns and severities
#[test]
fn test_patterns_listing() {
    veripaper()
        .arg("patterns")
        .assert()
        .success()
        .stdout(predicate::str::contains("Perfect Results Claims"))
        .stdout(predicate::str::contains("Suspicious Statistics"))
        .stdout(predicate::str::contains("HIGH"));
}

/// JSON pattern listing is machine-parseable
#[test]
fn test_patterns_json() {
    let output = veripaper()
        .args(["patterns", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let patterns = parsed["patterns"].as_array().unwrap();
    assert!(patterns.len() >= 15);
    assert!(patterns.iter().any(|p| p["weight"].as_i64().unwrap() < 0));
}

// =============================================================================
// VERSION TESTS
// =============================================================================

#[test]
fn test_version_command() {
    veripaper()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_command_prints_hint() {
    veripaper()
        .assert()
        .success()
        .stdout(predicate::str::contains("veripaper"));
}
