//! Tests for configuration loading

use std::fs;

use tempfile::TempDir;

use veripaper::config::EngineConfig;

#[test]
fn test_load_without_file_gives_defaults() {
    let config = EngineConfig::load(None).unwrap();
    assert_eq!(config.scoring.structure_penalty, 20);
    assert_eq!(config.scoring.score_floor, 5);
    assert_eq!(config.scoring.score_ceiling, 95);
    assert!(!config.scoring.generic_phrases_feed_suspicion);
    assert_eq!(config.judge.excerpt_limit, 1200);
}

#[test]
fn test_load_merges_partial_file_over_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("veripaper.toml");
    fs::write(
        &path,
        r#"[scoring]
generic_phrases_feed_suspicion = true

[judge]
model = "test-model"
timeout_secs = 5
"#,
    )
    .unwrap();

    let config = EngineConfig::load(Some(&path)).unwrap();
    assert!(config.scoring.generic_phrases_feed_suspicion);
    assert_eq!(config.judge.model, "test-model");
    assert_eq!(config.judge.timeout_secs, 5);
    // Untouched values keep their defaults
    assert_eq!(config.scoring.structure_penalty, 20);
    assert!((config.blend.local_weight - 0.6).abs() < f64::EPSILON);
}

#[test]
fn test_load_rejects_invalid_values() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("veripaper.toml");
    fs::write(
        &path,
        r#"[scoring]
score_floor = 95
score_ceiling = 5
"#,
    )
    .unwrap();

    assert!(EngineConfig::load(Some(&path)).is_err());
}

#[test]
fn test_load_rejects_malformed_toml() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("veripaper.toml");
    fs::write(&path, "not [valid toml").unwrap();

    assert!(EngineConfig::load(Some(&path)).is_err());
}

#[test]
fn test_load_missing_explicit_file_is_an_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("absent.toml");
    assert!(EngineConfig::load(Some(&path)).is_err());
}
