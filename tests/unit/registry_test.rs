//! Tests for the pattern registry

use veripaper::models::{Category, Severity};
use veripaper::registry::registry;

#[test]
fn test_registry_initializes_with_all_patterns() {
    let reg = registry();
    assert!(reg.len() >= 15);
    for id in [
        "overly_precise_percentage",
        "perfect_results",
        "suspicious_statistics",
        "unverifiable_citation",
        "unrealistic_timeline",
        "exaggerated_language",
        "recent_citation",
    ] {
        assert!(reg.entry(id).is_some(), "missing registry entry {id}");
    }
}

#[test]
fn test_severity_weights_follow_ladder() {
    let reg = registry();
    for entry in reg.entries() {
        if entry.weight > 0 {
            assert_eq!(entry.weight, entry.severity.weight(), "entry {}", entry.id);
        }
    }
}

#[test]
fn test_signed_weights_supported() {
    let reg = registry();
    let legit = reg.entry("recent_citation").unwrap();
    assert!(legit.weight < 0);

    let text = "Consistent with Smith et al. (2023) and Lee et al. (2024).";
    assert!(reg.score(text) < 0);
    assert!(reg.issues(text).is_empty());
}

#[test]
fn test_statistical_patterns_match_observed_forms() {
    let reg = registry();

    let matches = reg.find_matches("We measured 99.12345% agreement across 12345.6 units.");
    assert!(matches.iter().any(|m| m.id == "overly_precise_percentage"));
    assert!(matches.iter().any(|m| m.id == "unrealistic_precision"));

    let matches = reg.find_matches("The model showed r = 0.98 and cohen's d > 4.2.");
    assert!(matches.iter().any(|m| m.id == "perfect_correlation"));
    assert!(matches.iter().any(|m| m.id == "impossible_effect_size"));

    let matches = reg.find_matches("The study was completed within 24 hours of design.");
    assert!(matches.iter().any(|m| m.id == "unrealistic_timeline"));

    let matches =
        reg.find_matches("We recruited 100000 participants using a novel approach.");
    assert!(matches.iter().any(|m| m.id == "unrealistic_sample_size"));
    assert!(matches.iter().any(|m| m.id == "vague_methodology"));
}

#[test]
fn test_issue_carries_kind_severity_and_category() {
    let reg = registry();
    let issues = reg.issues("This groundbreaking study cites unpublished data twice: unpublished data.");

    let exaggerated = issues.iter().find(|i| i.kind == "Exaggerated Language").unwrap();
    assert_eq!(exaggerated.severity, Severity::Medium);
    assert_eq!(exaggerated.category, Category::ExaggeratedLanguage);

    let citation = issues.iter().find(|i| i.kind == "Unverifiable Citations").unwrap();
    assert_eq!(citation.count, 2);
    assert_eq!(citation.category, Category::CitationIssues);
}

#[test]
fn test_input_not_required_to_be_lowercase() {
    let reg = registry();
    let upper = reg.find_matches("FLAWLESS RESULTS WERE OBTAINED");
    assert!(upper.iter().any(|m| m.id == "perfect_results"));
}
