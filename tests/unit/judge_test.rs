//! Tests for the external judgment adapter

use veripaper::config::JudgeConfig;
use veripaper::judge::{build_prompt, parse_score, request_judgment};

use super::common::{MockProvider, UnreachableProvider};

#[test]
fn test_prompt_carries_protocol_label() {
    let prompt = build_prompt("sample text");
    assert!(prompt.contains("AUTHENTICITY SCORE:"));
    assert!(prompt.contains("sample text"));
}

#[test]
fn test_parse_score_tolerates_case_and_whitespace() {
    assert_eq!(parse_score("Authenticity Score:   63"), Some(63));
    assert_eq!(parse_score("authenticity\tscore: 0"), Some(0));
    assert_eq!(parse_score("AUTHENTICITY SCORE: 100"), Some(100));
}

#[test]
fn test_parse_score_requires_exact_label() {
    assert_eq!(parse_score("SCORE: 63"), None);
    assert_eq!(parse_score("AUTHENTICITY RATING: 63"), None);
    assert_eq!(parse_score("the authenticity is 63"), None);
}

#[test]
fn test_parse_score_rejects_out_of_range_values() {
    assert_eq!(parse_score("AUTHENTICITY SCORE: 101"), None);
    assert_eq!(parse_score("AUTHENTICITY SCORE: 100000000000000000000"), None);
}

#[test]
fn test_judgment_converts_authenticity_to_fake_space() {
    let config = JudgeConfig::default();
    let provider = MockProvider::replying("AUTHENTICITY SCORE: 25\nASSESSMENT: dubious");
    assert_eq!(request_judgment(&provider, "text", &config), Some(75));

    let provider = MockProvider::replying("AUTHENTICITY SCORE: 100");
    assert_eq!(request_judgment(&provider, "text", &config), Some(0));
}

#[test]
fn test_judgment_failures_yield_no_signal() {
    let config = JudgeConfig::default();
    assert_eq!(request_judgment(&UnreachableProvider, "text", &config), None);

    let empty = MockProvider::replying("");
    assert_eq!(request_judgment(&empty, "text", &config), None);
}
