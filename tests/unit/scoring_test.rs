//! Tests for the local score combinator

use veripaper::config::ScoringConfig;
use veripaper::scoring::compute_local;

use super::common::{suspicious_short_text, well_structured_paper};

#[test]
fn test_score_bounded_for_all_inputs() {
    let config = ScoringConfig::default();
    let inputs = [
        String::new(),
        " \n\t ".to_string(),
        "word".to_string(),
        suspicious_short_text(),
        well_structured_paper(),
        "100% accuracy. p < 0.0001. ".repeat(200),
        "x".repeat(50_000),
    ];
    for text in &inputs {
        let analysis = compute_local(text, &config);
        assert!(
            (5..=95).contains(&analysis.score),
            "score {} out of bounds for input of {} chars",
            analysis.score,
            text.len()
        );
    }
}

#[test]
fn test_local_analysis_bit_identical_across_calls() {
    let config = ScoringConfig::default();
    let text = suspicious_short_text();
    let a = compute_local(&text, &config);
    let b = compute_local(&text, &config);
    assert_eq!(a.score, b.score);
    assert_eq!(a.detected_issues, b.detected_issues);
    assert_eq!(a.structural_profile, b.structural_profile);
    assert_eq!(a.citation_profile, b.citation_profile);
    assert_eq!(a.language_profile, b.language_profile);
    assert_eq!(a.marker_profile, b.marker_profile);
}

#[test]
fn test_empty_input_stability() {
    let analysis = compute_local("", &ScoringConfig::default());
    assert_eq!(analysis.structural_profile.word_count, 0);
    assert_eq!(analysis.structural_profile.sentence_count, 0);
    assert!(!analysis.structural_profile.has_proper_structure);
    assert!(analysis.detected_issues.is_empty());
    assert!(analysis.suspicious_excerpts.is_empty());
}

#[test]
fn test_fabricated_short_text_scores_high() {
    // One perfect-results claim, three impossible p-values, no structure
    let analysis = compute_local(&suspicious_short_text(), &ScoringConfig::default());

    assert!(
        analysis.detected_issues.iter().any(|i| i.kind == "Perfect Results Claims"),
        "expected a perfect-results issue"
    );
    assert!(
        analysis.detected_issues.iter().any(|i| i.kind == "Suspicious Statistics"),
        "expected a suspicious-statistics issue"
    );
    let stats = analysis
        .detected_issues
        .iter()
        .find(|i| i.kind == "Suspicious Statistics")
        .unwrap();
    assert_eq!(stats.count, 3);
    assert!(!analysis.structural_profile.has_proper_structure);
    assert!(analysis.score >= 60, "score was {}", analysis.score);
}

#[test]
fn test_well_structured_paper_scores_low() {
    let analysis = compute_local(&well_structured_paper(), &ScoringConfig::default());

    assert!(analysis.structural_profile.has_proper_structure);
    assert_eq!(analysis.structural_profile.total_sections_found, 7);
    assert!(analysis.detected_issues.is_empty());
    assert_eq!(analysis.citation_profile.author_year, 10);
    assert!(analysis.score <= 40, "score was {}", analysis.score);
}

#[test]
fn test_added_high_severity_matches_never_decrease_score() {
    let config = ScoringConfig::default();
    let base = suspicious_short_text();
    let mut extended = base.clone();
    extended.push_str(
        " Later trials also reported 100% accuracy. \
         The last audit again confirmed 100% accuracy.",
    );

    let base_score = compute_local(&base, &config).score;
    let extended_score = compute_local(&extended, &config).score;
    assert!(
        extended_score >= base_score,
        "adding high-severity matches lowered the score: {base_score} -> {extended_score}"
    );
}

#[test]
fn test_generic_phrase_toggle_changes_score_only_when_enabled() {
    let text = "This comprehensive analysis yields significant findings with important \
                implications. In conclusion, further research is needed. A comprehensive \
                analysis of the data confirms the trend across every site we visited.";

    let reported = compute_local(text, &ScoringConfig::default());

    let fed_config = ScoringConfig {
        generic_phrases_feed_suspicion: true,
        ..ScoringConfig::default()
    };
    let fed = compute_local(text, &fed_config);

    assert!(reported.language_profile.generic_phrase_count > 3);
    assert!(fed.language_profile.suspicion_score > reported.language_profile.suspicion_score);
    assert!(fed.score >= reported.score);
}

#[test]
fn test_authenticity_markers_reduce_score() {
    let bare = "The trial spanned four months with uneven coverage by cohort. \
                Sampling quality varied substantially between waves of collection.";
    let marked = "The trial spanned four months with uneven coverage by cohort. \
                  Sampling quality varied substantially between waves of collection. \
                  Data collection began on March 12, 2023 at the University of Somewhere, \
                  with oversight from the Department of Biology. Findings appeared in Nature \
                  and PLOS venues. See [1], [2], [3], [4], [5] and (Smith et al., 2021). \
                  Correspondence: lead@example.edu. Review notes were filed on June 3, 2023 \
                  and again on July 9, 2023 with the Institute of Metrics.";

    let config = ScoringConfig::default();
    let bare_score = compute_local(bare, &config).score;
    let marked_analysis = compute_local(marked, &config);

    assert!(marked_analysis.marker_profile.total_points > 8);
    assert!(
        marked_analysis.score <= bare_score,
        "markers did not reduce the score: {bare_score} -> {}",
        marked_analysis.score
    );
}
