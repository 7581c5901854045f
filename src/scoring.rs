//! Local score combinator
//!
//! Folds the pattern registry scan and the structural, citation, language
//! and marker analyses into a single bounded fake probability. Pure
//! function of the text and configuration: no I/O, no shared state, and
//! deterministic for identical input.

use crate::analysis::{citations, language, markers, structure, substantial_sentences};
use crate::config::ScoringConfig;
use crate::models::{
    CitationProfile, DetectedIssue, LanguageProfile, MarkerProfile, StructuralProfile,
    SuspiciousExcerpt,
};
use crate::registry::registry;

/// Maximum suspicious sentence excerpts kept per analysis
const MAX_EXCERPTS: usize = 10;
/// Characters kept per excerpt
const EXCERPT_CHARS: usize = 200;

/// Everything the local analysis produces for one text
#[derive(Debug, Clone, PartialEq)]
pub struct LocalAnalysis {
    /// Bounded fake probability from local signals only
    pub score: u8,
    /// Fabrication-indicator patterns that matched
    pub detected_issues: Vec<DetectedIssue>,
    /// Sentences containing pattern matches
    pub suspicious_excerpts: Vec<SuspiciousExcerpt>,
    /// Academic-structure summary
    pub structural_profile: StructuralProfile,
    /// Citation usage summary
    pub citation_profile: CitationProfile,
    /// Language statistics summary
    pub language_profile: LanguageProfile,
    /// Authenticity markers found
    pub marker_profile: MarkerProfile,
}

/// Compute the local fake probability and supporting analyses
///
/// The returned score is always within the configured clamp range. The
/// adjustments apply in a fixed order: pattern score, structure and length
/// penalties, weighted language suspicion, citation penalties, authenticity
/// bonuses, clamp, then the post-clamp length nudge.
#[must_use]
pub fn compute_local(text: &str, config: &ScoringConfig) -> LocalAnalysis {
    let reg = registry();
    let matches = reg.find_matches(text);
    let detected_issues = reg.issues_from_matches(&matches);
    let pattern_score = reg.score_from_matches(&matches);

    let structural_profile = structure::analyze(text);
    let citation_profile = citations::analyze(text);
    let language_profile = language::analyze(text, config.generic_phrases_feed_suspicion);
    let marker_profile = markers::analyze(text);

    let mut score = f64::from(pattern_score);

    if !structural_profile.has_proper_structure {
        score += f64::from(config.structure_penalty);
    }
    if structural_profile.word_count < config.short_text_words {
        score += f64::from(config.short_text_penalty);
    }

    score += f64::from(language_profile.suspicion_score) * config.language_weight;

    if citation_profile.issues.len() > config.citation_issue_min {
        score += f64::from(config.citation_issue_penalty);
    }
    let char_count = text.chars().count();
    if citation_profile.total_citations == 0 && char_count > config.no_citation_chars {
        score += f64::from(config.no_citation_penalty);
    }

    if marker_profile.total_points > config.marker_bonus_min {
        score -= f64::from(config.marker_bonus);
    }
    if citation_profile.total_citations > config.citation_bonus_min {
        score -= f64::from(config.citation_bonus);
    }
    if language_profile.naturalness > config.naturalness_bonus_min {
        score -= f64::from(config.naturalness_bonus);
    }

    let floor = config.score_floor;
    let ceiling = config.score_ceiling;
    let mut bounded =
        score.clamp(f64::from(floor), f64::from(ceiling)).round() as u8;

    // Length nudge happens after clamping and stays within the bounds:
    // short texts are harder to judge, long fabricated texts accumulate
    // more issues.
    if structural_profile.word_count < config.brief_words {
        bounded = bounded.saturating_sub(config.brief_adjustment).max(floor);
    } else if structural_profile.word_count > config.long_words {
        bounded = bounded.saturating_add(config.long_adjustment).min(ceiling);
    }

    let suspicious_excerpts = collect_excerpts(text);

    LocalAnalysis {
        score: bounded,
        detected_issues,
        suspicious_excerpts,
        structural_profile,
        citation_profile,
        language_profile,
        marker_profile,
    }
}

/// Collect sentences that contain a penalizing pattern match
fn collect_excerpts(text: &str) -> Vec<SuspiciousExcerpt> {
    let reg = registry();
    let mut excerpts = Vec::new();

    'sentences: for (index, sentence) in substantial_sentences(text).iter().enumerate() {
        for entry in reg.entries() {
            if entry.weight > 0 && entry.is_match(sentence) {
                excerpts.push(SuspiciousExcerpt {
                    sentence_index: index + 1,
                    excerpt: sentence.chars().take(EXCERPT_CHARS).collect(),
                    category: entry.category,
                    severity: entry.severity,
                });
                if excerpts.len() >= MAX_EXCERPTS {
                    break 'sentences;
                }
                continue 'sentences;
            }
        }
    }

    excerpts
}
