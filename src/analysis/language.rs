//! Language-pattern analyzer
//!
//! Flags statistical surface signs of templated or machine-paraphrased
//! prose: overlong sentences, low vocabulary diversity, repeated sentence
//! starters and boilerplate phrasing. Each finding adds to a suspicion
//! accumulator; naturalness is its inverse.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use crate::models::LanguageProfile;

use super::substantial_sentences;

/// Average sentence length above this adds suspicion
const LONG_SENTENCE_THRESHOLD: f64 = 25.0;
/// Vocabulary diversity below this adds suspicion
const LOW_DIVERSITY_THRESHOLD: f64 = 0.30;
/// Repetitive-starter score above this adds suspicion
const REPETITIVE_STARTER_THRESHOLD: f64 = 0.30;
/// Generic phrase occurrences above this are recorded as an issue
const GENERIC_PHRASE_THRESHOLD: usize = 3;
/// Characters of each sentence compared for starter repetition
const STARTER_PREFIX_CHARS: usize = 15;

const LONG_SENTENCE_SUSPICION: u32 = 15;
const LOW_DIVERSITY_SUSPICION: u32 = 20;
const REPETITIVE_STARTER_SUSPICION: u32 = 25;
/// Extra suspicion when generic phrasing feeds the accumulator
const GENERIC_PHRASE_SUSPICION: u32 = 5;

static GENERIC_PHRASES: &[&str] = &[
    "comprehensive analysis",
    "significant findings",
    "important implications",
    "further research",
    "in conclusion",
    "it is important to note",
];

static GENERIC_PHRASE_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    GENERIC_PHRASES
        .iter()
        .map(|p| {
            RegexBuilder::new(&regex::escape(p))
                .case_insensitive(true)
                .build()
                .expect("invalid generic phrase pattern")
        })
        .collect()
});

static TRANSITION_RE: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(
        r"\b(?:however|furthermore|moreover|therefore|consequently|additionally)\b",
    )
    .case_insensitive(true)
    .build()
    .expect("invalid transition pattern")
});

/// Scan language-surface statistics
///
/// `generic_feeds_suspicion` controls whether boilerplate phrasing moves
/// the suspicion accumulator or is only reported. Never fails; zero
/// sentences or words yield zero averages.
#[must_use]
pub fn analyze(text: &str, generic_feeds_suspicion: bool) -> LanguageProfile {
    let sentences = substantial_sentences(text);
    let words: Vec<String> =
        text.split_whitespace().map(str::to_lowercase).collect();

    let avg_sentence_length = if sentences.is_empty() {
        0.0
    } else {
        let total: usize = sentences.iter().map(|s| s.split_whitespace().count()).sum();
        total as f64 / sentences.len() as f64
    };

    let vocabulary_diversity = if words.is_empty() {
        0.0
    } else {
        let unique: HashSet<&str> = words.iter().map(String::as_str).collect();
        unique.len() as f64 / words.len() as f64
    };

    let repetitive_starter_score = if sentences.is_empty() {
        0.0
    } else {
        let starters: Vec<String> = sentences
            .iter()
            .map(|s| s.chars().take(STARTER_PREFIX_CHARS).collect::<String>().to_lowercase())
            .collect();
        let unique: HashSet<&str> = starters.iter().map(String::as_str).collect();
        1.0 - unique.len() as f64 / starters.len() as f64
    };

    let generic_phrase_count: usize =
        GENERIC_PHRASE_RES.iter().map(|re| re.find_iter(text).count()).sum();

    let transition_word_count = TRANSITION_RE.find_iter(text).count();
    let char_count = text.chars().count();
    let transition_density = if char_count == 0 {
        0.0
    } else {
        transition_word_count as f64 / (char_count as f64 / 1000.0)
    };

    let mut issues = Vec::new();
    let mut suspicion_score = 0;

    if avg_sentence_length > LONG_SENTENCE_THRESHOLD {
        issues.push(
            "Unusually long average sentence length may indicate machine generation".to_string(),
        );
        suspicion_score += LONG_SENTENCE_SUSPICION;
    }

    if !words.is_empty() && vocabulary_diversity < LOW_DIVERSITY_THRESHOLD {
        issues.push("Low vocabulary diversity suggests templated prose".to_string());
        suspicion_score += LOW_DIVERSITY_SUSPICION;
    }

    if !sentences.is_empty() && repetitive_starter_score > REPETITIVE_STARTER_THRESHOLD {
        issues.push("High repetition in sentence structures".to_string());
        suspicion_score += REPETITIVE_STARTER_SUSPICION;
    }

    if generic_phrase_count > GENERIC_PHRASE_THRESHOLD {
        issues.push(format!(
            "Overuse of generic academic phrases ({generic_phrase_count} instances)"
        ));
        if generic_feeds_suspicion {
            suspicion_score += GENERIC_PHRASE_SUSPICION;
        }
    }

    LanguageProfile {
        avg_sentence_length: (avg_sentence_length * 10.0).round() / 10.0,
        vocabulary_diversity,
        repetitive_starter_score,
        generic_phrase_count,
        transition_word_count,
        transition_density,
        suspicion_score,
        naturalness: 100u32.saturating_sub(suspicion_score),
        issues,
    }
}
