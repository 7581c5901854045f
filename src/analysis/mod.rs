//! Text analyzers feeding the local score combinator
//!
//! Each analyzer is a pure text scan producing an immutable profile. None
//! of them can fail: degenerate input (empty text, no sentences) yields
//! zero-valued profiles.

pub mod citations;
pub mod language;
pub mod markers;
pub mod structure;

use once_cell::sync::Lazy;
use regex::Regex;

static SENTENCE_SPLIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("invalid sentence split pattern"));

/// Split text into trimmed, non-empty sentences on `.`, `!` and `?`
#[must_use]
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_SPLIT_RE
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Sentences long enough to carry language signal (over 10 characters)
#[must_use]
pub fn substantial_sentences(text: &str) -> Vec<&str> {
    split_sentences(text).into_iter().filter(|s| s.chars().count() > 10).collect()
}
