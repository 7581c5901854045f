//! Structural analyzer
//!
//! Approximates "does this look like a real paper". Each canonical section
//! is detected by a minimum-length proximity pattern: the section keyword
//! followed by a minimum amount of subsequent text, a crude proxy for "this
//! heading is followed by actual content" rather than mere keyword
//! presence.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use crate::models::StructuralProfile;

use super::split_sentences;

/// Sections found must reach this count for proper structure
const MIN_SECTIONS: usize = 4;

static SECTION_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    let build = |pattern: &str| {
        RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .expect("invalid section pattern")
    };
    vec![
        ("abstract", build(r"abstract[\s\S]{50,500}")),
        ("introduction", build(r"introduction[\s\S]{100,1000}")),
        ("methodology", build(r"(?:methodology|methods)[\s\S]{100,1000}")),
        ("results", build(r"results[\s\S]{100,1000}")),
        ("discussion", build(r"discussion[\s\S]{100,1000}")),
        ("conclusion", build(r"conclusion[\s\S]{50,500}")),
        ("references", build(r"(?:references|bibliography)[\s\S]{50,}")),
    ]
});

/// Scan for canonical academic sections and basic size counts
///
/// Tolerates empty or very short text; counts simply become zero.
#[must_use]
pub fn analyze(text: &str) -> StructuralProfile {
    let mut found_sections = BTreeMap::new();
    let mut missing_sections = Vec::new();
    let mut total_sections_found = 0;

    for (name, pattern) in SECTION_PATTERNS.iter() {
        let present = pattern.is_match(text);
        found_sections.insert((*name).to_string(), present);
        if present {
            total_sections_found += 1;
        } else {
            missing_sections.push((*name).to_string());
        }
    }

    let word_count = text.split_whitespace().count();
    let sentence_count = split_sentences(text).len();

    StructuralProfile {
        found_sections,
        missing_sections,
        total_sections_found,
        word_count,
        sentence_count,
        has_proper_structure: total_sections_found >= MIN_SECTIONS,
    }
}
