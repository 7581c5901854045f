//! Citation analyzer
//!
//! Counts citation-style occurrences under independent formats and flags
//! insufficient or inconsistent citation usage. The dominant format count
//! is the maximum across the numbered, parenthetical and textual formats.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use crate::models::CitationProfile;

/// Dominant format count below this flags insufficient usage
const MIN_DOMINANT_COUNT: usize = 3;
/// Text length above which insufficient usage is flagged
const MIN_FLAG_LENGTH: usize = 1000;
/// Text length above which zero citations is flagged
const SUBSTANTIAL_LENGTH: usize = 2000;
/// Suspicious citations above this share of the total are flagged
const SUSPICIOUS_RATIO: f64 = 0.3;

static NUMBERED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\d+\]").expect("invalid citation pattern"));

static AUTHOR_YEAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(\w+,?\s+\d{4}\)").expect("invalid citation pattern"));

static ET_AL_RE: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(r"\w+\s+et\s+al\.")
        .case_insensitive(true)
        .build()
        .expect("invalid citation pattern")
});

static DOI_RE: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(r"doi:\s*10\.\d+")
        .case_insensitive(true)
        .build()
        .expect("invalid citation pattern")
});

static REFERENCE_SECTION_RE: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(r"references|bibliography")
        .case_insensitive(true)
        .build()
        .expect("invalid citation pattern")
});

static SUSPICIOUS_RE: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(r"personal\s+communication|unpublished\s+data|internal\s+report")
        .case_insensitive(true)
        .build()
        .expect("invalid citation pattern")
});

/// Count citation usage and derive citation issues
#[must_use]
pub fn analyze(text: &str) -> CitationProfile {
    let numbered = NUMBERED_RE.find_iter(text).count();
    let author_year = AUTHOR_YEAR_RE.find_iter(text).count();
    let et_al = ET_AL_RE.find_iter(text).count();
    let doi = DOI_RE.find_iter(text).count();

    let total_citations = numbered + author_year + et_al + doi;
    let dominant_format_count = numbered.max(author_year).max(et_al);
    let has_reference_section = REFERENCE_SECTION_RE.is_match(text);
    let suspicious_citations = SUSPICIOUS_RE.find_iter(text).count();

    let char_count = text.chars().count();
    let citation_density = if char_count == 0 {
        0.0
    } else {
        total_citations as f64 / (char_count as f64 / 1000.0)
    };

    let mut issues = Vec::new();
    if total_citations == 0 && char_count > SUBSTANTIAL_LENGTH {
        issues.push("No citations found in substantial text".to_string());
    }
    if dominant_format_count < MIN_DOMINANT_COUNT && char_count > MIN_FLAG_LENGTH {
        issues.push("Insufficient or inconsistent citation usage".to_string());
    }
    if suspicious_citations > 0
        && suspicious_citations as f64 > total_citations as f64 * SUSPICIOUS_RATIO
    {
        issues.push("High proportion of unverifiable citations".to_string());
    }
    if total_citations > 0 && !has_reference_section {
        issues.push("Citations present but no reference section found".to_string());
    }

    CitationProfile {
        numbered,
        author_year,
        et_al,
        doi,
        total_citations,
        dominant_format_count,
        has_reference_section,
        suspicious_citations,
        citation_density,
        issues,
    }
}
