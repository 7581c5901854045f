//! Authenticity marker analyzer
//!
//! Counts textual features that argue against fabrication: specific dates,
//! named institutions, recognized journal names, properly formatted
//! citations and contact emails. High marker counts reduce the final fake
//! probability.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use crate::models::MarkerProfile;

fn build(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .expect("invalid marker pattern")
}

static DATE_RE: Lazy<Regex> = Lazy::new(|| {
    build(
        r"\b(?:january|february|march|april|may|june|july|august|september|october|november|december)\s+\d{1,2},?\s+\d{4}\b",
    )
});

static INSTITUTION_RE: Lazy<Regex> = Lazy::new(|| {
    build(r"\b(?:university|institute|college|department)\s+of\s+\w+|\bhospital\b|\blaboratory\b")
});

static JOURNAL_RE: Lazy<Regex> = Lazy::new(|| {
    build(r"\b(?:nature|science|cell|lancet|nejm|plos|ieee|acm|springer|elsevier)\b")
});

static CITATION_RE: Lazy<Regex> =
    Lazy::new(|| build(r"\[\d+\]|\(\w+\s+et\s+al\.?,?\s+\d{4}\)"));

static CONTACT_RE: Lazy<Regex> = Lazy::new(|| {
    build(r"(?:email|correspondence|contact)[^\n]{0,80}@[\w.-]+\.(?:edu|org|com)")
});

/// Count authenticity markers in the text
#[must_use]
pub fn analyze(text: &str) -> MarkerProfile {
    let specific_dates = DATE_RE.find_iter(text).count();
    let institutions = INSTITUTION_RE.find_iter(text).count();
    let journal_names = JOURNAL_RE.find_iter(text).count();
    let formatted_citations = CITATION_RE.find_iter(text).count();
    let contact_info = CONTACT_RE.find_iter(text).count();

    let counts = [
        ("specific dates", specific_dates),
        ("named institutions", institutions),
        ("recognized journals", journal_names),
        ("formatted citations", formatted_citations),
        ("contact information", contact_info),
    ];

    let indicators = counts
        .iter()
        .filter(|(_, count)| *count > 0)
        .map(|(name, count)| format!("Found {count} instance(s) of {name}"))
        .collect();

    MarkerProfile {
        specific_dates,
        institutions,
        journal_names,
        formatted_citations,
        contact_info,
        total_points: specific_dates + institutions + journal_names + formatted_citations
            + contact_info,
        indicators,
    }
}
