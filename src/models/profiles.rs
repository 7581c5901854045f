//! Analysis profile models
//!
//! Summaries produced by the structural, citation, language and
//! authenticity-marker analyzers. All of these are value objects built
//! fresh for each analyzed text.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Summary of whether the text looks like a structured academic paper
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuralProfile {
    /// Presence of each canonical section, keyed by section name
    pub found_sections: BTreeMap<String, bool>,

    /// Canonical sections that were not found
    pub missing_sections: Vec<String>,

    /// Number of sections found
    pub total_sections_found: usize,

    /// Whitespace-delimited word count
    pub word_count: usize,

    /// Number of non-empty sentences
    pub sentence_count: usize,

    /// Whether enough canonical sections are present
    pub has_proper_structure: bool,
}

/// Citation usage summary across the recognized citation formats
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CitationProfile {
    /// Count of numbered citations like `[12]`
    pub numbered: usize,

    /// Count of parenthetical citations like `(Author, 2023)`
    pub author_year: usize,

    /// Count of textual citations like `Author et al.`
    pub et_al: usize,

    /// Count of DOI references
    pub doi: usize,

    /// Sum of all citation format counts
    pub total_citations: usize,

    /// Highest single-format count, the dominant citation style
    pub dominant_format_count: usize,

    /// Whether a references or bibliography section exists
    pub has_reference_section: bool,

    /// Count of references to unverifiable sources
    pub suspicious_citations: usize,

    /// Citations per 1000 characters of text
    pub citation_density: f64,

    /// Citation problems found, in a fixed evaluation order
    pub issues: Vec<String>,
}

/// Surface-level language statistics used for machine-generation detection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageProfile {
    /// Average sentence length in words
    pub avg_sentence_length: f64,

    /// Unique words divided by total words, in [0, 1]
    pub vocabulary_diversity: f64,

    /// 1 minus the ratio of unique sentence prefixes, in [0, 1]
    pub repetitive_starter_score: f64,

    /// Occurrences of generic boilerplate phrases
    pub generic_phrase_count: usize,

    /// Occurrences of common transition words
    pub transition_word_count: usize,

    /// Transition words per 1000 characters
    pub transition_density: f64,

    /// Accumulated suspicion points from the language checks
    pub suspicion_score: u32,

    /// 100 minus the suspicion score, floored at 0
    pub naturalness: u32,

    /// Textual descriptions of the language problems found
    pub issues: Vec<String>,
}

/// Counts of textual features that argue against fabrication
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerProfile {
    /// Specific calendar dates like "March 12, 2023"
    pub specific_dates: usize,

    /// Named institutions (universities, departments, laboratories)
    pub institutions: usize,

    /// Recognized journal or publisher names
    pub journal_names: usize,

    /// Properly formatted citations
    pub formatted_citations: usize,

    /// Contact email references
    pub contact_info: usize,

    /// Sum of all marker counts
    pub total_points: usize,

    /// Human-readable descriptions of the markers found
    pub indicators: Vec<String>,
}
