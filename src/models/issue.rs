//! Detected issue model
//!
//! A detected issue records one fabrication-indicator pattern that matched
//! the analyzed text, with enough context for a human reviewer to locate
//! and judge the matches.

use serde::{Deserialize, Serialize};

use super::Severity;

/// Recommendation-grouping category for a detected issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Fabricated or implausibly precise numerical data
    DataFabrication,
    /// Claims of perfect or impossible outcomes
    ResultFabrication,
    /// Unverifiable, missing or inconsistent citations
    CitationIssues,
    /// Implausible research timeframes
    TimelineIssues,
    /// Suspicious statistical reporting
    StatisticalIssues,
    /// Overblown novelty claims
    ExaggeratedLanguage,
    /// Hyperbolic descriptions of findings
    HyperbolicResults,
    /// Methodology described without substance
    VagueMethodology,
    /// Boilerplate analysis claims
    GenericAnalysisClaims,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::DataFabrication => "Data Fabrication",
            Self::ResultFabrication => "Result Fabrication",
            Self::CitationIssues => "Citation Issues",
            Self::TimelineIssues => "Timeline Issues",
            Self::StatisticalIssues => "Statistical Issues",
            Self::ExaggeratedLanguage => "Exaggerated Language",
            Self::HyperbolicResults => "Hyperbolic Results",
            Self::VagueMethodology => "Vague Methodology",
            Self::GenericAnalysisClaims => "Generic Analysis Claims",
        };
        write!(f, "{name}")
    }
}

/// One fabrication-indicator pattern that matched the text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedIssue {
    /// Stable kind tag from the pattern registry (e.g. "Perfect Results Claims")
    pub kind: String,

    /// Human-readable explanation of what the pattern indicates
    pub description: String,

    /// How heavily this issue weighs on the score
    pub severity: Severity,

    /// Category used for recommendation grouping
    pub category: Category,

    /// Number of matches found in the text
    pub count: usize,

    /// Up to three literal matched substrings, in match order
    pub examples: Vec<String>,
}

/// A sentence containing at least one fabrication-indicator match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuspiciousExcerpt {
    /// 1-based index of the sentence within the text
    pub sentence_index: usize,

    /// The sentence content, truncated to 200 characters
    pub excerpt: String,

    /// Category of the matching pattern
    pub category: Category,

    /// Severity of the matching pattern
    pub severity: Severity,
}
