//! Authenticity verdict model
//!
//! The final output of the engine: a bounded fake-probability estimate with
//! the supporting analyses and deterministic recommendations. Intended to
//! be serialized as-is by whatever transport layer sits in front of the
//! engine.

use serde::{Deserialize, Serialize};

use super::{
    CitationProfile, DetectedIssue, LanguageProfile, MarkerProfile, StructuralProfile,
    SuspiciousExcerpt,
};

/// Confidence band for a verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    /// Probability far from the midpoint, signals agree
    High,
    /// Probability in the ambiguous middle range
    Medium,
    /// Local and external signals disagree strongly
    Low,
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::High => write!(f, "High"),
            Self::Medium => write!(f, "Medium"),
            Self::Low => write!(f, "Low"),
        }
    }
}

/// Which signal sources contributed to the verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisMethod {
    /// Heuristic analysis only
    LocalOnly,
    /// Heuristic analysis blended with an external judgment
    Combined,
}

impl std::fmt::Display for AnalysisMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LocalOnly => write!(f, "local_only"),
            Self::Combined => write!(f, "combined"),
        }
    }
}

/// The engine's final judgment on a piece of text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticityVerdict {
    /// Estimated probability the text is fabricated, always in [5, 95]
    pub fake_probability: u8,

    /// Whether the probability crosses the likely-fake threshold
    pub is_likely_fake: bool,

    /// Confidence band for the estimate
    pub confidence: Confidence,

    /// Fabrication-indicator patterns that matched
    pub detected_issues: Vec<DetectedIssue>,

    /// Sentences containing pattern matches, capped at 10
    pub suspicious_excerpts: Vec<SuspiciousExcerpt>,

    /// Academic-structure summary
    pub structural_profile: StructuralProfile,

    /// Citation usage summary
    pub citation_profile: CitationProfile,

    /// Language statistics summary
    pub language_profile: LanguageProfile,

    /// Authenticity markers found
    pub marker_profile: MarkerProfile,

    /// Reviewer-facing recommendations, deterministic for identical inputs
    pub recommendations: Vec<String>,

    /// Coarse quality tag: "Good", "Fair" or "Poor"
    pub quality_label: String,

    /// Which signal sources contributed
    pub analysis_method: AnalysisMethod,

    /// Original file name, carried through untouched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,

    /// When this verdict was produced (RFC 3339)
    pub timestamp: String,
}
