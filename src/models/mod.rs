//! Value objects produced by the scoring engine
//!
//! Every analysis creates these fresh; nothing here is shared or mutated
//! across requests.

mod issue;
mod profiles;
mod severity;
mod verdict;

pub use issue::{Category, DetectedIssue, SuspiciousExcerpt};
pub use profiles::{CitationProfile, LanguageProfile, MarkerProfile, StructuralProfile};
pub use severity::Severity;
pub use verdict::{AnalysisMethod, AuthenticityVerdict, Confidence};
