//! Issue severity levels
//!
//! Defines how heavily a detected issue weighs on the fake-probability
//! accumulator.

use serde::{Deserialize, Serialize};

/// Issue severity levels, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Weak signal - stylistic or circumstantial
    Low,
    /// Moderate signal - suspicious but explainable
    Medium,
    /// Strong signal - hallmark of fabricated content
    High,
}

impl Severity {
    /// Score contribution per pattern match at this severity
    #[must_use]
    pub const fn weight(self) -> i32 {
        match self {
            Self::High => 15,
            Self::Medium => 8,
            Self::Low => 3,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(format!("Invalid severity: {s}. Use: low, medium, high")),
        }
    }
}
