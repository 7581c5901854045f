//! Verdict composition
//!
//! Merges the local heuristic score with the optional external judgment
//! and produces the final verdict: blended probability, confidence band,
//! and a deterministic set of reviewer recommendations. Every analysis
//! path terminates in a valid verdict; there is no error case for string
//! input.

use crate::config::EngineConfig;
use crate::judge::{self, JudgmentProvider};
use crate::models::{
    AnalysisMethod, AuthenticityVerdict, Category, Confidence, DetectedIssue, LanguageProfile,
};
use crate::scoring::{self, LocalAnalysis};

/// Probability above which a text is called likely fake
const LIKELY_FAKE_THRESHOLD: u8 = 60;
/// Probability bounds outside which confidence is high
const HIGH_CONFIDENCE_UPPER: u8 = 80;
const HIGH_CONFIDENCE_LOWER: u8 = 20;
/// Local/external disagreement beyond this drops confidence to low
const DISAGREEMENT_SPAN: u8 = 40;
/// Naturalness below this triggers the machine-generation recommendation
const LOW_NATURALNESS: u32 = 60;

/// The authenticity scoring engine
///
/// Stateless between calls apart from the process-wide pattern registry;
/// concurrent verifications are fully independent.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// Create an engine with the given configuration
    #[must_use]
    pub const fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// The engine's configuration
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Score a text, optionally consulting an external judgment provider
    ///
    /// The provider being absent, failing, timing out or replying
    /// unparseably all degrade to local-only scoring; the verdict is
    /// produced either way.
    #[must_use]
    pub fn verify(
        &self,
        text: &str,
        file_name: Option<&str>,
        provider: Option<&dyn JudgmentProvider>,
    ) -> AuthenticityVerdict {
        let local = scoring::compute_local(text, &self.config.scoring);
        let external =
            provider.and_then(|p| judge::request_judgment(p, text, &self.config.judge));
        self.compose(local, external, file_name)
    }

    /// Merge local and external signals into the final verdict
    fn compose(
        &self,
        local: LocalAnalysis,
        external: Option<u8>,
        file_name: Option<&str>,
    ) -> AuthenticityVerdict {
        let (fake_probability, analysis_method) = match external {
            Some(ext) => {
                let blended = f64::from(local.score).mul_add(
                    self.config.blend.local_weight,
                    f64::from(ext) * self.config.blend.external_weight,
                );
                let bounded = blended
                    .round()
                    .clamp(
                        f64::from(self.config.scoring.score_floor),
                        f64::from(self.config.scoring.score_ceiling),
                    ) as u8;
                (bounded, AnalysisMethod::Combined)
            },
            None => (local.score, AnalysisMethod::LocalOnly),
        };

        let confidence = confidence_band(fake_probability, local.score, external);
        let recommendations = recommendations(
            fake_probability,
            &local.detected_issues,
            &local.language_profile,
        );

        log::debug!(
            "verdict: probability={fake_probability} method={analysis_method} \
             issues={} confidence={confidence}",
            local.detected_issues.len()
        );

        AuthenticityVerdict {
            fake_probability,
            is_likely_fake: fake_probability > LIKELY_FAKE_THRESHOLD,
            confidence,
            detected_issues: local.detected_issues,
            suspicious_excerpts: local.suspicious_excerpts,
            structural_profile: local.structural_profile,
            citation_profile: local.citation_profile,
            language_profile: local.language_profile,
            marker_profile: local.marker_profile,
            recommendations,
            quality_label: quality_label(fake_probability).to_string(),
            analysis_method,
            file_name: file_name.map(String::from),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Derive the confidence band for a blended probability
///
/// Strong disagreement between the local and external signals dominates:
/// it means at least one of them is wrong about this text.
fn confidence_band(fake_probability: u8, local: u8, external: Option<u8>) -> Confidence {
    if let Some(ext) = external
        && local.abs_diff(ext) > DISAGREEMENT_SPAN
    {
        return Confidence::Low;
    }
    if fake_probability > HIGH_CONFIDENCE_UPPER || fake_probability < HIGH_CONFIDENCE_LOWER {
        Confidence::High
    } else {
        Confidence::Medium
    }
}

/// Coarse quality tag derived from the probability
const fn quality_label(fake_probability: u8) -> &'static str {
    if fake_probability > 70 {
        "Poor"
    } else if fake_probability > 40 {
        "Fair"
    } else {
        "Good"
    }
}

/// Build the reviewer recommendation list
///
/// A fixed decision ladder over the probability, then conditional
/// follow-ups keyed by which issue categories are present. Deterministic
/// for identical inputs.
fn recommendations(
    fake_probability: u8,
    issues: &[DetectedIssue],
    language: &LanguageProfile,
) -> Vec<String> {
    let mut out = Vec::new();

    out.push(
        match fake_probability {
            p if p > 80 => {
                "Critical: very high probability of fabricated content; immediate manual review required"
            },
            p if p > 60 => "High risk: significant concerns detected; thorough verification needed",
            p if p > 40 => "Moderate risk: suspicious patterns found; additional checks recommended",
            p if p > 20 => "Minor concerns: content appears largely authentic",
            _ => "Low risk: content appears authentic with normal characteristics",
        }
        .to_string(),
    );

    let has_statistical = issues.iter().any(|i| {
        matches!(i.category, Category::StatisticalIssues | Category::DataFabrication)
    });
    let has_citation = issues.iter().any(|i| i.category == Category::CitationIssues);

    if has_statistical {
        out.push(
            "Verify all statistical data and numerical claims against original sources"
                .to_string(),
        );
    }
    if has_citation {
        out.push("Cross-check all citations for accuracy and verifiability".to_string());
    }
    if language.naturalness < LOW_NATURALNESS {
        out.push(
            "Language patterns suggest possible machine generation; human review recommended"
                .to_string(),
        );
    }
    if issues.is_empty() {
        out.push("No fabrication patterns detected".to_string());
    }

    out
}
