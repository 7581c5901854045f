//! Engine configuration
//!
//! All scoring tunables live in one place with documented defaults, loaded
//! from an optional `veripaper.toml` merged over the defaults. The judge
//! API key may come from the file or the `VERIPAPER_API_KEY` environment
//! variable. Configuration is validated once at load time; a bad value is
//! a startup error, never a per-request one.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::VeripaperError;

/// Environment variable consulted for the judge API key
pub const API_KEY_ENV: &str = "VERIPAPER_API_KEY";

/// Complete engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Local scoring tunables
    #[serde(default)]
    pub scoring: ScoringConfig,
    /// Blend weights for combining local and external signals
    #[serde(default)]
    pub blend: BlendConfig,
    /// External judgment provider settings
    #[serde(default)]
    pub judge: JudgeConfig,
}

/// Tunables for the local score combinator
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Penalty when the text lacks proper academic structure
    #[serde(default = "default_structure_penalty")]
    pub structure_penalty: u32,
    /// Penalty when the word count is below `short_text_words`
    #[serde(default = "default_short_text_penalty")]
    pub short_text_penalty: u32,
    /// Word count below which the short-text penalty applies
    #[serde(default = "default_short_text_words")]
    pub short_text_words: usize,
    /// Multiplier applied to the language suspicion score
    #[serde(default = "default_language_weight")]
    pub language_weight: f64,
    /// Penalty when citation issues exceed `citation_issue_min`
    #[serde(default = "default_citation_issue_penalty")]
    pub citation_issue_penalty: u32,
    /// Distinct citation findings above which the penalty applies
    #[serde(default = "default_citation_issue_min")]
    pub citation_issue_min: usize,
    /// Extra penalty for zero citations in text over `no_citation_chars`
    #[serde(default = "default_no_citation_penalty")]
    pub no_citation_penalty: u32,
    /// Character count above which zero citations is penalized
    #[serde(default = "default_no_citation_chars")]
    pub no_citation_chars: usize,
    /// Bonus subtracted when marker points exceed `marker_bonus_min`
    #[serde(default = "default_marker_bonus")]
    pub marker_bonus: u32,
    /// Marker points above which the marker bonus applies
    #[serde(default = "default_marker_bonus_min")]
    pub marker_bonus_min: usize,
    /// Bonus subtracted when citations exceed `citation_bonus_min`
    #[serde(default = "default_citation_bonus")]
    pub citation_bonus: u32,
    /// Citation count above which the citation bonus applies
    #[serde(default = "default_citation_bonus_min")]
    pub citation_bonus_min: usize,
    /// Bonus subtracted when naturalness exceeds `naturalness_bonus_min`
    #[serde(default = "default_naturalness_bonus")]
    pub naturalness_bonus: u32,
    /// Naturalness above which the naturalness bonus applies
    #[serde(default = "default_naturalness_bonus_min")]
    pub naturalness_bonus_min: u32,
    /// Lowest reportable probability
    #[serde(default = "default_score_floor")]
    pub score_floor: u8,
    /// Highest reportable probability
    #[serde(default = "default_score_ceiling")]
    pub score_ceiling: u8,
    /// Word count below which the brief-text adjustment applies
    #[serde(default = "default_brief_words")]
    pub brief_words: usize,
    /// Points subtracted from brief texts after clamping
    #[serde(default = "default_brief_adjustment")]
    pub brief_adjustment: u8,
    /// Word count above which the long-text adjustment applies
    #[serde(default = "default_long_words")]
    pub long_words: usize,
    /// Points added to long texts after clamping
    #[serde(default = "default_long_adjustment")]
    pub long_adjustment: u8,
    /// Whether generic boilerplate phrasing feeds the suspicion score
    #[serde(default)]
    pub generic_phrases_feed_suspicion: bool,
}

const fn default_structure_penalty() -> u32 {
    20
}
const fn default_short_text_penalty() -> u32 {
    15
}
const fn default_short_text_words() -> usize {
    1000
}
const fn default_language_weight() -> f64 {
    0.8
}
const fn default_citation_issue_penalty() -> u32 {
    15
}
const fn default_citation_issue_min() -> usize {
    2
}
const fn default_no_citation_penalty() -> u32 {
    10
}
const fn default_no_citation_chars() -> usize {
    2000
}
const fn default_marker_bonus() -> u32 {
    20
}
const fn default_marker_bonus_min() -> usize {
    8
}
const fn default_citation_bonus() -> u32 {
    10
}
const fn default_citation_bonus_min() -> usize {
    15
}
const fn default_naturalness_bonus() -> u32 {
    15
}
const fn default_naturalness_bonus_min() -> u32 {
    80
}
const fn default_score_floor() -> u8 {
    5
}
const fn default_score_ceiling() -> u8 {
    95
}
const fn default_brief_words() -> usize {
    100
}
const fn default_brief_adjustment() -> u8 {
    10
}
const fn default_long_words() -> usize {
    2000
}
const fn default_long_adjustment() -> u8 {
    5
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            structure_penalty: default_structure_penalty(),
            short_text_penalty: default_short_text_penalty(),
            short_text_words: default_short_text_words(),
            language_weight: default_language_weight(),
            citation_issue_penalty: default_citation_issue_penalty(),
            citation_issue_min: default_citation_issue_min(),
            no_citation_penalty: default_no_citation_penalty(),
            no_citation_chars: default_no_citation_chars(),
            marker_bonus: default_marker_bonus(),
            marker_bonus_min: default_marker_bonus_min(),
            citation_bonus: default_citation_bonus(),
            citation_bonus_min: default_citation_bonus_min(),
            naturalness_bonus: default_naturalness_bonus(),
            naturalness_bonus_min: default_naturalness_bonus_min(),
            score_floor: default_score_floor(),
            score_ceiling: default_score_ceiling(),
            brief_words: default_brief_words(),
            brief_adjustment: default_brief_adjustment(),
            long_words: default_long_words(),
            long_adjustment: default_long_adjustment(),
            generic_phrases_feed_suspicion: false,
        }
    }
}

/// Weights for blending the local score with the external judgment
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BlendConfig {
    /// Weight of the local heuristic score
    #[serde(default = "default_local_weight")]
    pub local_weight: f64,
    /// Weight of the external fake-probability contribution
    #[serde(default = "default_external_weight")]
    pub external_weight: f64,
}

const fn default_local_weight() -> f64 {
    0.6
}
const fn default_external_weight() -> f64 {
    0.4
}

impl Default for BlendConfig {
    fn default() -> Self {
        Self {
            local_weight: default_local_weight(),
            external_weight: default_external_weight(),
        }
    }
}

/// External judgment provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JudgeConfig {
    /// Chat-completions endpoint of the provider
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// API key; falls back to `VERIPAPER_API_KEY` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Model identifier sent to the provider
    #[serde(default = "default_model")]
    pub model: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Characters of text sent for judgment
    #[serde(default = "default_excerpt_limit")]
    pub excerpt_limit: usize,
}

fn default_endpoint() -> String {
    "https://api.groq.com/openai/v1/chat/completions".to_string()
}

fn default_model() -> String {
    "llama-3.1-8b-instant".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

const fn default_excerpt_limit() -> usize {
    1200
}

impl Default for JudgeConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: None,
            model: default_model(),
            timeout_secs: default_timeout_secs(),
            excerpt_limit: default_excerpt_limit(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from an optional TOML file
    ///
    /// Missing file (when no explicit path was given) means defaults. The
    /// API key falls back to the environment when the file does not set
    /// one. The result is validated before being returned.
    pub fn load(path: Option<&Path>) -> Result<Self, VeripaperError> {
        let mut config = match path {
            Some(p) => {
                let content = fs::read_to_string(p).map_err(|source| {
                    VeripaperError::ConfigRead {
                        path: p.to_path_buf(),
                        source,
                    }
                })?;
                toml::from_str(&content).map_err(|source| VeripaperError::ConfigParse {
                    path: p.to_path_buf(),
                    source,
                })?
            },
            None => Self::default(),
        };

        if config.judge.api_key.is_none()
            && let Ok(key) = std::env::var(API_KEY_ENV)
            && !key.is_empty()
        {
            config.judge.api_key = Some(key);
        }

        config.validate()?;
        Ok(config)
    }

    /// Check engine invariants on the configured values
    pub fn validate(&self) -> Result<(), VeripaperError> {
        if self.scoring.score_floor >= self.scoring.score_ceiling {
            return Err(VeripaperError::InvalidConfig(format!(
                "score floor {} must be below ceiling {}",
                self.scoring.score_floor, self.scoring.score_ceiling
            )));
        }
        if self.scoring.language_weight < 0.0 {
            return Err(VeripaperError::InvalidConfig(
                "language weight must not be negative".to_string(),
            ));
        }
        if self.blend.local_weight <= 0.0 || self.blend.external_weight < 0.0 {
            return Err(VeripaperError::InvalidConfig(
                "blend weights must be positive".to_string(),
            ));
        }
        if self.judge.timeout_secs == 0 {
            return Err(VeripaperError::InvalidConfig(
                "judge timeout must be at least one second".to_string(),
            ));
        }
        if self.judge.excerpt_limit == 0 {
            return Err(VeripaperError::InvalidConfig(
                "judge excerpt limit must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
