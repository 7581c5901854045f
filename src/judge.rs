//! External judgment adapter
//!
//! Obtains a second opinion from an external LLM judgment provider without
//! making the verdict depend on its availability. The provider reply must
//! contain a line of the literal form `AUTHENTICITY SCORE: <integer>`;
//! anything else is treated as "no signal". No failure leaves this module:
//! transport errors, timeouts, empty bodies and unparseable replies all
//! degrade to `None`.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use crate::config::JudgeConfig;

/// A source of free-form judgment text for a prompt
///
/// Implementations cover the real HTTP-backed provider and test doubles.
/// Any error return is interpreted as "provider unavailable".
pub trait JudgmentProvider {
    /// Send a prompt and return the provider's raw reply text
    fn complete(&self, prompt: &str) -> anyhow::Result<String>;
}

static SCORE_RE: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(r"authenticity\s+score:\s*(\d+)")
        .case_insensitive(true)
        .build()
        .expect("invalid score pattern")
});

/// Build the fixed judgment prompt for a text excerpt
#[must_use]
pub fn build_prompt(excerpt: &str) -> String {
    format!(
        "As an expert in academic fraud detection, analyze this research text \
         for authenticity.\n\n\
         Text to analyze:\n{excerpt}\n\n\
         Provide analysis in this format:\n\
         AUTHENTICITY SCORE: [0-100 where 0=completely fake, 100=completely authentic]\n\
         RED FLAGS: [List specific issues found]\n\
         ASSESSMENT: [Brief overall assessment]\n\n\
         Focus on:\n\
         - Statistical impossibilities or inconsistencies\n\
         - Methodological vagueness or impossibilities\n\
         - Citation issues or missing references\n\
         - Language patterns typical of fabricated research\n\
         - Structural problems in academic writing"
    )
}

/// Extract the authenticity score from a provider reply
///
/// Strict mini-protocol: the literal label (case-insensitive, tolerating
/// surrounding whitespace) followed by an integer in 0..=100. Absent,
/// malformed or out-of-range values yield `None` rather than a guess.
#[must_use]
pub fn parse_score(reply: &str) -> Option<u8> {
    let captures = SCORE_RE.captures(reply)?;
    let value: u32 = captures.get(1)?.as_str().parse().ok()?;
    if value > 100 {
        return None;
    }
    Some(value as u8)
}

/// Request an external judgment, returning a fake-probability contribution
///
/// Truncates the text to the configured excerpt bound, prompts the
/// provider, and converts the parsed authenticity score into fake space
/// (`100 - score`). Returns `None` on any provider failure or unparseable
/// reply; never propagates an error.
#[must_use]
pub fn request_judgment(
    provider: &dyn JudgmentProvider,
    text: &str,
    config: &JudgeConfig,
) -> Option<u8> {
    let excerpt: String = text.chars().take(config.excerpt_limit).collect();
    let prompt = build_prompt(&excerpt);

    let reply = match provider.complete(&prompt) {
        Ok(reply) => reply,
        Err(e) => {
            log::warn!("external judgment unavailable: {e}");
            return None;
        },
    };

    match parse_score(&reply) {
        Some(score) => Some(100 - score),
        None => {
            log::warn!("external judgment reply had no parseable score");
            None
        },
    }
}

#[cfg(feature = "llm")]
pub use http::HttpJudge;

#[cfg(feature = "llm")]
mod http {
    //! HTTP-backed judgment provider
    //!
    //! Talks to an OpenAI-compatible chat-completions endpoint. The request
    //! carries an explicit timeout; expiry surfaces as an ordinary error
    //! that the adapter converts to "no signal".

    use std::time::Duration;

    use anyhow::{Context, anyhow, bail};

    use super::JudgmentProvider;
    use crate::config::JudgeConfig;

    /// Judgment provider backed by an OpenAI-compatible HTTP endpoint
    #[derive(Debug)]
    pub struct HttpJudge {
        endpoint: String,
        api_key: String,
        model: String,
        timeout: Duration,
        runtime: tokio::runtime::Runtime,
    }

    impl HttpJudge {
        /// Build a provider from config; requires an API key
        pub fn from_config(config: &JudgeConfig) -> anyhow::Result<Self> {
            let api_key = config
                .api_key
                .clone()
                .ok_or_else(|| anyhow!("no judge API key configured"))?;
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .context("failed to build judge runtime")?;
            Ok(Self {
                endpoint: config.endpoint.clone(),
                api_key,
                model: config.model.clone(),
                timeout: Duration::from_secs(config.timeout_secs),
                runtime,
            })
        }

        async fn post(&self, prompt: &str) -> anyhow::Result<String> {
            let client = reqwest::Client::builder()
                .timeout(self.timeout)
                .build()
                .context("failed to build HTTP client")?;

            let body = serde_json::json!({
                "model": self.model,
                "messages": [{ "role": "user", "content": prompt }],
                "temperature": 0.3,
                "max_tokens": 400,
            });

            let response = client
                .post(&self.endpoint)
                .bearer_auth(&self.api_key)
                .json(&body)
                .send()
                .await
                .context("judgment request failed")?;

            if !response.status().is_success() {
                bail!("judgment provider returned status {}", response.status());
            }

            let payload: serde_json::Value =
                response.json().await.context("judgment response was not JSON")?;
            let content = payload["choices"][0]["message"]["content"]
                .as_str()
                .ok_or_else(|| anyhow!("judgment response had no content"))?;
            if content.trim().is_empty() {
                bail!("judgment response was empty");
            }
            Ok(content.to_string())
        }
    }

    impl JudgmentProvider for HttpJudge {
        fn complete(&self, prompt: &str) -> anyhow::Result<String> {
            self.runtime.block_on(self.post(prompt))
        }
    }
}
