//! Shared test utilities
//!
//! Mock judgment providers and text builders used across the unit suites.

use veripaper::judge::JudgmentProvider;

/// Mock provider returning a fixed reply
pub struct MockProvider {
    reply: String,
}

impl MockProvider {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
        }
    }
}

impl JudgmentProvider for MockProvider {
    fn complete(&self, _prompt: &str) -> anyhow::Result<String> {
        Ok(self.reply.clone())
    }
}

/// Mock provider that always fails, standing in for timeouts and
/// transport errors
pub struct UnreachableProvider;

impl JudgmentProvider for UnreachableProvider {
    fn complete(&self, _prompt: &str) -> anyhow::Result<String> {
        anyhow::bail!("connection timed out")
    }
}

/// A short fabricated-looking text: one perfect-results claim and three
/// impossible p-values, no academic structure, under 200 words
pub fn suspicious_short_text() -> String {
    "Our system achieved 100% accuracy across the full benchmark. \
     Statistical testing produced p < 0.0001 for the first cohort. \
     Another pass gave p < 0.0001 on held out data. \
     A final check returned p < 0.0001 under strict settings."
        .to_string()
}

/// A well-structured paper-like text: all seven canonical sections with
/// substantial content, around 1600 words, ten parenthetical citations,
/// and no red-flag patterns
pub fn well_structured_paper() -> String {
    let mut text = String::new();
    let sections = [
        "Abstract",
        "Introduction",
        "Methodology",
        "Results",
        "Discussion",
        "Conclusion",
        "References",
    ];

    let mut k = 0;
    for section in sections {
        text.push_str(section);
        text.push_str(". ");
        for _ in 0..22 {
            text.push_str(&format!(
                "Topic{k} data from cohort{k} indicate variation across block{k} during window{k}. "
            ));
            k += 1;
        }
    }

    for _ in 0..10 {
        text.push_str("Cohort outcomes align with prior observations (Author, 2023). ");
    }

    text
}
