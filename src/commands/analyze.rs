//! Analyze command - score a document for authenticity

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, bail};

use veripaper::config::EngineConfig;
use veripaper::engine::Engine;
use veripaper::judge::JudgmentProvider;
use veripaper::output::{self, OutputMode};

/// Analyze a file or stdin and render the verdict
pub fn analyze(
    file: Option<&Path>,
    use_stdin: bool,
    use_judge: bool,
    config_path: Option<&Path>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let config = EngineConfig::load(config_path)?;

    let (text, file_name) = if use_stdin {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read from stdin")?;
        (text, None)
    } else if let Some(path) = file {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let name = path.file_name().map(|n| n.to_string_lossy().to_string());
        (text, name)
    } else {
        bail!("provide a file to analyze, or --stdin");
    };

    let provider = build_provider(use_judge, &config);
    let engine = Engine::new(config);
    let verdict = engine.verify(&text, file_name.as_deref(), provider.as_deref());

    output::render_verdict(&verdict, mode);
    Ok(())
}

#[cfg(feature = "llm")]
fn build_provider(
    use_judge: bool,
    config: &EngineConfig,
) -> Option<Box<dyn JudgmentProvider>> {
    if !use_judge {
        return None;
    }
    match veripaper::judge::HttpJudge::from_config(&config.judge) {
        Ok(judge) => Some(Box::new(judge)),
        Err(e) => {
            log::warn!("external judgment disabled: {e}");
            None
        },
    }
}

#[cfg(not(feature = "llm"))]
fn build_provider(
    use_judge: bool,
    _config: &EngineConfig,
) -> Option<Box<dyn JudgmentProvider>> {
    if use_judge {
        log::warn!("built without the llm feature; falling back to local analysis");
    }
    None
}
