//! Output formatting for human and JSON modes
//!
//! Renders verdicts either as human-readable text or machine-parseable
//! JSON. The JSON form is the verdict serialized as-is.

use colored::Colorize;

use crate::models::{AuthenticityVerdict, Severity};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Render a verdict based on output mode
pub fn render_verdict(verdict: &AuthenticityVerdict, mode: OutputMode) {
    match mode {
        OutputMode::Human => render_human(verdict),
        OutputMode::Json => render_json(verdict),
    }
}

fn probability_banner(verdict: &AuthenticityVerdict) -> String {
    let headline = format!(
        "Fake probability: {}% ({} confidence)",
        verdict.fake_probability, verdict.confidence
    );
    if verdict.is_likely_fake {
        headline.red().bold().to_string()
    } else if verdict.fake_probability > 40 {
        headline.yellow().bold().to_string()
    } else {
        headline.green().bold().to_string()
    }
}

fn severity_tag(severity: Severity) -> String {
    let tag = format!("[{severity}]");
    match severity {
        Severity::High => tag.red().to_string(),
        Severity::Medium => tag.yellow().to_string(),
        Severity::Low => tag.normal().to_string(),
    }
}

fn render_human(verdict: &AuthenticityVerdict) {
    if let Some(name) = &verdict.file_name {
        println!("Analyzing: {name}\n");
    }

    println!("{}", probability_banner(verdict));
    println!(
        "Method: {} | Quality: {} | Likely fake: {}\n",
        verdict.analysis_method,
        verdict.quality_label,
        if verdict.is_likely_fake { "yes" } else { "no" }
    );

    let s = &verdict.structural_profile;
    println!(
        "Structure: {}/{} sections, {} words, {} sentences",
        s.total_sections_found,
        s.found_sections.len(),
        s.word_count,
        s.sentence_count
    );
    if !s.missing_sections.is_empty() {
        println!("  Missing: {}", s.missing_sections.join(", "));
    }

    let c = &verdict.citation_profile;
    println!(
        "Citations: {} total (dominant format: {})",
        c.total_citations, c.dominant_format_count
    );
    for issue in &c.issues {
        println!("  {issue}");
    }

    let l = &verdict.language_profile;
    println!(
        "Language: naturalness {}, diversity {:.2}, avg sentence {:.1} words\n",
        l.naturalness, l.vocabulary_diversity, l.avg_sentence_length
    );

    if verdict.detected_issues.is_empty() {
        println!("No fabrication-indicator patterns matched.");
    } else {
        println!("Detected issues:");
        for issue in &verdict.detected_issues {
            println!(
                "  {} {} ({} match(es))",
                severity_tag(issue.severity),
                issue.kind,
                issue.count
            );
            println!("          {}", issue.description);
            if !issue.examples.is_empty() {
                println!("          e.g. {}", issue.examples.join(" | "));
            }
        }
    }

    println!("\nRecommendations:");
    for rec in &verdict.recommendations {
        println!("  - {rec}");
    }
}

fn render_json(verdict: &AuthenticityVerdict) {
    println!("{}", serde_json::to_string_pretty(verdict).unwrap_or_default());
}
