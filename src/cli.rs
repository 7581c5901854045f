//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use veripaper::output::OutputMode;

/// veripaper - authenticity scoring for academic text
#[derive(Parser, Debug)]
#[command(
    name = "veripaper",
    version,
    about = "Heuristic authenticity scoring for academic-style text",
    long_about = "Score a document for signs of fabrication or AI generation.\n\n\
                  Combines pattern matching, structural and language analysis\n\
                  into a bounded fake-probability estimate, optionally blended\n\
                  with an external LLM judgment."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze a text for authenticity
    Analyze {
        /// File to analyze (plain text)
        file: Option<PathBuf>,

        /// Read the text from stdin instead of a file
        #[arg(long)]
        stdin: bool,

        /// Consult the external judgment provider
        #[arg(long)]
        judge: bool,

        /// Path to a veripaper.toml config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// List the fabrication-indicator patterns
    Patterns,

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Analyze {
            file,
            stdin,
            judge,
            config,
        }) => commands::analyze(file.as_deref(), stdin, judge, config.as_deref(), output_mode),
        Some(Command::Patterns) => commands::patterns(output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("veripaper v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("veripaper v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'veripaper --help' for usage");
                println!("Run 'veripaper analyze <file>' to score a document");
            }
            Ok(())
        },
    }
}
