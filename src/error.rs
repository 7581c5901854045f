//! Library error taxonomy
//!
//! Analysis paths never fail for string input; errors here only cover
//! configuration loading, which is validated once at startup.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading or validating configuration
#[derive(Debug, Error)]
pub enum VeripaperError {
    /// The config file exists but could not be read
    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        /// Path that failed to read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The config file is not valid TOML for the expected schema
    #[error("invalid config file {path}: {source}")]
    ConfigParse {
        /// Path that failed to parse
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },

    /// A configuration value violates an engine invariant
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
