//! veripaper - heuristic authenticity scoring for academic-style text
//!
//! This library estimates the probability that a piece of academic-style
//! text was fabricated or machine-generated. It combines a static registry
//! of fabrication-indicator patterns with structural, citation and language
//! analyses, and can optionally blend in a second opinion from an external
//! LLM judgment provider.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod analysis;
pub mod config;
pub mod engine;
pub mod error;
pub mod judge;
pub mod models;
pub mod output;
pub mod registry;
pub mod scoring;
