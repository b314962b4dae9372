//! Core library for readage.
//!
//! This crate computes classic readability metrics for a block of text and
//! maps each score to an estimated reader age. It is used by the `readage`
//! CLI and any downstream consumers.
//!
//! # Modules
//!
//! - [`stats`] - Single-pass text statistics extraction
//! - [`syllables`] - The heuristic syllable counter the formulas depend on
//! - [`scores`] - The four formulas and the score-to-age mapping
//! - [`report`] - Serializable score reports
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use readage_core::{Metric, analyze, score, score_to_age};
//!
//! let stats = analyze("The cat sat. It was happy!");
//! assert_eq!(stats.words, 6);
//!
//! let ari = score(&stats, Metric::Ari).expect("non-empty text");
//! println!("ARI {ari:.2}, about {}-year-olds", score_to_age(ari));
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod report;
pub mod scores;
pub mod stats;
pub mod syllables;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{ConfigError, ConfigResult, ScoreError, ScoreResult};
pub use report::{ScoreReport, ScoreSummary, score_selection};
pub use scores::{Metric, Selection, average_age, score, score_to_age};
pub use stats::{TextStatistics, analyze};

/// Default cap on input size (5 MiB) enforced by callers that read files.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
