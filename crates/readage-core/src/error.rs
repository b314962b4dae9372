//! Error types for readage-core.

use thiserror::Error;

use crate::scores::Metric;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur during scoring.
///
/// The extractor itself has no error conditions; scoring fails only when a
/// formula's divisor would be zero. The condition is recoverable — callers
/// decide whether one unavailable metric aborts the run or is reported
/// alongside the metrics that did compute.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    /// A formula's required count is zero, so the score is undefined.
    #[error("{metric} unavailable: {missing} count is zero")]
    MetricUnavailable {
        /// The metric that could not be computed.
        metric: Metric,
        /// Which count was zero ("word" or "sentence").
        missing: &'static str,
    },
}

/// Result type alias using [`ScoreError`].
pub type ScoreResult<T> = Result<T, ScoreError>;
