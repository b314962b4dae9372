//! Readability formulas and the score-to-age mapping.
//!
//! Four pure functions over [`TextStatistics`]:
//!
//! - ARI: `4.71 * (characters/words) + 0.5 * (words/sentences) - 21.43`
//! - Flesch–Kincaid: `0.39 * (words/sentences) + 11.8 * (syllables/words) - 15.59`
//! - SMOG: `1.043 * sqrt(polysyllables * 30/sentences) + 3.1291`
//! - Coleman–Liau: `5.88 * (characters/words) - 29.6 * (sentences/words) - 15.8`
//!
//! Each formula declares a precondition on its divisors and reports
//! [`ScoreError::MetricUnavailable`] instead of dividing by zero.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{ScoreError, ScoreResult};
use crate::stats::TextStatistics;

/// A readability metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Metric {
    /// Automated Readability Index.
    Ari,
    /// Flesch–Kincaid grade-level test.
    FleschKincaid,
    /// Simple Measure of Gobbledygook.
    Smog,
    /// Coleman–Liau index.
    ColemanLiau,
}

impl Metric {
    /// All metrics, in reporting order.
    pub const ALL: [Self; 4] = [
        Self::Ari,
        Self::FleschKincaid,
        Self::Smog,
        Self::ColemanLiau,
    ];

    /// Short uppercase tag ("ARI", "FK", "SMOG", "CL").
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ari => "ARI",
            Self::FleschKincaid => "FK",
            Self::Smog => "SMOG",
            Self::ColemanLiau => "CL",
        }
    }

    /// Full display name, as printed in reports.
    pub const fn full_name(&self) -> &'static str {
        match self {
            Self::Ari => "Automated Readability Index",
            Self::FleschKincaid => "Flesch–Kincaid readability tests",
            Self::Smog => "Simple Measure of Gobbledygook",
            Self::ColemanLiau => "Coleman–Liau index",
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which metric(s) a caller wants computed.
///
/// `All` expands to the four metrics plus the average-age aggregation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Selection {
    /// Automated Readability Index only.
    Ari,
    /// Flesch–Kincaid only.
    Fk,
    /// SMOG only.
    Smog,
    /// Coleman–Liau only.
    Cl,
    /// Every metric, with an average-age summary.
    #[default]
    All,
}

impl Selection {
    /// The metrics this selection expands to.
    pub const fn metrics(&self) -> &'static [Metric] {
        match self {
            Self::Ari => &[Metric::Ari],
            Self::Fk => &[Metric::FleschKincaid],
            Self::Smog => &[Metric::Smog],
            Self::Cl => &[Metric::ColemanLiau],
            Self::All => &Metric::ALL,
        }
    }

    /// Whether this selection asks for every metric.
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Lowercase tag, matching the config/CLI spelling.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ari => "ari",
            Self::Fk => "fk",
            Self::Smog => "smog",
            Self::Cl => "cl",
            Self::All => "all",
        }
    }
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compute a metric's raw score.
///
/// Counts are promoted to `f64` before any division. Returns
/// [`ScoreError::MetricUnavailable`] when a divisor would be zero.
#[tracing::instrument(skip(stats))]
pub fn score(stats: &TextStatistics, metric: Metric) -> ScoreResult<f64> {
    let characters = stats.characters as f64;
    let words = stats.words as f64;
    let sentences = stats.sentences as f64;
    let syllables = stats.syllables as f64;
    let polysyllables = stats.polysyllables as f64;

    match metric {
        Metric::Ari => {
            require_nonzero(metric, "word", stats.words)?;
            require_nonzero(metric, "sentence", stats.sentences)?;
            Ok(4.71f64.mul_add(characters / words, 0.5 * (words / sentences)) - 21.43)
        }
        Metric::FleschKincaid => {
            require_nonzero(metric, "word", stats.words)?;
            require_nonzero(metric, "sentence", stats.sentences)?;
            Ok(0.39f64.mul_add(words / sentences, 11.8 * (syllables / words)) - 15.59)
        }
        Metric::Smog => {
            require_nonzero(metric, "sentence", stats.sentences)?;
            Ok(1.043f64.mul_add((polysyllables * (30.0 / sentences)).sqrt(), 3.1291))
        }
        Metric::ColemanLiau => {
            require_nonzero(metric, "word", stats.words)?;
            Ok(5.88f64.mul_add(characters / words, -(29.6 * (sentences / words))) - 15.8)
        }
    }
}

fn require_nonzero(metric: Metric, missing: &'static str, count: usize) -> ScoreResult<()> {
    if count == 0 {
        return Err(ScoreError::MetricUnavailable { metric, missing });
    }
    Ok(())
}

/// Map a raw score to an estimated reader age.
///
/// The score is rounded up to the nearest integer. A ceiling of 14 maps
/// straight to 22 — a deliberate discontinuity carried over from the
/// published age tables — and every other ceiling `k` maps to `k + 5`.
pub fn score_to_age(score: f64) -> i64 {
    let rounded = score.ceil() as i64;
    if rounded == 14 { 22 } else { rounded + 5 }
}

/// Arithmetic mean of estimated ages, unrounded.
pub fn average_age(ages: &[i64]) -> f64 {
    if ages.is_empty() {
        return 0.0;
    }
    ages.iter().sum::<i64>() as f64 / ages.len() as f64
}
