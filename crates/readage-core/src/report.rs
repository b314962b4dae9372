//! Report structs for score output.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for use
//! in CLI JSON output. Reports are computed on demand from a
//! [`TextStatistics`] value and never cached.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ScoreResult;
use crate::scores::{self, Metric, Selection};
use crate::stats::TextStatistics;

/// One metric's result: raw score plus estimated reader age.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ScoreReport {
    /// The metric that produced this report.
    pub metric: Metric,
    /// Full display name of the metric.
    pub name: String,
    /// Raw floating-point score.
    pub score: f64,
    /// Estimated reader age derived from the score.
    pub age: i64,
}

impl ScoreReport {
    /// Score one metric, propagating its precondition failure.
    pub fn compute(stats: &TextStatistics, metric: Metric) -> ScoreResult<Self> {
        let score = scores::score(stats, metric)?;
        Ok(Self {
            metric,
            name: metric.full_name().to_string(),
            score,
            age: scores::score_to_age(score),
        })
    }
}

/// Combined result of a scoring run.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ScoreSummary {
    /// The statistics every score was derived from.
    pub statistics: TextStatistics,
    /// Reports for the metrics that could be computed.
    pub scores: Vec<ScoreReport>,
    /// Messages for metrics whose precondition failed.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unavailable: Vec<String>,
    /// Mean of the four ages. Present only when every metric was requested
    /// and every metric computed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_age: Option<f64>,
    /// Maximum acceptable reader age (if provided).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_age: Option<i64>,
    /// Whether any estimated age exceeds the maximum.
    pub over_max: bool,
}

/// Score every metric in `selection` against `stats`.
///
/// A metric whose precondition fails is reported in `unavailable` without
/// aborting the rest. The average age is filled in only for [`Selection::All`]
/// with all four metrics computed — a partial run has no meaningful mean.
/// `max_age`, when given, marks the summary `over_max` if any estimated age
/// exceeds it.
#[tracing::instrument(skip(stats))]
pub fn score_selection(
    stats: &TextStatistics,
    selection: Selection,
    max_age: Option<i64>,
) -> ScoreSummary {
    let mut scores = Vec::new();
    let mut unavailable = Vec::new();

    for &metric in selection.metrics() {
        match ScoreReport::compute(stats, metric) {
            Ok(report) => scores.push(report),
            Err(err) => {
                tracing::debug!(metric = %metric, error = %err, "metric unavailable");
                unavailable.push(err.to_string());
            }
        }
    }

    let average_age = (selection.is_all() && scores.len() == Metric::ALL.len()).then(|| {
        let ages: Vec<i64> = scores.iter().map(|r| r.age).collect();
        scores::average_age(&ages)
    });

    let over_max = max_age.is_some_and(|max| scores.iter().any(|r| r.age > max));

    ScoreSummary {
        statistics: *stats,
        scores,
        unavailable,
        average_age,
        max_age,
        over_max,
    }
}
