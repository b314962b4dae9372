//! Score command — readability metrics and reader-age estimation.

use anyhow::{Context, bail};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use readage_core::report::{ScoreSummary, score_selection};
use readage_core::scores::Selection;
use readage_core::stats::analyze;

use super::read_input_file;

/// Arguments for the `score` subcommand.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,

    /// Metric to compute (defaults to all).
    #[arg(long, value_enum)]
    pub metric: Option<Selection>,

    /// Maximum acceptable estimated reader age.
    #[arg(long)]
    pub max_age: Option<i64>,
}

/// Score a file's readability and report estimated reader ages.
#[instrument(name = "cmd_score", skip_all, fields(file = %args.file))]
pub fn cmd_score(
    args: ScoreArgs,
    global_json: bool,
    config_metric: Option<Selection>,
    config_max_age: Option<i64>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, metric = ?args.metric, max_age = ?args.max_age, "executing score command");

    let content = read_input_file(&args.file, max_input_bytes)?;

    let selection = args.metric.or(config_metric).unwrap_or_default();
    let max_age = args.max_age.or(config_max_age);

    let stats = analyze(&content);
    let summary = score_selection(&stats, selection, max_age);

    if summary.scores.is_empty() {
        // a single requested metric whose precondition failed
        bail!(
            "cannot score {}: {}",
            args.file,
            summary.unavailable.join("; "),
        );
    }

    if global_json {
        println!(
            "{}",
            serde_json::to_string_pretty(&summary)
                .with_context(|| format!("failed to serialize report for {}", args.file))?
        );
        return Ok(());
    }

    print_summary(&args.file, &summary);

    if summary.over_max {
        let worst = summary.scores.iter().map(|r| r.age).max().unwrap_or(0);
        let max = summary.max_age.unwrap_or(0);
        bail!(
            "{} estimates {}-year-old readers (max: {}). Simplify sentences or shorten words.",
            args.file,
            worst,
            max,
        );
    } else if let Some(max) = summary.max_age {
        println!(
            "\n{} every estimated age is within {} years",
            "PASS:".green(),
            max,
        );
    }

    Ok(())
}

/// Text output: counts block, one line per metric, optional average.
fn print_summary(file: &Utf8Path, summary: &ScoreSummary) {
    let stats = &summary.statistics;

    println!("{}", file.bold());
    println!();
    println!("Words: {}", stats.words);
    println!("Sentences: {}", stats.sentences);
    println!("Characters: {}", stats.characters);
    println!("Syllables: {}", stats.syllables);
    println!("Polysyllables: {}", stats.polysyllables);
    println!();

    for report in &summary.scores {
        println!(
            "{}: {:.2} (about {}-year-olds).",
            report.name.cyan(),
            report.score,
            report.age,
        );
    }
    for message in &summary.unavailable {
        println!("{}", message.yellow());
    }

    if let Some(avg) = summary.average_age {
        println!();
        println!("This text should be understood in average by {avg}-year-olds.");
    }
}
