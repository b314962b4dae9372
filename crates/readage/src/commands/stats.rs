//! Stats command — raw text statistics without scoring.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use readage_core::stats::analyze;

use super::read_input_file;

/// Arguments for the `stats` subcommand.
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,
}

/// Print the raw statistics the readability formulas consume.
#[instrument(name = "cmd_stats", skip_all, fields(file = %args.file))]
pub fn cmd_stats(
    args: StatsArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing stats command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let stats = analyze(&content);

    if global_json {
        println!(
            "{}",
            serde_json::to_string_pretty(&stats)
                .with_context(|| format!("failed to serialize statistics for {}", args.file))?
        );
    } else {
        println!("{}", args.file.bold());
        println!();
        println!("Words: {}", stats.words);
        println!("Sentences: {}", stats.sentences);
        println!("Characters: {}", stats.characters);
        println!("Syllables: {}", stats.syllables);
        println!("Polysyllables: {}", stats.polysyllables);
    }

    Ok(())
}
