//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// Write `content` to a file inside a fresh temp dir, returning both.
fn fixture(content: &str) -> (TempDir, std::path::PathBuf) {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("input.txt");
    fs::write(&path, content).unwrap();
    (tmp, path)
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("Options:"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

// =============================================================================
// Score Command
// =============================================================================

#[test]
fn score_reports_counts_and_all_metrics() {
    let (_tmp, path) = fixture("The cat sat. It was happy!\n");

    cmd()
        .arg("score")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Words: 6"))
        .stdout(predicate::str::contains("Sentences: 2"))
        .stdout(predicate::str::contains("Characters: 21"))
        .stdout(predicate::str::contains("Syllables: 7"))
        .stdout(predicate::str::contains("Polysyllables: 0"))
        .stdout(predicate::str::contains("Automated Readability Index"))
        .stdout(predicate::str::contains("Flesch–Kincaid readability tests"))
        .stdout(predicate::str::contains("Simple Measure of Gobbledygook"))
        .stdout(predicate::str::contains("Coleman–Liau index"))
        .stdout(predicate::str::contains(
            "This text should be understood in average by",
        ));
}

#[test]
fn score_json_outputs_valid_summary() {
    let (_tmp, path) = fixture("The cat sat. It was happy!\n");

    let output = cmd()
        .arg("score")
        .arg(&path)
        .arg("--json")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("score --json should output valid JSON");

    assert_eq!(json["statistics"]["words"], 6);
    assert_eq!(json["statistics"]["sentences"], 2);
    assert_eq!(json["scores"].as_array().unwrap().len(), 4);
    assert!(json["average_age"].is_f64());
}

#[test]
fn score_single_metric_reports_only_that_metric() {
    let (_tmp, path) = fixture("The cat sat. It was happy!\n");

    cmd()
        .arg("score")
        .arg(&path)
        .arg("--metric")
        .arg("smog")
        .assert()
        .success()
        .stdout(predicate::str::contains("Simple Measure of Gobbledygook"))
        .stdout(predicate::str::contains("Coleman–Liau index").not())
        .stdout(predicate::str::contains("This text should be understood").not());
}

#[test]
fn score_empty_file_smog_still_computes() {
    let (_tmp, path) = fixture("");

    // the implicit final sentence keeps SMOG defined: 3.1291, age 9
    cmd()
        .arg("score")
        .arg(&path)
        .arg("--metric")
        .arg("smog")
        .assert()
        .success()
        .stdout(predicate::str::contains("3.13"))
        .stdout(predicate::str::contains("about 9-year-olds"));
}

#[test]
fn score_empty_file_word_metric_fails() {
    let (_tmp, path) = fixture("");

    cmd()
        .arg("score")
        .arg(&path)
        .arg("--metric")
        .arg("ari")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unavailable"));
}

#[test]
fn score_empty_file_all_reports_partial_without_average() {
    let (_tmp, path) = fixture("");

    cmd()
        .arg("score")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Simple Measure of Gobbledygook"))
        .stdout(predicate::str::contains("unavailable"))
        .stdout(predicate::str::contains("This text should be understood").not());
}

#[test]
fn score_max_age_gate_fails_complex_text() {
    let (_tmp, path) = fixture(
        "The implementation of the comprehensive organizational restructuring \
         initiative necessitated the establishment of interdepartmental \
         communication protocols.\n",
    );

    cmd()
        .arg("score")
        .arg(&path)
        .arg("--max-age")
        .arg("5")
        .assert()
        .failure()
        .stderr(predicate::str::contains("max: 5"));
}

#[test]
fn score_max_age_gate_passes_with_headroom() {
    let (_tmp, path) = fixture("The cat sat. It was happy!\n");

    cmd()
        .arg("score")
        .arg(&path)
        .arg("--max-age")
        .arg("100")
        .assert()
        .success()
        .stdout(predicate::str::contains("PASS:"));
}

#[test]
fn score_missing_file_errors() {
    cmd()
        .arg("score")
        .arg("no/such/file.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

// =============================================================================
// Stats Command
// =============================================================================

#[test]
fn stats_counts_unpunctuated_text_as_one_sentence() {
    let (_tmp, path) = fixture("hello world");

    cmd()
        .arg("stats")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Words: 2"))
        .stdout(predicate::str::contains("Sentences: 1"));
}

#[test]
fn stats_json_outputs_valid_statistics() {
    let (_tmp, path) = fixture("Numbers travel as JSON. Fields stay snake case!");

    let output = cmd()
        .arg("stats")
        .arg(&path)
        .arg("--json")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("stats --json should output valid JSON");

    assert_eq!(json["words"], 8);
    assert_eq!(json["sentences"], 2);
    assert!(json["syllables"].as_u64().unwrap() >= 8);
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_shows_package_name_and_version() {
    cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_outputs_valid_json() {
    let output = cmd().arg("info").arg("--json").assert().success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("info --json should output valid JSON");

    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn config_file_sets_default_metric() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("input.txt");
    fs::write(&input, "The cat sat. It was happy!\n").unwrap();
    let config = tmp.path().join("config.toml");
    fs::write(&config, "metric = \"cl\"\n").unwrap();

    cmd()
        .arg("--config")
        .arg(&config)
        .arg("score")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Coleman–Liau index"))
        .stdout(predicate::str::contains("Automated Readability Index").not());
}

#[test]
fn cli_metric_overrides_config_file() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("input.txt");
    fs::write(&input, "The cat sat. It was happy!\n").unwrap();
    let config = tmp.path().join("config.toml");
    fs::write(&config, "metric = \"cl\"\n").unwrap();

    cmd()
        .arg("--config")
        .arg(&config)
        .arg("score")
        .arg(&input)
        .arg("--metric")
        .arg("ari")
        .assert()
        .success()
        .stdout(predicate::str::contains("Automated Readability Index"))
        .stdout(predicate::str::contains("Coleman–Liau index").not());
}
