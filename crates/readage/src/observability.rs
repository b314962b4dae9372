//! Logging and tracing initialization.
//!
//! Human-readable events go to stderr, filtered by `--quiet`/`--verbose`
//! and the configured log level (`RUST_LOG` overrides both). When a log
//! path or directory is configured, structured JSONL events are also
//! written there through a non-blocking appender; the returned guard must
//! stay alive for the life of the process so buffered events flush.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// File name used inside a configured log directory.
const LOG_FILE_NAME: &str = "readage.jsonl";

/// Where log output should go, resolved from env vars and config.
#[derive(Debug)]
pub struct ObservabilityConfig {
    /// Explicit log file path (`READAGE_LOG_PATH`). Wins over `log_dir`.
    pub log_path: Option<PathBuf>,
    /// Log directory (`READAGE_LOG_DIR`, falling back to the config file's
    /// `log_dir`). A daily-rolled `readage.jsonl` is written inside it.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Resolve from environment variables, with the config file's `log_dir`
    /// as the lowest-precedence fallback.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self {
            log_path: std::env::var_os("READAGE_LOG_PATH").map(PathBuf::from),
            log_dir: std::env::var_os("READAGE_LOG_DIR")
                .map(PathBuf::from)
                .or(config_log_dir),
        }
    }
}

/// Build the stderr filter from CLI flags and the configured level.
///
/// `RUST_LOG`, when set and parseable, wins outright.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let directive = if quiet {
        "error"
    } else {
        match verbose {
            0 => config_level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::new(directive)
}

/// Install the global subscriber: a stderr layer, plus a JSONL file layer
/// when a log destination is configured.
///
/// Returns the appender guard when file logging is active.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let appender = if let Some(ref path) = config.log_path {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;
        let file_name = path
            .file_name()
            .map_or_else(|| LOG_FILE_NAME.into(), std::ffi::OsStr::to_os_string);
        Some(rolling::never(dir, file_name))
    } else if let Some(ref dir) = config.log_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;
        Some(rolling::daily(dir, LOG_FILE_NAME))
    } else {
        None
    };

    match appender {
        Some(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let file_layer = fmt::layer().json().with_writer(writer);
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .with(file_layer)
                .try_init()
                .context("failed to set global tracing subscriber")?;
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .try_init()
                .context("failed to set global tracing subscriber")?;
            Ok(None)
        }
    }
}
