//! Logging and tracing bootstrap.
//!
//! Diagnostics go to a JSONL log file (never stdout — command output must
//! stay clean for piping and `--json` consumers). The log destination is
//! resolved from, in order: `SEO_AUDIT_LOG_PATH`, `SEO_AUDIT_LOG_DIR`,
//! the configured `log_dir`, then the platform data-local directory.

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Resolved logging destination.
#[derive(Debug)]
pub struct ObservabilityConfig {
    /// Explicit log file path, when set.
    pub log_path: Option<PathBuf>,
    /// Directory for rotated log files, when no explicit path is set.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Build from environment variables with a config-file fallback.
    ///
    /// `SEO_AUDIT_LOG_PATH` wins over `SEO_AUDIT_LOG_DIR`, which wins over
    /// the `log_dir` from the loaded configuration.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let log_path = std::env::var_os("SEO_AUDIT_LOG_PATH").map(PathBuf::from);
        let log_dir = std::env::var_os("SEO_AUDIT_LOG_DIR")
            .map(PathBuf::from)
            .or(config_log_dir)
            .or_else(default_log_dir);
        Self { log_path, log_dir }
    }
}

/// Default log directory under the platform data-local dir.
fn default_log_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "seo-audit")
        .map(|dirs| dirs.data_local_dir().join("logs"))
}

/// Build the env filter from CLI verbosity flags and the configured level.
///
/// `RUST_LOG` always wins; otherwise `-q` forces `error`, each `-v` step
/// raises verbosity above the configured level.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => config_level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Initialize the global tracing subscriber.
///
/// Returns the non-blocking writer guard; hold it for the process
/// lifetime so buffered log lines are flushed on exit. Logging failures
/// are not fatal: if no destination can be opened, diagnostics are
/// dropped rather than polluting stdout.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let appender = if let Some(ref path) = config.log_path {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let file = path
            .file_name()
            .map_or_else(|| "seo-audit.log".into(), ToOwned::to_owned);
        std::fs::create_dir_all(&dir)?;
        Some(tracing_appender::rolling::never(dir, file))
    } else if let Some(ref dir) = config.log_dir {
        std::fs::create_dir_all(dir)?;
        Some(tracing_appender::rolling::daily(dir, "seo-audit.jsonl"))
    } else {
        None
    };

    let Some(appender) = appender else {
        return Ok(None);
    };

    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(writer)
                .with_ansi(false),
        )
        .init();

    Ok(Some(guard))
}
