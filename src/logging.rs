//! Tracing subscriber setup.
//!
//! The TUI owns stdout, so interactive sessions log to a daily rolling file;
//! one-shot commands log to stderr.

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::utils::ensure_directory;

/// Environment variable holding an `EnvFilter` directive that overrides `-v`.
pub const LOG_ENV: &str = "MEDQA_LOG";

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// Daily rolling `medqa.log` inside this directory
    File(PathBuf),
}

/// Maps the `-v` count to a default filter directive.
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn build_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbosity)))
}

/// Installs the global tracing subscriber.
///
/// # Errors
///
/// Returns an error if the log directory cannot be created or a global
/// subscriber is already installed.
pub fn init(target: LogTarget, verbosity: u8) -> Result<()> {
    let filter = build_filter(verbosity);

    match &target {
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| anyhow!(e))?,
        LogTarget::File(dir) => {
            ensure_directory(dir)?;
            let file_appender = tracing_appender::rolling::daily(dir, "medqa.log");
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(file_appender)
                .try_init()
                .map_err(|e| anyhow!(e))?
        }
    }

    info!(log_target = ?target, "logging initialized");
    Ok(())
}
