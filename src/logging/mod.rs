//! Session logging to disk.
//!
//! When enabled, installs a `tracing` subscriber that appends to a daily
//! file named `session_<date>.log` in the configured log directory
//! (default: `~/.local/share/valentine/logs/`). The terminal belongs to the
//! UI, so nothing is ever written to stdout or stderr.

use crate::config::LoggingConfig;
use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

pub fn log_file_name(date: NaiveDate) -> String {
    format!("session_{}.log", date.format("%Y-%m-%d"))
}

/// Install the global subscriber. Returns the log file path, or `None` when
/// logging is disabled.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let log_dir = config.resolved_dir();
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let path = log_dir.join(log_file_name(chrono::Local::now().date_naive()));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(config.max_level())
        .try_init()
        .map_err(|e| anyhow!("Failed to install logger: {}", e))?;

    tracing::info!(path = %path.display(), "session log opened");
    Ok(Some(path))
}
