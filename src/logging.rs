//! Tracing setup.
//!
//! The terminal belongs to the UI, so log output goes to a file. The filter
//! comes from [`AppConfig::log_filter`] (`INFLIGHT_LOG`), using
//! `tracing_subscriber::EnvFilter` syntax.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::error::AppResult;

const LOG_FILE_NAME: &str = "inflight.log";

/// Where logs are written for `config`.
pub fn log_file_path(config: &AppConfig) -> PathBuf {
    if let Some(path) = &config.log_file {
        return path.clone();
    }
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("inflight")
        .join(LOG_FILE_NAME)
}

/// Build the filter, falling back to `info` on an invalid directive.
pub fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber writing to the log file.
///
/// Returns `Ok(false)` when another subscriber is already installed.
pub fn init(config: &AppConfig) -> AppResult<bool> {
    let path = log_file_path(config);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let installed = tracing_subscriber::fmt()
        .with_env_filter(build_filter(&config.log_filter))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(path = %path.display(), "logging initialized");
    }
    Ok(installed)
}
