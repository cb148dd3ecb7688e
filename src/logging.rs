//! Logger setup.
//!
//! The terminal belongs to the game while it runs, so logs never go to
//! stdout/stderr. They are written to `TYPING_LOG_PATH` when set and dropped
//! otherwise.

use std::fs::OpenOptions;

use anyhow::{Context, Result};

use crate::config::GameConfig;

/// Install the global logger. Returns whether logging was enabled.
pub fn init(config: &GameConfig) -> Result<bool> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(false);
    };

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {path}"))?;

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .try_init()
        .context("failed to install logger")?;

    log::info!("logging to {path} at {}", config.log_level);
    Ok(true)
}
