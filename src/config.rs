//! Runtime configuration from environment variables.
//!
//! - `TYPING_SEED`: phrase selection seed (default: derived from the clock)
//! - `TYPING_LOG_PATH`: append logs to this file (default: logging off)
//! - `TYPING_LOG_LEVEL`: `error`..`trace` (default: `info`)
//!
//! Unparseable values fall back to the defaults.

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use log::LevelFilter;

#[derive(Debug, Clone)]
pub struct GameConfig {
    pub seed: u32,
    pub log_path: Option<String>,
    pub log_level: LevelFilter,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            log_path: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` uses the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("TYPING_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let log_path = lookup("TYPING_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let log_level = lookup("TYPING_LOG_LEVEL")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(LevelFilter::Info);

        Self {
            seed,
            log_path,
            log_level,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
