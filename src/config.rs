//! Runtime configuration for the terminal runner.

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, MASK_SIZE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub seed: u64,
    pub board_width: usize,
    pub board_height: usize,
    /// Log file. Without one no subscriber is installed.
    pub log_path: Option<String>,
    /// `tracing-subscriber` env-filter directive.
    pub log_filter: String,
}

impl RunConfig {
    /// Read `BLOCKFALL_*` variables, falling back to defaults on absent or
    /// unparsable values.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("BLOCKFALL_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(time_seed);

        let dimension = |key: &str, default: usize| {
            lookup(key)
                .and_then(|s| s.trim().parse::<usize>().ok())
                .filter(|&n| n >= MASK_SIZE)
                .unwrap_or(default)
        };
        let board_width = dimension("BLOCKFALL_BOARD_WIDTH", BOARD_WIDTH);
        let board_height = dimension("BLOCKFALL_BOARD_HEIGHT", BOARD_HEIGHT);

        let log_path = lookup("BLOCKFALL_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let log_filter = lookup("BLOCKFALL_LOG")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "info".to_string());

        Self {
            seed,
            board_width,
            board_height,
            log_path,
            log_filter,
        }
    }
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
