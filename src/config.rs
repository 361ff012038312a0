//! Runtime configuration read from `UPSTAIR_*` environment variables.

use crate::engine::SeedSource;
use crate::types::{DEFAULT_COLUMNS, MAX_COLUMNS, MIN_COLUMNS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub columns: usize,
    pub seed: Option<u32>,
    pub log_path: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            seed: None,
            log_path: None,
        }
    }
}

impl AppConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Create from any key lookup. Unparseable values fall back to defaults.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let columns = lookup("UPSTAIR_COLUMNS")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .unwrap_or(DEFAULT_COLUMNS)
            .clamp(MIN_COLUMNS, MAX_COLUMNS);

        let seed = lookup("UPSTAIR_SEED").and_then(|s| s.trim().parse().ok());

        let log_path = lookup("UPSTAIR_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            columns,
            seed,
            log_path,
        }
    }

    pub fn seed_source(&self) -> SeedSource {
        match self.seed {
            Some(seed) => SeedSource::Fixed(seed),
            None => SeedSource::Clock,
        }
    }
}
