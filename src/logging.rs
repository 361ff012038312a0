//! Log setup for the terminal binary.
//!
//! The game owns the terminal in raw mode, so logs only ever go to a file.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Install a file-backed `tracing` subscriber, filtered by `RUST_LOG`
/// (default `info`). Without a path nothing is installed.
pub fn init(log_path: Option<&str>) -> Result<()> {
    let Some(path) = log_path else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {path}"))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("installing log subscriber: {e}"))
}
