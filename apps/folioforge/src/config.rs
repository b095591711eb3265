use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::generation::DEFAULT_GENERATION_DELAY;

/// Runtime configuration loaded from environment variables.
/// Every variable has a default — the app starts with no environment at all.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory downloaded documents are written to.
    pub output_dir: PathBuf,
    /// Simulated generation latency.
    pub generation_delay: Duration,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let output_dir = std::env::var("FOLIO_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));

        let generation_delay = match std::env::var("FOLIO_GENERATION_DELAY_MS") {
            Ok(raw) => Duration::from_millis(
                raw.parse::<u64>()
                    .context("FOLIO_GENERATION_DELAY_MS must be a millisecond count")?,
            ),
            Err(_) => DEFAULT_GENERATION_DELAY,
        };

        Ok(Config {
            output_dir,
            generation_delay,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
