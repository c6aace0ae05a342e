//! Logging setup.
//!
//! The TUI owns stdout, so tracing output goes to the configured log file or
//! is discarded.

use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::DashConfig;
use crate::error::DashError;

/// Install the global tracing subscriber.
pub fn init_logging(config: &DashConfig) -> Result<(), DashError> {
    let filter = EnvFilter::try_new(&config.log_level)
        .map_err(|e| DashError::Logging(format!("bad filter '{}': {}", config.log_level, e)))?;

    let result = match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::sink)
            .try_init(),
    };

    result.map_err(|e| DashError::Logging(e.to_string()))
}
