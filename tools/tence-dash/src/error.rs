//! Top-level error type for start-up and the terminal loop.

use std::io;

use thiserror::Error;

use crate::domain::SettingsError;

/// Errors that stop the dashboard from starting or running.
#[derive(Debug, Error)]
pub enum DashError {
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid setting: {0}")]
    Setting(#[from] SettingsError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to initialize logging: {0}")]
    Logging(String),

    #[error("Failed to encode snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}
