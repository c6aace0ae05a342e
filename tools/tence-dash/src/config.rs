//! Dashboard configuration from environment variables and CLI overrides.

use std::env;
use std::path::PathBuf;

use crate::domain::{parse_input, Settings, SettingsField, TerminalSession};
use crate::error::DashError;

/// Default input poll / redraw interval.
pub const DEFAULT_TICK_MS: u64 = 250;

/// Start-up configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct DashConfig {
    /// Input poll / redraw interval in milliseconds.
    pub tick_ms: u64,

    /// Initial generation settings (already validated).
    pub settings: Settings,

    /// Optional cap on retained terminal log entries. `None` keeps everything.
    pub max_log_entries: Option<usize>,

    /// File receiving tracing output. Logs are discarded when unset.
    pub log_file: Option<PathBuf>,

    /// Log level filter (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for DashConfig {
    fn default() -> Self {
        Self {
            tick_ms: DEFAULT_TICK_MS,
            settings: Settings::default(),
            max_log_entries: None,
            log_file: None,
            log_level: "info".to_string(),
        }
    }
}

impl DashConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `TENCE_TICK_MS`: Redraw interval (default: 250)
    /// - `TENCE_TEMPERATURE`: Initial temperature (default: 0.7)
    /// - `TENCE_TOP_P`: Initial top_p (default: 0.9)
    /// - `TENCE_MAX_TOKENS`: Initial max_tokens (default: 512)
    /// - `TENCE_MAX_LOG`: Terminal log cap (default: unbounded)
    /// - `TENCE_LOG_FILE`: Log file path (default: none)
    /// - `TENCE_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    pub fn from_env() -> Result<Self, DashError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`DashConfig::from_env`] with an explicit variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DashError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("TENCE_TICK_MS") {
            config.tick_ms = parse_positive("TENCE_TICK_MS", &raw)?;
        }

        for (key, field) in [
            ("TENCE_TEMPERATURE", SettingsField::Temperature),
            ("TENCE_TOP_P", SettingsField::TopP),
            ("TENCE_MAX_TOKENS", SettingsField::MaxTokens),
        ] {
            if let Some(raw) = lookup(key) {
                let value = parse_input(field, &raw)?;
                config.set_setting(field, value)?;
            }
        }

        if let Some(raw) = lookup("TENCE_MAX_LOG") {
            config.max_log_entries = Some(parse_positive("TENCE_MAX_LOG", &raw)?);
        }

        config.log_file = lookup("TENCE_LOG_FILE")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        if let Some(level) = lookup("TENCE_LOG_LEVEL").or_else(|| lookup("RUST_LOG")) {
            config.log_level = level;
        }

        Ok(config)
    }

    /// Replace one initial setting, validating it like form input.
    pub fn set_setting(&mut self, field: SettingsField, value: f64) -> Result<(), DashError> {
        self.settings = self.settings.with_field(field, value)?;
        Ok(())
    }

    /// Terminal session honoring the configured log cap.
    pub fn terminal_session(&self) -> TerminalSession {
        match self.max_log_entries {
            Some(max) => TerminalSession::with_max_entries(max),
            None => TerminalSession::new(),
        }
    }
}

fn parse_positive<T>(key: &str, raw: &str) -> Result<T, DashError>
where
    T: std::str::FromStr + PartialEq + Default,
{
    match raw.trim().parse::<T>() {
        Ok(value) if value != T::default() => Ok(value),
        _ => Err(DashError::Config(format!(
            "{} must be a positive integer, got '{}'",
            key, raw
        ))),
    }
}
