//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `microwave.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::time::Duration;

use microwave_adapter_console::OutputFormat;
use microwave_app::services::idle_clock_service::IdleClockConfig;
use microwave_domain::clock::TimeFormat;
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Clock tick and inactivity timer settings.
    pub timers: TimersConfig,
    /// Presentation settings.
    pub display: DisplayConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Timer periods in milliseconds.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TimersConfig {
    /// Clock refresh period.
    pub tick_interval_ms: u64,
    /// Inactivity delay before the idle screen comes back.
    pub idle_timeout_ms: u64,
}

/// Presentation configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Stored time format preference (`"12"` or `"24"`).
    pub time_format: TimeFormat,
    /// Console output mode.
    pub output: OutputFormat,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `microwave.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("microwave.toml")?;
        config.apply_overrides(|name| std::env::var(name).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("MICROWAVE_TICK_MS")
            && let Ok(ms) = val.parse()
        {
            self.timers.tick_interval_ms = ms;
        }
        if let Some(val) = var("MICROWAVE_IDLE_TIMEOUT_MS")
            && let Ok(ms) = val.parse()
        {
            self.timers.idle_timeout_ms = ms;
        }
        if let Some(val) = var("MICROWAVE_TIME_FORMAT") {
            self.display.time_format = TimeFormat::from_setting(&val);
        }
        if let Some(val) = var("MICROWAVE_OUTPUT") {
            match val.as_str() {
                "text" => self.display.output = OutputFormat::Text,
                "json" => self.display.output = OutputFormat::Json,
                _ => {}
            }
        }
        if let Some(val) = var("MICROWAVE_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.timers.tick_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "tick_interval_ms must be non-zero".to_string(),
            ));
        }
        if self.timers.idle_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "idle_timeout_ms must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Timer settings for the idle clock controller.
    #[must_use]
    pub fn idle_clock(&self) -> IdleClockConfig {
        IdleClockConfig {
            tick_interval: Duration::from_millis(self.timers.tick_interval_ms),
            idle_timeout: Duration::from_millis(self.timers.idle_timeout_ms),
            time_format: self.display.time_format,
        }
    }
}

impl Default for TimersConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 1000,
            idle_timeout_ms: 10_000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "microwaved=info,microwave=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
