use crate::error::ConfigError;
use core_types::DurationUnit;
use serde::Deserialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// The root configuration structure for the entire library.
///
/// Every section is optional; a missing section takes its defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub calculator: CalculatorSettings,
    pub logging: LoggingSettings,
}

/// Defaults applied by the metrics calculator.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CalculatorSettings {
    /// How churn rates are read when no unit is passed explicitly.
    pub duration_unit: DurationUnit,
}

/// Contains parameters for the tracing subscriber.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// An `EnvFilter` directive such as `"info"` or `"analytics=debug"`.
    /// `RUST_LOG` takes precedence when set.
    pub filter: String,
    /// When set, logs are written to a daily-rolling file in this directory
    /// instead of stdout.
    pub directory: Option<PathBuf>,
    pub file_prefix: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            directory: None,
            file_prefix: "saas-metrics.log".to_string(),
        }
    }
}

impl Config {
    /// Checks the values serde cannot check on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "logging.filter must not be empty".to_string(),
            ));
        }
        if let Err(e) = EnvFilter::try_new(&self.logging.filter) {
            return Err(ConfigError::ValidationError(format!(
                "logging.filter '{}' is not a valid filter directive: {e}",
                self.logging.filter
            )));
        }
        if self.logging.directory.is_some() && self.logging.file_prefix.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "logging.file_prefix must not be empty when logging.directory is set".to_string(),
            ));
        }
        Ok(())
    }
}
