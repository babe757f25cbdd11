use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;
pub mod telemetry;

// Re-export the core types to provide a clean public API.
pub use settings::{CalculatorSettings, Config, LoggingSettings};
pub use telemetry::{WorkerGuard, init_tracing};

/// Environment variables with this prefix override file values,
/// e.g. `SAAS_METRICS__CALCULATOR__DURATION_UNIT=decimal`.
const ENV_PREFIX: &str = "SAAS_METRICS";
const ENV_SEPARATOR: &str = "__";

/// Loads the configuration from an optional `saas_metrics.toml` in the working directory.
///
/// A missing file is not an error: the defaults apply, overridden by any
/// `SAAS_METRICS__*` environment variables.
pub fn load_config() -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::with_name("saas_metrics").required(false))
        .add_source(environment());
    finish(builder)
}

/// Loads the configuration from a specific file, which must exist.
pub fn load_config_from(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::from(path.as_ref()).required(true))
        .add_source(environment());
    finish(builder)
}

impl Config {
    /// Parses a TOML document without consulting files or the environment.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml));
        finish(builder)
    }
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX).separator(ENV_SEPARATOR)
}

fn finish(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
) -> Result<Config, ConfigError> {
    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.build()?.try_deserialize::<Config>()?;
    config.validate()?;

    tracing::info!(
        duration_unit = ?config.calculator.duration_unit,
        log_filter = %config.logging.filter,
        "Configuration loaded"
    );
    Ok(config)
}
