use crate::error::ConfigError;
use crate::settings::LoggingSettings;
pub use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber described by `settings`.
///
/// `RUST_LOG` overrides `settings.filter` when set, and an unparsable `RUST_LOG`
/// is an error rather than a silent fallback. If a log directory is
/// configured, output goes to a daily-rolling file and the returned guard must be
/// held for as long as logs should be flushed.
pub fn init_tracing(settings: &LoggingSettings) -> Result<Option<WorkerGuard>, ConfigError> {
    let filter = if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
        EnvFilter::try_from_default_env()
            .map_err(|e| invalid_filter(EnvFilter::DEFAULT_ENV, e))?
    } else {
        EnvFilter::try_new(&settings.filter)
            .map_err(|e| invalid_filter("logging.filter", e))?
    };

    match &settings.directory {
        Some(directory) => {
            let appender = tracing_appender::rolling::daily(directory, &settings.file_prefix);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .try_init()
                .map_err(|e| ConfigError::TracingInit(e.to_string()))?;
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .try_init()
                .map_err(|e| ConfigError::TracingInit(e.to_string()))?;
            Ok(None)
        }
    }
}

fn invalid_filter(source: &str, err: impl std::fmt::Display) -> ConfigError {
    ConfigError::ValidationError(format!("invalid {source} directive: {err}"))
}
