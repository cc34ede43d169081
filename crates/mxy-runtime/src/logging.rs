//! Structured logging setup using tracing.

use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{AppConfig, LogFormat};
use crate::error::{RuntimeError, RuntimeResult};

/// Build the filter: `RUST_LOG` wins, then the configured level.
pub fn build_filter(config: &AppConfig) -> RuntimeResult<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(config.log_filter()).map_err(|err| {
        RuntimeError::LoggingError(format!("invalid log filter '{}': {}", config.log_filter(), err))
    })
}

/// Install the global subscriber.
///
/// Returns `false` when a subscriber was already installed in this process,
/// which is kept as is.
pub fn init(config: &AppConfig) -> RuntimeResult<bool> {
    let filter = build_filter(config)?;
    let builder = fmt().with_env_filter(filter).with_target(true);

    let result = match config.logging.format {
        LogFormat::Full => builder.try_init(),
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    match result {
        Ok(()) => Ok(true),
        Err(err) => {
            debug!("Keeping existing tracing subscriber: {}", err);
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_level_is_rejected() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let mut config = AppConfig::default();
        config.logging.level = "mxy=notalevel".to_string();
        let err = build_filter(&config).unwrap_err();
        assert!(matches!(err, RuntimeError::LoggingError(_)));
    }

    #[test]
    fn test_debug_flag_builds_filter() {
        let mut config = AppConfig::default();
        config.debug = true;
        assert!(build_filter(&config).is_ok());
    }

    #[test]
    fn test_second_init_keeps_existing_subscriber() {
        let config = AppConfig::default();
        init(&config).unwrap();

        for format in [LogFormat::Full, LogFormat::Compact, LogFormat::Pretty, LogFormat::Json] {
            let mut config = AppConfig::default();
            config.logging.format = format;
            assert!(!init(&config).unwrap(), "format {:?}", format);
        }
    }
}
