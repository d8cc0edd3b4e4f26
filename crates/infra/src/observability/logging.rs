//! Logging initialisation
//!
//! Installs the global `tracing` subscriber once per process. `RUST_LOG`
//! takes precedence over the configured level so operators can raise
//! verbosity without touching config files.

use agendaia_domain::{AgendaError, LoggingConfig};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Logging setup failures
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The filter directive could not be parsed
    #[error("Invalid log filter '{directive}': {reason}")]
    InvalidFilter { directive: String, reason: String },

    /// Another global subscriber is already installed
    #[error("Logging already initialised: {0}")]
    AlreadyInitialized(String),
}

impl From<LoggingError> for AgendaError {
    fn from(value: LoggingError) -> Self {
        AgendaError::Config(value.to_string())
    }
}

/// Filter from `RUST_LOG` when set, the configured level otherwise
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter, LoggingError> {
    let directive = std::env::var(EnvFilter::DEFAULT_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| config.level.clone());

    EnvFilter::try_new(&directive)
        .map_err(|e| LoggingError::InvalidFilter { directive, reason: e.to_string() })
}

/// Install the global subscriber, as JSON lines when `config.json` is set
///
/// # Errors
/// Returns `AgendaError::Config` for an unparsable filter or when a
/// subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<(), AgendaError> {
    let filter = build_filter(config)?;

    let installed = if config.json {
        tracing_subscriber::registry().with(filter).with(fmt::layer().json()).try_init()
    } else {
        tracing_subscriber::registry().with(filter).with(fmt::layer()).try_init()
    };
    installed.map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))?;

    tracing::debug!(level = %config.level, json = config.json, "logging initialised");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use once_cell::sync::Lazy;

    use super::*;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    #[test]
    fn test_configured_level_is_used_without_rust_log() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        let saved = std::env::var("RUST_LOG").ok();
        std::env::remove_var("RUST_LOG");

        let config = LoggingConfig { level: "agendaia=loud".into(), json: false };
        let result = build_filter(&config);

        if let Some(value) = saved {
            std::env::set_var("RUST_LOG", value);
        }
        assert!(matches!(result, Err(LoggingError::InvalidFilter { .. })));
    }

    #[test]
    fn test_rust_log_overrides_config() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        let saved = std::env::var("RUST_LOG").ok();
        std::env::set_var("RUST_LOG", "debug");

        let config = LoggingConfig { level: "agendaia=loud".into(), json: false };
        let result = build_filter(&config);

        match saved {
            Some(value) => std::env::set_var("RUST_LOG", value),
            None => std::env::remove_var("RUST_LOG"),
        }
        assert!(result.is_ok());
    }

    #[test]
    fn test_invalid_filter_becomes_config_error() {
        let err: AgendaError = LoggingError::InvalidFilter {
            directive: "x".into(),
            reason: "bad".into(),
        }
        .into();
        assert!(matches!(err, AgendaError::Config(_)));
    }
}
