//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If the required ones are missing, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `AGENDAIA_STORAGE_BACKEND`: Storage backend (required, `memory`)
//! - `AGENDAIA_DATABASE_NAME`: Database name (defaults to `agenda_ia`)
//! - `AGENDAIA_DEFAULT_EVENT_DURATION`: Default event duration in minutes
//! - `AGENDAIA_NOTIFICATIONS_ENABLED`: Whether notifications are sent
//!   (true/false)
//! - `AGENDAIA_NOTIFICATION_METHOD`: `email`, `push` or `sms`
//! - `AGENDAIA_LOG_LEVEL`: Log filter directive
//! - `AGENDAIA_LOG_JSON`: Emit JSON log lines (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./agendaia.json` or `./agendaia.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. `../../config.json` or `../../config.toml` (grandparent directory)
//! 5. Relative to executable location

use std::path::{Path, PathBuf};

use agendaia_domain::constants::{DEFAULT_DATABASE_NAME, MAX_EVENT_DURATION_MINUTES};
use agendaia_domain::{
    AgendaError, Config, LoggingConfig, NotificationConfig, NotificationMethod, Result,
    SchedulingConfig, StorageConfig,
};

use crate::errors::InfraError;

/// Storage backends this build can serve
pub const SUPPORTED_BACKENDS: &[&str] = &["memory"];

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If the required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `AgendaError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - A value is out of range
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// `AGENDAIA_STORAGE_BACKEND` must be present; every other variable falls
/// back to its default.
///
/// # Errors
/// Returns `AgendaError::Config` if the backend is missing or a variable
/// has an invalid value.
pub fn load_from_env() -> Result<Config> {
    let backend = env_var("AGENDAIA_STORAGE_BACKEND")?;
    let database_name = std::env::var("AGENDAIA_DATABASE_NAME")
        .unwrap_or_else(|_| DEFAULT_DATABASE_NAME.to_string());

    let default_event_duration_minutes = match std::env::var("AGENDAIA_DEFAULT_EVENT_DURATION") {
        Ok(raw) => raw.trim().parse::<u32>().map_err(|e| {
            AgendaError::Config(format!("Invalid default event duration: {}", e))
        })?,
        Err(_) => SchedulingConfig::default().default_event_duration_minutes,
    };

    let notifications_enabled = env_bool("AGENDAIA_NOTIFICATIONS_ENABLED", true);
    let default_method = match std::env::var("AGENDAIA_NOTIFICATION_METHOD") {
        Ok(raw) => raw.parse::<NotificationMethod>().map_err(|e| {
            AgendaError::Config(format!("Invalid notification method: {}", e))
        })?,
        Err(_) => NotificationMethod::default(),
    };

    let level = std::env::var("AGENDAIA_LOG_LEVEL")
        .unwrap_or_else(|_| LoggingConfig::default().level);
    let json = env_bool("AGENDAIA_LOG_JSON", false);

    let config = Config {
        storage: StorageConfig { backend, database_name },
        scheduling: SchedulingConfig { default_event_duration_minutes },
        notifications: NotificationConfig { enabled: notifications_enabled, default_method },
        logging: LoggingConfig { level, json },
    };
    validate(&config)?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `AgendaError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - A value is out of range
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(AgendaError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            AgendaError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| AgendaError::Config(format!("Failed to read config file: {}", e)))?;

    let config = parse_config(&contents, &config_path)?;
    validate(&config)?;
    Ok(config)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => Ok(toml::from_str(contents).map_err(InfraError::from)?),
        "json" => serde_json::from_str(contents)
            .map_err(|e| AgendaError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(AgendaError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Reject values the services cannot honour
fn validate(config: &Config) -> Result<()> {
    if !SUPPORTED_BACKENDS.contains(&config.storage.backend.as_str()) {
        return Err(AgendaError::Config(format!(
            "Unsupported storage backend: {}",
            config.storage.backend
        )));
    }
    if config.storage.database_name.trim().is_empty() {
        return Err(AgendaError::Config("Database name must not be empty".to_string()));
    }
    if config.scheduling.default_event_duration_minutes > MAX_EVENT_DURATION_MINUTES {
        return Err(AgendaError::Config(format!(
            "Default event duration must be at most {} minutes",
            MAX_EVENT_DURATION_MINUTES
        )));
    }
    Ok(())
}

/// Probe multiple paths for configuration files
///
/// Searches for config files in the following locations (in order):
/// 1. Current working directory (`./config.{json,toml}`,
///    `./agendaia.{json,toml}`)
/// 2. Parent directories (up to 2 levels)
/// 3. Relative to executable location
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(candidates_in(&cwd));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(candidates_in(exe_dir));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn candidates_in(dir: &Path) -> Vec<PathBuf> {
    vec![
        dir.join("config.json"),
        dir.join("config.toml"),
        dir.join("agendaia.json"),
        dir.join("agendaia.toml"),
        dir.join("../config.json"),
        dir.join("../config.toml"),
        dir.join("../../config.json"),
        dir.join("../../config.toml"),
    ]
}

/// Get required environment variable
///
/// # Errors
/// Returns `AgendaError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        AgendaError::Config(format!("Missing required environment variable: {}", key))
    })
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
