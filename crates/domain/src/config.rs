//! Configuration management

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DATABASE_NAME, DEFAULT_EVENT_DURATION_MINUTES};
use crate::types::NotificationMethod;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub storage: StorageConfig,
    #[serde(default)]
    pub scheduling: SchedulingConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Storage configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Only `"memory"` is available; the field keeps config files forward
    /// compatible with other document stores.
    pub backend: String,
    #[serde(default = "default_database_name")]
    pub database_name: String,
}

/// Scheduling configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulingConfig {
    /// Duration assigned to events created without an explicit one
    pub default_event_duration_minutes: u32,
}

/// Notification configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationConfig {
    pub enabled: bool,
    pub default_method: NotificationMethod,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive, overridden by `RUST_LOG` when set
    pub level: String,
    pub json: bool,
}

fn default_database_name() -> String {
    DEFAULT_DATABASE_NAME.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { backend: "memory".to_string(), database_name: default_database_name() }
    }
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self { default_event_duration_minutes: DEFAULT_EVENT_DURATION_MINUTES }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self { enabled: true, default_method: NotificationMethod::Email }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), json: false }
    }
}
