//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for AgendaIA
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum AgendaError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Notification error: {0}")]
    Notification(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for AgendaIA operations
pub type Result<T> = std::result::Result<T, AgendaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_tagged_message() {
        let err = AgendaError::InvalidArgument("weekday 9 is out of range".into());
        let json = serde_json::to_string(&err).unwrap();

        assert_eq!(json, r#"{"type":"InvalidArgument","message":"weekday 9 is out of range"}"#);
        assert_eq!(err.to_string(), "Invalid argument: weekday 9 is out of range");
    }
}
