//! Conversions from external infrastructure errors into domain errors.

use std::io::{Error as IoError, ErrorKind};

use agendaia_domain::AgendaError;
use serde_json::Error as JsonError;
use toml::de::Error as TomlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub AgendaError);

impl From<InfraError> for AgendaError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<AgendaError> for InfraError {
    fn from(value: AgendaError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoAgendaError {
    fn into_agenda(self) -> AgendaError;
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → AgendaError */
/* -------------------------------------------------------------------------- */

impl IntoAgendaError for IoError {
    fn into_agenda(self) -> AgendaError {
        match self.kind() {
            ErrorKind::NotFound => AgendaError::NotFound(format!("file not found: {self}")),
            ErrorKind::PermissionDenied => {
                AgendaError::Storage(format!("permission denied: {self}"))
            }
            ErrorKind::AlreadyExists => AgendaError::AlreadyExists(self.to_string()),
            _ => AgendaError::Storage(format!("i/o failure: {self}")),
        }
    }
}

impl From<IoError> for InfraError {
    fn from(value: IoError) -> Self {
        InfraError(value.into_agenda())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → AgendaError */
/* -------------------------------------------------------------------------- */

impl IntoAgendaError for JsonError {
    fn into_agenda(self) -> AgendaError {
        if self.is_io() {
            return AgendaError::Storage(format!("i/o failure while reading JSON: {self}"));
        }
        AgendaError::Storage(format!(
            "malformed JSON document at line {} column {}: {self}",
            self.line(),
            self.column()
        ))
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_agenda())
    }
}

/* -------------------------------------------------------------------------- */
/* toml::de::Error → AgendaError */
/* -------------------------------------------------------------------------- */

impl IntoAgendaError for TomlError {
    fn into_agenda(self) -> AgendaError {
        AgendaError::Config(format!("Invalid TOML format: {}", self.message()))
    }
}

impl From<TomlError> for InfraError {
    fn from(value: TomlError) -> Self {
        InfraError(value.into_agenda())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
