use std::time::Duration;

use agendaia_domain::AgendaError;
use tracing::{info, warn};

/// Log the outcome of a command execution with structured fields.
///
/// # Parameters
/// * `command` - Logical command identifier (e.g. `"agenda::add_event"`).
/// * `elapsed` - Duration the command execution took.
/// * `error_type` - Stable error label when the command failed.
///
/// Callers must avoid forwarding user data in `command`.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, error_type: Option<&str>) {
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

    match error_type {
        None => info!(command, duration_ms, "command_execution_success"),
        Some(error_type) => {
            warn!(command, duration_ms, error_type, "command_execution_failure");
        }
    }
}

/// Convert an `AgendaError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &AgendaError) -> &'static str {
    match error {
        AgendaError::Storage(_) => "storage",
        AgendaError::Config(_) => "config",
        AgendaError::Notification(_) => "notification",
        AgendaError::NotFound(_) => "not_found",
        AgendaError::AlreadyExists(_) => "already_exists",
        AgendaError::InvalidArgument(_) => "invalid_argument",
        AgendaError::Internal(_) => "internal",
    }
}
