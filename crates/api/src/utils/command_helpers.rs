//! Command execution helpers
//!
//! Provides utilities to reduce boilerplate when implementing commands with
//! timing and logging.

use std::future::Future;
use std::time::Instant;

use agendaia_domain::Result as DomainResult;

use crate::utils::logging::{error_label, log_command_execution};

/// Execute a command with automatic timing and logging
///
/// - Times command execution
/// - Logs the outcome via tracing, with a stable error label on failure
/// - Converts the domain error into the string surfaced to callers
///
/// # Example
///
/// ```rust,ignore
/// pub async fn my_command(ctx: &AppContext, id: String) -> Result<Event, String> {
///     execute_logged("events::my_command", async { ctx.events.get_event(&id).await }).await
/// }
/// ```
pub async fn execute_logged<Fut, T>(command_name: &str, command: Fut) -> Result<T, String>
where
    Fut: Future<Output = DomainResult<T>>,
{
    let start = Instant::now();
    let result = command.await;

    let error_type = result.as_ref().err().map(error_label);
    log_command_execution(command_name, start.elapsed(), error_type);

    result.map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use agendaia_domain::AgendaError;

    use super::*;

    #[test]
    fn errors_are_surfaced_as_display_strings() {
        let result: Result<(), String> = tokio_test::block_on(execute_logged("test::fails", async {
            Err(AgendaError::NotFound("user u-9".into()))
        }));
        assert_eq!(result.unwrap_err(), "Not found: user u-9");
    }

    #[test]
    fn values_pass_through() {
        let result = tokio_test::block_on(execute_logged("test::ok", async { Ok(7) }));
        assert_eq!(result, Ok(7));
    }
}
