//! Notifier that delivers by writing structured log records
//!
//! Stands in for real e-mail, push and SMS gateways: every delivery becomes
//! one `info` record on the `agendaia::notifications` target.

use agendaia_core::notifications::ports::Notifier as NotifierPort;
use agendaia_domain::{AgendaError, Notification, NotificationMethod, Result as DomainResult};
use async_trait::async_trait;

/// Log-based implementation of `Notifier`
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl LogNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NotifierPort for LogNotifier {
    async fn deliver(&self, notification: &Notification) -> DomainResult<()> {
        if notification.recipient.trim().is_empty() {
            return Err(AgendaError::Notification(format!(
                "no recipient for {} notification",
                notification.method
            )));
        }

        match notification.method {
            NotificationMethod::Email => tracing::info!(
                target: "agendaia::notifications",
                to = %notification.recipient,
                body = %notification.message,
                "sending email"
            ),
            NotificationMethod::Push => tracing::info!(
                target: "agendaia::notifications",
                to = %notification.recipient,
                body = %notification.message,
                "sending push notification"
            ),
            NotificationMethod::Sms => tracing::info!(
                target: "agendaia::notifications",
                to = %notification.recipient,
                body = %notification.message,
                "sending sms"
            ),
        }
        Ok(())
    }
}
