//! Port interfaces for notification delivery

use agendaia_domain::{Notification, Result};
use async_trait::async_trait;

/// Delivers notifications over e-mail, push or SMS
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver one notification. Failures are reported, never retried here.
    async fn deliver(&self, notification: &Notification) -> Result<()>;
}
