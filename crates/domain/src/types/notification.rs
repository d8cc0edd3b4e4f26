//! Notification payloads
//!
//! The domain only builds the content and picks the recipient; delivery is
//! done by whatever implements the notifier port.

use serde::{Deserialize, Serialize};

use super::User;
use crate::impl_domain_status_conversions;

/// Delivery channel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationMethod {
    #[default]
    Email,
    Push,
    Sms,
}

impl_domain_status_conversions!(NotificationMethod {
    Email => "email",
    Push => "push",
    Sms => "sms",
});

/// A message ready to hand over to a notifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub method: NotificationMethod,
    pub recipient: String,
}

impl Notification {
    /// Address `user` through `method`: e-mail goes to the address, push and
    /// SMS go to the user's name.
    pub fn for_user(user: &User, method: NotificationMethod, message: impl Into<String>) -> Self {
        let recipient = match method {
            NotificationMethod::Email => user.email(),
            NotificationMethod::Push | NotificationMethod::Sms => user.name(),
        };
        Self { message: message.into(), method, recipient: recipient.to_string() }
    }
}
