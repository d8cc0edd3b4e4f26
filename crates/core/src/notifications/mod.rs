//! Notification composition and dispatch

pub mod ports;
pub mod service;

pub use ports::*;
pub use service::{
    daily_digest_message, event_cancelled_message, event_reminder_message, NotificationService,
};
