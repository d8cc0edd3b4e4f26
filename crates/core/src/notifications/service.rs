//! Notification service - message composition and best-effort delivery

use std::sync::Arc;

use agendaia_domain::{Event, Notification, NotificationMethod, User};
use chrono::NaiveDate;
use tracing::{debug, warn};

use super::ports::Notifier;

/// Reminder text for a single event
pub fn event_reminder_message(event: &Event) -> String {
    let mut message = format!(
        "Reminder: {} on {} at {}",
        event.title(),
        event.date(),
        event.time().format("%H:%M")
    );
    if !event.location().is_empty() {
        message.push_str(&format!(" ({})", event.location()));
    }
    message
}

pub fn event_cancelled_message(event: &Event) -> String {
    format!("Cancelled: {} on {} at {}", event.title(), event.date(), event.time().format("%H:%M"))
}

/// Summary of how many events a user has on `date`
pub fn daily_digest_message(count: usize, date: NaiveDate) -> String {
    match count {
        1 => format!("You have 1 event scheduled for {date}"),
        n => format!("You have {n} events scheduled for {date}"),
    }
}

/// Sends notifications to users through a [`Notifier`].
///
/// Delivery is best effort: a failing notifier is logged and reported as
/// `false`, never as an error to the caller.
pub struct NotificationService {
    notifier: Arc<dyn Notifier>,
    enabled: bool,
    default_method: NotificationMethod,
}

impl NotificationService {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self { notifier, enabled: true, default_method: NotificationMethod::default() }
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_default_method(mut self, method: NotificationMethod) -> Self {
        self.default_method = method;
        self
    }

    pub fn default_method(&self) -> NotificationMethod {
        self.default_method
    }

    /// Deliver `message` to `user`; `true` when the notifier accepted it
    pub async fn notify(
        &self,
        user: &User,
        message: impl Into<String>,
        method: Option<NotificationMethod>,
    ) -> bool {
        if !self.enabled {
            debug!(user_id = user.id(), "notifications disabled, skipping delivery");
            return false;
        }

        let notification =
            Notification::for_user(user, method.unwrap_or(self.default_method), message);
        match self.notifier.deliver(&notification).await {
            Ok(()) => true,
            Err(err) => {
                warn!(
                    user_id = user.id(),
                    method = %notification.method,
                    error = %err,
                    "notification delivery failed"
                );
                false
            }
        }
    }

    pub async fn notify_event_scheduled(&self, user: &User, event: &Event) -> bool {
        self.notify(user, event_reminder_message(event), None).await
    }

    pub async fn notify_event_cancelled(&self, user: &User, event: &Event) -> bool {
        self.notify(user, event_cancelled_message(event), None).await
    }

    /// Tell `user` how many events its agenda holds on `date`
    pub async fn notify_daily_digest(&self, user: &User, date: NaiveDate) -> bool {
        let count = user.agenda().events_on_date(date).len();
        self.notify(user, daily_digest_message(count, date), None).await
    }
}

#[cfg(test)]
mod tests {
    use agendaia_domain::NewEvent;
    use chrono::NaiveTime;

    use super::*;

    fn event() -> Event {
        Event::create_with_id(
            "evt-1",
            NewEvent::new(
                "Dentist",
                NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
                NaiveTime::from_hms_opt(16, 30, 0).unwrap(),
            )
            .with_location("Clinic"),
        )
        .unwrap()
    }

    #[test]
    fn test_reminder_mentions_time_and_location() {
        assert_eq!(
            event_reminder_message(&event()),
            "Reminder: Dentist on 2024-05-02 at 16:30 (Clinic)"
        );
    }

    #[test]
    fn test_digest_pluralises() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();
        assert_eq!(daily_digest_message(1, date), "You have 1 event scheduled for 2024-05-02");
        assert_eq!(daily_digest_message(0, date), "You have 0 events scheduled for 2024-05-02");
    }
}
