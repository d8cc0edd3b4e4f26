//! Notifier mocks: one that records deliveries, one that always fails

use std::sync::{Arc, Mutex};

use agendaia_core::Notifier;
use agendaia_domain::{AgendaError, Notification, Result as DomainResult};
use async_trait::async_trait;

#[derive(Default, Clone)]
pub struct RecordingNotifier {
    sent: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<Notification> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn deliver(&self, notification: &Notification) -> DomainResult<()> {
        self.sent.lock().unwrap().push(notification.clone());
        Ok(())
    }
}

pub struct FailingNotifier;

#[async_trait]
impl Notifier for FailingNotifier {
    async fn deliver(&self, _notification: &Notification) -> DomainResult<()> {
        Err(AgendaError::Notification("gateway unavailable".into()))
    }
}
