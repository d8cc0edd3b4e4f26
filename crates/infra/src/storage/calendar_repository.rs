//! Calendar repository backed by the in-memory document store

use std::sync::Arc;

use agendaia_core::calendars::ports::CalendarRepository as CalendarRepositoryPort;
use agendaia_domain::constants::CALENDARS_COLLECTION;
use agendaia_domain::{Calendar, Result as DomainResult};
use async_trait::async_trait;

use super::memory_store::MemoryStore;

/// Document-store implementation of `CalendarRepository`, keyed by name
pub struct InMemoryCalendarRepository {
    store: Arc<MemoryStore>,
}

impl InMemoryCalendarRepository {
    /// Create a new repository instance
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CalendarRepositoryPort for InMemoryCalendarRepository {
    async fn create(&self, calendar: Calendar) -> DomainResult<Calendar> {
        self.store.insert(CALENDARS_COLLECTION, calendar.name(), &calendar)?;
        Ok(calendar)
    }

    async fn get_by_name(&self, name: &str) -> DomainResult<Option<Calendar>> {
        self.store.get(CALENDARS_COLLECTION, name)
    }

    async fn save(&self, calendar: Calendar) -> DomainResult<()> {
        if !self.store.replace(CALENDARS_COLLECTION, calendar.name(), &calendar)? {
            self.store.insert(CALENDARS_COLLECTION, calendar.name(), &calendar)?;
        }
        tracing::debug!(
            calendar = calendar.name(),
            events = calendar.list_events().len(),
            "calendar document saved"
        );
        Ok(())
    }
}
