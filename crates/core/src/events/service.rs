//! Event service - persisted event lifecycle and filtering

use std::sync::Arc;

use agendaia_domain::constants::DEFAULT_EVENT_DURATION_MINUTES;
use agendaia_domain::{AgendaError, Event, EventFilter, EventUpdate, NewEvent, Result};
use tracing::{debug, info};

use super::ports::{EventQuery, EventRepository};
use crate::id_ports::IdGenerator;

/// Creates, queries and mutates events through the event repository
pub struct EventService {
    repository: Arc<dyn EventRepository>,
    ids: Arc<dyn IdGenerator>,
    default_duration_minutes: u32,
}

impl EventService {
    /// Create a new event service
    pub fn new(repository: Arc<dyn EventRepository>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { repository, ids, default_duration_minutes: DEFAULT_EVENT_DURATION_MINUTES }
    }

    /// Duration given to events created without one
    pub fn with_default_duration(mut self, minutes: u32) -> Self {
        self.default_duration_minutes = minutes;
        self
    }

    /// Build an event with a generated id and persist it
    pub async fn create_event(&self, mut params: NewEvent) -> Result<Event> {
        params.duration_minutes.get_or_insert(self.default_duration_minutes);
        let event = Event::create_with_id(self.ids.next_id(), params)?;
        let stored = self.repository.create(event).await?;

        info!(event_id = stored.id(), date = %stored.date(), "event created");
        Ok(stored)
    }

    pub async fn get_event(&self, id: &str) -> Result<Event> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| AgendaError::NotFound(format!("event {id}")))
    }

    pub async fn find_events(&self, query: &EventQuery) -> Result<Vec<Event>> {
        self.repository.find(query).await
    }

    /// Narrow the events matching `query` by year/month/weekday.
    ///
    /// The filter is validated before the store is touched.
    pub async fn filter_events(
        &self,
        query: &EventQuery,
        filter: &EventFilter,
    ) -> Result<Vec<Event>> {
        filter.validate()?;
        let events = self.repository.find(query).await?;
        let kept: Vec<Event> = filter.apply(&events)?.into_iter().cloned().collect();

        debug!(scanned = events.len(), kept = kept.len(), ?filter, "filtered events");
        Ok(kept)
    }

    pub async fn update_event(&self, id: &str, changes: EventUpdate) -> Result<Event> {
        let mut event = self.get_event(id).await?;
        if changes.is_empty() {
            return Ok(event);
        }
        event.update(changes)?;
        self.repository.update(event.clone()).await?;

        info!(event_id = id, "event updated");
        Ok(event)
    }

    pub async fn cancel_event(&self, id: &str) -> Result<Event> {
        let mut event = self.get_event(id).await?;
        if event.cancel() {
            self.repository.update(event.clone()).await?;
            info!(event_id = id, "event cancelled");
        }
        Ok(event)
    }

    /// Delete an event; `false` when it did not exist
    pub async fn delete_event(&self, id: &str) -> Result<bool> {
        let removed = self.repository.delete(id).await?;
        debug!(event_id = id, removed, "event delete requested");
        Ok(removed)
    }
}
