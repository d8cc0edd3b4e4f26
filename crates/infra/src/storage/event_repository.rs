//! Event repository backed by the in-memory document store

use std::sync::Arc;

use agendaia_core::events::ports::{EventQuery, EventRepository as EventRepositoryPort};
use agendaia_domain::constants::EVENTS_COLLECTION;
use agendaia_domain::{AgendaError, Event, Result as DomainResult};
use async_trait::async_trait;

use super::memory_store::MemoryStore;

/// Document-store implementation of `EventRepository`
pub struct InMemoryEventRepository {
    store: Arc<MemoryStore>,
}

impl InMemoryEventRepository {
    /// Create a new repository instance
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl EventRepositoryPort for InMemoryEventRepository {
    async fn create(&self, event: Event) -> DomainResult<Event> {
        self.store.insert(EVENTS_COLLECTION, event.id(), &event)?;
        tracing::debug!(event_id = event.id(), "event document inserted");
        Ok(event)
    }

    async fn find(&self, query: &EventQuery) -> DomainResult<Vec<Event>> {
        self.store.find(EVENTS_COLLECTION, |event: &Event| query.matches(event))
    }

    async fn get(&self, id: &str) -> DomainResult<Option<Event>> {
        self.store.get(EVENTS_COLLECTION, id)
    }

    async fn update(&self, event: Event) -> DomainResult<()> {
        if self.store.replace(EVENTS_COLLECTION, event.id(), &event)? {
            Ok(())
        } else {
            Err(AgendaError::NotFound(format!("event {}", event.id())))
        }
    }

    async fn delete(&self, id: &str) -> DomainResult<bool> {
        Ok(self.store.remove(EVENTS_COLLECTION, id))
    }
}

#[cfg(test)]
mod tests {
    use agendaia_domain::{EventState, NewEvent};
    use chrono::{NaiveDate, NaiveTime};

    use super::*;

    fn event(id: &str, title: &str, day: u32) -> Event {
        Event::create_with_id(
            id,
            NewEvent::new(
                title,
                NaiveDate::from_ymd_opt(2024, 4, day).unwrap(),
                NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            ),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_find_and_update() {
        let repo = InMemoryEventRepository::new(Arc::new(MemoryStore::new("test")));
        repo.create(event("a", "Budget review", 1)).await.unwrap();
        repo.create(event("b", "Lunch", 1)).await.unwrap();
        repo.create(event("c", "Budget sign-off", 2)).await.unwrap();

        let on_first = repo
            .find(&EventQuery::all().on_date(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()))
            .await
            .unwrap();
        assert_eq!(on_first.len(), 2);

        let mut budget = repo.get("c").await.unwrap().unwrap();
        budget.cancel();
        repo.update(budget).await.unwrap();

        let active_budget = repo
            .find(&EventQuery::all().matching("budget").with_state(EventState::Active))
            .await
            .unwrap();
        assert_eq!(active_budget.len(), 1);
        assert_eq!(active_budget[0].id(), "a");
    }

    #[tokio::test]
    async fn test_duplicate_and_missing_ids() {
        let repo = InMemoryEventRepository::new(Arc::new(MemoryStore::new("test")));
        repo.create(event("a", "Standup", 1)).await.unwrap();

        assert!(matches!(
            repo.create(event("a", "Standup", 2)).await,
            Err(AgendaError::AlreadyExists(_))
        ));
        assert!(matches!(repo.update(event("z", "Ghost", 1)).await, Err(AgendaError::NotFound(_))));
        assert!(repo.delete("a").await.unwrap());
        assert!(!repo.delete("a").await.unwrap());
    }
}
