//! Port interfaces for event persistence
//!
//! The store is opaque to the core: queries are expressed as an
//! [`EventQuery`] that every backend can evaluate, never in a particular
//! database's query language.

use agendaia_domain::{Event, EventState, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Store-agnostic event query. Absent criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventQuery {
    pub date: Option<NaiveDate>,
    /// Case-insensitive text match, see [`Event::matches_filter`]
    pub text: Option<String>,
    pub state: Option<EventState>,
}

impl EventQuery {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn on_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn matching(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_state(mut self, state: EventState) -> Self {
        self.state = Some(state);
        self
    }

    pub fn matches(&self, event: &Event) -> bool {
        self.date.map_or(true, |date| event.date() == date)
            && self.text.as_deref().map_or(true, |text| event.matches_filter(text))
            && self.state.map_or(true, |state| event.state() == state)
    }
}

/// Trait for event persistence and retrieval
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Store a new event and return the stored record
    async fn create(&self, event: Event) -> Result<Event>;

    /// Events matching `query`, in insertion order
    async fn find(&self, query: &EventQuery) -> Result<Vec<Event>>;

    /// Get an event by ID
    async fn get(&self, id: &str) -> Result<Option<Event>>;

    /// Replace a stored event with the same ID
    async fn update(&self, event: Event) -> Result<()>;

    /// Delete an event by ID, returning whether it existed
    async fn delete(&self, id: &str) -> Result<bool>;
}
