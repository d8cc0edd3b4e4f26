//! Named, conflict-checked event collection

use serde::{Deserialize, Serialize};

use super::container::{EventContainer, InsertionPolicy};
use super::Event;
use crate::{AgendaError, Result};

/// A named calendar. No two events in it may conflict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calendar {
    name: String,
    events: Vec<Event>,
}

impl Calendar {
    /// # Errors
    /// Returns `AgendaError::InvalidArgument` for a blank name.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(AgendaError::InvalidArgument("calendar name must not be empty".into()));
        }
        Ok(Self { name, events: Vec::new() })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Insert `event` unless it conflicts with (or duplicates the id of) an
    /// existing event. On `false` the calendar is unchanged.
    #[must_use]
    pub fn add_event(&mut self, event: Event) -> bool {
        self.try_insert(event).is_ok()
    }

    /// Existing events that would block insertion of `event`
    pub fn conflicts_for(&self, event: &Event) -> Vec<&Event> {
        self.events.iter().filter(|existing| event.conflicts_with(existing)).collect()
    }

    pub fn list_events(&self) -> &[Event] {
        &self.events
    }

    pub fn remove_event(&mut self, id: &str) -> bool {
        let before = self.events.len();
        self.events.retain(|event| event.id() != id);
        self.events.len() != before
    }
}

impl EventContainer for Calendar {
    fn insertion_policy(&self) -> InsertionPolicy {
        InsertionPolicy::ConflictChecked
    }

    fn events(&self) -> &[Event] {
        &self.events
    }

    fn try_insert(&mut self, event: Event) -> std::result::Result<(), Event> {
        let refused = self
            .events
            .iter()
            .any(|existing| existing.id() == event.id() || event.conflicts_with(existing));
        if refused {
            return Err(event);
        }
        self.events.push(event);
        Ok(())
    }
}
