//! Per-user agenda
//!
//! An agenda keeps events in insertion order and admits overlapping events
//! on purpose; conflict rules only apply to [`Calendar`](super::Calendar).
//! Event ids are unique within an agenda.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::container::{EventContainer, InsertionPolicy};
use super::stats::AgendaStatistics;
use super::{Event, EventUpdate};
use crate::{AgendaError, Result};

/// Ordered collection of one user's events
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agenda {
    events: Vec<Event>,
}

impl Agenda {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event and return a view of it.
    ///
    /// # Errors
    /// Returns `AgendaError::AlreadyExists` if an event with the same id is
    /// already present.
    pub fn add_event(&mut self, event: Event) -> Result<&Event> {
        if self.contains(event.id()) {
            return Err(AgendaError::AlreadyExists(format!(
                "event {} is already in the agenda",
                event.id()
            )));
        }
        let index = self.events.len();
        self.events.push(event);
        Ok(&self.events[index])
    }

    pub fn list_events(&self) -> &[Event] {
        &self.events
    }

    /// Events matching `text` (see [`Event::matches_filter`]), in agenda order
    pub fn search(&self, text: &str) -> Vec<&Event> {
        self.events.iter().filter(|event| event.matches_filter(text)).collect()
    }

    /// Remove the event with `id`. Returns whether anything was removed.
    pub fn remove_event(&mut self, id: &str) -> bool {
        match self.events.iter().position(|event| event.id() == id) {
            Some(index) => {
                self.events.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn events_on_date(&self, date: NaiveDate) -> Vec<&Event> {
        self.events.iter().filter(|event| event.date() == date).collect()
    }

    pub fn statistics(&self) -> AgendaStatistics {
        AgendaStatistics::from_events(&self.events)
    }

    pub fn get_event(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|event| event.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get_event(id).is_some()
    }

    /// Apply a partial update to the event with `id`.
    ///
    /// # Errors
    /// `NotFound` when no event has that id, `InvalidArgument` when the
    /// update itself is invalid.
    pub fn update_event(&mut self, id: &str, changes: EventUpdate) -> Result<&Event> {
        let event = self.get_event_mut(id)?;
        event.update(changes)?;
        Ok(&*event)
    }

    /// Cancel the event with `id`.
    ///
    /// # Errors
    /// Returns `AgendaError::NotFound` when no event has that id.
    pub fn cancel_event(&mut self, id: &str) -> Result<&Event> {
        let event = self.get_event_mut(id)?;
        event.cancel();
        Ok(&*event)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    fn get_event_mut(&mut self, id: &str) -> Result<&mut Event> {
        self.events
            .iter_mut()
            .find(|event| event.id() == id)
            .ok_or_else(|| AgendaError::NotFound(format!("event {id}")))
    }
}

impl EventContainer for Agenda {
    fn insertion_policy(&self) -> InsertionPolicy {
        InsertionPolicy::Unchecked
    }

    fn events(&self) -> &[Event] {
        &self.events
    }

    fn try_insert(&mut self, event: Event) -> std::result::Result<(), Event> {
        if self.contains(event.id()) {
            return Err(event);
        }
        self.events.push(event);
        Ok(())
    }
}
