//! Shared capability set of event containers
//!
//! [`Agenda`](super::Agenda) and [`Calendar`](super::Calendar) both own an
//! ordered sequence of events but admit new ones under different rules.
//! Code that only needs "add and list" works against [`EventContainer`].

use serde::{Deserialize, Serialize};

use super::Event;

/// How a container decides whether to admit a new event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsertionPolicy {
    /// Overlapping events are accepted; only duplicate ids are refused
    Unchecked,
    /// Events conflicting with an existing one are refused
    ConflictChecked,
}

/// Common add/list contract of event containers
pub trait EventContainer {
    fn insertion_policy(&self) -> InsertionPolicy;

    /// Events in insertion order
    fn events(&self) -> &[Event];

    /// Try to admit `event`; a refused event is handed back untouched
    fn try_insert(&mut self, event: Event) -> Result<(), Event>;

    fn len(&self) -> usize {
        self.events().len()
    }

    fn is_empty(&self) -> bool {
        self.events().is_empty()
    }

    fn find(&self, id: &str) -> Option<&Event> {
        self.events().iter().find(|event| event.id() == id)
    }
}

/// Outcome of a bulk insertion into a container
#[derive(Debug, Default)]
pub struct InsertReport {
    pub inserted: usize,
    /// Events the container refused, in input order
    pub rejected: Vec<Event>,
}

/// Insert every event in order, collecting the ones the container refuses
pub fn insert_all<C, I>(container: &mut C, events: I) -> InsertReport
where
    C: EventContainer + ?Sized,
    I: IntoIterator<Item = Event>,
{
    let mut report = InsertReport::default();
    for event in events {
        match container.try_insert(event) {
            Ok(()) => report.inserted += 1,
            Err(refused) => report.rejected.push(refused),
        }
    }
    report
}
