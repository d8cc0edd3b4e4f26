//! Calendar event model
//!
//! An [`Event`] is a single agenda entry anchored on a calendar date and a
//! minute-granular start time. Each event occupies the half-open window
//! `[start, start + duration)`; two events conflict only when they fall on
//! the same date and those windows overlap.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{DEFAULT_EVENT_DURATION_MINUTES, MAX_EVENT_DURATION_MINUTES};
use crate::impl_domain_status_conversions;
use crate::{AgendaError, Result};

/// Lifecycle state of an event. `Cancelled` is terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventState {
    #[default]
    Active,
    Cancelled,
}

impl_domain_status_conversions!(EventState {
    Active => "active",
    Cancelled => "cancelled",
});

/// Parameters for creating an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEvent {
    pub title: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    /// Falls back to [`DEFAULT_EVENT_DURATION_MINUTES`] when absent
    #[serde(default)]
    pub duration_minutes: Option<u32>,
}

impl NewEvent {
    pub fn new(title: impl Into<String>, date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            title: title.into(),
            date,
            time,
            description: String::new(),
            location: String::new(),
            duration_minutes: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_duration(mut self, minutes: u32) -> Self {
        self.duration_minutes = Some(minutes);
        self
    }
}

/// Partial modification of an event. Only the supplied fields change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventUpdate {
    pub title: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub duration_minutes: Option<u32>,
}

impl EventUpdate {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn time(mut self, time: NaiveTime) -> Self {
        self.time = Some(time);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn duration_minutes(mut self, minutes: u32) -> Self {
        self.duration_minutes = Some(minutes);
        self
    }

    /// True when no field is supplied
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.date.is_none()
            && self.time.is_none()
            && self.description.is_none()
            && self.location.is_none()
            && self.duration_minutes.is_none()
    }
}

/// A single calendar entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    id: String,
    title: String,
    date: NaiveDate,
    time: NaiveTime,
    duration_minutes: u32,
    description: String,
    location: String,
    state: EventState,
}

impl Event {
    /// Create an event with a freshly generated UUIDv7 identifier
    pub fn create(params: NewEvent) -> Result<Self> {
        Self::create_with_id(Uuid::now_v7().to_string(), params)
    }

    /// Create an event with an identifier issued by an external generator
    pub fn create_with_id(id: impl Into<String>, params: NewEvent) -> Result<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(AgendaError::InvalidArgument("event id must not be empty".into()));
        }
        validate_title(&params.title)?;
        let duration_minutes = params.duration_minutes.unwrap_or(DEFAULT_EVENT_DURATION_MINUTES);
        validate_duration(duration_minutes)?;

        Ok(Self {
            id,
            title: params.title,
            date: params.date,
            time: truncate_to_minute(params.time),
            duration_minutes,
            description: params.description,
            location: params.location,
            state: EventState::Active,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn state(&self) -> EventState {
        self.state
    }

    pub fn is_cancelled(&self) -> bool {
        self.state == EventState::Cancelled
    }

    /// Start of the occupied window
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    /// Exclusive end of the occupied window, clamped to the last
    /// representable instant
    pub fn ends_at(&self) -> NaiveDateTime {
        self.starts_at()
            .checked_add_signed(Duration::minutes(i64::from(self.duration_minutes)))
            .unwrap_or(NaiveDateTime::MAX)
    }

    /// `[start, end)` in minutes since midnight of `date`
    fn minute_window(&self) -> (u32, u32) {
        let start = self.time.num_seconds_from_midnight() / 60;
        (start, start.saturating_add(self.duration_minutes))
    }

    /// Apply the supplied fields. An empty update succeeds without changes.
    ///
    /// # Errors
    /// Returns `AgendaError::InvalidArgument` when the new title is blank or
    /// the new duration exceeds one day; the event is left untouched.
    pub fn update(&mut self, changes: EventUpdate) -> Result<()> {
        if let Some(title) = &changes.title {
            validate_title(title)?;
        }
        if let Some(minutes) = changes.duration_minutes {
            validate_duration(minutes)?;
        }

        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(date) = changes.date {
            self.date = date;
        }
        if let Some(time) = changes.time {
            self.time = truncate_to_minute(time);
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
        if let Some(location) = changes.location {
            self.location = location;
        }
        if let Some(minutes) = changes.duration_minutes {
            self.duration_minutes = minutes;
        }
        Ok(())
    }

    /// Mark the event as cancelled.
    ///
    /// Returns `true` when the state actually changed; cancelling twice is a
    /// no-op.
    pub fn cancel(&mut self) -> bool {
        let changed = self.state != EventState::Cancelled;
        self.state = EventState::Cancelled;
        changed
    }

    /// Case-insensitive substring match against title, description and
    /// location. An empty needle matches every event.
    pub fn matches_filter(&self, text: &str) -> bool {
        let needle = text.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
            || self.location.to_lowercase().contains(&needle)
    }

    /// Same date and overlapping `[start, end)` windows. Zero-length events
    /// never conflict.
    pub fn conflicts_with(&self, other: &Event) -> bool {
        if self.date != other.date {
            return false;
        }
        if self.duration_minutes == 0 || other.duration_minutes == 0 {
            return false;
        }
        let (start_a, end_a) = self.minute_window();
        let (start_b, end_b) = other.minute_window();
        start_a < end_b && start_b < end_a
    }
}

fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(AgendaError::InvalidArgument("event title must not be empty".into()));
    }
    Ok(())
}

fn validate_duration(minutes: u32) -> Result<()> {
    if minutes > MAX_EVENT_DURATION_MINUTES {
        return Err(AgendaError::InvalidArgument(format!(
            "event duration {minutes} exceeds {MAX_EVENT_DURATION_MINUTES} minutes"
        )));
    }
    Ok(())
}

fn truncate_to_minute(time: NaiveTime) -> NaiveTime {
    time.with_second(0).and_then(|t| t.with_nanosecond(0)).unwrap_or(time)
}
