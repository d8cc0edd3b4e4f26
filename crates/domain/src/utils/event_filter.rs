//! Date-component filters over event sequences.
//!
//! Each filter keeps the events whose date matches one component (year,
//! month, ISO weekday with Monday = 0). The filters are independent
//! predicates, so any combination applied in any order narrows to the same
//! set, and relative order is always preserved.
//!
//! Out-of-range months (outside 1-12) and weekdays (outside 0-6) are
//! rejected with `AgendaError::InvalidArgument` instead of quietly matching
//! nothing.

use chrono::{Datelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::types::Event;
use crate::{AgendaError, Result};

/// Keep events in `year`
pub fn filter_by_year<'a, I>(events: I, year: i32) -> Vec<&'a Event>
where
    I: IntoIterator<Item = &'a Event>,
{
    events.into_iter().filter(|event| event.date().year() == year).collect()
}

/// Keep events in `month` (1-12)
pub fn filter_by_month<'a, I>(events: I, month: u32) -> Result<Vec<&'a Event>>
where
    I: IntoIterator<Item = &'a Event>,
{
    validate_month(month)?;
    Ok(events.into_iter().filter(|event| event.date().month() == month).collect())
}

/// Keep events on `weekday` (0 = Monday ... 6 = Sunday)
pub fn filter_by_weekday<'a, I>(events: I, weekday: u32) -> Result<Vec<&'a Event>>
where
    I: IntoIterator<Item = &'a Event>,
{
    let weekday = weekday_from_index(weekday)?;
    Ok(events.into_iter().filter(|event| event.date().weekday() == weekday).collect())
}

/// Apply every supplied filter. With no filter the input is returned as is.
pub fn filter<'a, I>(
    events: I,
    year: Option<i32>,
    month: Option<u32>,
    weekday: Option<u32>,
) -> Result<Vec<&'a Event>>
where
    I: IntoIterator<Item = &'a Event>,
{
    EventFilter { year, month, weekday }.apply(events)
}

/// Map an ISO weekday index (Monday = 0) to [`Weekday`]
pub fn weekday_from_index(index: u32) -> Result<Weekday> {
    match index {
        0 => Ok(Weekday::Mon),
        1 => Ok(Weekday::Tue),
        2 => Ok(Weekday::Wed),
        3 => Ok(Weekday::Thu),
        4 => Ok(Weekday::Fri),
        5 => Ok(Weekday::Sat),
        6 => Ok(Weekday::Sun),
        other => {
            Err(AgendaError::InvalidArgument(format!("weekday must be in 0..=6, got {other}")))
        }
    }
}

fn validate_month(month: u32) -> Result<()> {
    if !(1..=12).contains(&month) {
        return Err(AgendaError::InvalidArgument(format!("month must be in 1..=12, got {month}")));
    }
    Ok(())
}

/// Combined year/month/weekday criteria
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventFilter {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub weekday: Option<u32>,
}

impl EventFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn month(mut self, month: u32) -> Self {
        self.month = Some(month);
        self
    }

    pub fn weekday(mut self, weekday: u32) -> Self {
        self.weekday = Some(weekday);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.year.is_none() && self.month.is_none() && self.weekday.is_none()
    }

    /// Check the month and weekday ranges
    pub fn validate(&self) -> Result<()> {
        if let Some(month) = self.month {
            validate_month(month)?;
        }
        if let Some(weekday) = self.weekday {
            weekday_from_index(weekday)?;
        }
        Ok(())
    }

    /// Run the filters in sequence, preserving the input order
    pub fn apply<'a, I>(&self, events: I) -> Result<Vec<&'a Event>>
    where
        I: IntoIterator<Item = &'a Event>,
    {
        self.validate()?;
        let mut narrowed: Vec<&'a Event> = events.into_iter().collect();
        if let Some(year) = self.year {
            narrowed = filter_by_year(narrowed, year);
        }
        if let Some(month) = self.month {
            narrowed = filter_by_month(narrowed, month)?;
        }
        if let Some(weekday) = self.weekday {
            narrowed = filter_by_weekday(narrowed, weekday)?;
        }
        Ok(narrowed)
    }
}
