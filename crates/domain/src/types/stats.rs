//! Agenda statistics
//!
//! Per-date event counts and the busiest date of a sequence of events.
//! Cancelled events are counted like any other.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Event;
use crate::constants::{NO_BUSIEST_DATE, STATS_DATE_FORMAT};

/// Summary of an agenda's events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgendaStatistics {
    /// Number of events, cancelled ones included
    pub total_events: usize,

    /// `YYYY-MM-DD` → number of events on that date, iterated in ascending
    /// date order
    pub events_by_date: BTreeMap<String, usize>,

    /// Date with the most events, `"N/A"` for an empty agenda. On ties, the
    /// date that first appears in the event sequence wins.
    pub busiest_date: String,

    /// Number of events on `busiest_date` (0 for an empty agenda)
    pub busiest_date_count: usize,
}

impl AgendaStatistics {
    pub fn from_events<'a, I>(events: I) -> Self
    where
        I: IntoIterator<Item = &'a Event>,
    {
        let mut total_events = 0;
        let mut events_by_date: BTreeMap<String, usize> = BTreeMap::new();
        // First-appearance order of dates drives tie-breaking
        let mut date_order: Vec<String> = Vec::new();

        for event in events {
            total_events += 1;
            let key = event.date().format(STATS_DATE_FORMAT).to_string();
            let count = events_by_date.entry(key.clone()).or_insert(0);
            if *count == 0 {
                date_order.push(key);
            }
            *count += 1;
        }

        let mut busiest_date = NO_BUSIEST_DATE.to_string();
        let mut busiest_date_count = 0;
        for date in date_order {
            let count = events_by_date.get(&date).copied().unwrap_or_default();
            if count > busiest_date_count {
                busiest_date_count = count;
                busiest_date = date;
            }
        }

        Self { total_events, events_by_date, busiest_date, busiest_date_count }
    }

    pub fn is_empty(&self) -> bool {
        self.total_events == 0
    }
}
