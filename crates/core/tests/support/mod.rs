//! Shared test helpers for `agendaia-core` integration tests.
//!
//! Lightweight mocks for every core port plus a few event fixtures, so the
//! service tests can focus on behaviour instead of boilerplate.

#![allow(dead_code)]

pub mod notifiers;
pub mod repositories;

use agendaia_domain::{Event, NewEvent, NewUser, User};
use chrono::{NaiveDate, NaiveTime};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid time")
}

/// One-hour event with a fixed id
pub fn event(id: &str, title: &str, date: NaiveDate, time: NaiveTime) -> Event {
    Event::create_with_id(id, NewEvent::new(title, date, time).with_duration(60))
        .expect("valid event")
}

pub fn user(id: &str, name: &str, email: &str) -> User {
    User::create_with_id(id, NewUser::new(name, email)).expect("valid user")
}
