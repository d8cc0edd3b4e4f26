//! Domain utilities

pub mod event_filter;
