//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Event defaults
pub const DEFAULT_EVENT_DURATION_MINUTES: u32 = 60;
pub const MAX_EVENT_DURATION_MINUTES: u32 = 24 * 60;

// Statistics
pub const NO_BUSIEST_DATE: &str = "N/A";
pub const STATS_DATE_FORMAT: &str = "%Y-%m-%d";

// Users and calendars
pub const DEFAULT_CALENDAR_NAME: &str = "Principal";
pub const DEFAULT_DATABASE_NAME: &str = "agenda_ia";

// Store collection names
pub const EVENTS_COLLECTION: &str = "eventos";
pub const USERS_COLLECTION: &str = "usuarios";
pub const CALENDARS_COLLECTION: &str = "calendarios";
