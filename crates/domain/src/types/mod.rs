//! Domain types and models

pub mod agenda;
pub mod calendar;
pub mod container;
pub mod event;
pub mod notification;
pub mod stats;
pub mod user;

pub use agenda::Agenda;
pub use calendar::Calendar;
pub use container::{insert_all, EventContainer, InsertReport, InsertionPolicy};
pub use event::{Event, EventState, EventUpdate, NewEvent};
pub use notification::{Notification, NotificationMethod};
pub use stats::AgendaStatistics;
pub use user::{AccountType, NewUser, User};
