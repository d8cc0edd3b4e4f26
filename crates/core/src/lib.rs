//! # AgendaIA Core
//!
//! Business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port/adapter interfaces (traits) for persistence, identifiers and
//!   notification delivery
//! - Services orchestrating the domain model through those ports
//!
//! ## Architecture Principles
//! - Only depends on `agendaia-domain`
//! - No database, network or platform code
//! - All external collaborators via traits

pub mod agenda;
pub mod calendars;
pub mod events;
pub mod notifications;
pub mod users;

// Infrastructure ports
pub mod id_ports;

pub use agenda::AgendaService;
pub use calendars::{CalendarRepository, CalendarService};
pub use events::{EventQuery, EventRepository, EventService};
pub use id_ports::IdGenerator;
pub use notifications::{Notifier, NotificationService};
pub use users::{UserRepository, UserService};
