//! Application commands
//!
//! Thin async entry points over the services in [`AppContext`]. Every command
//! is timed and logged, and surfaces errors as display strings.
//!
//! [`AppContext`]: crate::context::AppContext

pub mod agenda;
pub mod calendars;
pub mod events;
pub mod notifications;
pub mod users;

pub use agenda::*;
pub use calendars::*;
pub use events::*;
pub use notifications::*;
pub use users::*;
