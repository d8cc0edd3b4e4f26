//! # AgendaIA Domain
//!
//! Business domain types and models for AgendaIA.
//!
//! This crate contains:
//! - Events, agendas, calendars and users
//! - The conflict predicate, the date filter pipeline and agenda statistics
//! - Domain error types and Result definitions
//! - Configuration structures and domain constants
//!
//! ## Architecture
//! - No dependencies on other AgendaIA crates
//! - Only external dependencies allowed
//! - Pure, synchronous, in-process data structures (no I/O)

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
pub use utils::event_filter::{
    filter, filter_by_month, filter_by_weekday, filter_by_year, weekday_from_index, EventFilter,
};
