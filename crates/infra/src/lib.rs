//! # AgendaIA Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - The in-memory document store and its repositories
//! - UUID identifier generation
//! - Log-based notification delivery
//! - Configuration loading and logging setup
//!
//! ## Architecture
//! - Implements traits defined in `agendaia-core`
//! - Depends on `agendaia-domain` and `agendaia-core`
//! - Contains all "impure" code (I/O, global subscriber, environment)

pub mod config;
pub mod errors;
pub mod ids;
pub mod notifications;
pub mod observability;
pub mod storage;

// Re-export commonly used items
pub use errors::InfraError;
pub use ids::UuidIdGenerator;
pub use notifications::LogNotifier;
pub use observability::init_logging;
pub use storage::{
    InMemoryCalendarRepository, InMemoryEventRepository, InMemoryUserRepository, MemoryStore,
};
