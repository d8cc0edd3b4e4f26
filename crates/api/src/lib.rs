//! # AgendaIA App
//!
//! Application layer - composition root and commands.
//!
//! This crate contains:
//! - Application context (dependency injection)
//! - Commands (the entry points a transport layer would expose)
//! - Command logging helpers
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture

pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use commands::*;
pub use context::*;
