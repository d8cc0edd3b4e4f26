//! Identifier generation port.
//!
//! Services never mint identifiers themselves; they ask an [`IdGenerator`]
//! so tests can substitute deterministic sequences.
//!
//! # Example
//!
//! ```no_run
//! use agendaia_core::IdGenerator;
//!
//! fn label(ids: &dyn IdGenerator) -> String {
//!     format!("evt-{}", ids.next_id())
//! }
//! ```

/// Source of globally unique string identifiers
pub trait IdGenerator: Send + Sync {
    /// Return a fresh identifier. Never returns the same value twice.
    fn next_id(&self) -> String;
}
