//! Observability infrastructure: tracing subscriber setup

pub mod logging;

pub use logging::{build_filter, init_logging, LoggingError};
