//! Observability
//!
//! Process-wide logging configuration.

pub mod logger;

pub use logger::{init_logging, LogFormat, LoggingError};
