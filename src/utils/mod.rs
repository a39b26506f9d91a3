//! Shared utilities
//!
//! Logging setup used by the CLI entry point.

mod logger;

pub use logger::{init_logger, LogLevel};
