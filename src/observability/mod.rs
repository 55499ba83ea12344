//! Observability module
//!
//! Logging infrastructure. Logs go to stderr so stdout carries only the
//! report.

pub mod logging;

pub use logging::{LogFormat, init_logging};
