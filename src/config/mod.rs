//! Configuration module
//!
//! Loads and validates phase configuration files: frame numbering,
//! sampling rate, DOF labels, and the ordered phase list.

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{ConfigLimits, ConfigLoader, LoadResult, LoaderOptions};
pub use schema::*;
pub use validation::{ValidationResult, Validator};
