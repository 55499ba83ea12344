//! Fitting diagnostics
//!
//! Numeric summaries of an inverse-kinematics fit: marker residuals from
//! the fitting log, and joint-angle differences between two animations.

pub mod compare;
pub mod fitting;

pub use compare::{AngleComparison, DofDifference};
pub use fitting::{FittingLog, FittingSummary, MarkerError};
