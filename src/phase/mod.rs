//! Phase resampling
//!
//! Splits an animation into its configured phases and samples each phase
//! at evenly spaced shooting nodes.
//!
//! # Architecture
//!
//! - [`PhaseSchedule`]: Phase start/end times relative to table row 0
//! - [`resampler`]: Interpolation, central-difference derivatives, per-phase sampling

pub mod resampler;
pub mod schedule;

pub use resampler::{
    PhaseNodes, ResampledNode, estimate_derivative, interpolate, resample_all, resample_phase,
};
pub use schedule::{PhaseSchedule, PhaseSpan};
