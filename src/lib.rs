//! `nodedata` - phase-based resampling of motion-capture animations
//!
//! Splits a uniformly sampled animation table into configured motion
//! phases, samples each phase at evenly spaced shooting nodes with
//! central-difference derivatives, and writes the enumerated node data and
//! state bounds consumed by a multiple-shooting optimal-control solver.

pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod observability;
pub mod phase;
pub mod report;
pub mod table;
