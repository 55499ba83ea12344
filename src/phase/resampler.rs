//! Phase resampler.
//!
//! Produces evenly spaced samples of each phase together with their first
//! time derivative. Values are linearly interpolated between the two
//! bounding table rows; derivatives are central differences of that
//! piecewise-linear function.

use serde::Serialize;

use crate::error::ResampleError;
use crate::phase::schedule::PhaseSchedule;
use crate::table::SampleTable;

/// One sampled instant of a phase.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResampledNode {
    /// Seconds since table row 0.
    pub timestamp: f64,
    /// State values at `timestamp`.
    pub values: Vec<f64>,
    /// First time derivative of the state at `timestamp`.
    pub derivatives: Vec<f64>,
}

/// All nodes of one phase.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhaseNodes {
    /// Position of the phase in the configuration.
    pub index: usize,
    /// Phase name.
    pub name: String,
    /// Nodes in increasing time order.
    pub nodes: Vec<ResampledNode>,
}

/// Returns the table row at or below `timestamp`, checking that `row + 1`
/// also exists when `with_next` is set.
fn bounding_row(
    table: &SampleTable,
    timestamp: f64,
    with_next: bool,
) -> Result<(usize, f64), ResampleError> {
    let position = timestamp * table.sample_rate();
    let prev = position.floor();
    let out_of_range = || ResampleError::OutOfRange {
        timestamp,
        row: if prev.is_finite() { prev as i64 } else { i64::MAX },
        row_count: table.row_count(),
    };

    if !prev.is_finite() || prev < 0.0 {
        return Err(out_of_range());
    }
    let row = prev as usize;
    let last_needed = if with_next { row.checked_add(1) } else { Some(row) };
    match last_needed {
        Some(last) if last < table.row_count() => Ok((row, position - prev)),
        _ => Err(out_of_range()),
    }
}

/// Linearly interpolates the state vector at `timestamp`.
///
/// # Errors
///
/// Returns [`ResampleError::OutOfRange`] if either bounding row lies
/// outside the table.
pub fn interpolate(table: &SampleTable, timestamp: f64) -> Result<Vec<f64>, ResampleError> {
    let (prev, fraction) = bounding_row(table, timestamp, true)?;
    let (Some(lower), Some(upper)) = (table.row(prev), table.row(prev + 1)) else {
        return Err(ResampleError::OutOfRange {
            timestamp,
            row: i64::try_from(prev).unwrap_or(i64::MAX),
            row_count: table.row_count(),
        });
    };

    if fraction == 0.0 {
        return Ok(lower.to_vec());
    }

    Ok(lower
        .iter()
        .zip(upper)
        .map(|(a, b)| a * (1.0 - fraction) + b * fraction)
        .collect())
}

/// Central-difference derivative of the interpolated state at `timestamp`.
///
/// Since the interpolant is piecewise linear, any `step` that keeps both
/// evaluation points inside one sample interval yields the exact slope of
/// that interval.
///
/// # Errors
///
/// Returns [`ResampleError::OutOfRange`] if `timestamp - step` or
/// `timestamp + step` falls outside the table.
pub fn estimate_derivative(
    table: &SampleTable,
    timestamp: f64,
    step: f64,
) -> Result<Vec<f64>, ResampleError> {
    let ahead = interpolate(table, timestamp + step)?;
    let behind = interpolate(table, timestamp - step)?;
    Ok(ahead
        .iter()
        .zip(&behind)
        .map(|(a, b)| (a - b) / (2.0 * step))
        .collect())
}

/// Samples `node_count` evenly spaced instants over `[start, end]`.
///
/// A single node takes the raw table row at `start` rather than an
/// interpolated value; downstream consumers rely on this.
///
/// # Errors
///
/// Returns [`ResampleError::OutOfRange`] if any sampled instant or its
/// derivative window lies outside the table.
pub fn resample_phase(
    table: &SampleTable,
    start: f64,
    end: f64,
    node_count: usize,
    step: f64,
) -> Result<Vec<ResampledNode>, ResampleError> {
    match node_count {
        0 => Ok(Vec::new()),
        1 => {
            let (row, _) = bounding_row(table, start, false)?;
            let values = table.row(row).map(<[f64]>::to_vec).unwrap_or_default();
            Ok(vec![ResampledNode {
                timestamp: start,
                values,
                derivatives: estimate_derivative(table, start, step)?,
            }])
        }
        _ => {
            let last = (node_count - 1) as f64;
            (0..node_count)
                .map(|i| {
                    let timestamp = start + i as f64 * (end - start) / last;
                    Ok(ResampledNode {
                        timestamp,
                        values: interpolate(table, timestamp)?,
                        derivatives: estimate_derivative(table, timestamp, step)?,
                    })
                })
                .collect()
        }
    }
}

/// Resamples every phase of `schedule`.
///
/// Each phase emits one node more than its requested intervals. The first
/// out-of-range access aborts the whole run; no partial result is returned.
///
/// # Errors
///
/// Returns the first [`ResampleError`] encountered.
pub fn resample_all(
    table: &SampleTable,
    schedule: &PhaseSchedule,
    step: f64,
) -> Result<Vec<PhaseNodes>, ResampleError> {
    schedule
        .spans()
        .iter()
        .map(|span| {
            let nodes =
                resample_phase(table, span.start_time, span.end_time, span.node_count(), step)?;
            tracing::debug!(phase = %span.name, nodes = nodes.len(), "resampled phase");
            Ok(PhaseNodes {
                index: span.index,
                name: span.name.clone(),
                nodes,
            })
        })
        .collect()
}
