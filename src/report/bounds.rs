//! Companion bounds report.
//!
//! Emitted once per run alongside the node data: phase durations,
//! shooting-interval counts, DOF labels, and per-column bounds and scales
//! used by the optimizer.

use std::io::{self, Write};

use serde::Serialize;

use crate::config::schema::PhaseConfig;
use crate::error::ResampleError;
use crate::phase::schedule::PhaseSchedule;
use crate::report::format::{write_float_section, write_section};
use crate::table::SampleTable;

/// Margin added below the minimum and above the maximum, as a fraction of
/// the observed range.
pub const BOUND_MARGIN: f64 = 0.15;

/// Bounds and scale of one state column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColumnBounds {
    /// `min - margin * range`
    pub lower: f64,
    /// `max + margin * range`
    pub upper: f64,
    /// Mean magnitude of the column.
    pub scale: f64,
}

impl ColumnBounds {
    /// Computes bounds over `values`. An empty column yields all zeros.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Self {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut magnitude = 0.0;
        let mut count = 0usize;

        for value in values {
            min = min.min(value);
            max = max.max(value);
            magnitude += value.abs();
            count += 1;
        }

        if count == 0 {
            return Self {
                lower: 0.0,
                upper: 0.0,
                scale: 0.0,
            };
        }

        let range = max - min;
        Self {
            lower: range.mul_add(-BOUND_MARGIN, min),
            upper: range.mul_add(BOUND_MARGIN, max),
            scale: magnitude / count as f64,
        }
    }
}

/// All sections of the bounds report.
#[derive(Debug, Clone, Serialize)]
pub struct BoundsReport {
    /// Phase durations in seconds.
    pub durations: Vec<f64>,
    /// Requested shooting intervals per phase.
    pub shooting_intervals: Vec<usize>,
    /// Plain DOF labels.
    pub state_names: Vec<String>,
    /// Derivative labels, `<name>_dot`.
    pub derivative_names: Vec<String>,
    /// Control labels for actuated DOFs, `<name>_torque`.
    pub control_names: Vec<String>,
    /// Per-column bounds over the active rows.
    pub bounds: Vec<ColumnBounds>,
}

impl BoundsReport {
    /// Builds the report for `config` over `table`.
    ///
    /// # Errors
    ///
    /// Returns [`ResampleError::OutOfRange`] if the phases cover rows outside
    /// the table.
    pub fn build(
        config: &PhaseConfig,
        schedule: &PhaseSchedule,
        table: &SampleTable,
    ) -> Result<Self, ResampleError> {
        let rows = schedule
            .active_rows()
            .filter(|rows| *rows.end() < table.row_count())
            .ok_or_else(|| {
                let first = config.phases.first().map_or(0, |p| p.start_frame);
                let end = config
                    .phases
                    .get(schedule.spans().len())
                    .map_or(first, |p| p.start_frame);
                let row = config.row_of(end);
                ResampleError::OutOfRange {
                    timestamp: row as f64 / config.frame_rate,
                    row,
                    row_count: table.row_count(),
                }
            })?;
        tracing::debug!(first = rows.start(), last = rows.end(), "bounds row range");

        let width = table.width();
        let state_names: Vec<String> = (0..width).map(|i| config.dof_name(i)).collect();
        let derivative_names = state_names.iter().map(|n| format!("{n}_dot")).collect();
        let control_names = state_names
            .iter()
            .skip(config.unactuated_dofs)
            .map(|n| format!("{n}_torque"))
            .collect();
        let bounds = (0..width)
            .map(|col| ColumnBounds::from_values(table.column(col, rows.clone())))
            .collect();

        Ok(Self {
            durations: schedule.durations(),
            shooting_intervals: schedule.shooting_intervals(),
            state_names,
            derivative_names,
            control_names,
            bounds,
        })
    }

    /// Writes the text form.
    ///
    /// # Errors
    ///
    /// Propagates write failures.
    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let width = self.state_names.len();

        write_float_section(out, "h", 0, &self.durations)?;
        write_section(
            out,
            "nshoot",
            self.shooting_intervals.iter().copied().enumerate(),
        )?;
        write_section(out, "state_names", self.state_names.iter().enumerate())?;
        write_section(
            out,
            "state_names_dot",
            self.derivative_names
                .iter()
                .enumerate()
                .map(|(i, n)| (i + width, n)),
        )?;
        write_section(out, "control_names", self.control_names.iter().enumerate())?;

        let lower: Vec<f64> = self.bounds.iter().map(|b| b.lower).collect();
        let upper: Vec<f64> = self.bounds.iter().map(|b| b.upper).collect();
        let scale: Vec<f64> = self.bounds.iter().map(|b| b.scale).collect();
        write_float_section(out, "xlb", 0, &lower)?;
        write_float_section(out, "xub", 0, &upper)?;
        write_float_section(out, "xscale", 0, &scale)
    }
}
