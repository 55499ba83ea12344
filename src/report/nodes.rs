//! Node-data report.
//!
//! Text form, one block per phase:
//!
//! ```text
//! *
//! * Phase: 0 RightFlat
//! *
//! * t = 0.64
//! sd(0, 0)
//! 0: <value>
//! ...
//! N: <derivative>
//! ...
//! ```
//!
//! Values are numbered `0..N`, derivatives continue at `N..2N`.

use std::io::{self, Write};

use serde::Serialize;

use crate::phase::resampler::{PhaseNodes, ResampledNode};
use crate::report::format::{format_float, write_float_section};

/// Everything one `nodes` run emits.
#[derive(Debug, Clone, Serialize)]
pub struct NodeDataReport {
    /// Phase durations in seconds (the `h` block).
    pub durations: Vec<f64>,
    /// Resampled nodes per phase.
    pub phases: Vec<PhaseNodes>,
}

impl NodeDataReport {
    /// Writes the text form. The `h` block is skipped unless
    /// `with_durations` is set.
    ///
    /// # Errors
    ///
    /// Propagates write failures.
    pub fn write_text<W: Write>(&self, out: &mut W, with_durations: bool) -> io::Result<()> {
        if with_durations {
            write_float_section(out, "h", 0, &self.durations)?;
        }
        for phase in &self.phases {
            write_phase(out, phase)?;
        }
        Ok(())
    }
}

/// Writes one phase block.
///
/// # Errors
///
/// Propagates write failures.
pub fn write_phase<W: Write>(out: &mut W, phase: &PhaseNodes) -> io::Result<()> {
    writeln!(out, "*\n* Phase: {} {}\n*", phase.index, phase.name)?;
    for (i, node) in phase.nodes.iter().enumerate() {
        write_node(out, phase.index, i, node)?;
    }
    Ok(())
}

fn write_node<W: Write>(
    out: &mut W,
    phase_index: usize,
    node_index: usize,
    node: &ResampledNode,
) -> io::Result<()> {
    writeln!(out, "* t = {}", format_float(node.timestamp))?;
    writeln!(out, "sd({phase_index}, {node_index})")?;
    let width = node.values.len();
    for (j, value) in node.values.iter().enumerate() {
        writeln!(out, "{j}: {}", format_float(*value))?;
    }
    for (j, value) in node.derivatives.iter().enumerate() {
        writeln!(out, "{}: {}", j + width, format_float(*value))?;
    }
    writeln!(out)
}
