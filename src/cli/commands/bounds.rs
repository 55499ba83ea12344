//! `bounds` command
//!
//! Prints durations, shooting intervals, labels, and state bounds.

use crate::cli::args::{BoundsArgs, ReportFormat};
use crate::error::NodeDataError;
use crate::phase::PhaseSchedule;
use crate::report::BoundsReport;

use super::{emit, load_inputs, write_json};

/// Run the `bounds` command.
///
/// # Errors
///
/// Returns an error if the inputs fail to load or the phases cover rows
/// outside the table.
pub fn run(args: &BoundsArgs) -> Result<(), NodeDataError> {
    let (config, table) = load_inputs(&args.input)?;
    let schedule = PhaseSchedule::new(&config);
    let report = BoundsReport::build(&config, &schedule, &table)?;

    emit(args.output.as_deref(), |out| match args.format {
        ReportFormat::Text => Ok(report.write_text(out)?),
        ReportFormat::Json => write_json(out, &report),
    })
}
