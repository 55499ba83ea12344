//! `nodes` command
//!
//! Resamples every phase and prints the node-data report.

use crate::cli::args::{NodesArgs, ReportFormat};
use crate::error::NodeDataError;
use crate::phase::{PhaseSchedule, resample_all};
use crate::report::NodeDataReport;

use super::{emit, load_inputs, write_json};

/// Run the `nodes` command.
///
/// # Errors
///
/// Returns an error if the inputs fail to load, `--step` is not a positive
/// number below one sample interval, or any phase samples outside the
/// table.
pub fn run(args: &NodesArgs) -> Result<(), NodeDataError> {
    let (config, table) = load_inputs(&args.input)?;

    let step = args.step.unwrap_or(config.derivative_step);
    if !(step.is_finite() && step > 0.0) {
        return Err(NodeDataError::Usage(format!(
            "--step must be a positive number of seconds, got {step}"
        )));
    }
    if step >= 1.0 / config.frame_rate {
        return Err(NodeDataError::Usage(format!(
            "--step must be smaller than one sample interval (1/{} s), got {step}",
            config.frame_rate
        )));
    }

    let schedule = PhaseSchedule::new(&config);
    let phases = resample_all(&table, &schedule, step)?;
    tracing::info!(
        phases = phases.len(),
        nodes = phases.iter().map(|p| p.nodes.len()).sum::<usize>(),
        "resampling complete"
    );

    let report = NodeDataReport {
        durations: schedule.durations(),
        phases,
    };

    emit(args.output.as_deref(), |out| match args.format {
        ReportFormat::Text => Ok(report.write_text(out, !args.no_durations)?),
        ReportFormat::Json => write_json(out, &report),
    })
}
