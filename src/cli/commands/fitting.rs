//! `fitting` command

use crate::cli::args::{FittingArgs, OutputFormat};
use crate::diagnostics::FittingLog;
use crate::error::NodeDataError;

use super::{emit, write_json};

/// Run the `fitting` command.
///
/// # Errors
///
/// Returns an error if the fitting log cannot be read or parsed.
pub fn run(args: &FittingArgs) -> Result<(), NodeDataError> {
    let summary = FittingLog::load(&args.log)?.summarize();

    emit(None, |out| match args.format {
        OutputFormat::Human => Ok(summary.write_human(out)?),
        OutputFormat::Json => write_json(out, &summary),
    })
}
