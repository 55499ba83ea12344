//! `compare` command

use crate::cli::args::{CompareArgs, OutputFormat};
use crate::diagnostics::AngleComparison;
use crate::error::NodeDataError;
use crate::table::SampleTable;

use super::{emit, load_config, write_json};

/// Sample rate assumed when no configuration is given. The comparison is
/// row-wise, so the rate only affects logging.
const DEFAULT_SAMPLE_RATE: f64 = 100.0;

/// Run the `compare` command.
///
/// # Errors
///
/// Returns an error if either table fails to load, the optional
/// configuration is invalid, or the tables differ in shape.
pub fn run(args: &CompareArgs) -> Result<(), NodeDataError> {
    let config = args.config.as_deref().map(load_config).transpose()?;
    let rate = config.as_ref().map_or(DEFAULT_SAMPLE_RATE, |c| c.frame_rate);

    let left = SampleTable::load(&args.left, rate)?;
    let right = SampleTable::load(&args.right, rate)?;

    let comparison = AngleComparison::compute(&left, &right, |index| {
        config
            .as_ref()
            .map_or_else(|| format!("dof_{index}"), |c| c.dof_name(index))
    })?;

    emit(None, |out| match args.format {
        OutputFormat::Human => Ok(comparison.write_human(out)?),
        OutputFormat::Json => write_json(out, &comparison),
    })
}
