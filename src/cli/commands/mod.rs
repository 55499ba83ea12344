//! CLI command dispatch and handlers
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod bounds;
pub mod compare;
pub mod completions;
pub mod fitting;
pub mod nodes;
pub mod validate;
pub mod version;

use std::io::{self, Write};
use std::path::Path;

use crate::cli::args::{Cli, Commands, InputArgs};
use crate::config::{ConfigLoader, PhaseConfig};
use crate::error::NodeDataError;
use crate::table::SampleTable;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub fn dispatch(cli: Cli) -> Result<(), NodeDataError> {
    match cli.command {
        Commands::Nodes(args) => nodes::run(&args),
        Commands::Bounds(args) => bounds::run(&args),
        Commands::Validate(args) => validate::run(&args),
        Commands::Fitting(args) => fitting::run(&args),
        Commands::Compare(args) => compare::run(&args),
        Commands::Completions(args) => {
            completions::run(&args);
            Ok(())
        }
        Commands::Version(args) => {
            version::run(&args);
            Ok(())
        }
    }
}

// ============================================================================
// Shared Helpers
// ============================================================================

/// Loads a phase configuration and logs its warnings.
fn load_config(path: &Path) -> Result<PhaseConfig, NodeDataError> {
    tracing::info!(file = %path.display(), "loading configuration");
    let load_result = ConfigLoader::with_defaults().load(path)?;

    for warning in &load_result.warnings {
        tracing::warn!(location = %warning.path, "{}", warning.message);
    }

    Ok(load_result.config)
}

/// Loads the configuration and the table it describes.
fn load_inputs(input: &InputArgs) -> Result<(PhaseConfig, SampleTable), NodeDataError> {
    let config = load_config(&input.config)?;
    let table = SampleTable::load(&input.table, config.frame_rate)?;
    Ok((config, table))
}

/// Renders a report into memory, then writes it to `output` or stdout.
///
/// Nothing is written if rendering fails.
fn emit<F>(output: Option<&Path>, render: F) -> Result<(), NodeDataError>
where
    F: FnOnce(&mut Vec<u8>) -> Result<(), NodeDataError>,
{
    let mut buffer = Vec::new();
    render(&mut buffer)?;

    match output {
        Some(path) => {
            std::fs::write(path, &buffer)?;
            tracing::info!(file = %path.display(), bytes = buffer.len(), "report written");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&buffer)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Serializes `value` as pretty JSON followed by a newline.
fn write_json<T: serde::Serialize>(out: &mut Vec<u8>, value: &T) -> Result<(), NodeDataError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    out.push(b'\n');
    Ok(())
}
