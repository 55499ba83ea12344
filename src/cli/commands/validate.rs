//! `validate` command
//!
//! Checks a phase configuration, and optionally the table it will be
//! applied to, without producing a report.

use std::io::Write;

use serde_json::json;

use crate::cli::args::{OutputFormat, ValidateArgs};
use crate::config::{ConfigLoader, Validator};
use crate::error::{ConfigError, NodeDataError};
use crate::table::SampleTable;

use super::{emit, write_json};

/// Run the `validate` command.
///
/// # Errors
///
/// Returns a configuration error if validation fails, or if `--strict` is
/// set and any warning was raised. Table loading errors propagate as is.
pub fn run(args: &ValidateArgs) -> Result<(), NodeDataError> {
    let path = &args.config;
    tracing::info!(file = %path.display(), "validating configuration");

    let load_result = ConfigLoader::with_defaults().load(path)?;
    let config = load_result.config;
    let mut warnings = load_result.warnings;

    if let Some(table_path) = &args.table {
        let table = SampleTable::load(table_path, config.frame_rate)?;
        let result = Validator::new().validate_against_table(&config, &table);
        warnings.extend(result.warnings);
        if !result.errors.is_empty() {
            return Err(ConfigError::ValidationError {
                path: path.display().to_string(),
                errors: result.errors,
            }
            .into());
        }
    }

    for warning in &warnings {
        tracing::warn!(location = %warning.path, "{}", warning.message);
    }

    if args.strict && !warnings.is_empty() {
        return Err(ConfigError::ValidationError {
            path: path.display().to_string(),
            errors: warnings,
        }
        .into());
    }

    let phases = config.active_phases().len();
    tracing::info!(file = %path.display(), phases, "configuration valid");

    emit(None, |out| match args.format {
        OutputFormat::Human => {
            writeln!(
                out,
                "{}: valid ({phases} phases, {} warnings)",
                path.display(),
                warnings.len()
            )?;
            for warning in &warnings {
                writeln!(out, "  {warning}")?;
            }
            Ok(())
        }
        OutputFormat::Json => write_json(
            out,
            &json!({
                "file": path.display().to_string(),
                "valid": true,
                "phases": phases,
                "warnings": warnings.iter().map(ToString::to_string).collect::<Vec<_>>(),
            }),
        ),
    })
}
