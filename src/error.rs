//! Error types for `nodedata`
//!
//! Each stage of the pipeline (configuration, table loading, resampling)
//! has its own error enum. [`NodeDataError`] aggregates them and maps each
//! variant to a process exit code.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `nodedata` CLI operations.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Configuration error (invalid YAML, validation failure)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (file not found, permission denied)
    pub const IO_ERROR: i32 = 3;

    /// Sample table error (malformed CSV, ragged rows)
    pub const TABLE_ERROR: i32 = 4;

    /// Resampling error (time access outside the loaded table)
    pub const RESAMPLE_ERROR: i32 = 5;

    /// Usage error (invalid arguments, missing required options)
    pub const USAGE_ERROR: i32 = 64;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `nodedata` operations.
#[derive(Debug, Error)]
pub enum NodeDataError {
    /// Configuration loading or validation error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Sample table loading error
    #[error(transparent)]
    Table(#[from] TableError),

    /// Out-of-range access while resampling
    #[error(transparent)]
    Resample(#[from] ResampleError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// CSV reader error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid combination of command-line arguments
    #[error("usage error: {0}")]
    Usage(String),
}

impl NodeDataError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::Yaml(_) => ExitCode::CONFIG_ERROR,
            Self::Table(_) | Self::Csv(_) => ExitCode::TABLE_ERROR,
            Self::Resample(_) => ExitCode::RESAMPLE_ERROR,
            Self::Io(_) => ExitCode::IO_ERROR,
            Self::Usage(_) => ExitCode::USAGE_ERROR,
            Self::Json(_) => ExitCode::ERROR,
        }
    }
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML parsing failed
    #[error("parse error in {path}: {message}")]
    ParseError {
        /// Path to the configuration file
        path: PathBuf,
        /// Line number where the error occurred (if available)
        line: Option<usize>,
        /// Error message from the parser
        message: String,
    },

    /// Configuration validation failed
    #[error("validation failed for {path}: {}", summarize(errors))]
    ValidationError {
        /// Path to the configuration file
        path: String,
        /// List of validation issues found
        errors: Vec<ValidationIssue>,
    },

    /// Configuration file is empty
    #[error("configuration file is empty: {path}")]
    Empty {
        /// Path to the configuration file
        path: PathBuf,
    },

    /// Referenced configuration file not found
    #[error("file not found: {path}")]
    MissingFile {
        /// Path to the missing file
        path: PathBuf,
    },

    /// Field has an invalid value
    #[error("invalid value for '{field}': got '{value}', expected {expected}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The actual value provided
        value: String,
        /// Description of what was expected
        expected: String,
    },
}

fn summarize(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

// ============================================================================
// Validation Types
// ============================================================================

/// A single validation issue found during configuration validation.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Path to the problematic field (e.g., "phases[2].start_frame")
    pub path: String,
    /// Description of the validation issue
    pub message: String,
    /// Severity level of the issue
    pub severity: Severity,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}: {} at {}", prefix, self.message, self.path)
    }
}

/// Severity level for validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Validation failure that prevents the configuration from being used
    Error,
    /// Potential issue that does not prevent loading
    Warning,
}

// ============================================================================
// Table Errors
// ============================================================================

/// Errors raised while loading a sample table.
#[derive(Debug, Error)]
pub enum TableError {
    /// A field in a data row could not be parsed as a number
    #[error("could not convert '{value}' to a number at line {line}, column {column}")]
    Parse {
        /// 1-based line number in the source file
        line: u64,
        /// 0-based column index
        column: usize,
        /// The offending field
        value: String,
    },

    /// A data row has a different width than the first data row
    #[error("row at line {line} has {found} columns, expected {expected}")]
    Ragged {
        /// 1-based line number in the source file
        line: u64,
        /// Column count of the first data row
        expected: usize,
        /// Column count of this row
        found: usize,
    },

    /// Fewer data rows than the operation needs
    #[error("table has {rows} data rows, at least {required} required")]
    TooFewRows {
        /// Number of data rows found
        rows: usize,
        /// Minimum number of rows
        required: usize,
    },

    /// Only a timestamp column is present
    #[error("table has no state columns besides the timestamp")]
    NoStateColumns,

    /// Two tables that must be compared have different shapes
    #[error("table shapes differ: {left_rows}x{left_cols} vs {right_rows}x{right_cols}")]
    ShapeMismatch {
        /// Rows in the first table
        left_rows: usize,
        /// State columns in the first table
        left_cols: usize,
        /// Rows in the second table
        right_rows: usize,
        /// State columns in the second table
        right_cols: usize,
    },

    /// A required named column is missing from a header row
    #[error("missing column '{0}'")]
    MissingColumn(String),
}

// ============================================================================
// Resample Errors
// ============================================================================

/// Resampling errors.
///
/// The only failure is a time access whose interpolation window falls
/// outside the table. It indicates a mismatch between the phase
/// configuration and the input file and is never recovered at runtime.
#[derive(Debug, Error)]
pub enum ResampleError {
    /// Interpolation window outside the loaded table
    #[error(
        "time {timestamp}s maps to row {row}, outside the interpolation range of a {row_count}-row table"
    )]
    OutOfRange {
        /// Requested timestamp in seconds
        timestamp: f64,
        /// Lower bounding row of the interpolation window
        row: i64,
        /// Number of rows in the table
        row_count: usize,
    },
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for `nodedata` operations.
pub type Result<T> = std::result::Result<T, NodeDataError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitCode::SUCCESS, 0);
        assert_eq!(ExitCode::ERROR, 1);
        assert_eq!(ExitCode::CONFIG_ERROR, 2);
        assert_eq!(ExitCode::IO_ERROR, 3);
        assert_eq!(ExitCode::TABLE_ERROR, 4);
        assert_eq!(ExitCode::RESAMPLE_ERROR, 5);
        assert_eq!(ExitCode::USAGE_ERROR, 64);
    }

    #[test]
    fn test_resample_error_exit_code() {
        let err: NodeDataError = ResampleError::OutOfRange {
            timestamp: 1.0,
            row: 100,
            row_count: 50,
        }
        .into();
        assert_eq!(err.exit_code(), ExitCode::RESAMPLE_ERROR);
    }

    #[test]
    fn test_table_error_exit_code() {
        let err: NodeDataError = TableError::TooFewRows {
            rows: 1,
            required: 2,
        }
        .into();
        assert_eq!(err.exit_code(), ExitCode::TABLE_ERROR);
    }

    #[test]
    fn test_config_error_exit_code() {
        let err: NodeDataError = ConfigError::MissingFile {
            path: PathBuf::from("/test"),
        }
        .into();
        assert_eq!(err.exit_code(), ExitCode::CONFIG_ERROR);
    }

    #[test]
    fn test_io_error_exit_code() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "not found");
        let err: NodeDataError = io_err.into();
        assert_eq!(err.exit_code(), ExitCode::IO_ERROR);
    }

    #[test]
    fn test_usage_error_exit_code() {
        let err = NodeDataError::Usage("bad flags".to_string());
        assert_eq!(err.exit_code(), ExitCode::USAGE_ERROR);
    }

    #[test]
    fn test_validation_issue_display() {
        let issue = ValidationIssue {
            path: "phases[0].nodes".to_string(),
            message: "missing node count".to_string(),
            severity: Severity::Error,
        };
        assert_eq!(
            issue.to_string(),
            "error: missing node count at phases[0].nodes"
        );
    }

    #[test]
    fn test_validation_issue_warning_display() {
        let issue = ValidationIssue {
            path: "phases[3].name".to_string(),
            message: "duplicate phase name".to_string(),
            severity: Severity::Warning,
        };
        assert_eq!(
            issue.to_string(),
            "warning: duplicate phase name at phases[3].name"
        );
    }

    #[test]
    fn test_validation_error_lists_issues() {
        let err = ConfigError::ValidationError {
            path: "phases.yaml".to_string(),
            errors: vec![ValidationIssue {
                path: "frame_rate".to_string(),
                message: "must be positive".to_string(),
                severity: Severity::Error,
            }],
        };
        let text = err.to_string();
        assert!(text.contains("phases.yaml"));
        assert!(text.contains("must be positive at frame_rate"));
    }

    #[test]
    fn test_out_of_range_display() {
        let err = ResampleError::OutOfRange {
            timestamp: 0.5,
            row: 50,
            row_count: 20,
        };
        let text = err.to_string();
        assert!(text.contains("row 50"));
        assert!(text.contains("20-row"));
    }

    #[test]
    fn test_table_parse_display() {
        let err = TableError::Parse {
            line: 7,
            column: 3,
            value: "abc".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "could not convert 'abc' to a number at line 7, column 3"
        );
    }
}
