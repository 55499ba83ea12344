//! CLI argument definitions
//!
//! All Clap derive structs for `nodedata` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::observability::LogFormat;

// ============================================================================
// Root CLI
// ============================================================================

/// Phase-based resampling of motion-capture animation data.
#[derive(Parser, Debug)]
#[command(name = "nodedata", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "NODEDATA_COLOR")]
    pub color: ColorChoice,

    /// Log output format.
    #[arg(long, default_value = "human", global = true)]
    pub log_format: LogFormat,
}

// ============================================================================
// Top-Level Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print resampled shooting-node data for every phase.
    Nodes(NodesArgs),

    /// Print phase durations, labels, and optimizer bounds.
    Bounds(BoundsArgs),

    /// Validate a phase configuration, optionally against a table.
    Validate(ValidateArgs),

    /// Summarize marker errors of an inverse-kinematics fitting log.
    Fitting(FittingArgs),

    /// Compare the joint angles of two animations.
    Compare(CompareArgs),

    /// Generate shell completion scripts.
    Completions(CompletionsArgs),

    /// Display version information.
    Version(VersionArgs),
}

// ============================================================================
// Shared Inputs
// ============================================================================

/// Phase configuration and animation table.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Path to the YAML phase configuration.
    #[arg(short, long, env = "NODEDATA_CONFIG")]
    pub config: PathBuf,

    /// Path to the animation CSV table.
    #[arg(short, long, env = "NODEDATA_TABLE")]
    pub table: PathBuf,
}

// ============================================================================
// Report Commands
// ============================================================================

/// Arguments for `nodes`.
#[derive(Args, Debug)]
pub struct NodesArgs {
    /// Configuration and table.
    #[command(flatten)]
    pub input: InputArgs,

    /// Report format.
    #[arg(short, long, default_value = "text")]
    pub format: ReportFormat,

    /// Override the configured central-difference step in seconds. Must be
    /// positive and smaller than one sample interval.
    #[arg(long)]
    pub step: Option<f64>,

    /// Omit the leading phase-duration block.
    #[arg(long)]
    pub no_durations: bool,

    /// Write the report to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `bounds`.
#[derive(Args, Debug)]
pub struct BoundsArgs {
    /// Configuration and table.
    #[command(flatten)]
    pub input: InputArgs,

    /// Report format.
    #[arg(short, long, default_value = "text")]
    pub format: ReportFormat,

    /// Write the report to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the YAML phase configuration.
    #[arg(short, long, env = "NODEDATA_CONFIG")]
    pub config: PathBuf,

    /// Also check the phases against this animation table.
    #[arg(short, long)]
    pub table: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,

    /// Enable strict validation (warnings become errors).
    #[arg(long)]
    pub strict: bool,
}

// ============================================================================
// Diagnostics Commands
// ============================================================================

/// Arguments for `fitting`.
#[derive(Args, Debug)]
pub struct FittingArgs {
    /// Path to the fitting log CSV.
    pub log: PathBuf,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for `compare`.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// First animation table.
    pub left: PathBuf,

    /// Second animation table.
    pub right: PathBuf,

    /// Phase configuration supplying DOF labels.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// Completions / Version
// ============================================================================

/// Arguments for shell completion generation.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell for completion script.
    pub shell: Shell,
}

/// Arguments for version display.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Format of the node and bounds reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    /// Enumerated `index: value` text read by the optimal-control tool.
    #[default]
    Text,
    /// JSON document.
    Json,
}

/// Output format for summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// `PowerShell`.
    #[value(name = "powershell")]
    PowerShell,
    /// Elvish shell.
    Elvish,
}

// ============================================================================
// Tests
// ============================================================================
