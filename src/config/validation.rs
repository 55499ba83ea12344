//! Configuration validation
//!
//! Schema and semantic checks for a deserialized [`PhaseConfig`], plus the
//! table-aware checks that need the loaded animation.
//!
//! Validation collects ALL issues instead of stopping at the first one.

use crate::config::loader::ConfigLimits;
use crate::config::schema::{MAX_ROW_OFFSET, PhaseConfig};
use crate::error::{Severity, ValidationIssue};
use crate::phase::resampler::resample_phase;
use crate::phase::schedule::PhaseSchedule;
use crate::table::SampleTable;

use std::collections::HashSet;

/// Tolerance for the timestamp spacing check, as a fraction of one sample
/// interval.
const SPACING_TOLERANCE: f64 = 1e-3;

// ============================================================================
// Public API
// ============================================================================

/// Result of configuration validation.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Validation errors (prevent loading).
    pub errors: Vec<ValidationIssue>,

    /// Validation warnings (informational).
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Returns `true` if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns `true` if validation passed (no errors).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Configuration validator.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<ValidationIssue>,
    warnings: Vec<ValidationIssue>,
}

impl Validator {
    /// Creates a new validator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates a configuration on its own.
    pub fn validate(&mut self, config: &PhaseConfig, limits: &ConfigLimits) -> ValidationResult {
        self.errors.clear();
        self.warnings.clear();

        self.validate_timing(config);
        self.validate_phase_list(config);
        self.validate_dofs(config);
        self.validate_limits(config, limits);

        self.take()
    }

    /// Validates a configuration against the table it will be applied to.
    ///
    /// Every sampled instant, and its derivative window, must fall inside
    /// the table. Shape mismatches and uneven timestamp spacing are
    /// reported as warnings.
    pub fn validate_against_table(
        &mut self,
        config: &PhaseConfig,
        table: &SampleTable,
    ) -> ValidationResult {
        self.errors.clear();
        self.warnings.clear();

        if let Some(names) = &config.dofs {
            if names.len() != table.width() {
                self.add_warning(
                    "dofs",
                    &format!(
                        "{} DOF labels for a table with {} state columns",
                        names.len(),
                        table.width()
                    ),
                );
            }
        }

        if config.unactuated_dofs > table.width() {
            self.add_warning(
                "unactuated_dofs",
                &format!(
                    "{} unactuated DOFs exceed the {} state columns",
                    config.unactuated_dofs,
                    table.width()
                ),
            );
        }

        let tolerance = SPACING_TOLERANCE / config.frame_rate;
        if let Some(row) = table.check_uniform_spacing(tolerance) {
            self.add_warning(
                "frame_rate",
                &format!(
                    "timestamp spacing at row {row} differs from 1/{} s",
                    config.frame_rate
                ),
            );
        }

        let schedule = PhaseSchedule::new(config);
        for span in schedule.spans() {
            if let Err(e) = resample_phase(
                table,
                span.start_time,
                span.end_time,
                span.node_count(),
                config.derivative_step,
            ) {
                self.add_error(&format!("phases[{}]", span.index), &e.to_string());
            }
        }

        self.take()
    }

    // ========================================================================
    // Checks
    // ========================================================================

    fn validate_timing(&mut self, config: &PhaseConfig) {
        let rate_ok = config.frame_rate.is_finite() && config.frame_rate > 0.0;
        if !rate_ok {
            self.add_error("frame_rate", "frame_rate must be a positive number");
        }

        let step = config.derivative_step;
        if !(step.is_finite() && step > 0.0) {
            self.add_error(
                "derivative_step",
                "derivative_step must be a positive number",
            );
        } else if rate_ok && step >= 1.0 / config.frame_rate {
            self.add_error(
                "derivative_step",
                "derivative_step must be smaller than one sample interval",
            );
        }
    }

    fn validate_phase_list(&mut self, config: &PhaseConfig) {
        let phases = &config.phases;
        if phases.len() < 2 {
            self.add_error(
                "phases",
                "at least one phase and the terminal sentinel are required",
            );
        }

        let last = phases.len().saturating_sub(1);
        let mut seen = HashSet::new();

        for (i, phase) in phases.iter().enumerate() {
            let path = format!("phases[{i}]");

            if phase.name.trim().is_empty() {
                self.add_error(&format!("{path}.name"), "phase name cannot be empty");
            } else if !seen.insert(phase.name.as_str()) {
                self.add_warning(
                    &format!("{path}.name"),
                    &format!("duplicate phase name '{}'", phase.name),
                );
            }

            if phase.start_frame < config.frame_first {
                self.add_error(
                    &format!("{path}.start_frame"),
                    &format!(
                        "start_frame {} precedes frame_first {}",
                        phase.start_frame, config.frame_first
                    ),
                );
            } else if phase
                .start_frame
                .checked_sub(config.frame_first)
                .is_none_or(|row| row > MAX_ROW_OFFSET)
            {
                self.add_error(
                    &format!("{path}.start_frame"),
                    &format!(
                        "start_frame {} lies more than {MAX_ROW_OFFSET} frames after frame_first {}",
                        phase.start_frame, config.frame_first
                    ),
                );
            }

            if i > 0 && phase.start_frame < phases[i - 1].start_frame {
                self.add_error(
                    &format!("{path}.start_frame"),
                    "start frames must be non-decreasing",
                );
            }

            match phase.nodes {
                None if i != last => self.add_error(
                    &format!("{path}.nodes"),
                    "only the final phase may omit nodes",
                ),
                Some(_) if i == last => self.add_error(
                    &format!("{path}.nodes"),
                    "the final phase is the terminal sentinel and must not request nodes",
                ),
                Some(0) => self.add_error(&format!("{path}.nodes"), "nodes must be at least 1"),
                _ => {}
            }

            if i < last && phases[i + 1].start_frame == phase.start_frame {
                self.add_warning(&path, &format!("phase '{}' has zero length", phase.name));
            }
        }
    }

    fn validate_dofs(&mut self, config: &PhaseConfig) {
        let Some(names) = &config.dofs else {
            return;
        };
        for (i, name) in names.iter().enumerate() {
            if name.trim().is_empty() {
                self.add_warning(&format!("dofs[{i}]"), "empty DOF label");
            }
        }
    }

    fn validate_limits(&mut self, config: &PhaseConfig, limits: &ConfigLimits) {
        if config.phases.len() > limits.max_phases {
            self.add_error(
                "phases",
                &format!(
                    "too many phases: {} (maximum: {}). \
                     Set NODEDATA_MAX_PHASES to increase the limit.",
                    config.phases.len(),
                    limits.max_phases
                ),
            );
        }

        let dof_count = config.dofs.as_ref().map_or(0, Vec::len);
        if dof_count > limits.max_dofs {
            self.add_error(
                "dofs",
                &format!(
                    "too many DOF labels: {dof_count} (maximum: {}). \
                     Set NODEDATA_MAX_DOFS to increase the limit.",
                    limits.max_dofs
                ),
            );
        }
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn take(&mut self) -> ValidationResult {
        ValidationResult {
            errors: std::mem::take(&mut self.errors),
            warnings: std::mem::take(&mut self.warnings),
        }
    }

    fn add_error(&mut self, path: &str, message: &str) {
        self.errors.push(ValidationIssue {
            path: path.to_string(),
            message: message.to_string(),
            severity: Severity::Error,
        });
    }

    fn add_warning(&mut self, path: &str, message: &str) {
        self.warnings.push(ValidationIssue {
            path: path.to_string(),
            message: message.to_string(),
            severity: Severity::Warning,
        });
    }
}
