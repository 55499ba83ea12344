//! Configuration schema types
//!
//! Types deserialized from the YAML phase configuration file. A
//! configuration describes how an animation table maps to absolute capture
//! frames and how the motion is split into phases.

use serde::{Deserialize, Serialize};

/// Default derivative step for central differencing, in seconds.
pub const DEFAULT_DERIVATIVE_STEP: f64 = 1.0e-7;

/// Largest table row a phase may start at. Row offsets beyond this no
/// longer convert to seconds exactly.
pub const MAX_ROW_OFFSET: i64 = 1 << 53;

/// Default number of leading DOFs without an actuator (pelvis position
/// and orientation).
pub const DEFAULT_UNACTUATED_DOFS: usize = 6;

// ============================================================================
// Top-Level Configuration
// ============================================================================

/// Root configuration for a resampling run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct PhaseConfig {
    /// Absolute capture frame number of table row 0.
    pub frame_first: i64,

    /// Sampling rate of the table in frames per second.
    pub frame_rate: f64,

    /// Half-width of the central-difference window in seconds.
    #[serde(default = "default_derivative_step")]
    pub derivative_step: f64,

    /// Leading DOFs that receive no control label in the bounds report.
    #[serde(default = "default_unactuated_dofs")]
    pub unactuated_dofs: usize,

    /// Optional DOF labels, one per state column.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dofs: Option<Vec<String>>,

    /// Ordered phase descriptors. The last entry is the terminal sentinel.
    pub phases: Vec<Phase>,
}

const fn default_derivative_step() -> f64 {
    DEFAULT_DERIVATIVE_STEP
}

const fn default_unactuated_dofs() -> usize {
    DEFAULT_UNACTUATED_DOFS
}

impl PhaseConfig {
    /// Returns the label of DOF `index`, falling back to `dof_<index>`.
    #[must_use]
    pub fn dof_name(&self, index: usize) -> String {
        self.dofs
            .as_ref()
            .and_then(|names| names.get(index))
            .cloned()
            .unwrap_or_else(|| format!("dof_{index}"))
    }

    /// Table row of capture frame `frame`, saturating at the `i64` range.
    #[must_use]
    pub const fn row_of(&self, frame: i64) -> i64 {
        frame.saturating_sub(self.frame_first)
    }

    /// Returns the phases that emit nodes (every phase but the sentinel).
    #[must_use]
    pub fn active_phases(&self) -> &[Phase] {
        let end = self
            .phases
            .iter()
            .position(Phase::is_terminal)
            .unwrap_or(self.phases.len());
        &self.phases[..end]
    }
}

// ============================================================================
// Phase
// ============================================================================

/// One named phase of the motion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct Phase {
    /// Phase name.
    pub name: String,

    /// Absolute capture frame at which the phase begins.
    pub start_frame: i64,

    /// Requested shooting intervals. If `None`, this is the terminal
    /// sentinel and only marks the end of the previous phase.
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "nshoot")]
    pub nodes: Option<usize>,
}

impl Phase {
    /// Returns `true` for the terminal sentinel.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.nodes.is_none()
    }
}
