//! Phase timing.
//!
//! Converts the absolute frame numbers of the phase configuration into
//! start and end times relative to table row 0.

use std::ops::RangeInclusive;

use serde::Serialize;

use crate::config::schema::PhaseConfig;

/// Time span of one non-terminal phase.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhaseSpan {
    /// Position of the phase in the configuration.
    pub index: usize,
    /// Phase name.
    pub name: String,
    /// Phase start in seconds since table row 0.
    pub start_time: f64,
    /// Start of the following phase in seconds since table row 0.
    pub end_time: f64,
    /// Requested shooting intervals.
    pub intervals: usize,
}

impl PhaseSpan {
    /// Number of emitted nodes: one more than the requested intervals.
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.intervals + 1
    }

    /// Phase length in seconds.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }
}

/// Ordered phase spans of one configuration, up to the terminal sentinel.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseSchedule {
    spans: Vec<PhaseSpan>,
    first_row: i64,
    end_row: i64,
}

impl PhaseSchedule {
    /// Builds the schedule for `config`.
    ///
    /// Phases are walked pairwise; each phase ends where the next one
    /// starts. Walking stops at the first terminal phase.
    #[must_use]
    pub fn new(config: &PhaseConfig) -> Self {
        let to_time = |frame: i64| config.row_of(frame) as f64 / config.frame_rate;

        let mut spans = Vec::new();
        for (index, pair) in config.phases.windows(2).enumerate() {
            let (phase, next) = (&pair[0], &pair[1]);
            let Some(intervals) = phase.nodes else {
                break;
            };
            spans.push(PhaseSpan {
                index,
                name: phase.name.clone(),
                start_time: to_time(phase.start_frame),
                end_time: to_time(next.start_frame),
                intervals,
            });
        }

        let first_row = config
            .phases
            .first()
            .map_or(0, |p| config.row_of(p.start_frame));
        let end_row = config
            .phases
            .get(spans.len())
            .map_or(first_row, |p| config.row_of(p.start_frame));

        Self {
            spans,
            first_row,
            end_row,
        }
    }

    /// The non-terminal phase spans in order.
    #[must_use]
    pub fn spans(&self) -> &[PhaseSpan] {
        &self.spans
    }

    /// Phase durations in seconds.
    #[must_use]
    pub fn durations(&self) -> Vec<f64> {
        self.spans.iter().map(PhaseSpan::duration).collect()
    }

    /// Requested shooting intervals per phase.
    #[must_use]
    pub fn shooting_intervals(&self) -> Vec<usize> {
        self.spans.iter().map(|s| s.intervals).collect()
    }

    /// Table rows covered by the phases, from the first phase start to the
    /// terminal phase start inclusive. `None` if the range starts before
    /// row 0 or is empty.
    #[must_use]
    pub fn active_rows(&self) -> Option<RangeInclusive<usize>> {
        let first = usize::try_from(self.first_row).ok()?;
        let end = usize::try_from(self.end_row).ok()?;
        (first <= end).then_some(first..=end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::Phase;

    fn phase(name: &str, start_frame: i64, nodes: Option<usize>) -> Phase {
        Phase {
            name: name.to_string(),
            start_frame,
            nodes,
        }
    }

    fn gait_config() -> PhaseConfig {
        PhaseConfig {
            frame_first: 239,
            frame_rate: 100.0,
            derivative_step: 1.0e-7,
            unactuated_dofs: 6,
            dofs: None,
            phases: vec![
                phase("RightFlat", 303, Some(15)),
                phase("RightToe", 333, Some(10)),
                phase("RightToeTouchDownLeftHeel", 343, Some(1)),
                phase("RightToeLeftHeel", 343, Some(5)),
                phase("End", 360, None),
            ],
        }
    }

    #[test]
    fn spans_are_relative_to_first_frame() {
        let schedule = PhaseSchedule::new(&gait_config());
        let spans = schedule.spans();
        assert_eq!(spans.len(), 4);
        assert!((spans[0].start_time - 0.64).abs() < 1e-12);
        assert!((spans[0].end_time - 0.94).abs() < 1e-12);
        assert_eq!(spans[0].node_count(), 16);
        assert_eq!(spans[3].name, "RightToeLeftHeel");
        assert!((spans[3].end_time - 1.21).abs() < 1e-12);
    }

    #[test]
    fn durations_and_intervals() {
        let schedule = PhaseSchedule::new(&gait_config());
        let durations = schedule.durations();
        let expected = [0.30, 0.10, 0.0, 0.17];
        for (got, want) in durations.iter().zip(expected) {
            assert!((got - want).abs() < 1e-12, "{got} != {want}");
        }
        assert_eq!(schedule.shooting_intervals(), vec![15, 10, 1, 5]);
    }

    #[test]
    fn active_rows_cover_first_to_sentinel() {
        let schedule = PhaseSchedule::new(&gait_config());
        assert_eq!(schedule.active_rows(), Some(64..=121));
    }

    #[test]
    fn active_rows_none_before_table_start() {
        let mut config = gait_config();
        config.phases[0].start_frame = 200;
        assert_eq!(PhaseSchedule::new(&config).active_rows(), None);
    }

    #[test]
    fn extreme_frames_saturate() {
        let mut config = gait_config();
        config.frame_first = -10;
        config.phases = vec![
            phase("Stance", i64::MAX, Some(4)),
            phase("End", i64::MAX, None),
        ];
        let schedule = PhaseSchedule::new(&config);
        assert!(schedule.spans()[0].duration().abs() < 1e-12);
        assert_eq!(schedule.first_row, i64::MAX);
    }

    #[test]
    fn stops_at_first_terminal_phase() {
        let mut config = gait_config();
        config.phases[2].nodes = None;
        let schedule = PhaseSchedule::new(&config);
        assert_eq!(schedule.spans().len(), 2);
        assert_eq!(schedule.active_rows(), Some(64..=104));
    }
}
