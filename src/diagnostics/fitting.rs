//! Inverse-kinematics fitting log summary.
//!
//! The fitting log is a CSV file with a header row: a `frame` column, a
//! `steps` column holding the IK iterations spent on that frame, and one
//! column per marker holding its residual error in meters.

use std::io::{self, Read, Write};
use std::path::Path;

use serde::Serialize;

use crate::error::{NodeDataError, TableError};

/// Parsed fitting log.
#[derive(Debug, Clone, PartialEq)]
pub struct FittingLog {
    frames: Vec<f64>,
    steps: Vec<f64>,
    markers: Vec<(String, Vec<f64>)>,
}

/// Error statistics of one marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerError {
    /// Marker name from the header.
    pub name: String,
    /// Mean error over all frames.
    pub mean: f64,
    /// Largest error over all frames.
    pub max: f64,
}

/// Summary of a fitting log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FittingSummary {
    /// Number of logged frames.
    pub frames: usize,
    /// Mean of the per-marker mean errors.
    pub average_error: f64,
    /// Mean IK step count per frame.
    pub average_steps: f64,
    /// Per-marker statistics, sorted by name.
    pub markers: Vec<MarkerError>,
}

impl FittingLog {
    /// Reads a fitting log from `reader`.
    ///
    /// # Errors
    ///
    /// Returns a CSV error if the reader fails, [`TableError::MissingColumn`]
    /// if `frame` or `steps` is absent, and [`TableError::Parse`] for
    /// non-numeric fields.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, NodeDataError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| TableError::MissingColumn(name.to_string()))
        };
        let frame_col = find("frame")?;
        let steps_col = find("steps")?;

        let marker_cols: Vec<usize> = (0..headers.len())
            .filter(|c| *c != frame_col && *c != steps_col)
            .collect();

        let mut log = Self {
            frames: Vec::new(),
            steps: Vec::new(),
            markers: marker_cols
                .iter()
                .map(|c| (headers[*c].to_string(), Vec::new()))
                .collect(),
        };

        for record in csv_reader.records() {
            let record = record?;
            let line = record.position().map_or(0, csv::Position::line);
            let field = |column: usize| -> Result<f64, TableError> {
                let raw = record.get(column).unwrap_or("");
                raw.parse().map_err(|_| TableError::Parse {
                    line,
                    column,
                    value: raw.to_string(),
                })
            };

            log.frames.push(field(frame_col)?);
            log.steps.push(field(steps_col)?);
            for (slot, column) in marker_cols.iter().enumerate() {
                log.markers[slot].1.push(field(*column)?);
            }
        }

        if log.frames.is_empty() {
            return Err(TableError::TooFewRows {
                rows: 0,
                required: 1,
            }
            .into());
        }

        Ok(log)
    }

    /// Loads a fitting log from disk.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be opened, otherwise the
    /// errors of [`FittingLog::from_reader`].
    pub fn load(path: &Path) -> Result<Self, NodeDataError> {
        let file = std::fs::File::open(path)?;
        let log = Self::from_reader(std::io::BufReader::new(file))?;
        tracing::info!(
            path = %path.display(),
            frames = log.frames.len(),
            markers = log.markers.len(),
            "loaded fitting log"
        );
        Ok(log)
    }

    /// Computes the summary statistics.
    #[must_use]
    pub fn summarize(&self) -> FittingSummary {
        let mut markers: Vec<MarkerError> = self
            .markers
            .iter()
            .map(|(name, errors)| MarkerError {
                name: name.clone(),
                mean: mean(errors),
                max: errors.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            })
            .collect();
        markers.sort_by(|a, b| a.name.cmp(&b.name));

        let marker_means: Vec<f64> = markers.iter().map(|m| m.mean).collect();
        FittingSummary {
            frames: self.frames.len(),
            average_error: mean(&marker_means),
            average_steps: mean(&self.steps),
            markers,
        }
    }
}

impl FittingSummary {
    /// Writes a human-readable table.
    ///
    /// # Errors
    ///
    /// Propagates write failures.
    pub fn write_human<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "frames:               {}", self.frames)?;
        writeln!(out, "average IK steps:     {:.2}", self.average_steps)?;
        writeln!(out, "average marker error: {:.5} m", self.average_error)?;
        writeln!(out)?;

        let name_width = self
            .markers
            .iter()
            .map(|m| m.name.len())
            .max()
            .unwrap_or(0)
            .max("marker".len());
        writeln!(out, "{:<name_width$}  {:>10}  {:>10}", "marker", "mean (m)", "max (m)")?;
        for marker in &self.markers {
            writeln!(
                out,
                "{:<name_width$}  {:>10.5}  {:>10.5}",
                marker.name, marker.mean, marker.max
            )?;
        }
        Ok(())
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
