//! Uniformly sampled animation table.
//!
//! Column 0 of the source file is a timestamp in seconds; the remaining
//! columns are the per-DOF state values of one captured frame. The table is
//! immutable once loaded.

use std::io::Read;
use std::path::Path;

use crate::error::{NodeDataError, TableError};

/// An in-memory table of `(timestamp, state_vector)` rows sampled at a
/// fixed rate.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleTable {
    timestamps: Vec<f64>,
    rows: Vec<Vec<f64>>,
    sample_rate: f64,
}

impl SampleTable {
    /// Builds a table from already parsed rows.
    ///
    /// # Errors
    ///
    /// Returns [`TableError`] if there are fewer than two rows, no state
    /// columns, or rows of differing width.
    pub fn from_rows(
        timestamps: Vec<f64>,
        rows: Vec<Vec<f64>>,
        sample_rate: f64,
    ) -> Result<Self, TableError> {
        if rows.len() < 2 || timestamps.len() != rows.len() {
            return Err(TableError::TooFewRows {
                rows: rows.len().min(timestamps.len()),
                required: 2,
            });
        }
        let width = rows[0].len();
        if width == 0 {
            return Err(TableError::NoStateColumns);
        }
        if let Some((index, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(TableError::Ragged {
                line: index as u64 + 1,
                expected: width + 1,
                found: row.len() + 1,
            });
        }
        Ok(Self {
            timestamps,
            rows,
            sample_rate,
        })
    }

    /// Reads a comma-delimited table from `reader`.
    ///
    /// Blank lines are skipped, as are lines ahead of the first data row
    /// whose first field is not a number (such as a header). Once data has
    /// started every field must parse as a number.
    ///
    /// # Errors
    ///
    /// Returns a CSV error if the reader fails, or a [`TableError`] for
    /// unparsable fields and malformed shapes.
    pub fn from_reader<R: Read>(reader: R, sample_rate: f64) -> Result<Self, NodeDataError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut timestamps = Vec::new();
        let mut rows = Vec::new();
        let mut expected_width: Option<usize> = None;

        for record in csv_reader.records() {
            let record = record?;
            let line = record.position().map_or(0, csv::Position::line);

            let Some(first) = record.get(0) else {
                continue;
            };
            let timestamp = match first.parse::<f64>() {
                Ok(timestamp) => timestamp,
                Err(_) if timestamps.is_empty() => {
                    tracing::debug!(line, "skipping leading non-numeric line");
                    continue;
                }
                Err(_) => {
                    return Err(TableError::Parse {
                        line,
                        column: 0,
                        value: first.to_string(),
                    }
                    .into());
                }
            };

            let mut state = Vec::with_capacity(record.len().saturating_sub(1));
            for (column, field) in record.iter().enumerate().skip(1) {
                let value = field.parse::<f64>().map_err(|_| TableError::Parse {
                    line,
                    column,
                    value: field.to_string(),
                })?;
                state.push(value);
            }

            match expected_width {
                None => expected_width = Some(record.len()),
                Some(expected) if expected != record.len() => {
                    return Err(TableError::Ragged {
                        line,
                        expected,
                        found: record.len(),
                    }
                    .into());
                }
                Some(_) => {}
            }

            timestamps.push(timestamp);
            rows.push(state);
        }

        Ok(Self::from_rows(timestamps, rows, sample_rate)?)
    }

    /// Loads a table from a file on disk.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be opened, otherwise the
    /// errors of [`SampleTable::from_reader`].
    pub fn load(path: &Path, sample_rate: f64) -> Result<Self, NodeDataError> {
        let file = std::fs::File::open(path)?;
        let table = Self::from_reader(std::io::BufReader::new(file), sample_rate)?;
        tracing::info!(
            path = %path.display(),
            rows = table.row_count(),
            columns = table.width(),
            "loaded sample table"
        );
        Ok(table)
    }

    /// Number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of state columns (the timestamp column excluded).
    #[must_use]
    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    /// Samples per second.
    #[must_use]
    pub const fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Timestamp stored in column 0 of `row`.
    #[must_use]
    pub fn timestamp(&self, row: usize) -> Option<f64> {
        self.timestamps.get(row).copied()
    }

    /// State values of `row`.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    /// All rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Values of state column `col` for the rows in `range`.
    pub fn column(
        &self,
        col: usize,
        range: std::ops::RangeInclusive<usize>,
    ) -> impl Iterator<Item = f64> + '_ {
        self.rows[range].iter().map(move |row| row[col])
    }

    /// Returns the first row whose spacing to its predecessor deviates from
    /// `1 / sample_rate` by more than `tolerance` seconds.
    #[must_use]
    pub fn check_uniform_spacing(&self, tolerance: f64) -> Option<usize> {
        let expected = 1.0 / self.sample_rate;
        self.timestamps
            .windows(2)
            .position(|pair| ((pair[1] - pair[0]) - expected).abs() > tolerance)
            .map(|index| index + 1)
    }
}
