//! Joint-angle comparison of two animations of the same capture.
//!
//! Typical use is comparing the fits produced by two body models. Both
//! tables must have the same shape; differences are reported in degrees.

use std::io::{self, Write};

use serde::Serialize;

use crate::error::TableError;
use crate::table::SampleTable;

/// Difference statistics of one DOF.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DofDifference {
    /// State column index.
    pub index: usize,
    /// DOF label.
    pub name: String,
    /// Mean of `|left - right|` in degrees.
    pub mean_abs_deg: f64,
    /// Largest `|left - right|` in degrees.
    pub max_abs_deg: f64,
}

/// Per-DOF differences between two animations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AngleComparison {
    /// Number of compared rows.
    pub rows: usize,
    /// One entry per state column.
    pub dofs: Vec<DofDifference>,
}

impl AngleComparison {
    /// Compares `left` against `right` column by column. `name` supplies
    /// the label of each column.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::ShapeMismatch`] if the tables differ in row or
    /// column count.
    pub fn compute(
        left: &SampleTable,
        right: &SampleTable,
        name: impl Fn(usize) -> String,
    ) -> Result<Self, TableError> {
        if left.row_count() != right.row_count() || left.width() != right.width() {
            return Err(TableError::ShapeMismatch {
                left_rows: left.row_count(),
                left_cols: left.width(),
                right_rows: right.row_count(),
                right_cols: right.width(),
            });
        }

        let width = left.width();
        let mut sums = vec![0.0; width];
        let mut maxima = vec![0.0_f64; width];

        for (a, b) in left.rows().zip(right.rows()) {
            for col in 0..width {
                let diff = (a[col] - b[col]).to_degrees().abs();
                sums[col] += diff;
                maxima[col] = maxima[col].max(diff);
            }
        }

        let rows = left.row_count();
        let dofs = (0..width)
            .map(|index| DofDifference {
                index,
                name: name(index),
                mean_abs_deg: sums[index] / rows as f64,
                max_abs_deg: maxima[index],
            })
            .collect();

        Ok(Self { rows, dofs })
    }

    /// Writes a human-readable table.
    ///
    /// # Errors
    ///
    /// Propagates write failures.
    pub fn write_human<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let name_width = self
            .dofs
            .iter()
            .map(|d| d.name.len())
            .max()
            .unwrap_or(0)
            .max("dof".len());

        writeln!(out, "rows: {}", self.rows)?;
        writeln!(out)?;
        writeln!(
            out,
            "{:>3}  {:<name_width$}  {:>12}  {:>12}",
            "#", "dof", "mean (deg)", "max (deg)"
        )?;
        for dof in &self.dofs {
            writeln!(
                out,
                "{:>3}  {:<name_width$}  {:>12.4}  {:>12.4}",
                dof.index, dof.name, dof.mean_abs_deg, dof.max_abs_deg
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn table(values: &[[f64; 2]]) -> SampleTable {
        let timestamps = (0..values.len()).map(|i| i as f64 * 0.01).collect();
        SampleTable::from_rows(
            timestamps,
            values.iter().map(|r| r.to_vec()).collect(),
            100.0,
        )
        .unwrap()
    }

    #[test]
    fn differences_in_degrees() {
        let left = table(&[[0.0, PI], [PI / 2.0, 0.0]]);
        let right = table(&[[0.0, 0.0], [0.0, 0.0]]);
        let comparison = AngleComparison::compute(&left, &right, |i| format!("q{i}")).unwrap();

        assert_eq!(comparison.rows, 2);
        assert_eq!(comparison.dofs[1].name, "q1");
        assert!((comparison.dofs[0].mean_abs_deg - 45.0).abs() < 1e-9);
        assert!((comparison.dofs[0].max_abs_deg - 90.0).abs() < 1e-9);
        assert!((comparison.dofs[1].max_abs_deg - 180.0).abs() < 1e-9);
    }

    #[test]
    fn shape_mismatch_rejected() {
        let left = table(&[[0.0, 0.0], [0.0, 0.0], [0.0, 0.0]]);
        let right = table(&[[0.0, 0.0], [0.0, 0.0]]);
        let err = AngleComparison::compute(&left, &right, |i| i.to_string()).unwrap_err();
        assert!(matches!(
            err,
            TableError::ShapeMismatch {
                left_rows: 3,
                right_rows: 2,
                ..
            }
        ));
    }

    #[test]
    fn human_table() {
        let left = table(&[[0.1, 0.0], [0.1, 0.0]]);
        let comparison =
            AngleComparison::compute(&left, &left, |i| ["Knee", "Hip"][i].to_string()).unwrap();
        let mut out = Vec::new();
        comparison.write_human(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("rows: 2\n"));
        assert!(text.contains("Knee"));
        assert!(text.contains("0.0000"));
    }
}
