//! Set-difference engine over selected columns

use log::debug;
use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::{CellValue, Table};

/// Row counts for one comparison run
#[derive(Debug, Default, Clone, Serialize)]
pub struct DiffStats {
    pub reference_rows: usize,
    pub target_rows: usize,
    pub missing_rows: usize,
}

impl DiffStats {
    /// Target rows whose value was found in the reference set
    pub fn matched_rows(&self) -> usize {
        self.target_rows - self.missing_rows
    }

    /// Percentage of target rows found in the reference set.
    /// Undefined (None) when the target has no rows.
    pub fn match_rate(&self) -> Option<f64> {
        if self.target_rows == 0 {
            None
        } else {
            Some(self.matched_rows() as f64 / self.target_rows as f64 * 100.0)
        }
    }

    /// True when no target row is missing from the reference
    pub fn all_matched(&self) -> bool {
        self.missing_rows == 0
    }
}

/// Result of one comparison run
#[derive(Debug)]
pub struct DiffResult {
    /// Target rows whose selected-column value is absent from the
    /// reference column, in the target's original order
    pub missing: Table,
    /// Row counts
    pub stats: DiffStats,
}

/// Compute the rows of `target` whose `target_column` value does not
/// appear in `reference`'s `reference_column`.
///
/// Callers are expected to select column names from the tables' actual
/// columns; a name that does not exist fails with `ColumnNotFound`.
/// Null cells are ordinary values: a null in the reference column
/// excludes null-valued target rows. Values are compared exactly as
/// parsed, with no case, whitespace, or type normalization.
pub fn missing_rows(
    reference: &Table,
    target: &Table,
    reference_column: &str,
    target_column: &str,
) -> Result<DiffResult> {
    let ref_idx = reference
        .column_index(reference_column)
        .ok_or_else(|| Error::column_not_found(reference_column, "reference"))?;
    let target_idx = target
        .column_index(target_column)
        .ok_or_else(|| Error::column_not_found(target_column, "target"))?;

    // Distinct values of the reference column
    let null = CellValue::Null;
    let seen: FxHashSet<&CellValue> = reference
        .rows
        .iter()
        .map(|row| row.get(ref_idx).unwrap_or(&null))
        .collect();

    debug!(
        "reference column '{}' has {} distinct values",
        reference_column,
        seen.len()
    );

    // Stable filter: keep target rows in their original order
    let mut missing = Table::new(target.columns.clone());
    for row in &target.rows {
        let value = row.get(target_idx).unwrap_or(&null);
        if !seen.contains(value) {
            missing.add_row(row.cells.clone(), row.source_line);
        }
    }

    let stats = DiffStats {
        reference_rows: reference.row_count(),
        target_rows: target.row_count(),
        missing_rows: missing.row_count(),
    };

    debug!(
        "{} of {} target rows missing from reference",
        stats.missing_rows, stats.target_rows
    );

    Ok(DiffResult { missing, stats })
}
