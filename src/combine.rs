//! Group aggregation: concatenate one group's CSV files into a single table

use std::path::PathBuf;

use indexmap::IndexSet;
use log::debug;

use crate::error::{Error, Result};
use crate::model::{CellValue, Table};
use crate::parser;

/// Parse and combine a group of CSV files from disk.
///
/// Returns `Ok(None)` when `paths` is empty: an empty group is a
/// not-ready state, not an error.
pub fn combine_files(paths: &[PathBuf], column_filter: Option<&str>) -> Result<Option<Table>> {
    let mut sources = Vec::with_capacity(paths.len());
    for path in paths {
        let name = path.display().to_string();
        let table = parser::parse_file(path)?;
        sources.push((name, table));
    }
    combine_tables(sources, column_filter)
}

/// Concatenate already-parsed tables into one, in input order, with row
/// order preserved within and across sources. Row identity is
/// reassigned positionally.
///
/// With a `column_filter`, each source is restricted to that single column
/// before concatenation; a source lacking the column is a schema
/// mismatch. Without a filter, all sources must present the same
/// column-name set; sources whose columns match as a set but differ in
/// order are realigned to the first source's order.
pub fn combine_tables(
    sources: Vec<(String, Table)>,
    column_filter: Option<&str>,
) -> Result<Option<Table>> {
    let mut iter = sources.into_iter();
    let (first_name, first) = match iter.next() {
        Some(source) => source,
        None => return Ok(None),
    };

    let first = apply_filter(&first_name, first, column_filter)?;
    let expected: IndexSet<String> = first.column_names().map(str::to_string).collect();

    let mut combined = Table::new(first.columns.clone());
    combined.rows = first.rows;

    for (name, table) in iter {
        let table = apply_filter(&name, table, column_filter)?;

        let found: IndexSet<String> = table.column_names().map(str::to_string).collect();
        if found != expected {
            return Err(Error::schema_mismatch(
                &name,
                format!(
                    "expected columns [{}], found [{}]",
                    join(&expected),
                    join(&found)
                ),
            ));
        }

        // Columns match as a set; realign to the first source's order
        let mapping: Vec<usize> = combined
            .columns
            .iter()
            .filter_map(|c| table.column_index(&c.name))
            .collect();

        for row in &table.rows {
            let cells: Vec<CellValue> = mapping
                .iter()
                .map(|&i| row.get(i).cloned().unwrap_or(CellValue::Null))
                .collect();
            combined.add_row(cells, row.source_line);
        }
    }

    combined.refresh_column_types();

    debug!(
        "combined group: {} rows, {} columns",
        combined.row_count(),
        combined.column_count()
    );

    Ok(Some(combined))
}

fn apply_filter(name: &str, table: Table, column_filter: Option<&str>) -> Result<Table> {
    match column_filter {
        None => Ok(table),
        Some(filter) => table.project(filter).ok_or_else(|| {
            Error::schema_mismatch(
                name,
                format!(
                    "column '{}' not present (columns: {})",
                    filter,
                    format_columns(&table)
                ),
            )
        }),
    }
}

fn format_columns(table: &Table) -> String {
    table.column_names().collect::<Vec<_>>().join(", ")
}

fn join(names: &IndexSet<String>) -> String {
    names.iter().cloned().collect::<Vec<_>>().join(", ")
}
