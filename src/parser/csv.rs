//! CSV file parser

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};
use crate::model::{CellValue, Column, Table};

/// Parse a CSV file from disk, using the first line as the header row.
pub fn parse_file(path: &Path) -> Result<Table> {
    let name = path.display().to_string();
    let file = File::open(path).map_err(|e| Error::read(&name, e))?;
    parse_reader(&name, BufReader::new(file))
}

/// Parse CSV contents from any reader. `name` identifies the source in
/// error messages (a file name for CLI callers, an upload name for
/// embedding callers).
pub fn parse_reader<R: Read>(name: &str, reader: R) -> Result<Table> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| Error::parse(name, e))?
        .clone();

    if headers.is_empty() {
        return Err(Error::MissingHeader { file: name.into() });
    }

    let columns: Vec<Column> = headers
        .iter()
        .enumerate()
        .map(|(i, col_name)| Column::new(col_name.to_string(), i))
        .collect();

    let mut table = Table::new(columns);

    for (line_num, result) in csv_reader.records().enumerate() {
        let record = result.map_err(|e| Error::parse(name, e))?;

        let cells: Vec<CellValue> = record.iter().map(parse_cell_value).collect();

        // Pad with nulls if row has fewer columns
        let cells = if cells.len() < table.column_count() {
            let mut padded = cells;
            padded.resize(table.column_count(), CellValue::Null);
            padded
        } else {
            cells
        };

        table.add_row(cells, line_num + 2); // +2 for 1-indexing and header
    }

    table.refresh_column_types();

    debug!(
        "parsed {}: {} rows, {} columns",
        name,
        table.row_count(),
        table.column_count()
    );

    Ok(table)
}

/// Parse a string value into a CellValue with type inference
fn parse_cell_value(s: &str) -> CellValue {
    let trimmed = s.trim();

    // Check for empty/null
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("null") || trimmed == "NA" {
        return CellValue::Null;
    }

    // Try parsing as boolean
    if trimmed.eq_ignore_ascii_case("true") || trimmed.eq_ignore_ascii_case("yes") {
        return CellValue::Bool(true);
    }
    if trimmed.eq_ignore_ascii_case("false") || trimmed.eq_ignore_ascii_case("no") {
        return CellValue::Bool(false);
    }

    // Try parsing as integer
    if let Ok(i) = trimmed.parse::<i64>() {
        return CellValue::Int(i);
    }

    // Try parsing as float
    if let Ok(f) = trimmed.parse::<f64>() {
        return CellValue::Float(f);
    }

    // Try parsing as date
    if let Ok(date) = chrono::NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return CellValue::Date(date);
    }

    // Try parsing as datetime (ISO 8601)
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return CellValue::DateTime(dt);
    }
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
        return CellValue::DateTime(dt);
    }

    // Default to string
    CellValue::String(Cow::Owned(trimmed.to_string()))
}
