//! CSV export of the result table (the downloadable artifact)

use std::io::Write;

use crate::diff::DiffResult;
use crate::error::Result;
use crate::model::{CellValue, Table};

use super::OutputFormatter;

/// Default file name for the exported result
pub const DEFAULT_ARTIFACT_NAME: &str = "rows_not_in_group_a.csv";

/// MIME type for embedding callers that serve the artifact
pub const CSV_MIME_TYPE: &str = "text/csv";

/// CSV output formatter: header row first, the target table's column
/// names, no added or removed columns
pub struct CsvOutput;

impl OutputFormatter for CsvOutput {
    fn render(&self, result: &DiffResult, writer: &mut dyn Write) -> Result<()> {
        write_table(&result.missing, writer)
    }
}

/// Serialize a table as CSV. Null cells become empty fields.
pub fn write_table(table: &Table, writer: &mut dyn Write) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(table.columns.iter().map(|c| c.name.as_str()))?;
    for row in &table.rows {
        csv_writer.write_record(row.cells.iter().map(csv_field))?;
    }
    csv_writer.flush()?;

    Ok(())
}

fn csv_field(value: &CellValue) -> String {
    match value {
        CellValue::Null => String::new(),
        other => other.display().into_owned(),
    }
}
