//! JSON output format

use std::io::Write;

use serde::Serialize;

use crate::diff::{DiffResult, DiffStats};
use crate::error::Result;
use crate::model::CellValue;

use super::OutputFormatter;

/// JSON output formatter
pub struct JsonOutput {
    pretty: bool,
}

impl JsonOutput {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct JsonCell {
    column: String,
    value: serde_json::Value,
}

#[derive(Serialize)]
struct JsonRow {
    source_line: usize,
    cells: Vec<JsonCell>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    stats: &'a DiffStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    match_rate: Option<f64>,
    missing_rows: Vec<JsonRow>,
}

fn cell_value_to_json(value: &CellValue) -> serde_json::Value {
    match value {
        CellValue::Null => serde_json::Value::Null,
        CellValue::Bool(b) => serde_json::Value::Bool(*b),
        CellValue::Int(i) => serde_json::json!(*i),
        CellValue::Float(f) => serde_json::json!(*f),
        CellValue::String(s) => serde_json::Value::String(s.to_string()),
        CellValue::Date(d) => serde_json::Value::String(d.to_string()),
        CellValue::DateTime(dt) => serde_json::Value::String(dt.to_string()),
    }
}

impl OutputFormatter for JsonOutput {
    fn render(&self, result: &DiffResult, writer: &mut dyn Write) -> Result<()> {
        let missing_rows: Vec<JsonRow> = result
            .missing
            .rows
            .iter()
            .map(|row| JsonRow {
                source_line: row.source_line,
                cells: row
                    .cells
                    .iter()
                    .enumerate()
                    .map(|(i, cell)| JsonCell {
                        column: result
                            .missing
                            .columns
                            .get(i)
                            .map(|c| c.name.clone())
                            .unwrap_or_else(|| format!("column_{}", i)),
                        value: cell_value_to_json(cell),
                    })
                    .collect(),
            })
            .collect();

        let report = JsonReport {
            stats: &result.stats,
            match_rate: result.stats.match_rate(),
            missing_rows,
        };

        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, &report)?;
        } else {
            serde_json::to_writer(&mut *writer, &report)?;
        }
        writeln!(writer)?;

        Ok(())
    }
}
