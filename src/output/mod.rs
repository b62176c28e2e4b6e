//! Output formatting for comparison results

mod csv;
mod json;
mod terminal;

use std::io::Write;

use crate::config::OutputFormat;
use crate::diff::DiffResult;
use crate::error::Result;

pub use self::csv::{write_table, CsvOutput, CSV_MIME_TYPE, DEFAULT_ARTIFACT_NAME};
pub use json::JsonOutput;
pub use terminal::TerminalOutput;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Render a comparison result to a writer
    fn render(&self, result: &DiffResult, writer: &mut dyn Write) -> Result<()>;
}

/// Factory for creating output formatters
pub struct OutputFactory;

impl OutputFactory {
    /// Create an output formatter based on format type
    pub fn create(format: OutputFormat) -> Box<dyn OutputFormatter> {
        match format {
            OutputFormat::Terminal => Box::new(TerminalOutput::new()),
            OutputFormat::Json => Box::new(JsonOutput::new()),
            OutputFormat::Csv => Box::new(CsvOutput),
        }
    }
}

/// Render a comparison result to stdout
pub fn render_to_stdout(result: &DiffResult, format: OutputFormat) -> Result<()> {
    let formatter = OutputFactory::create(format);
    let mut stdout = std::io::stdout();
    formatter.render(result, &mut stdout)
}
