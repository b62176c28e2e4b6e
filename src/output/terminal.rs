//! Human-readable terminal output

use std::io::Write;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::diff::{DiffResult, DiffStats};
use crate::error::Result;
use crate::model::Table;

use super::OutputFormatter;

/// Terminal output: summary statistics and the missing rows as a
/// box-drawn table
pub struct TerminalOutput {
    color_choice: ColorChoice,
}

impl TerminalOutput {
    pub fn new() -> Self {
        Self {
            color_choice: ColorChoice::Auto,
        }
    }

    pub fn with_color_choice(color_choice: ColorChoice) -> Self {
        Self { color_choice }
    }

    /// Render to stdout with the verdict line colored
    pub fn render_stdout(&self, result: &DiffResult) -> Result<()> {
        let mut stdout = StandardStream::stdout(self.color_choice);

        self.write_summary(&result.stats, &mut stdout)?;

        let color = if result.stats.all_matched() {
            Color::Green
        } else {
            Color::Yellow
        };
        stdout.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
        write_verdict(&result.stats, &mut stdout)?;
        stdout.reset()?;
        writeln!(stdout)?;

        self.write_missing_rows(result, &mut stdout)?;
        Ok(())
    }

    fn write_summary(&self, stats: &DiffStats, writer: &mut dyn Write) -> Result<()> {
        writeln!(
            writer,
            "Reference group: {} rows | Target group: {} rows",
            stats.reference_rows, stats.target_rows
        )?;
        if let Some(rate) = stats.match_rate() {
            writeln!(writer, "Match rate: {:.1}%", rate)?;
        }
        writeln!(writer)?;
        Ok(())
    }

    fn write_missing_rows(&self, result: &DiffResult, writer: &mut dyn Write) -> Result<()> {
        if result.stats.all_matched() {
            return Ok(());
        }
        writeln!(writer, "{}", build_table(&result.missing))?;
        Ok(())
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for TerminalOutput {
    fn render(&self, result: &DiffResult, writer: &mut dyn Write) -> Result<()> {
        self.write_summary(&result.stats, writer)?;
        write_verdict(&result.stats, writer)?;
        writeln!(writer)?;
        self.write_missing_rows(result, writer)?;
        Ok(())
    }
}

fn write_verdict(stats: &DiffStats, writer: &mut dyn Write) -> Result<()> {
    if stats.all_matched() {
        writeln!(
            writer,
            "All {} target rows were found in the reference group.",
            stats.target_rows
        )?;
    } else {
        writeln!(
            writer,
            "Found {} rows missing from the reference group:",
            stats.missing_rows
        )?;
    }
    Ok(())
}

/// Format a table with box-drawing borders
fn build_table(table: &Table) -> String {
    let headers: Vec<&str> = table.column_names().collect();
    if headers.is_empty() {
        return String::new();
    }

    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    let rows: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| {
            row.cells
                .iter()
                .enumerate()
                .map(|(i, cell)| {
                    let text = cell.display().into_owned();
                    if let Some(w) = widths.get_mut(i) {
                        *w = (*w).max(text.len());
                    }
                    text
                })
                .collect()
        })
        .collect();

    let border = |left: char, mid: char, right: char| {
        let mut line = String::new();
        line.push(left);
        for (i, &width) in widths.iter().enumerate() {
            line.push_str(&"─".repeat(width + 2));
            line.push(if i < widths.len() - 1 { mid } else { right });
        }
        line.push('\n');
        line
    };

    let format_row = |cells: &[String]| {
        let mut line = String::from("│");
        for (i, &width) in widths.iter().enumerate() {
            let text = cells.get(i).map(String::as_str).unwrap_or("");
            line.push_str(&format!(" {:width$} │", text, width = width));
        }
        line.push('\n');
        line
    };

    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();

    let mut output = String::new();
    output.push_str(&border('┌', '┬', '┐'));
    output.push_str(&format_row(&header_cells));
    output.push_str(&border('├', '┼', '┤'));
    for row in &rows {
        output.push_str(&format_row(row));
    }
    output.push_str(&border('└', '┴', '┘'));
    output
}
