//! Configuration handling for csvgap

use std::path::PathBuf;

/// Output format for comparison results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terminal" => Ok(OutputFormat::Terminal),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// One comparison request: the two file groups, the selected columns,
/// and how to deliver the result. Replaces any notion of ambient or
/// global state; callers construct one per run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Reference group: the "master list" files compared against
    pub reference_files: Vec<PathBuf>,
    /// Target group: the files being checked
    pub target_files: Vec<PathBuf>,
    /// Column selected from the reference group
    pub reference_column: String,
    /// Column selected from the target group
    pub target_column: String,
    /// Restrict every parsed file to this single column
    pub column_filter: Option<String>,
    /// Output format
    pub output_format: OutputFormat,
    /// Write the result CSV to this path instead of stdout
    pub output_path: Option<PathBuf>,
    /// Only show statistics, not the missing rows
    pub stats_only: bool,
}

impl Config {
    /// Create a new Config for one comparison
    pub fn new(
        reference_files: Vec<PathBuf>,
        target_files: Vec<PathBuf>,
        reference_column: impl Into<String>,
        target_column: impl Into<String>,
    ) -> Self {
        Self {
            reference_files,
            target_files,
            reference_column: reference_column.into(),
            target_column: target_column.into(),
            column_filter: None,
            output_format: OutputFormat::default(),
            output_path: None,
            stats_only: false,
        }
    }

    /// Restrict parsed files to a single column
    pub fn with_column_filter(mut self, column: impl Into<String>) -> Self {
        self.column_filter = Some(column.into());
        self
    }

    /// Set output format
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Write the result CSV to a file
    pub fn with_output_path(mut self, path: PathBuf) -> Self {
        self.output_path = Some(path);
        self
    }

    /// Enable stats-only mode
    pub fn with_stats_only(mut self, stats_only: bool) -> Self {
        self.stats_only = stats_only;
        self
    }
}
