//! csvgap - find rows in a target CSV group missing from a reference group

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use csvgap::combine::combine_files;
use csvgap::config::{Config, OutputFormat};
use csvgap::diff::missing_rows;
use csvgap::output::{render_to_stdout, write_table, TerminalOutput, DEFAULT_ARTIFACT_NAME};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliOutputFormat {
    Terminal,
    Json,
    Csv,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(f: CliOutputFormat) -> Self {
        match f {
            CliOutputFormat::Terminal => OutputFormat::Terminal,
            CliOutputFormat::Json => OutputFormat::Json,
            CliOutputFormat::Csv => OutputFormat::Csv,
        }
    }
}

/// Find rows in a target CSV group missing from a reference CSV group
#[derive(Parser, Debug)]
#[command(name = "csvgap")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Reference group: the "master list" CSV files to compare against
    #[arg(short, long, num_args = 1.., required = true)]
    reference: Vec<PathBuf>,

    /// Target group: the CSV files to check
    #[arg(short, long, num_args = 1.., required = true)]
    target: Vec<PathBuf>,

    /// Column to compare in the reference group
    #[arg(short = 'c', long)]
    reference_column: String,

    /// Column to compare in the target group (defaults to the reference column)
    #[arg(long)]
    target_column: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal")]
    format: CliOutputFormat,

    /// Write the missing rows as CSV to this path (a directory gets
    /// the standard artifact name inside it)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Only show statistics, not the missing rows
    #[arg(long)]
    stats_only: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(has_missing) => {
            if has_missing {
                ExitCode::from(1) // Missing rows found
            } else {
                ExitCode::SUCCESS // Every target row matched
            }
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<bool> {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    let target_column = cli
        .target_column
        .unwrap_or_else(|| cli.reference_column.clone());

    let mut config = Config::new(
        cli.reference,
        cli.target,
        cli.reference_column,
        target_column,
    )
    .with_output_format(cli.format.into())
    .with_stats_only(cli.stats_only);
    if let Some(path) = cli.output {
        config = config.with_output_path(path);
    }

    let reference = combine_files(&config.reference_files, config.column_filter.as_deref())
        .context("failed to load reference group")?;
    let target = combine_files(&config.target_files, config.column_filter.as_deref())
        .context("failed to load target group")?;

    let (reference, target) = match (reference, target) {
        (Some(r), Some(t)) => (r, t),
        _ => {
            // Not an error: an empty group means there is nothing to compare yet
            println!("Both groups need at least one file before comparison can run.");
            return Ok(false);
        }
    };

    let result = missing_rows(
        &reference,
        &target,
        &config.reference_column,
        &config.target_column,
    )?;

    if config.stats_only {
        println!("Reference rows: {}", result.stats.reference_rows);
        println!("Target rows:    {}", result.stats.target_rows);
        println!("Missing rows:   {}", result.stats.missing_rows);
        if let Some(rate) = result.stats.match_rate() {
            println!("Match rate:     {:.1}%", rate);
        }
        return Ok(!result.stats.all_matched());
    }

    if let Some(ref path) = config.output_path {
        // A directory gets the standard artifact name inside it
        let path = if path.is_dir() {
            path.join(DEFAULT_ARTIFACT_NAME)
        } else {
            path.clone()
        };
        let file = File::create(&path)
            .with_context(|| format!("failed to create output file: {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        write_table(&result.missing, &mut writer)?;
        println!(
            "Wrote {} rows to {}",
            result.stats.missing_rows,
            path.display()
        );
        return Ok(!result.stats.all_matched());
    }

    match config.output_format {
        OutputFormat::Terminal => TerminalOutput::new().render_stdout(&result)?,
        format => render_to_stdout(&result, format)?,
    }

    Ok(!result.stats.all_matched())
}
