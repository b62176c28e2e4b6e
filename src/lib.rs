//! csvgap - find rows in a target CSV group missing from a reference group
//!
//! Combines each group of CSV files into one table, then computes the
//! target rows whose selected-column value does not appear in the
//! reference group's selected column.

pub mod combine;
pub mod config;
pub mod diff;
pub mod error;
pub mod model;
pub mod output;
pub mod parser;

pub use combine::{combine_files, combine_tables};
pub use config::Config;
pub use diff::{missing_rows, DiffResult, DiffStats};
pub use error::{Error, Result};
pub use model::Table;
