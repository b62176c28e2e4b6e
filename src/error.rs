//! Error types for csvgap operations

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read {file}: {source}")]
    Read {
        file: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {file}: {source}")]
    Parse {
        file: String,
        #[source]
        source: csv::Error,
    },

    #[error("{file} has no header row")]
    MissingHeader { file: String },

    #[error("schema mismatch in {file}: {message}")]
    SchemaMismatch { file: String, message: String },

    #[error("column '{column}' not found in {table} table")]
    ColumnNotFound { column: String, table: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV output error: {0}")]
    CsvOutput(#[from] csv::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn read(file: impl Into<String>, source: std::io::Error) -> Self {
        Self::Read {
            file: file.into(),
            source,
        }
    }

    pub fn parse(file: impl Into<String>, source: csv::Error) -> Self {
        Self::Parse {
            file: file.into(),
            source,
        }
    }

    pub fn schema_mismatch(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SchemaMismatch {
            file: file.into(),
            message: message.into(),
        }
    }

    pub fn column_not_found(column: impl Into<String>, table: impl Into<String>) -> Self {
        Self::ColumnNotFound {
            column: column.into(),
            table: table.into(),
        }
    }
}
