//! Parser layer for reading delimited-text files

mod csv;

pub use self::csv::{parse_file, parse_reader};
