//! Error types for the data-loader crate.

use thiserror::Error;

/// Errors that can occur while reading and parsing the archive tables.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// I/O error occurred while reading the archive
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The archive itself could not be read
    #[error("Failed to read archive: {0}")]
    ArchiveError(#[from] zip::result::ZipError),

    /// A required entry is not present inside the archive
    #[error("Archive entry not found: {name}")]
    MissingEntry { name: String },

    /// Line in a data entry couldn't be parsed
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },

    /// A data field had an invalid value
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// Declared number of columns in a row doesn't match actual
    #[error("Expected {expected} fields but found {found} at line {line} in {file}")]
    FieldCountMismatch {
        file: String,
        expected: usize,
        found: usize,
        line: usize,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
