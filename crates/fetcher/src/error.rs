//! Error types for the fetcher crate.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while fetching the dataset archive.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The HTTP request failed or returned a non-success status
    #[error("Failed to download archive: {0}")]
    Http(#[from] reqwest::Error),

    /// I/O error while creating the data directory or writing the archive
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The downloaded bytes do not match the published checksum.
    ///
    /// The partially trusted file is left on disk; it must be removed
    /// before retrying, since an existing file is never re-validated.
    #[error(
        "{path} is corrupted: expected MD5 {expected}, got {actual}. \
         Remove the file and try again."
    )]
    ChecksumMismatch {
        path: PathBuf,
        expected: String,
        actual: String,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, FetchError>;
