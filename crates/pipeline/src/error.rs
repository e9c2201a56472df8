//! Error types for encoding and persistence.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while deriving encodings.
#[derive(Error, Debug)]
pub enum EncodeError {
    /// A movie title does not end in a parenthesized year
    #[error("Title {title:?} does not match the `Name (Year)` pattern")]
    TitlePattern { title: String },

    /// The year digits in a title do not fit the year type
    #[error("Year in title {title:?} is out of range")]
    YearOutOfRange { title: String },

    /// A token was not found in its vocabulary map.
    ///
    /// Cannot occur when maps are built from the same corpus they are
    /// applied to; it becomes reachable once maps are reused across
    /// differing corpora.
    #[error("{kind} token {token:?} is missing from its vocabulary")]
    MissingToken { kind: &'static str, token: String },

    /// An age bracket was not found in the age map
    #[error("Age bracket {age} is missing from the age map")]
    MissingAge { age: u8 },
}

/// Errors that can occur while writing or reading artifacts.
#[derive(Error, Debug)]
pub enum PersistError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Serialization error on {path}: {source}")]
    Codec {
        path: PathBuf,
        source: bincode::Error,
    },
}
