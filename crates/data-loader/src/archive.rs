//! Reading the three tables straight out of the zip archive.
//!
//! Entries are decoded and parsed in memory; nothing is extracted to
//! disk.

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::RawTables;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};
use zip::ZipArchive;
use zip::result::ZipError;

/// Entry names inside `ml-1m.zip`.
pub const USERS_ENTRY: &str = "ml-1m/users.dat";
pub const MOVIES_ENTRY: &str = "ml-1m/movies.dat";
pub const RATINGS_ENTRY: &str = "ml-1m/ratings.dat";

impl RawTables {
    /// Load the three tables from the archive at `archive_path`.
    ///
    /// This is the main entry point for parsing. The tables come back in
    /// file order; the parsers enforce the declared schemas.
    pub fn load_from_archive(archive_path: &Path) -> Result<Self> {
        info!("loading tables from {}", archive_path.display());

        let file = File::open(archive_path)?;
        let mut archive = ZipArchive::new(file)?;

        let users = parser::parse_users(&read_entry_lines(&mut archive, USERS_ENTRY)?)?;
        let movies = parser::parse_movies(&read_entry_lines(&mut archive, MOVIES_ENTRY)?)?;
        let ratings = parser::parse_ratings(&read_entry_lines(&mut archive, RATINGS_ENTRY)?)?;

        let tables = RawTables {
            users,
            movies,
            ratings,
        };
        let (users, movies, ratings) = tables.counts();
        info!("loaded {users} users, {movies} movies, {ratings} ratings");

        Ok(tables)
    }
}

/// Read one archive entry and decode it as ISO-8859-1 lines.
///
/// The MovieLens files are Latin-1, not UTF-8; each byte maps directly
/// to the Unicode code point of the same value.
fn read_entry_lines(archive: &mut ZipArchive<File>, name: &str) -> Result<Vec<String>> {
    let mut entry = archive.by_name(name).map_err(|e| match e {
        ZipError::FileNotFound => DataLoadError::MissingEntry {
            name: name.to_string(),
        },
        other => DataLoadError::ArchiveError(other),
    })?;

    let mut bytes = Vec::new();
    entry.read_to_end(&mut bytes)?;
    debug!("read {} ({} bytes)", name, bytes.len());

    let content: String = bytes.iter().map(|&b| b as char).collect();
    Ok(content.lines().map(str::to_string).collect())
}
