//! # Data Loader Crate
//!
//! This crate handles reading the MovieLens 1M tables out of the
//! downloaded zip archive.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (User, Movie, Rating, RawTables)
//! - **archive**: Read `.dat` entries out of the zip without extracting
//! - **parser**: Parse `::`-delimited rows into Rust structs
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::RawTables;
//! use std::path::Path;
//!
//! let tables = RawTables::load_from_archive(Path::new("data/ml-1m.zip"))?;
//! let (users, movies, ratings) = tables.counts();
//! println!("{users} users, {movies} movies, {ratings} ratings");
//! ```

// Public modules
pub mod archive;
pub mod error;
pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use archive::{MOVIES_ENTRY, RATINGS_ENTRY, USERS_ENTRY};
pub use error::{DataLoadError, Result};
pub use types::{
    // Type aliases
    UserId,
    MovieId,
    // Core types
    User,
    Movie,
    Rating,
    RawTables,
    // Enums
    Gender,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_indices_are_fixed() {
        assert_eq!(Gender::Female.index(), 0);
        assert_eq!(Gender::Male.index(), 1);
        assert_eq!(Gender::Female.token(), "F");
        assert_eq!(Gender::Male.token(), "M");
    }

    #[test]
    fn empty_tables_count_zero() {
        let tables = RawTables::default();
        assert_eq!(tables.counts(), (0, 0, 0));
    }
}
