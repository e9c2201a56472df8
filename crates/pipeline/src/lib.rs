//! Pipeline for encoding, joining, splitting and persisting the
//! MovieLens tables.
//!
//! This crate provides:
//! - Vocab and EncodingMaps for corpus-derived dense indices
//! - Per-row encodings (gender/age indices, multi-hot genres, title
//!   index vectors)
//! - The ratings⋈users⋈movies inner join with label separation
//! - The seeded train/test split
//! - Bincode persistence for the four output blobs
//!
//! ## Architecture
//! The stages run strictly forward; each consumes the previous stage's
//! output and produces a fresh structure:
//! 1. `encode_dataset` builds the maps and the encoded reference tables
//! 2. `join_tables` denormalizes one row per rating and separates labels
//! 3. `train_test_split` partitions rows with a fixed seed
//! 4. `persist` writes `meta.p`, `users.p`, `movies.p` and `data.p`
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{encode_dataset, join_tables, train_test_split, persist};
//! use pipeline::split::{SPLIT_SEED, TEST_FRACTION};
//!
//! let encoded = encode_dataset(&tables)?;
//! let joined = join_tables(&tables.ratings, &encoded.users, &encoded.movies);
//! let split = train_test_split(joined, TEST_FRACTION, SPLIT_SEED);
//!
//! persist::save_meta(data_dir, &encoded.maps)?;
//! persist::save_users(data_dir, &encoded.users)?;
//! persist::save_movies(data_dir, &encoded.movies)?;
//! persist::save_split(data_dir, &split)?;
//! ```

pub mod encode;
pub mod error;
pub mod join;
pub mod persist;
pub mod split;
pub mod vocab;

// Re-export main types
pub use encode::{
    EncodedTables, EncodingMaps, MovieFeatures, TITLE_VECTOR_LEN, UserFeatures, encode_dataset,
};
pub use error::{EncodeError, PersistError};
pub use join::{FeatureRow, JoinedTable, join_tables};
pub use split::{SPLIT_SEED, TEST_FRACTION, TrainTestSplit, train_test_split};
pub use vocab::Vocab;
