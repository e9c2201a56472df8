//! Binary artifacts written under the data directory.
//!
//! Four blobs at fixed relative names, bincode-encoded. The byte layout
//! is not a contract; only same-serializer round-trip fidelity is.
//! Existing files are overwritten without confirmation.

use crate::encode::{EncodingMaps, MovieFeatures, UserFeatures};
use crate::error::PersistError;
use crate::split::TrainTestSplit;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use tracing::debug;

/// The four vocabulary maps.
pub const META_FILE: &str = "meta.p";
/// The encoded users table.
pub const USERS_FILE: &str = "users.p";
/// The encoded movies table.
pub const MOVIES_FILE: &str = "movies.p";
/// The four-way train/test split.
pub const DATA_FILE: &str = "data.p";

fn write_blob<T: Serialize>(path: &Path, value: &T) -> Result<(), PersistError> {
    let file = File::create(path).map_err(|source| PersistError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    bincode::serialize_into(BufWriter::new(file), value).map_err(|source| PersistError::Codec {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("wrote {}", path.display());
    Ok(())
}

fn read_blob<T: DeserializeOwned>(path: &Path) -> Result<T, PersistError> {
    let file = File::open(path).map_err(|source| PersistError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    bincode::deserialize_from(BufReader::new(file)).map_err(|source| PersistError::Codec {
        path: path.to_path_buf(),
        source,
    })
}

pub fn save_meta(data_dir: &Path, maps: &EncodingMaps) -> Result<(), PersistError> {
    write_blob(&data_dir.join(META_FILE), maps)
}

pub fn load_meta(data_dir: &Path) -> Result<EncodingMaps, PersistError> {
    read_blob(&data_dir.join(META_FILE))
}

pub fn save_users(data_dir: &Path, users: &[UserFeatures]) -> Result<(), PersistError> {
    write_blob(&data_dir.join(USERS_FILE), &users)
}

pub fn load_users(data_dir: &Path) -> Result<Vec<UserFeatures>, PersistError> {
    read_blob(&data_dir.join(USERS_FILE))
}

pub fn save_movies(data_dir: &Path, movies: &[MovieFeatures]) -> Result<(), PersistError> {
    write_blob(&data_dir.join(MOVIES_FILE), &movies)
}

pub fn load_movies(data_dir: &Path) -> Result<Vec<MovieFeatures>, PersistError> {
    read_blob(&data_dir.join(MOVIES_FILE))
}

pub fn save_split(data_dir: &Path, split: &TrainTestSplit) -> Result<(), PersistError> {
    write_blob(&data_dir.join(DATA_FILE), split)
}

pub fn load_split(data_dir: &Path) -> Result<TrainTestSplit, PersistError> {
    read_blob(&data_dir.join(DATA_FILE))
}
