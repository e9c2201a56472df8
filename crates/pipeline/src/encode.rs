//! Corpus-derived categorical encodings.
//!
//! All maps are built in one pass over the full corpus and then applied
//! per row. Index assignment is stably ordered: ascending bracket value
//! for ages, first occurrence for genres and title words. Applying a
//! fixed map is deterministic; building one is deterministic given the
//! corpus order.

use crate::error::EncodeError;
use crate::vocab::Vocab;
use data_loader::{Gender, Movie, MovieId, RawTables, User, UserId};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::info;

/// Fixed length of every title index vector.
pub const TITLE_VECTOR_LEN: usize = 15;

/// Anchored `Name (Year)` pattern; the name group is kept verbatim,
/// trailing whitespace included.
static TITLE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.*)\((\d+)\)$").expect("title pattern is valid"));

/// The four vocabulary maps, persisted together as `meta.p`.
///
/// Downstream consumers need these exact assignments to interpret the
/// encoded features, so they are part of the pipeline's output rather
/// than an internal detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodingMaps {
    /// Age bracket code to dense index, ascending bracket order.
    pub age: BTreeMap<u8, u32>,
    /// Gender token to dense index, fixed {F: 0, M: 1}.
    pub gender: BTreeMap<String, u32>,
    /// Genre token to dense index, first-occurrence order.
    pub genres: Vocab,
    /// Title word to dense index, first-occurrence order starting at 1;
    /// 0 is the padding value.
    pub words: Vocab,
}

/// A user row with its derived index columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserFeatures {
    pub id: UserId,
    pub gender: Gender,
    pub age: u8,
    pub occupation: u8,
    pub gender_index: u32,
    pub age_index: u32,
}

/// A movie row with its derived columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieFeatures {
    pub id: MovieId,
    pub title: String,
    pub title_without_year: String,
    pub year: u16,
    pub genres: Vec<String>,
    /// One slot per genre vocabulary entry, 1 where the movie has the
    /// genre.
    pub genres_multi_hot: Vec<u8>,
    /// Exactly [`TITLE_VECTOR_LEN`] word indices, zero-padded.
    pub title_index: Vec<u32>,
}

/// The encoded users and movies tables plus the maps that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedTables {
    pub maps: EncodingMaps,
    pub users: Vec<UserFeatures>,
    pub movies: Vec<MovieFeatures>,
}

/// Build the vocabulary maps from `tables` and encode both reference
/// tables.
pub fn encode_dataset(tables: &RawTables) -> Result<EncodedTables, EncodeError> {
    // Split every title up front; a non-matching title is fatal.
    let split_titles = tables
        .movies
        .iter()
        .map(|movie| split_title(&movie.title))
        .collect::<Result<Vec<_>, _>>()?;

    let maps = build_maps(&tables.users, &tables.movies, &split_titles);
    let users = encode_users(&tables.users, &maps)?;
    let movies = encode_movies(&tables.movies, &split_titles, &maps)?;

    info!(
        "built maps: {} ages, {} genders, {} genres, {} title words",
        maps.age.len(),
        maps.gender.len(),
        maps.genres.len(),
        maps.words.len(),
    );

    Ok(EncodedTables {
        maps,
        users,
        movies,
    })
}

/// One pass over the corpus to assign every dense index.
fn build_maps(users: &[User], movies: &[Movie], split_titles: &[(String, u16)]) -> EncodingMaps {
    // Distinct brackets in ascending order, then rank them.
    let distinct_ages: BTreeSet<u8> = users.iter().map(|user| user.age).collect();
    let age = distinct_ages
        .into_iter()
        .enumerate()
        .map(|(index, bracket)| (bracket, index as u32))
        .collect();

    let gender = [Gender::Female, Gender::Male]
        .into_iter()
        .map(|g| (g.token().to_string(), g.index()))
        .collect();

    let mut genres = Vocab::new();
    for movie in movies {
        for genre in &movie.genres {
            genres.get_or_insert(genre);
        }
    }

    let mut words = Vocab::with_offset(1);
    for (name, _year) in split_titles {
        for word in name.split_whitespace() {
            words.get_or_insert(word);
        }
    }

    EncodingMaps {
        age,
        gender,
        genres,
        words,
    }
}

/// Split a `Name (Year)` title into its name and year parts.
///
/// The name is returned exactly as matched, so `"Toy Story (1995)"`
/// yields `("Toy Story ", 1995)`.
pub fn split_title(title: &str) -> Result<(String, u16), EncodeError> {
    let captures = TITLE_PATTERN
        .captures(title)
        .ok_or_else(|| EncodeError::TitlePattern {
            title: title.to_string(),
        })?;

    let name = captures[1].to_string();
    let year = captures[2]
        .parse()
        .map_err(|_| EncodeError::YearOutOfRange {
            title: title.to_string(),
        })?;

    Ok((name, year))
}

/// Multi-hot vector over the genre vocabulary.
pub fn genres_multi_hot(genres: &[String], vocab: &Vocab) -> Result<Vec<u8>, EncodeError> {
    let mut multi_hot = vec![0u8; vocab.len()];
    for genre in genres {
        let index = vocab.get(genre).ok_or_else(|| EncodeError::MissingToken {
            kind: "genre",
            token: genre.clone(),
        })?;
        multi_hot[index as usize] = 1;
    }
    Ok(multi_hot)
}

/// Encode a year-stripped title as exactly [`TITLE_VECTOR_LEN`] indices.
///
/// Titles of at most 15 words map each word through the vocabulary and
/// zero-pad the rest. Titles of more than 15 words are encoded from the
/// code points of the first 15 characters of the title string, not from
/// its word list. That overflow branch is long-standing observed
/// behavior, kept as-is and pinned by a regression test.
pub fn title_to_indices(name: &str, words: &Vocab) -> Result<Vec<u32>, EncodeError> {
    let title_words: Vec<&str> = name.split_whitespace().collect();

    if title_words.len() > TITLE_VECTOR_LEN {
        return Ok(name
            .chars()
            .take(TITLE_VECTOR_LEN)
            .map(|c| c as u32)
            .collect());
    }

    let mut vector = vec![0u32; TITLE_VECTOR_LEN];
    for (slot, word) in vector.iter_mut().zip(title_words) {
        *slot = words.get(word).ok_or_else(|| EncodeError::MissingToken {
            kind: "word",
            token: word.to_string(),
        })?;
    }
    Ok(vector)
}

/// Attach the derived index columns to every user row.
pub fn encode_users(users: &[User], maps: &EncodingMaps) -> Result<Vec<UserFeatures>, EncodeError> {
    users
        .iter()
        .map(|user| {
            let age_index = *maps
                .age
                .get(&user.age)
                .ok_or(EncodeError::MissingAge { age: user.age })?;
            Ok(UserFeatures {
                id: user.id,
                gender: user.gender,
                age: user.age,
                occupation: user.occupation,
                gender_index: user.gender.index(),
                age_index,
            })
        })
        .collect()
}

/// Attach the derived columns to every movie row.
fn encode_movies(
    movies: &[Movie],
    split_titles: &[(String, u16)],
    maps: &EncodingMaps,
) -> Result<Vec<MovieFeatures>, EncodeError> {
    movies
        .iter()
        .zip(split_titles)
        .map(|(movie, (name, year))| {
            Ok(MovieFeatures {
                id: movie.id,
                title: movie.title.clone(),
                title_without_year: name.clone(),
                year: *year,
                genres: movie.genres.clone(),
                genres_multi_hot: genres_multi_hot(&movie.genres, &maps.genres)?,
                title_index: title_to_indices(name, &maps.words)?,
            })
        })
        .collect()
}
