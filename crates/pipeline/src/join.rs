//! Inner join of the three tables and label separation.

use crate::encode::{MovieFeatures, UserFeatures};
use data_loader::{Gender, MovieId, Rating, UserId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// One denormalized row per surviving rating, carrying every user and
/// movie attribute. The rating itself lives in the labels column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRow {
    pub user_id: UserId,
    pub movie_id: MovieId,
    // User attributes
    pub gender: Gender,
    pub age: u8,
    pub occupation: u8,
    pub gender_index: u32,
    pub age_index: u32,
    // Movie attributes
    pub title: String,
    pub title_without_year: String,
    pub year: u16,
    pub genres: Vec<String>,
    pub genres_multi_hot: Vec<u8>,
    pub title_index: Vec<u32>,
}

/// Features and labels, row-aligned by construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JoinedTable {
    pub features: Vec<FeatureRow>,
    pub labels: Vec<f32>,
}

impl JoinedTable {
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

/// Join ratings with users, then with movies, in ratings order.
///
/// Inner-join semantics: a rating whose user or movie is absent from the
/// reference tables is dropped.
pub fn join_tables(
    ratings: &[Rating],
    users: &[UserFeatures],
    movies: &[MovieFeatures],
) -> JoinedTable {
    let users_by_id: HashMap<UserId, &UserFeatures> =
        users.iter().map(|user| (user.id, user)).collect();
    let movies_by_id: HashMap<MovieId, &MovieFeatures> =
        movies.iter().map(|movie| (movie.id, movie)).collect();

    let mut features = Vec::with_capacity(ratings.len());
    let mut labels = Vec::with_capacity(ratings.len());

    for rating in ratings {
        let (Some(user), Some(movie)) = (
            users_by_id.get(&rating.user_id),
            movies_by_id.get(&rating.movie_id),
        ) else {
            continue;
        };

        features.push(FeatureRow {
            user_id: user.id,
            movie_id: movie.id,
            gender: user.gender,
            age: user.age,
            occupation: user.occupation,
            gender_index: user.gender_index,
            age_index: user.age_index,
            title: movie.title.clone(),
            title_without_year: movie.title_without_year.clone(),
            year: movie.year,
            genres: movie.genres.clone(),
            genres_multi_hot: movie.genres_multi_hot.clone(),
            title_index: movie.title_index.clone(),
        });
        labels.push(rating.rating);
    }

    debug!("joined {} of {} ratings", features.len(), ratings.len());
    JoinedTable { features, labels }
}
