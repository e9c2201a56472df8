//! Core domain types for the MovieLens dataset.

use serde::{Deserialize, Serialize};

// =============================================================================
// Type Aliases
// =============================================================================
// These make the domain clearer and prevent mixing up user IDs with movie IDs

/// Unique identifier for a user (1-6040 in MovieLens 1M)
pub type UserId = u32;

/// Unique identifier for a movie (varies in MovieLens 1M)
pub type MovieId = u32;

// =============================================================================
// User-related Types
// =============================================================================

/// Represents a user in the MovieLens dataset.
///
/// The raw file carries a fifth zip-code column, which is dropped at
/// parse time. Age and occupation stay as the dataset's raw numeric
/// codes; their dense indices are assigned later from the observed
/// corpus rather than from a fixed table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub gender: Gender,
    /// Age bracket code (1, 18, 25, 35, 45, 50, 56)
    pub age: u8,
    /// Occupation code (0-20)
    pub occupation: u8,
}

/// Gender as it appears in `users.dat`.
///
/// This is the one categorical field with a fixed index mapping:
/// F is 0 and M is 1 regardless of corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    /// Dense index: F is 0, M is 1.
    pub fn index(self) -> u32 {
        match self {
            Gender::Female => 0,
            Gender::Male => 1,
        }
    }

    /// The token as written in the data file.
    pub fn token(self) -> &'static str {
        match self {
            Gender::Female => "F",
            Gender::Male => "M",
        }
    }
}

// =============================================================================
// Movie-related Types
// =============================================================================

/// Represents a movie in the dataset.
///
/// The title keeps its embedded release year (e.g. "Toy Story (1995)");
/// splitting it off is an encoding step, not a parsing step. Genres are
/// the pipe-split tokens as strings: their dense indices come from the
/// observed corpus, so there is no closed genre enum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub genres: Vec<String>,
}

// =============================================================================
// Rating Type
// =============================================================================

/// A single (user, movie, rating) triple.
///
/// The raw file carries a fourth timestamp column, dropped at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub user_id: UserId,
    pub movie_id: MovieId,
    /// Rating value from 1.0 to 5.0
    pub rating: f32,
}

// =============================================================================
// RawTables - the three parsed tables
// =============================================================================

/// The three tables read out of the archive, in file order.
///
/// Each downstream stage consumes these by reference and produces a
/// fresh structure; nothing mutates them after parsing.
#[derive(Debug, Clone, Default)]
pub struct RawTables {
    pub users: Vec<User>,
    pub movies: Vec<Movie>,
    pub ratings: Vec<Rating>,
}

impl RawTables {
    /// Row counts as (users, movies, ratings), for logging and validation.
    pub fn counts(&self) -> (usize, usize, usize) {
        (self.users.len(), self.movies.len(), self.ratings.len())
    }
}
