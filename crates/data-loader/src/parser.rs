//! Parsers for the `::`-delimited MovieLens tables.
//!
//! Formats:
//! - users.dat: userId::gender::age::occupation::zipcode
//! - movies.dat: movieId::title::genres
//! - ratings.dat: userId::movieId::rating::timestamp
//!
//! Each parser takes the already-decoded lines of one entry. Rows must
//! carry exactly the declared number of columns; columns the pipeline
//! does not need (zip code, timestamp) are parsed past and dropped.

use crate::error::{DataLoadError, Result};
use crate::types::*;
use std::str::FromStr;

const USERS_FILE: &str = "users.dat";
const MOVIES_FILE: &str = "movies.dat";
const RATINGS_FILE: &str = "ratings.dat";

const USERS_COLUMNS: usize = 5;
const MOVIES_COLUMNS: usize = 3;
const RATINGS_COLUMNS: usize = 4;

/// Split one row on the literal `::` and enforce the declared column count.
fn split_row<'a>(
    file: &str,
    line_no: usize,
    line: &'a str,
    expected: usize,
) -> Result<Vec<&'a str>> {
    let fields: Vec<&str> = line.split("::").collect();
    if fields.len() != expected {
        return Err(DataLoadError::FieldCountMismatch {
            file: file.to_string(),
            expected,
            found: fields.len(),
            line: line_no,
        });
    }
    Ok(fields)
}

/// Parse one numeric field, wrapping failures with file/line context.
fn parse_field<T: FromStr>(file: &str, line_no: usize, name: &str, value: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|e| DataLoadError::ParseError {
        file: file.to_string(),
        line: line_no,
        reason: format!("Invalid {name}: {e}"),
    })
}

fn parse_gender(s: &str) -> Result<Gender> {
    match s {
        "F" => Ok(Gender::Female),
        "M" => Ok(Gender::Male),
        _ => Err(DataLoadError::InvalidValue {
            field: "gender".to_string(),
            value: s.to_string(),
        }),
    }
}

/// Parse the users table, keeping (id, gender, age, occupation).
pub fn parse_users(lines: &[String]) -> Result<Vec<User>> {
    let mut users = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        let line_no = idx + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let fields = split_row(USERS_FILE, line_no, line, USERS_COLUMNS)?;
        // fields[4] is the zip code, dropped.
        users.push(User {
            id: parse_field(USERS_FILE, line_no, "userId", fields[0])?,
            gender: parse_gender(fields[1])?,
            age: parse_field(USERS_FILE, line_no, "age", fields[2])?,
            occupation: parse_field(USERS_FILE, line_no, "occupation", fields[3])?,
        });
    }

    Ok(users)
}

/// Parse the movies table in full.
///
/// The title keeps its `(year)` suffix; genres are split on `|`.
pub fn parse_movies(lines: &[String]) -> Result<Vec<Movie>> {
    let mut movies = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        let line_no = idx + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let fields = split_row(MOVIES_FILE, line_no, line, MOVIES_COLUMNS)?;
        movies.push(Movie {
            id: parse_field(MOVIES_FILE, line_no, "movieId", fields[0])?,
            title: fields[1].to_string(),
            genres: fields[2].split('|').map(str::to_string).collect(),
        });
    }

    Ok(movies)
}

/// Parse the ratings table, keeping (user_id, movie_id, rating).
pub fn parse_ratings(lines: &[String]) -> Result<Vec<Rating>> {
    let mut ratings = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        let line_no = idx + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let fields = split_row(RATINGS_FILE, line_no, line, RATINGS_COLUMNS)?;
        // fields[3] is the timestamp, dropped.
        ratings.push(Rating {
            user_id: parse_field(RATINGS_FILE, line_no, "userId", fields[0])?,
            movie_id: parse_field(RATINGS_FILE, line_no, "movieId", fields[1])?,
            rating: parse_field(RATINGS_FILE, line_no, "rating", fields[2])?,
        });
    }

    Ok(ratings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_users_and_drops_zipcode() {
        let users = parse_users(&lines(&[
            "1::F::1::10::48067",
            "2::M::56::16::70072",
            "",
        ]))
        .unwrap();

        assert_eq!(users.len(), 2);
        assert_eq!(
            users[0],
            User {
                id: 1,
                gender: Gender::Female,
                age: 1,
                occupation: 10,
            }
        );
        assert_eq!(users[1].gender, Gender::Male);
        assert_eq!(users[1].age, 56);
    }

    #[test]
    fn rejects_unknown_gender() {
        let err = parse_users(&lines(&["1::X::1::10::48067"])).unwrap_err();
        assert!(matches!(
            err,
            DataLoadError::InvalidValue { ref field, .. } if field == "gender"
        ));
    }

    #[test]
    fn rejects_wrong_column_count() {
        let err = parse_users(&lines(&["1::F::1::10"])).unwrap_err();
        assert!(matches!(
            err,
            DataLoadError::FieldCountMismatch {
                expected: 5,
                found: 4,
                line: 1,
                ..
            }
        ));
    }

    #[test]
    fn parses_movies_with_genres() {
        let movies = parse_movies(&lines(&[
            "1::Toy Story (1995)::Animation|Children's|Comedy",
            "2::Jumanji (1995)::Adventure|Children's|Fantasy",
        ]))
        .unwrap();

        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].title, "Toy Story (1995)");
        assert_eq!(
            movies[0].genres,
            vec!["Animation", "Children's", "Comedy"]
        );
    }

    #[test]
    fn parses_ratings_and_drops_timestamp() {
        let ratings = parse_ratings(&lines(&["1::1193::5::978300760"])).unwrap();

        assert_eq!(ratings.len(), 1);
        assert_eq!(
            ratings[0],
            Rating {
                user_id: 1,
                movie_id: 1193,
                rating: 5.0,
            }
        );
    }

    #[test]
    fn numeric_errors_carry_line_context() {
        let err = parse_ratings(&lines(&[
            "1::1193::5::978300760",
            "2::abc::3::978302109",
        ]))
        .unwrap_err();
        assert!(matches!(
            err,
            DataLoadError::ParseError { line: 2, ref file, .. } if file == "ratings.dat"
        ));
    }
}
