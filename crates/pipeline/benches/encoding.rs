//! Benchmarks for corpus encoding
//!
//! Run with: cargo bench --package pipeline
//!
//! Uses a synthetic corpus so the bench does not depend on the real
//! archive being downloaded.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use data_loader::{Gender, Movie, Rating, RawTables, User};
use pipeline::encode_dataset;

const GENRES: &[&str] = &[
    "Action", "Adventure", "Animation", "Comedy", "Drama", "Horror", "Romance", "Sci-Fi",
];
const AGES: &[u8] = &[1, 18, 25, 35, 45, 50, 56];

fn synthetic_tables(movie_count: u32, user_count: u32) -> RawTables {
    let users = (1..=user_count)
        .map(|id| User {
            id,
            gender: if id % 2 == 0 {
                Gender::Male
            } else {
                Gender::Female
            },
            age: AGES[id as usize % AGES.len()],
            occupation: (id % 21) as u8,
        })
        .collect();

    let movies = (1..=movie_count)
        .map(|id| Movie {
            id,
            title: format!("Movie Number {id} In The Synthetic Corpus ({})", 1900 + id % 100),
            genres: vec![
                GENRES[id as usize % GENRES.len()].to_string(),
                GENRES[(id as usize + 3) % GENRES.len()].to_string(),
            ],
        })
        .collect();

    let ratings = (0..movie_count * 3)
        .map(|i| Rating {
            user_id: i % user_count + 1,
            movie_id: i % movie_count + 1,
            rating: (i % 5 + 1) as f32,
        })
        .collect();

    RawTables {
        users,
        movies,
        ratings,
    }
}

fn bench_encode_dataset(c: &mut Criterion) {
    let tables = synthetic_tables(4000, 6000);

    c.bench_function("encode_dataset", |b| {
        b.iter(|| {
            let encoded = encode_dataset(black_box(&tables)).unwrap();
            black_box(encoded)
        })
    });
}

fn bench_join_and_split(c: &mut Criterion) {
    let tables = synthetic_tables(4000, 6000);
    let encoded = encode_dataset(&tables).unwrap();

    c.bench_function("join_and_split", |b| {
        b.iter(|| {
            let joined = pipeline::join_tables(
                black_box(&tables.ratings),
                &encoded.users,
                &encoded.movies,
            );
            let split =
                pipeline::train_test_split(joined, pipeline::TEST_FRACTION, pipeline::SPLIT_SEED);
            black_box(split)
        })
    });
}

criterion_group!(benches, bench_encode_dataset, bench_join_and_split);
criterion_main!(benches);
