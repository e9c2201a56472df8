//! Seeded train/test partitioning.

use crate::join::{FeatureRow, JoinedTable};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Fraction of rows held out as the test partition.
pub const TEST_FRACTION: f64 = 0.2;

/// Seed for the partition shuffle.
pub const SPLIT_SEED: u64 = 0;

/// The four-way split persisted as `data.p`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainTestSplit {
    pub train_features: Vec<FeatureRow>,
    pub train_labels: Vec<f32>,
    pub test_features: Vec<FeatureRow>,
    pub test_labels: Vec<f32>,
}

impl TrainTestSplit {
    pub fn train_len(&self) -> usize {
        self.train_features.len()
    }

    pub fn test_len(&self) -> usize {
        self.test_features.len()
    }
}

/// Partition `joined` into disjoint train and test sets.
///
/// Rows are shuffled with a `StdRng` seeded from `seed`; the first
/// `ceil(n * test_fraction)` shuffled rows become the test set. The same
/// inputs with the same seed always reproduce the same membership.
pub fn train_test_split(joined: JoinedTable, test_fraction: f64, seed: u64) -> TrainTestSplit {
    let total = joined.len();
    let test_len = (total as f64 * test_fraction).ceil() as usize;

    let mut rows: Vec<(FeatureRow, f32)> = joined
        .features
        .into_iter()
        .zip(joined.labels)
        .collect();

    let mut rng = StdRng::seed_from_u64(seed);
    rows.shuffle(&mut rng);

    let train_rows = rows.split_off(test_len);
    let (test_features, test_labels) = rows.into_iter().unzip();
    let (train_features, train_labels) = train_rows.into_iter().unzip();

    let split = TrainTestSplit {
        train_features,
        train_labels,
        test_features,
        test_labels,
    };
    info!(
        "split {total} rows into {} train / {} test",
        split.train_len(),
        split.test_len(),
    );
    split
}
