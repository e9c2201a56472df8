use anyhow::{Context, Result};
use clap::Parser;
use data_loader::RawTables;
use fetcher::{LogProgress, ensure_archive};
use pipeline::split::{SPLIT_SEED, TEST_FRACTION};
use pipeline::{encode_dataset, join_tables, persist, train_test_split};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

/// ml-prep - MovieLens 1M preprocessing pipeline
#[derive(Parser)]
#[command(name = "ml-prep")]
#[command(
    about = "Download the MovieLens 1M archive and preprocess it into train/test artifacts",
    long_about = None
)]
struct Cli {
    /// Directory for the archive and the preprocessed outputs
    #[arg(short, long, default_value = "./data")]
    data_dir: PathBuf,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let start = Instant::now();

    let mut progress = LogProgress::default();
    let archive = ensure_archive(&cli.data_dir, &mut progress)
        .context("Failed to fetch the ml-1m archive")?;

    let tables =
        RawTables::load_from_archive(&archive).context("Failed to parse the ml-1m archive")?;

    let encoded = encode_dataset(&tables).context("Failed to encode the dataset")?;

    let joined = join_tables(&tables.ratings, &encoded.users, &encoded.movies);
    info!("joined table has {} rows", joined.len());

    let split = train_test_split(joined, TEST_FRACTION, SPLIT_SEED);

    persist::save_meta(&cli.data_dir, &encoded.maps).context("Failed to write meta.p")?;
    persist::save_users(&cli.data_dir, &encoded.users).context("Failed to write users.p")?;
    persist::save_movies(&cli.data_dir, &encoded.movies).context("Failed to write movies.p")?;
    persist::save_split(&cli.data_dir, &split).context("Failed to write data.p")?;

    info!(
        "preprocessing finished in {:.1?}: {} train rows, {} test rows under {}",
        start.elapsed(),
        split.train_len(),
        split.test_len(),
        cli.data_dir.display(),
    );

    Ok(())
}
