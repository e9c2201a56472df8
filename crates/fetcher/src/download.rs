//! Download and checksum validation for the MovieLens 1M archive.

use crate::error::{FetchError, Result};
use crate::progress::ProgressObserver;
use md5::{Digest, Md5};
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Where the archive is fetched from.
pub const DATASET_URL: &str = "http://files.grouplens.org/datasets/movielens/ml-1m.zip";

/// Published MD5 digest of `ml-1m.zip`.
pub const ARCHIVE_MD5: &str = "c4d9eecfca2ab87c1945afe126590906";

/// File name of the archive inside the data directory.
pub const ARCHIVE_NAME: &str = "ml-1m.zip";

const BLOCK_SIZE: usize = 8 * 1024;

/// Ensure a validated copy of the archive exists under `data_dir` and
/// return its path.
///
/// Creates `data_dir` (including parents) if needed. An already existing
/// archive is returned as-is without re-validation; only freshly
/// downloaded bytes are checked against [`ARCHIVE_MD5`]. On a digest
/// mismatch the bad file is left on disk and the error instructs its
/// removal.
pub fn ensure_archive(data_dir: &Path, progress: &mut impl ProgressObserver) -> Result<PathBuf> {
    fs::create_dir_all(data_dir)?;

    let archive_path = data_dir.join(ARCHIVE_NAME);
    if archive_path.exists() {
        info!(
            "skipping download, {} already exists",
            archive_path.display()
        );
        return Ok(archive_path);
    }

    download_archive(&archive_path, progress)?;
    Ok(archive_path)
}

/// Stream the archive to `archive_path`, hashing as bytes arrive.
fn download_archive(archive_path: &Path, progress: &mut impl ProgressObserver) -> Result<()> {
    info!("downloading {DATASET_URL}");

    // No request timeout: a stalled transfer blocks the run.
    let client = reqwest::blocking::Client::builder()
        .timeout(None)
        .build()?;
    let mut response = client.get(DATASET_URL).send()?.error_for_status()?;
    let total_bytes = response.content_length();

    let mut file = File::create(archive_path)?;
    let mut hasher = Md5::new();
    let mut block = [0u8; BLOCK_SIZE];
    let mut received: u64 = 0;

    loop {
        let n = response.read(&mut block)?;
        if n == 0 {
            break;
        }
        file.write_all(&block[..n])?;
        hasher.update(&block[..n]);
        received += n as u64;
        progress.on_progress(received, total_bytes);
    }
    file.flush()?;

    let actual = hex::encode(hasher.finalize());
    if actual != ARCHIVE_MD5 {
        return Err(FetchError::ChecksumMismatch {
            path: archive_path.to_path_buf(),
            expected: ARCHIVE_MD5.to_string(),
            actual,
        });
    }

    info!("downloaded {} ({received} bytes)", archive_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn no_progress() -> impl ProgressObserver {
        |_received: u64, _total: Option<u64>| {}
    }

    #[test]
    fn existing_archive_is_returned_without_download() {
        let dir = tempdir().unwrap();
        let expected = dir.path().join(ARCHIVE_NAME);
        // Any pre-existing file short-circuits the fetch, valid or not.
        fs::write(&expected, b"not a real archive").unwrap();

        let path = ensure_archive(dir.path(), &mut no_progress()).unwrap();
        assert_eq!(path, expected);
        assert_eq!(fs::read(&path).unwrap(), b"not a real archive");
    }

    #[test]
    fn skip_path_is_idempotent_for_nested_dirs() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("deep").join("data");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join(ARCHIVE_NAME), b"zip").unwrap();

        // Repeated calls keep returning the same path without touching
        // the file or the directory tree.
        let first = ensure_archive(&nested, &mut no_progress()).unwrap();
        let second = ensure_archive(&nested, &mut no_progress()).unwrap();
        assert_eq!(first, second);
        assert_eq!(fs::read(&first).unwrap(), b"zip");
    }

    #[test]
    fn checksum_error_names_both_digests() {
        let err = FetchError::ChecksumMismatch {
            path: PathBuf::from("data/ml-1m.zip"),
            expected: ARCHIVE_MD5.to_string(),
            actual: "deadbeef".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains(ARCHIVE_MD5));
        assert!(message.contains("deadbeef"));
        assert!(message.contains("Remove the file"));
    }
}
