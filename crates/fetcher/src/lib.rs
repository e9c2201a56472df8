//! # Fetcher Crate
//!
//! This crate guarantees that a validated copy of the MovieLens 1M archive
//! exists under a data directory, downloading it on first use.
//!
//! ## Main Components
//!
//! - **download**: `ensure_archive`, the single entry point
//! - **progress**: the `ProgressObserver` trait and a logging implementation
//! - **error**: error types for fetching
//!
//! ## Example Usage
//!
//! ```ignore
//! use fetcher::{ensure_archive, LogProgress};
//! use std::path::Path;
//!
//! let mut progress = LogProgress::default();
//! let archive = ensure_archive(Path::new("./data"), &mut progress)?;
//! println!("archive at {}", archive.display());
//! ```
//!
//! The download is blocking and runs on the calling thread; the progress
//! observer is invoked on that same thread after every received block.

pub mod download;
pub mod error;
pub mod progress;

// Re-export commonly used items for convenience
pub use download::{ensure_archive, ARCHIVE_MD5, ARCHIVE_NAME, DATASET_URL};
pub use error::{FetchError, Result};
pub use progress::{LogProgress, ProgressObserver};
