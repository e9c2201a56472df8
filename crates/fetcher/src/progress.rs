//! Progress reporting for the archive download.
//!
//! The observer is a plain synchronous hook: it runs on the downloading
//! thread, once after every received block.

use tracing::info;

/// Receives download progress updates.
///
/// `total_bytes` is `None` when the server does not report a content
/// length.
pub trait ProgressObserver {
    fn on_progress(&mut self, bytes_received: u64, total_bytes: Option<u64>);
}

/// Any `FnMut(u64, Option<u64>)` closure is an observer.
impl<F> ProgressObserver for F
where
    F: FnMut(u64, Option<u64>),
{
    fn on_progress(&mut self, bytes_received: u64, total_bytes: Option<u64>) {
        self(bytes_received, total_bytes)
    }
}

/// Observer that logs a line per megabyte received.
#[derive(Debug, Default)]
pub struct LogProgress {
    next_report: u64,
}

impl LogProgress {
    const REPORT_EVERY: u64 = 1024 * 1024;
}

impl ProgressObserver for LogProgress {
    fn on_progress(&mut self, bytes_received: u64, total_bytes: Option<u64>) {
        if bytes_received < self.next_report {
            return;
        }
        self.next_report = bytes_received + Self::REPORT_EVERY;

        match total_bytes {
            Some(total) if total > 0 => {
                let percent = 100.0 * bytes_received as f64 / total as f64;
                info!(
                    "downloaded {:.1} MiB of {:.1} MiB ({percent:.0}%)",
                    bytes_received as f64 / Self::REPORT_EVERY as f64,
                    total as f64 / Self::REPORT_EVERY as f64,
                );
            }
            _ => {
                info!(
                    "downloaded {:.1} MiB (total size unknown)",
                    bytes_received as f64 / Self::REPORT_EVERY as f64,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_observers() {
        let mut seen = Vec::new();
        let mut observer = |received: u64, total: Option<u64>| {
            seen.push((received, total));
        };
        observer.on_progress(8192, Some(16384));
        observer.on_progress(16384, Some(16384));

        assert_eq!(seen, vec![(8192, Some(16384)), (16384, Some(16384))]);
    }

    #[test]
    fn log_progress_throttles_by_megabyte() {
        let mut progress = LogProgress::default();
        // First call always reports and moves the threshold forward.
        progress.on_progress(1, Some(10 * 1024 * 1024));
        assert_eq!(progress.next_report, 1 + LogProgress::REPORT_EVERY);

        // Below the threshold nothing changes.
        progress.on_progress(512 * 1024, Some(10 * 1024 * 1024));
        assert_eq!(progress.next_report, 1 + LogProgress::REPORT_EVERY);
    }
}
