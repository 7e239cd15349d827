use std::time::Duration;

use crate::error::UnbundleError;

/// The outcome of a completed extraction run.
///
/// `error_count` is always accurate; the error values themselves are only
/// retained when `.collect_errors(true)` was set on the builder, to avoid
/// carrying allocations the common case throws away.
#[derive(Debug)]
pub struct Report {
    /// Directories recreated at the destination.
    pub dirs: usize,

    /// Files copied in full.
    pub files: usize,

    /// Total payload bytes written.
    pub bytes: u64,

    /// Number of per-entry failures across the whole walk. Nonzero means
    /// the destination tree is incomplete.
    pub error_count: usize,

    /// The per-entry failures, in the order they occurred.
    /// Only populated if `.collect_errors(true)` was set on the builder.
    pub errors: Vec<UnbundleError>,

    /// Run statistics.
    pub stats: ExtractStats,
}

impl Report {
    /// `true` when every eligible entry was materialized.
    pub fn is_clean(&self) -> bool {
        self.error_count == 0
    }
}

/// Performance statistics for a completed run.
#[derive(Debug)]
pub struct ExtractStats {
    /// Wall-clock time from walk start to completion.
    pub duration: Duration,

    /// Payload bytes written per second. Convenience field — clamped to 0
    /// on zero-duration runs.
    pub bytes_per_sec: u64,
}

impl ExtractStats {
    /// Compute `bytes_per_sec` from the byte total and duration.
    pub(crate) fn compute(bytes: u64, duration: Duration) -> Self {
        let bps = if duration.as_secs_f64() > 0.0 {
            (bytes as f64 / duration.as_secs_f64()) as u64
        } else {
            0
        };
        Self {
            duration,
            bytes_per_sec: bps,
        }
    }
}
