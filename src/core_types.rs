//! Defines core data structures used throughout the application pipeline.
//!
//! `FileInfo` is produced by discovery and consumed by the processor;
//! `FileOutcome` records what the processor did with each candidate, and
//! `RunSummary` aggregates a finished run for reporting.

use std::path::{Path, PathBuf};

/// A candidate file selected by discovery.
///
/// # Examples
///
/// ```
/// use dirprint::core_types::FileInfo;
/// use std::path::PathBuf;
///
/// let file_info = FileInfo::new(
///     PathBuf::from("/path/to/project/src/app/page.tsx"),
///     PathBuf::from("src/app/page.tsx"),
/// );
///
/// assert_eq!(file_info.key, "src/app/page.tsx");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    /// The absolute path to the file on the filesystem.
    pub absolute_path: PathBuf,
    /// The path relative to the scanned root, used in headers and the listing.
    pub relative_path: PathBuf,
    /// The relative path with `/` separators. This is the key stored in the
    /// processed-files state, so it must not depend on the platform.
    pub key: String,
}

impl FileInfo {
    /// Builds a `FileInfo`, deriving the state key from `relative_path`.
    pub fn new(absolute_path: PathBuf, relative_path: PathBuf) -> Self {
        let key = path_key(&relative_path);
        Self {
            absolute_path,
            relative_path,
            key,
        }
    }
}

/// Renders a relative path with `/` separators.
pub fn path_key(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// The terminal state of a single candidate after processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// The file was already in the processed-files state; it was not read.
    SkippedDone,
    /// The file exceeded the size ceiling; it was not read.
    SkippedTooLarge {
        /// The file size in bytes.
        size: u64,
    },
    /// The file's content was appended to the output document.
    Written,
    /// Reading the file failed; it will be retried on the next run.
    Failed {
        /// Human-readable failure reason.
        reason: String,
    },
}

/// Per-outcome tallies for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutcomeCounts {
    pub written: usize,
    pub skipped_done: usize,
    pub skipped_too_large: usize,
    pub failed: usize,
}

impl OutcomeCounts {
    /// Adds one outcome to the tallies.
    pub fn record(&mut self, outcome: &FileOutcome) {
        match outcome {
            FileOutcome::SkippedDone => self.skipped_done += 1,
            FileOutcome::SkippedTooLarge { .. } => self.skipped_too_large += 1,
            FileOutcome::Written => self.written += 1,
            FileOutcome::Failed { .. } => self.failed += 1,
        }
    }

    /// Total number of candidates that reached a terminal state.
    pub fn total(&self) -> usize {
        self.written + self.skipped_done + self.skipped_too_large + self.failed
    }
}

/// The result of a completed (non-dry) run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Number of discovered candidates.
    pub total_files: usize,
    /// Number of candidates present in the processed-files state at the end.
    pub processed_files: usize,
    /// What happened to each candidate in this run.
    pub counts: OutcomeCounts,
    /// Location of the output document.
    pub output_path: PathBuf,
    /// Location of the error log, if any error was recorded.
    pub error_log_path: Option<PathBuf>,
}
