//! Defines the core `Config` struct and related types for application configuration.
//!
//! This module consolidates all the settings parsed and validated from the CLI,
//! making them available to discovery, processing and output in a structured,
//! immutable form.

use crate::constants;
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::Duration;

pub use builder::ConfigBuilder;
mod builder;
mod parsing;
mod path_resolve;
mod validation;

pub use path_resolve::resolve_input_path;

/// Configuration options related to file discovery and filtering.
#[derive(Debug, Clone)]
pub struct DiscoveryConfig {
    /// The absolute, canonicalized root directory to scan.
    pub root: PathBuf,
    /// Directory names pruned wherever they appear as a path segment.
    pub exclude_dirs: BTreeSet<String>,
    /// File names skipped on exact match.
    pub exclude_files: BTreeSet<String>,
    /// Filename suffixes to include (e.g. `.ts`). Ignored when `only_names` is set.
    pub extensions: Vec<String>,
    /// If `Some`, only files whose name is in this set are included.
    pub only_names: Option<BTreeSet<String>>,
    /// Whether to respect `.gitignore`, `.ignore`, and hidden-file rules.
    pub use_gitignore: bool,
    /// Absolute paths that must never be yielded (the report and state files).
    pub skip_paths: Vec<PathBuf>,
}

/// Configuration options related to processing candidates.
#[derive(Debug, Clone, Copy)]
pub struct ProcessingConfig {
    /// Files larger than this many bytes are skipped.
    pub max_file_size: u64,
    /// Soft read budget, checked after each read completes.
    pub read_timeout: Duration,
    /// Number of candidates per batch; state is checkpointed after each batch.
    pub batch_size: usize,
    /// Number of newly written files between intermediate checkpoints.
    pub checkpoint_interval: usize,
}

/// Locations of the artifacts a run produces.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Directory receiving the report and error logs.
    pub output_dir: PathBuf,
    /// Full path of the report.
    pub output_path: PathBuf,
    /// Full path of the processed-files state record.
    pub state_path: PathBuf,
}

/// Represents the fully resolved configuration for a run.
#[derive(Debug, Clone)]
pub struct Config {
    /// The root path exactly as the user gave it, for display.
    pub input_path: String,
    /// Configuration for the discovery stage.
    pub discovery: DiscoveryConfig,
    /// Configuration for the processing stage.
    pub processing: ProcessingConfig,
    /// Where the run writes its artifacts.
    pub output: OutputConfig,
    /// Skip the interactive confirmation.
    pub assume_yes: bool,
    /// Start from an empty processed-files state.
    pub fresh: bool,
    /// List candidates only; write nothing.
    pub dry_run: bool,
}

impl Config {
    /// Creates a default `Config` rooted at `root` with artifacts under `output_dir`.
    ///
    /// Paths are taken as given (no canonicalization). This function is hidden
    /// from public documentation and is intended for tests only.
    #[doc(hidden)]
    pub fn new_for_test(root: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        let output_dir = output_dir.into();
        let output_path = output_dir.join(constants::DEFAULT_OUTPUT_FILENAME);
        let state_path = output_dir.join(constants::STATE_FILENAME);
        let root = root.into();
        Self {
            input_path: root.display().to_string(),
            discovery: DiscoveryConfig {
                root,
                exclude_dirs: constants::DEFAULT_EXCLUDED_DIRS
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
                exclude_files: constants::DEFAULT_EXCLUDED_FILES
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
                extensions: constants::DEFAULT_EXTENSIONS
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
                only_names: None,
                use_gitignore: false,
                skip_paths: vec![output_path.clone(), state_path.clone()],
            },
            processing: ProcessingConfig {
                max_file_size: constants::DEFAULT_MAX_FILE_SIZE,
                read_timeout: Duration::from_secs(constants::DEFAULT_READ_TIMEOUT_SECS),
                batch_size: constants::DEFAULT_BATCH_SIZE,
                checkpoint_interval: constants::DEFAULT_CHECKPOINT_INTERVAL,
            },
            output: OutputConfig {
                output_dir,
                output_path,
                state_path,
            },
            assume_yes: true,
            fresh: false,
            dry_run: false,
        }
    }
}
