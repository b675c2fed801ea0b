//! `dirprint` is a library and command-line tool that walks a source tree and
//! concatenates the matching files into a single plain-text report.
//!
//! The report starts with a directory listing of every candidate, followed by
//! one section per file. Files that were fully written are remembered in a
//! small JSON state file next to the report, so a run that was interrupted
//! (or that failed on some files) can be repeated and will only read what is
//! still missing.
//!
//! As a library, it exposes the run as a two-step pipeline:
//! 1.  **Prepare**: discover candidates and load the processed-files state.
//! 2.  **Execute**: open the report, write the listing on a fresh run, and
//!     process the candidates in checkpointed batches.
//!
//! # Example: Library Usage
//!
//! ```
//! use dirprint::{execute, prepare, CancellationToken, ConfigBuilder};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // 1. Set up a small project.
//! let project = tempdir()?;
//! fs::write(project.path().join("a.ts"), "export const a = 1;")?;
//! fs::write(project.path().join("b.json"), "{}")?;
//! fs::create_dir(project.path().join("node_modules"))?;
//! fs::write(project.path().join("node_modules/c.ts"), "ignored")?;
//!
//! // 2. Configure the run; artifacts go to a separate directory.
//! let out = tempdir()?;
//! let config = ConfigBuilder::new()
//!     .input_path(project.path().to_str().unwrap())
//!     .output_dir(out.path().to_str().unwrap())
//!     .build()?;
//!
//! // 3. Discover, then process.
//! let token = CancellationToken::new();
//! let plan = prepare(&config, &token)?;
//! assert_eq!(plan.candidates.len(), 2);
//!
//! let summary = execute(plan, &config, &token, None)?;
//! assert_eq!(summary.counts.written, 2);
//!
//! let report = fs::read_to_string(&config.output.output_path)?;
//! assert!(report.starts_with("Directory Structure:\n"));
//! assert!(report.contains("\nFile: a.ts\n"));
//! assert!(!report.contains("c.ts"));
//! # Ok(())
//! # }
//! ```

// Make modules public if they contain public types used in the API
pub mod cancellation;
pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod discovery;
pub mod errors;
pub mod filtering;
pub mod output;
pub mod prelude;
pub mod processing;
pub mod progress;
pub mod prompt;
pub mod signal;
pub mod state;

// Re-export key public types for easier use as a library
pub use cancellation::CancellationToken;
pub use config::{Config, ConfigBuilder};
pub use core_types::{FileInfo, FileOutcome, OutcomeCounts, RunSummary};
pub use processing::Processor;
pub use state::ProcessedSet;

use crate::errors::{Error, Result};
use crate::output::{open_output_document, write_directory_structure, write_error_log, OpenMode};
use crate::progress::{NoOpProgress, ProgressReporter};
use anyhow::Context;
use std::io::Write;
use std::sync::Arc;

/// Discovers candidate files based on the provided configuration.
///
/// This is a thin wrapper around [`discovery::discover_files`]. The content
/// of the files is not read at this stage.
pub fn discover(config: &Config, token: &CancellationToken) -> Result<Vec<FileInfo>> {
    discovery::discover_files(&config.discovery, token)
}

/// Everything a run needs once the user has agreed to proceed.
#[derive(Debug, Clone)]
pub struct RunPlan {
    /// Candidates in discovery order.
    pub candidates: Vec<FileInfo>,
    /// The processed-files state the run starts from.
    pub state: ProcessedSet,
    /// Whether the run continues an existing report (append) or starts a new
    /// one (truncate and write the listing).
    pub resume: bool,
}

impl RunPlan {
    /// Number of candidates already covered by the state.
    pub fn previously_processed(&self) -> usize {
        self.candidates
            .iter()
            .filter(|f| self.state.contains(&f.key))
            .count()
    }
}

/// Loads the state the next run should start from.
///
/// `--fresh` starts empty. A non-empty state whose report has disappeared is
/// discarded: its entries point at sections that no longer exist.
fn load_start_state(config: &Config) -> ProcessedSet {
    if config.fresh {
        log::debug!("Fresh run requested, ignoring existing state.");
        return ProcessedSet::new();
    }
    let state = ProcessedSet::load(&config.output.state_path);
    if !state.is_empty() && !config.output.output_path.exists() {
        log::warn!(
            "Output file {} is missing, discarding {} processed entries.",
            config.output.output_path.display(),
            state.len()
        );
        return ProcessedSet::new();
    }
    state
}

/// Discovers candidates and loads the processed-files state.
///
/// # Errors
/// Returns `Error::NoFilesFound` if nothing matched, or `Error::Interrupted`
/// if the token was cancelled during discovery.
pub fn prepare(config: &Config, token: &CancellationToken) -> Result<RunPlan> {
    let candidates = discover(config, token)?;
    if candidates.is_empty() {
        return Err(Error::NoFilesFound);
    }
    let state = load_start_state(config);
    let resume = !state.is_empty();
    Ok(RunPlan {
        candidates,
        state,
        resume,
    })
}

/// Writes the report for a prepared run.
///
/// A fresh run truncates the report and writes the directory listing first.
/// A resumed run appends, so sections from earlier runs are kept and files
/// already in the state are not written again. The error log is written at
/// the end if anything was recorded, including when the run is interrupted.
///
/// # Errors
/// Returns `Error::Interrupted` if the token is cancelled; the state has been
/// checkpointed at that point. Returns an error if the report cannot be
/// opened or written.
pub fn execute(
    plan: RunPlan,
    config: &Config,
    token: &CancellationToken,
    progress: Option<Arc<dyn ProgressReporter>>,
) -> Result<RunSummary> {
    let mode = if plan.resume {
        OpenMode::Append
    } else {
        OpenMode::Truncate
    };
    log::debug!(
        "Opening {} ({:?})",
        config.output.output_path.display(),
        mode
    );
    let mut writer = open_output_document(&config.output.output_path, mode)?;
    if mode == OpenMode::Truncate {
        write_directory_structure(&mut writer, &plan.candidates)?;
        writer.flush().context("Failed to flush directory listing")?;
    }

    let reporter: &dyn ProgressReporter = match &progress {
        Some(p) => p.as_ref(),
        None => &NoOpProgress,
    };
    let mut processor = Processor::new(&config.processing, &config.output.state_path, plan.state);
    let result = processor.process_all(&plan.candidates, &mut writer, token, reporter);
    let (state, errors, counts) = processor.into_parts();

    // The run's own failure takes precedence over a failed error-log write.
    let now = chrono::Local::now();
    let error_log_path = match write_error_log(&config.output.output_dir, &errors, &now) {
        Ok(path) => path,
        Err(e) => {
            log::warn!("Could not write error log: {}", e);
            None
        }
    };
    if let Some(path) = &error_log_path {
        log::debug!("Error log written to {}", path.display());
    }
    result?;

    let processed_files = plan
        .candidates
        .iter()
        .filter(|f| state.contains(&f.key))
        .count();
    Ok(RunSummary {
        total_files: plan.candidates.len(),
        processed_files,
        counts,
        output_path: config.output.output_path.clone(),
        error_log_path,
    })
}

/// Prints the directory listing and the candidates without writing any artifact.
///
/// # Errors
/// Returns `Error::NoFilesFound` if nothing matched.
pub fn dry_run(config: &Config, token: &CancellationToken, writer: &mut dyn Write) -> Result<()> {
    let candidates = discover(config, token)?;
    if candidates.is_empty() {
        return Err(Error::NoFilesFound);
    }
    let state = load_start_state(config);
    write_directory_structure(writer, &candidates)?;
    output::dry_run::write_dry_run_output(writer, &candidates, &|f: &FileInfo| {
        state.contains(&f.key)
    })?;
    Ok(())
}
