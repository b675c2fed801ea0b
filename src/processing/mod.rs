//! Handles the processing stage of the `dirprint` pipeline.
//!
//! The `Processor` walks the candidate list in fixed-size batches and, for
//! each file, decides one terminal outcome: already done, too large, written,
//! or failed. Written files are recorded in the processed-files state, which
//! is checkpointed every few additions and at the end of every batch. Per-file
//! problems go to the run's error log; they never stop the run.

use crate::cancellation::CancellationToken;
use crate::config::ProcessingConfig;
use crate::core_types::{FileInfo, FileOutcome, OutcomeCounts};
use crate::errors::{Error, Result};
use crate::filtering::passes_size_filter;
use crate::output::write_file_section;
use crate::progress::ProgressReporter;
use crate::state::ProcessedSet;
use anyhow::Context;
use log::{debug, warn};
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::instrument;

mod content_reader;

use content_reader::read_file_content;

const MIB: f64 = 1024.0 * 1024.0;

/// Sequential, resumable file processor.
///
/// # Examples
///
/// ```
/// use dirprint::config::Config;
/// use dirprint::core_types::{FileInfo, FileOutcome};
/// use dirprint::processing::Processor;
/// use dirprint::state::ProcessedSet;
/// use std::fs;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let temp = tempfile::tempdir()?;
/// fs::write(temp.path().join("a.ts"), "export {}")?;
/// let config = Config::new_for_test(temp.path(), temp.path().join("output"));
///
/// let mut processor = Processor::new(
///     &config.processing,
///     &config.output.state_path,
///     ProcessedSet::new(),
/// );
/// let file = FileInfo::new(temp.path().join("a.ts"), "a.ts".into());
/// let mut out = Vec::new();
///
/// assert_eq!(processor.process_file(&file, &mut out)?, FileOutcome::Written);
/// assert_eq!(processor.process_file(&file, &mut out)?, FileOutcome::SkippedDone);
/// assert!(String::from_utf8(out)?.contains("File: a.ts"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Processor<'a> {
    config: &'a ProcessingConfig,
    state_path: &'a Path,
    state: ProcessedSet,
    error_log: Vec<String>,
    counts: OutcomeCounts,
    added_since_checkpoint: usize,
}

impl<'a> Processor<'a> {
    /// Creates a processor that resumes from `state`.
    pub fn new(config: &'a ProcessingConfig, state_path: &'a Path, state: ProcessedSet) -> Self {
        Self {
            config,
            state_path,
            state,
            error_log: Vec::new(),
            counts: OutcomeCounts::default(),
            added_since_checkpoint: 0,
        }
    }

    /// Takes one candidate to its terminal outcome.
    ///
    /// The checks run in a fixed order: a file already in the state is skipped
    /// without touching the filesystem, then the size ceiling is checked from
    /// metadata (oversize files are never read), then the content is read and
    /// appended to `writer`. Only a fully written and flushed section adds the
    /// file to the state.
    ///
    /// # Errors
    /// Returns an error only if writing to `writer` fails. Size and read
    /// problems are recorded in the error log and reported as outcomes.
    #[instrument(skip_all, fields(file = %file_info.key))]
    pub fn process_file(
        &mut self,
        file_info: &FileInfo,
        writer: &mut dyn Write,
    ) -> Result<FileOutcome> {
        let outcome = self.decide(file_info, writer)?;
        self.counts.record(&outcome);
        Ok(outcome)
    }

    fn decide(&mut self, file_info: &FileInfo, writer: &mut dyn Write) -> Result<FileOutcome> {
        let key = &file_info.key;

        if self.state.contains(key) {
            debug!("Skipping (already processed): {}", key);
            return Ok(FileOutcome::SkippedDone);
        }

        let size = match fs::metadata(&file_info.absolute_path) {
            Ok(metadata) => metadata.len(),
            Err(e) => {
                let reason = format!("Error checking file size: {}", e);
                self.record_error(format!("Skipping {}: {}", key, reason));
                return Ok(FileOutcome::Failed { reason });
            }
        };
        if !passes_size_filter(size, self.config.max_file_size) {
            self.record_error(format!(
                "Skipping {}: File too large: {:.2}MB (max {:.2}MB)",
                key,
                size as f64 / MIB,
                self.config.max_file_size as f64 / MIB
            ));
            return Ok(FileOutcome::SkippedTooLarge { size });
        }

        let content = match read_file_content(&file_info.absolute_path, self.config.read_timeout) {
            Ok(content) => content,
            Err(e) => {
                let reason = e.to_string();
                self.record_error(format!("Error processing {}: {}", key, reason));
                return Ok(FileOutcome::Failed { reason });
            }
        };

        write_file_section(writer, file_info, &content)?;
        writer.flush().context("Failed to flush output document")?;

        self.state.insert(key.as_str());
        self.added_since_checkpoint += 1;
        if self.added_since_checkpoint >= self.config.checkpoint_interval {
            self.checkpoint();
        }
        debug!("Wrote {} ({} bytes)", key, size);
        Ok(FileOutcome::Written)
    }

    /// Processes one batch, then checkpoints.
    ///
    /// `done` is the number of candidates handled before this batch; it is
    /// used for progress reporting only. The token is checked before each
    /// file; on cancellation the state is checkpointed and
    /// `Error::Interrupted` is returned. A write failure also checkpoints
    /// before the error is returned, so finished files stay recorded.
    pub fn process_batch(
        &mut self,
        batch: &[FileInfo],
        writer: &mut dyn Write,
        token: &CancellationToken,
        progress: &dyn ProgressReporter,
        done: usize,
    ) -> Result<()> {
        for (offset, file_info) in batch.iter().enumerate() {
            if token.is_cancelled() {
                self.checkpoint();
                return Err(Error::Interrupted);
            }
            if let Err(e) = self.process_file(file_info, writer) {
                self.checkpoint();
                return Err(e);
            }
            progress.set_position((done + offset + 1) as u64);
        }
        self.checkpoint();
        Ok(())
    }

    /// Processes every candidate in batches of the configured size.
    pub fn process_all(
        &mut self,
        files: &[FileInfo],
        writer: &mut dyn Write,
        token: &CancellationToken,
        progress: &dyn ProgressReporter,
    ) -> Result<()> {
        let batch_size = self.config.batch_size.max(1);
        let batch_count = files.len().div_ceil(batch_size);
        progress.set_length(files.len() as u64);

        for (index, batch) in files.chunks(batch_size).enumerate() {
            progress.set_message(format!("Batch {}/{}", index + 1, batch_count));
            self.process_batch(batch, writer, token, progress, index * batch_size)?;
        }

        progress.finish_with_message("Done".to_string());
        Ok(())
    }

    /// Persists the state. A failed save is logged and the run continues.
    pub fn checkpoint(&mut self) {
        match self.state.save(self.state_path) {
            Ok(()) => self.added_since_checkpoint = 0,
            Err(e) => warn!("Could not save state: {}", e),
        }
    }

    fn record_error(&mut self, line: String) {
        warn!("{}", line);
        self.error_log.push(line);
    }

    pub fn state(&self) -> &ProcessedSet {
        &self.state
    }

    pub fn error_log(&self) -> &[String] {
        &self.error_log
    }

    pub fn counts(&self) -> OutcomeCounts {
        self.counts
    }

    /// Consumes the processor, returning the final state and error log.
    pub fn into_parts(self) -> (ProcessedSet, Vec<String>, OutcomeCounts) {
        (self.state, self.error_log, self.counts)
    }
}
