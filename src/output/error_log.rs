// src/output/error_log.rs

use crate::constants::{ERROR_LOG_PREFIX, ERROR_LOG_TIMESTAMP_FORMAT};
use crate::errors::{io_error_with_path, Result};
use chrono::{DateTime, TimeZone};
use log::debug;
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};

/// Builds the error log file name for a run started at `timestamp`.
pub fn error_log_filename<Tz>(timestamp: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!(
        "{}{}.txt",
        ERROR_LOG_PREFIX,
        timestamp.format(ERROR_LOG_TIMESTAMP_FORMAT)
    )
}

/// Writes the run's error lines to a timestamped file in `dir`.
///
/// Lines are joined with `\n`. Nothing is written when `lines` is empty.
///
/// # Returns
/// The path of the written file, or `None` if there was nothing to write.
pub fn write_error_log<Tz>(
    dir: &Path,
    lines: &[String],
    timestamp: &DateTime<Tz>,
) -> Result<Option<PathBuf>>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if lines.is_empty() {
        return Ok(None);
    }
    fs::create_dir_all(dir).map_err(|e| io_error_with_path(e, dir))?;
    let path = dir.join(error_log_filename(timestamp));
    fs::write(&path, lines.join("\n")).map_err(|e| io_error_with_path(e, &path))?;
    debug!("Wrote {} error lines to {}", lines.len(), path.display());
    Ok(Some(path))
}
