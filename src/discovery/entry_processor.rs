// src/discovery/entry_processor.rs

use crate::config::DiscoveryConfig;
use crate::core_types::FileInfo;
use crate::filtering::{is_excluded_file, is_file_type, passes_name_filters};
use ignore::DirEntry;
use log::{debug, trace, warn};
use std::path::PathBuf;

/// Processes a single directory entry from the walk.
///
/// Directory pruning already happened in the walker, so this only decides
/// whether a file becomes a candidate: it must be a file, its name must not be
/// excluded, it must pass the name filters, and it must not be one of the
/// run's own artifacts (`skip_paths`).
///
/// Returns `Some(FileInfo)` for a candidate and `None` for anything filtered
/// out. Walker errors are logged and skipped.
pub(crate) fn process_direntry(
    entry_result: Result<DirEntry, ignore::Error>,
    config: &DiscoveryConfig,
    skip_paths: &[PathBuf],
) -> Option<FileInfo> {
    // --- 1. Handle Walker Errors ---
    let entry = match entry_result {
        Ok(entry) => entry,
        Err(ignore_error) => {
            warn!("Walker error: {}", ignore_error);
            return None;
        }
    };

    if entry.depth() == 0 {
        return None;
    }

    let absolute_path = entry.path().to_path_buf();
    trace!("Processing entry: {}", absolute_path.display());

    // --- 2. Filter by File Type ---
    match entry.file_type() {
        Some(ft) if is_file_type(&ft, &absolute_path) => {}
        _ => {
            trace!("Skipping non-file entry: {}", absolute_path.display());
            return None;
        }
    }

    // --- 3. Filter by Name ---
    let file_name = entry.file_name().to_string_lossy();
    if is_excluded_file(&file_name, &config.exclude_files) {
        debug!("Skipping excluded file: {}", absolute_path.display());
        return None;
    }
    if !passes_name_filters(&file_name, config) {
        trace!("Skipping file due to name filter: {}", absolute_path.display());
        return None;
    }

    // --- 4. Never include our own artifacts ---
    if skip_paths.iter().any(|p| p == &absolute_path) {
        debug!("Skipping run artifact: {}", absolute_path.display());
        return None;
    }

    // --- 5. Calculate Relative Path ---
    let relative_path = absolute_path
        .strip_prefix(&config.root)
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|err| {
            warn!(
                "Failed to strip prefix '{}' from '{}': {}. Using absolute path.",
                config.root.display(),
                absolute_path.display(),
                err
            );
            absolute_path.clone()
        });

    let file_info = FileInfo::new(absolute_path, relative_path);
    debug!("Found: {}", file_info.key);
    Some(file_info)
}
