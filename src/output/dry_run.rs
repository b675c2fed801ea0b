// src/output/dry_run.rs

use crate::core_types::FileInfo;
use anyhow::Result;
use log::debug;
use std::io::Write;

/// Writes the output for a dry run (-D).
///
/// Lists the relative paths of the files that would be processed, in
/// discovery order, marking the ones the persisted state already covers.
pub fn write_dry_run_output(
    writer: &mut dyn Write,
    files: &[FileInfo],
    is_done: &dyn Fn(&FileInfo) -> bool,
) -> Result<()> {
    debug!("Executing dry run output...");
    writeln!(writer, "\n--- Dry Run: Files that would be processed ---")?;

    for file_info in files {
        if is_done(file_info) {
            writeln!(writer, "- {} (already processed)", file_info.key)?;
        } else {
            writeln!(writer, "- {}", file_info.key)?;
        }
    }

    writeln!(writer, "--- End Dry Run ---")?;
    writer.flush()?; // Flush dry run output
    Ok(())
}
