// src/output/writer.rs

//! Opens the output document.
//!
//! A fresh run truncates the document; a resumed run appends to it so the
//! sections written by earlier runs are kept.

use crate::errors::{io_error_with_path, Result};
use std::fs::{self, File, OpenOptions};
use std::io::BufWriter;
use std::path::Path;

/// How the output document is opened at the start of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    /// Truncate and start a new document.
    Truncate,
    /// Keep existing content and append new sections.
    Append,
}

/// Opens `path` for writing, creating its parent directory if needed.
///
/// # Errors
/// Returns an error if the directory or the file cannot be created.
pub fn open_output_document(path: &Path, mode: OpenMode) -> Result<BufWriter<File>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| io_error_with_path(e, parent))?;
        }
    }
    let mut options = OpenOptions::new();
    options.create(true);
    match mode {
        OpenMode::Truncate => options.write(true).truncate(true),
        OpenMode::Append => options.append(true),
    };
    let file = options.open(path).map_err(|e| io_error_with_path(e, path))?;
    Ok(BufWriter::new(file)) // Use BufWriter for file I/O
}
