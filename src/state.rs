//! The processed-files record that makes runs resumable.
//!
//! The record is a small JSON document, `{"processed_files": [...]}`, holding
//! the `/`-separated relative paths whose content has been fully appended to
//! the output document. It is read once at start and overwritten wholesale at
//! every checkpoint.

use crate::errors::{io_error_with_path, Error, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// On-disk shape of the state file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StateRecord {
    processed_files: Vec<String>,
}

/// The set of relative paths already written to the output document.
///
/// # Examples
///
/// ```
/// use dirprint::state::ProcessedSet;
///
/// # fn main() -> dirprint::errors::Result<()> {
/// let temp = tempfile::tempdir().unwrap();
/// let path = temp.path().join(".print_state.json");
///
/// let mut set = ProcessedSet::load(&path);
/// assert!(set.is_empty());
/// set.insert("src/app/page.tsx");
/// set.save(&path)?;
///
/// let reloaded = ProcessedSet::load(&path);
/// assert!(reloaded.contains("src/app/page.tsx"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessedSet {
    entries: BTreeSet<String>,
}

impl ProcessedSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the set from `path`.
    ///
    /// A missing file yields an empty set. An unreadable or malformed file
    /// also yields an empty set, with a warning: a broken record must never
    /// stop a run.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            debug!("No state file at {}, starting empty.", path.display());
            return Self::new();
        }
        match Self::try_load(path) {
            Ok(set) => {
                debug!(
                    "Loaded {} processed entries from {}",
                    set.len(),
                    path.display()
                );
                set
            }
            Err(e) => {
                warn!("Could not load state, starting empty: {}", e);
                Self::new()
            }
        }
    }

    fn try_load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| io_error_with_path(e, path))?;
        let record: StateRecord = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| Error::State(format!("{}: {}", path.display(), e)))?;
        Ok(Self {
            entries: record.processed_files.into_iter().collect(),
        })
    }

    /// Overwrites the record at `path` with the current set.
    ///
    /// The JSON is written to a temporary file in the same directory and then
    /// renamed over the target, so an interrupted save leaves the previous
    /// record intact. Entries are written in sorted order.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or the file cannot
    /// be written or renamed. Callers treat this as a warning.
    pub fn save(&self, path: &Path) -> Result<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|e| io_error_with_path(e, dir))?;

        let record = StateRecord {
            processed_files: self.entries.iter().cloned().collect(),
        };
        let temp = NamedTempFile::new_in(dir).map_err(|e| io_error_with_path(e, dir))?;
        {
            let mut writer = BufWriter::new(temp.as_file());
            serde_json::to_writer(&mut writer, &record)
                .map_err(|e| Error::State(format!("{}: {}", path.display(), e)))?;
            writer.flush().map_err(|e| io_error_with_path(e, path))?;
        }
        temp.persist(path)
            .map_err(|e| io_error_with_path(e.error, path))?;
        debug!("Saved {} processed entries to {}", self.len(), path.display());
        Ok(())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains(key)
    }

    /// Adds `key`; returns `false` if it was already present.
    pub fn insert(&mut self, key: impl Into<String>) -> bool {
        self.entries.insert(key.into())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ProcessedSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(Into::into).collect(),
        }
    }
}
