// src/filtering/file_type.rs

use std::fs::FileType;
use std::path::Path;

/// Checks if a walk entry is a file candidate.
///
/// Regular files qualify. Symbolic links qualify when they point at a regular
/// file; links to directories are not followed.
#[inline]
pub fn is_file_type(file_type: &FileType, path: &Path) -> bool {
    file_type.is_file() || (file_type.is_symlink() && path.is_file())
}
