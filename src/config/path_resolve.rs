// src/config/path_resolve.rs

use anyhow::{anyhow, Context, Result};
use std::path::{Path, PathBuf};

/// Resolves the root path string to an absolute, canonicalized directory.
pub fn resolve_input_path(input_path_str: &str) -> Result<PathBuf> {
    let input_path = PathBuf::from(input_path_str);
    let resolved = input_path
        .canonicalize()
        .with_context(|| format!("Failed to resolve input path: '{}'", input_path_str))?;
    if !resolved.is_dir() {
        return Err(anyhow!(
            "Input path is not a directory: '{}'",
            input_path_str
        ));
    }
    Ok(resolved)
}

/// Makes `path` absolute against the current directory without touching the
/// filesystem, so it works for locations that do not exist yet.
pub(super) fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        let cwd = std::env::current_dir().context("Failed to read the current directory")?;
        Ok(cwd.join(path))
    }
}
