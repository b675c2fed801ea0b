// src/filtering/exclusion.rs

use std::collections::BTreeSet;
use std::path::{Component, Path};

/// Checks if a directory must be pruned from the walk.
///
/// `relative_path` is the directory's path relative to the scanned root. The
/// directory is excluded when any of its segments is an excluded name, so an
/// excluded name deep inside the tree (e.g. `packages/web/node_modules`) prunes
/// just as well as a top-level one.
///
/// # Examples
///
/// ```
/// use dirprint::filtering::is_excluded_dir;
/// use std::collections::BTreeSet;
/// use std::path::Path;
///
/// let excluded: BTreeSet<String> = ["node_modules".to_string()].into();
/// assert!(is_excluded_dir(Path::new("web/node_modules/react"), &excluded));
/// assert!(!is_excluded_dir(Path::new("web/src"), &excluded));
/// ```
pub fn is_excluded_dir(relative_path: &Path, exclude_dirs: &BTreeSet<String>) -> bool {
    relative_path.components().any(|component| match component {
        Component::Normal(segment) => segment
            .to_str()
            .is_some_and(|s| exclude_dirs.contains(s)),
        _ => false,
    })
}

/// Checks if a file name is in the exact-match exclusion set.
#[inline]
pub fn is_excluded_file(file_name: &str, exclude_files: &BTreeSet<String>) -> bool {
    exclude_files.contains(file_name)
}
