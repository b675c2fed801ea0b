use crate::config::DiscoveryConfig;
use crate::filtering::is_excluded_dir;
use ignore::WalkBuilder;
use log::debug;
use std::cmp::Ordering;
use std::path::Path;

/// Configures and builds the sequential `ignore::Walk` based on `DiscoveryConfig`.
///
/// Within a directory the walk yields files first and then subdirectories,
/// each group sorted by name. Excluded directories are pruned in
/// `filter_entry`, so none of their descendants are ever visited.
pub(super) fn build_walker(config: &DiscoveryConfig) -> ignore::Walk {
    let mut walker_builder = WalkBuilder::new(&config.root);

    if config.use_gitignore {
        walker_builder.standard_filters(true);
        debug!("Configuring WalkBuilder: standard_filters enabled.");
    } else {
        // Walk everything, hidden files included.
        walker_builder.standard_filters(false);
        debug!("Configuring WalkBuilder: standard_filters disabled.");
    }
    // Process .gitignore files even when the root is not inside a git repository.
    walker_builder.require_git(false);
    walker_builder.follow_links(false);
    walker_builder.sort_by_file_path(files_then_dirs);

    let root = config.root.clone();
    let exclude_dirs = config.exclude_dirs.clone();
    walker_builder.filter_entry(move |entry| {
        if entry.depth() == 0 {
            return true;
        }
        let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
        if !is_dir {
            return true;
        }
        let relative_path = entry.path().strip_prefix(&root).unwrap_or(entry.path());
        if is_excluded_dir(relative_path, &exclude_dirs) {
            debug!("Pruning excluded directory: {}", relative_path.display());
            return false;
        }
        true
    });

    debug!("Building the final walker.");
    walker_builder.build()
}

/// Orders siblings: files before directories, then by file name.
fn files_then_dirs(a: &Path, b: &Path) -> Ordering {
    (a.is_dir(), a.file_name()).cmp(&(b.is_dir(), b.file_name()))
}
