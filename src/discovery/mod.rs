//! Discovers candidate files under the root directory.
use crate::cancellation::CancellationToken;
use crate::config::DiscoveryConfig;
use crate::core_types::FileInfo;
use crate::errors::{Error, Result};
use log::debug;
use std::fs;
use std::path::PathBuf;

mod entry_processor;
mod walker;

use entry_processor::process_direntry;
use walker::build_walker;

/// Walks `config.root` and returns every candidate file in walk order.
///
/// The walk is sequential. Within a directory, files come first in name
/// order, followed by the subdirectories in name order. Directories whose
/// relative path contains an excluded name are pruned entirely.
///
/// # Errors
/// Returns `Error::Interrupted` if the token is cancelled during the walk.
///
/// # Examples
///
/// ```
/// use dirprint::config::Config;
/// use dirprint::discovery::discover_files;
/// use dirprint::CancellationToken;
/// use std::fs;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let temp = tempfile::tempdir()?;
/// let root = temp.path().canonicalize()?;
/// fs::write(root.join("a.ts"), "export {}")?;
/// fs::create_dir(root.join("node_modules"))?;
/// fs::write(root.join("node_modules/c.ts"), "ignored")?;
///
/// let config = Config::new_for_test(&root, root.join("output"));
/// let files = discover_files(&config.discovery, &CancellationToken::new())?;
/// assert_eq!(files.len(), 1);
/// assert_eq!(files[0].key, "a.ts");
/// # Ok(())
/// # }
/// ```
pub fn discover_files(
    config: &DiscoveryConfig,
    token: &CancellationToken,
) -> Result<Vec<FileInfo>> {
    if token.is_cancelled() {
        return Err(Error::Interrupted);
    }

    debug!("Base path: {}", config.root.display());
    debug!("Excluding directories: {:?}", config.exclude_dirs);
    debug!("Excluding files: {:?}", config.exclude_files);

    // Walk paths start from the canonical root, so compare canonical forms.
    let skip_paths: Vec<PathBuf> = config
        .skip_paths
        .iter()
        .map(|p| fs::canonicalize(p).unwrap_or_else(|_| p.clone()))
        .collect();

    let mut files = Vec::new();
    for entry_result in build_walker(config) {
        if token.is_cancelled() {
            return Err(Error::Interrupted);
        }
        if let Some(file_info) = process_direntry(entry_result, config, &skip_paths) {
            files.push(file_info);
        }
    }

    debug!("Discovery complete. Candidates: {}", files.len());
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::path::Path;
    use tempfile::{tempdir, TempDir};

    fn setup_tree(files: &[&str]) -> (TempDir, PathBuf) {
        let temp = tempdir().unwrap();
        let root = temp.path().canonicalize().unwrap();
        for rel in files {
            let path = root.join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, "x").unwrap();
        }
        (temp, root)
    }

    fn keys(files: &[FileInfo]) -> Vec<&str> {
        files.iter().map(|f| f.key.as_str()).collect()
    }

    #[test]
    fn test_excluded_dirs_pruned_at_any_depth() -> Result<()> {
        let (_temp, root) = setup_tree(&[
            "a.ts",
            "node_modules/c.ts",
            "packages/web/node_modules/d.ts",
            "packages/web/src/e.ts",
            ".git/config.json",
            "gpt/print.md",
        ]);
        let config = Config::new_for_test(&root, root.join("output"));
        let files = discover_files(&config.discovery, &CancellationToken::new())?;
        assert_eq!(keys(&files), vec!["a.ts", "packages/web/src/e.ts"]);
        Ok(())
    }

    #[test]
    fn test_extension_and_file_exclusion() -> Result<()> {
        let (_temp, root) = setup_tree(&[
            "a.ts",
            "b.json",
            "package-lock.json",
            "main.rs",
            "notes.txt",
        ]);
        let config = Config::new_for_test(&root, root.join("output"));
        let files = discover_files(&config.discovery, &CancellationToken::new())?;
        assert_eq!(keys(&files), vec!["a.ts", "b.json"]);
        Ok(())
    }

    #[test]
    fn test_order_files_before_subdirs() -> Result<()> {
        let (_temp, root) = setup_tree(&["src/b.ts", "src/a.ts", "z.md", "app/page.tsx", "m.ts"]);
        let config = Config::new_for_test(&root, root.join("output"));
        let files = discover_files(&config.discovery, &CancellationToken::new())?;
        assert_eq!(
            keys(&files),
            vec!["m.ts", "z.md", "app/page.tsx", "src/a.ts", "src/b.ts"]
        );
        Ok(())
    }

    #[test]
    fn test_allowlist_mode() -> Result<()> {
        let (_temp, root) =
            setup_tree(&["page.tsx", "app/page.tsx", "app/layout.tsx", ".gitignore"]);
        let mut config = Config::new_for_test(&root, root.join("output"));
        config.discovery.only_names =
            Some(["page.tsx".to_string(), ".gitignore".to_string()].into());
        let files = discover_files(&config.discovery, &CancellationToken::new())?;
        assert_eq!(keys(&files), vec![".gitignore", "page.tsx", "app/page.tsx"]);
        Ok(())
    }

    #[test]
    fn test_own_artifacts_are_skipped() -> Result<()> {
        let (_temp, root) = setup_tree(&["a.md", "output/print-project.txt"]);
        let mut config = Config::new_for_test(&root, root.join("output"));
        config.discovery.extensions.push(".txt".to_string());
        config.discovery.exclude_dirs.clear();
        let files = discover_files(&config.discovery, &CancellationToken::new())?;
        assert_eq!(keys(&files), vec!["a.md"]);
        Ok(())
    }

    #[test]
    fn test_gitignore_respected_only_when_enabled() -> Result<()> {
        let (_temp, root) = setup_tree(&["a.ts", "dist/bundle.js"]);
        fs::write(root.join(".gitignore"), "dist/\n").unwrap();

        let mut config = Config::new_for_test(&root, root.join("output"));
        let files = discover_files(&config.discovery, &CancellationToken::new())?;
        assert_eq!(keys(&files), vec!["a.ts", "dist/bundle.js"]);

        config.discovery.use_gitignore = true;
        let files = discover_files(&config.discovery, &CancellationToken::new())?;
        assert_eq!(keys(&files), vec!["a.ts"]);
        Ok(())
    }

    #[test]
    fn test_relative_paths_are_relative_to_root() -> Result<()> {
        let (_temp, root) = setup_tree(&["src/lib/utils.ts"]);
        let config = Config::new_for_test(&root, root.join("output"));
        let files = discover_files(&config.discovery, &CancellationToken::new())?;
        assert_eq!(files[0].relative_path, Path::new("src/lib/utils.ts"));
        assert_eq!(files[0].absolute_path, root.join("src/lib/utils.ts"));
        Ok(())
    }

    #[test]
    fn test_cancelled_token_interrupts() {
        let (_temp, root) = setup_tree(&["a.ts"]);
        let config = Config::new_for_test(&root, root.join("output"));
        let token = CancellationToken::new();
        token.cancel();
        let result = discover_files(&config.discovery, &token);
        assert!(matches!(result, Err(Error::Interrupted)));
    }
}
