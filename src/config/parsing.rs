// src/config/parsing.rs

use anyhow::{anyhow, Context, Result};
use byte_unit::Byte;
use std::collections::BTreeSet;
use std::str::FromStr;

/// Parses the optional max size string, falling back to `default` when absent.
pub(super) fn parse_max_size(max_size_str: Option<&str>, default: u64) -> Result<u64> {
    match max_size_str {
        Some(s) => Byte::from_str(s)
            .map(|b| b.as_u64())
            .with_context(|| format!("Invalid size format: '{}'", s)),
        None => Ok(default),
    }
}

/// Normalizes extension suffixes so each starts with a dot.
///
/// Matching stays case-sensitive, so the case of each entry is kept.
pub(super) fn normalize_extensions(exts: Vec<String>) -> Result<Vec<String>> {
    let mut normalized = Vec::with_capacity(exts.len());
    for ext in exts {
        let trimmed = ext.trim();
        if trimmed.is_empty() || trimmed == "." {
            return Err(anyhow!("Empty extension is not allowed"));
        }
        let ext = if trimmed.starts_with('.') {
            trimmed.to_string()
        } else {
            format!(".{}", trimmed)
        };
        if !normalized.contains(&ext) {
            normalized.push(ext);
        }
    }
    Ok(normalized)
}

/// Collects a list of bare names (directory or file names) into a set.
///
/// Names containing a path separator can never match a single segment and
/// are rejected.
pub(super) fn collect_names(names: Vec<String>, what: &str) -> Result<BTreeSet<String>> {
    names
        .into_iter()
        .map(|n| {
            let n = n.trim().to_string();
            if n.is_empty() {
                Err(anyhow!("Empty {} name is not allowed", what))
            } else if n.contains('/') || n.contains('\\') {
                Err(anyhow!(
                    "Invalid {} name '{}': names must not contain path separators",
                    what,
                    n
                ))
            } else {
                Ok(n)
            }
        })
        .collect()
}

/// Turns a static default list into owned strings.
pub(super) fn owned(defaults: &[&str]) -> Vec<String> {
    defaults.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_max_size() -> Result<()> {
        // Use 1000 for 'k' (SI prefix)
        assert_eq!(parse_max_size(Some("10k"), 0)?, 10 * 1000);
        // Use 1024*1024 for 'MiB' (Binary prefix)
        assert_eq!(parse_max_size(Some("2MiB"), 0)?, 2 * 1024 * 1024);
        // Plain number is bytes
        assert_eq!(parse_max_size(Some("1024"), 0)?, 1024);
        // None input uses the default
        assert_eq!(parse_max_size(None, 77)?, 77);
        Ok(())
    }

    #[test]
    fn test_parse_invalid_max_size() {
        let result = parse_max_size(Some("invalid"), 0);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Invalid size format"));
    }

    #[test]
    fn test_normalize_exts() -> Result<()> {
        let normalized =
            normalize_extensions(vec!["ts".into(), ".tsx".into(), "TS".into(), "ts".into()])?;
        assert_eq!(normalized, vec![".ts", ".tsx", ".TS"]);
        assert!(normalize_extensions(vec![" ".into()]).is_err());
        assert!(normalize_extensions(vec![".".into()]).is_err());
        Ok(())
    }

    #[test]
    fn test_collect_names() -> Result<()> {
        let names = collect_names(vec!["node_modules".into(), " .git ".into()], "directory")?;
        assert!(names.contains("node_modules"));
        assert!(names.contains(".git"));

        let err = collect_names(vec!["src/gen".into()], "directory").unwrap_err();
        assert!(err.to_string().contains("path separators"));
        Ok(())
    }
}
