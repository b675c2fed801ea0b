// src/processing/content_reader.rs

use crate::errors::{io_error_with_path, Error, Result};
use std::time::{Duration, Instant};
use std::{fs, path::Path};

/// Reads the entire content of a file into a String.
///
/// The content must be valid UTF-8. `budget` is a soft limit: it is checked
/// once the read has completed and cannot interrupt a slow read, but a read
/// that overran it is reported as `Error::ReadTimeout` and its content is
/// discarded.
pub(super) fn read_file_content(path: &Path, budget: Duration) -> Result<String> {
    let start = Instant::now();
    let content = fs::read_to_string(path).map_err(|e| io_error_with_path(e, path))?;
    check_budget(start.elapsed(), budget)?;
    Ok(content)
}

fn check_budget(elapsed: Duration, limit: Duration) -> Result<()> {
    if elapsed > limit {
        return Err(Error::ReadTimeout { elapsed, limit });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const BUDGET: Duration = Duration::from_secs(10);

    #[test]
    fn test_read_valid_file() -> Result<()> {
        let temp = tempdir().unwrap();
        let file_path = temp.path().join("test.ts");
        let content = "export const greeting = 'hello';\n";
        fs::write(&file_path, content).unwrap();

        let read_content = read_file_content(&file_path, BUDGET)?;
        assert_eq!(read_content, content);
        Ok(())
    }

    #[test]
    fn test_read_empty_file() -> Result<()> {
        let temp = tempdir().unwrap();
        let file_path = temp.path().join("empty.ts");
        fs::write(&file_path, "").unwrap();

        assert_eq!(read_file_content(&file_path, BUDGET)?, "");
        Ok(())
    }

    #[test]
    fn test_read_non_existent_file() {
        let path = Path::new("non_existent_file_for_dirprint_test.ts");
        let err = read_file_content(path, BUDGET).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(err.to_string().contains("non_existent_file"));
    }

    #[test]
    fn test_read_non_utf8_file() {
        let temp = tempdir().unwrap();
        let file_path = temp.path().join("binary.json");
        fs::write(&file_path, [0x48, 0x65, 0x80, 0x81]).unwrap();

        let err = read_file_content(&file_path, BUDGET).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_zero_budget_flags_read() {
        let temp = tempdir().unwrap();
        let file_path = temp.path().join("slow.ts");
        fs::write(&file_path, "x").unwrap();

        let err = read_file_content(&file_path, Duration::ZERO).unwrap_err();
        assert!(matches!(err, Error::ReadTimeout { .. }));
    }

    #[test]
    fn test_check_budget_boundary() {
        let limit = Duration::from_secs(10);
        assert!(check_budget(limit, limit).is_ok());
        assert!(check_budget(limit + Duration::from_millis(1), limit).is_err());
    }
}
