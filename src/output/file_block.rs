use crate::constants::SECTION_RULE_WIDTH;
use crate::core_types::FileInfo;
use anyhow::{Context, Result};
use log::debug;
use std::io::Write;

/// Writes a single file's section to the output document.
///
/// A section is a blank line, a `File: <relative path>` header underlined to
/// the header's width, a blank line, the raw content, and a closing rule.
/// Content is written byte-for-byte; nothing is trimmed or re-wrapped.
pub fn write_file_section(
    writer: &mut dyn Write,
    file_info: &FileInfo,
    content: &str,
) -> Result<()> {
    let header = format!("File: {}", file_info.key);
    debug!("Writing section: {}", header);

    write!(
        writer,
        "\n{}\n{}\n\n{}\n{}\n",
        header,
        "=".repeat(header.chars().count()),
        content,
        "=".repeat(SECTION_RULE_WIDTH)
    )
    .with_context(|| format!("Failed to write section for '{}'", file_info.key))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn info(rel: &str) -> FileInfo {
        FileInfo::new(PathBuf::from("/base").join(rel), PathBuf::from(rel))
    }

    #[test]
    fn test_section_layout() -> Result<()> {
        let mut out = Vec::new();
        write_file_section(&mut out, &info("src/a.ts"), "const a = 1;\n")?;
        let text = String::from_utf8(out)?;
        let expected = format!(
            "\nFile: src/a.ts\n==============\n\nconst a = 1;\n\n{}\n",
            "=".repeat(50)
        );
        assert_eq!(text, expected);
        Ok(())
    }

    #[test]
    fn test_section_empty_content() -> Result<()> {
        let mut out = Vec::new();
        write_file_section(&mut out, &info("empty.md"), "")?;
        let text = String::from_utf8(out)?;
        assert!(text.starts_with("\nFile: empty.md\n==============\n\n\n"));
        Ok(())
    }

    #[test]
    fn test_underline_counts_characters() -> Result<()> {
        let mut out = Vec::new();
        write_file_section(&mut out, &info("ü.md"), "x")?;
        let text = String::from_utf8(out)?;
        // "File: ü.md" is 10 characters, 11 bytes.
        assert!(text.contains("\nFile: ü.md\n==========\n"));
        Ok(())
    }
}
