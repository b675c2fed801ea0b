// src/output/structure.rs

use crate::constants::{
    SECTION_RULE_WIDTH, STRUCTURE_HEADER, STRUCTURE_INDENT, STRUCTURE_UNDERLINE,
};
use crate::core_types::FileInfo;
use anyhow::Result;
use std::collections::BTreeMap;
use std::io::Write;

/// Writes the directory-structure listing that opens the output document.
///
/// Candidates are grouped by their parent directory (`.` for the root).
/// Directories are listed in sorted order, each followed by its sorted file
/// names one indentation level deeper. The indentation level of a directory
/// is the number of `/` separators in its relative path, so the root and the
/// top-level directories share level 0.
///
/// # Examples
///
/// ```
/// use dirprint::core_types::FileInfo;
/// use dirprint::output::structure::write_directory_structure;
/// use std::path::PathBuf;
///
/// let files = vec![
///     FileInfo::new(PathBuf::from("/p/a.ts"), PathBuf::from("a.ts")),
///     FileInfo::new(PathBuf::from("/p/src/app/page.tsx"), PathBuf::from("src/app/page.tsx")),
/// ];
/// let mut out = Vec::new();
/// write_directory_structure(&mut out, &files).unwrap();
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.contains("./\n    a.ts\n    app/\n        page.tsx\n"));
/// ```
pub fn write_directory_structure(writer: &mut dyn Write, files: &[FileInfo]) -> Result<()> {
    writeln!(writer, "{}", STRUCTURE_HEADER)?;
    writeln!(writer, "{}\n", STRUCTURE_UNDERLINE)?;

    let mut dir_files: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for file in files {
        let (dir, name) = match file.key.rsplit_once('/') {
            Some((dir, name)) => (dir, name),
            None => (".", file.key.as_str()),
        };
        dir_files.entry(dir).or_default().push(name);
    }

    for (dir, names) in dir_files.iter_mut() {
        let level = dir.matches('/').count();
        let dir_name = dir.rsplit('/').next().unwrap_or(dir);
        writeln!(writer, "{}{}/", STRUCTURE_INDENT.repeat(level), dir_name)?;

        names.sort_unstable();
        let file_indent = STRUCTURE_INDENT.repeat(level + 1);
        for name in names.iter() {
            writeln!(writer, "{}{}", file_indent, name)?;
        }
    }

    write!(writer, "\n{}\n\n", "=".repeat(SECTION_RULE_WIDTH))?;
    writer.flush()?;
    Ok(())
}
