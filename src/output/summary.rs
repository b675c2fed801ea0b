// src/output/summary.rs

use crate::config::Config;
use crate::core_types::RunSummary;
use anyhow::Result;
use std::collections::BTreeSet;
use std::io::Write;

const MIB: f64 = 1024.0 * 1024.0;

fn format_names(names: &BTreeSet<String>) -> String {
    let quoted: Vec<String> = names.iter().map(|n| format!("'{}'", n)).collect();
    format!("{{{}}}", quoted.join(", "))
}

/// Writes the pre-run overview shown before the confirmation prompt.
pub fn write_run_plan(
    writer: &mut dyn Write,
    config: &Config,
    total_files: usize,
    previously_processed: usize,
) -> Result<()> {
    let discovery = &config.discovery;
    let processing = &config.processing;

    writeln!(writer, "\nBase path: {}", discovery.root.display())?;
    match &discovery.only_names {
        Some(names) => writeln!(writer, "Including only: {}", format_names(names))?,
        None => writeln!(writer, "Including extensions: {}", discovery.extensions.join(" "))?,
    }
    writeln!(
        writer,
        "Excluding directories: {}",
        format_names(&discovery.exclude_dirs)
    )?;
    writeln!(writer, "Excluding files: {}", format_names(&discovery.exclude_files))?;

    writeln!(writer, "\nFound {} files to process.", total_files)?;
    writeln!(writer, "Previously processed: {} files", previously_processed)?;
    writeln!(writer, "Batch size: {}", processing.batch_size)?;
    writeln!(
        writer,
        "Max file size: {:.2}MB",
        processing.max_file_size as f64 / MIB
    )?;
    writeln!(
        writer,
        "Read timeout: {} seconds",
        processing.read_timeout.as_secs()
    )?;
    writer.flush()?;
    Ok(())
}

/// Writes the end-of-run summary.
pub fn write_run_summary(writer: &mut dyn Write, summary: &RunSummary) -> Result<()> {
    if let Some(path) = &summary.error_log_path {
        writeln!(writer, "\nErrors encountered. Check {} for details.", path.display())?;
    }
    writeln!(writer, "\nProcessing complete!")?;
    writeln!(
        writer,
        "Processed files: {}/{}",
        summary.processed_files, summary.total_files
    )?;
    let counts = &summary.counts;
    writeln!(
        writer,
        "Handled: {} (written: {}, already processed: {}, too large: {}, failed: {})",
        counts.total(),
        counts.written,
        counts.skipped_done,
        counts.skipped_too_large,
        counts.failed
    )?;
    writeln!(writer, "Output written to: {}", summary.output_path.display())?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::OutcomeCounts;
    use std::path::PathBuf;

    #[test]
    fn test_run_plan_mentions_settings() -> Result<()> {
        let config = Config::new_for_test("/project", "/project/output");
        let mut out = Vec::new();
        write_run_plan(&mut out, &config, 12, 4)?;
        let text = String::from_utf8(out)?;

        assert!(text.contains("Base path: /project\n"));
        assert!(text.contains("Including extensions: .tsx .ts .js .jsx .css .json .md\n"));
        assert!(text.contains("Excluding files: {'package-lock.json'}\n"));
        assert!(text.contains("Found 12 files to process.\n"));
        assert!(text.contains("Previously processed: 4 files\n"));
        assert!(text.contains("Batch size: 5\n"));
        assert!(text.contains("Max file size: 10.00MB\n"));
        assert!(text.contains("Read timeout: 10 seconds\n"));
        Ok(())
    }

    #[test]
    fn test_run_plan_allowlist() -> Result<()> {
        let mut config = Config::new_for_test("/project", "/project/output");
        config.discovery.only_names = Some(["page.tsx".to_string()].into());
        let mut out = Vec::new();
        write_run_plan(&mut out, &config, 1, 0)?;
        assert!(String::from_utf8(out)?.contains("Including only: {'page.tsx'}\n"));
        Ok(())
    }

    #[test]
    fn test_run_summary() -> Result<()> {
        let summary = RunSummary {
            total_files: 3,
            processed_files: 2,
            counts: OutcomeCounts {
                written: 1,
                skipped_done: 1,
                skipped_too_large: 1,
                failed: 0,
            },
            output_path: PathBuf::from("/out/print-project.txt"),
            error_log_path: Some(PathBuf::from("/out/error_log_20240101_000000.txt")),
        };
        let mut out = Vec::new();
        write_run_summary(&mut out, &summary)?;
        let text = String::from_utf8(out)?;

        assert!(text.starts_with(
            "\nErrors encountered. Check /out/error_log_20240101_000000.txt for details.\n"
        ));
        assert!(text.contains("Processed files: 2/3\n"));
        assert!(text.contains(
            "Handled: 3 (written: 1, already processed: 1, too large: 1, failed: 0)\n"
        ));
        assert!(text.ends_with("Output written to: /out/print-project.txt\n"));
        Ok(())
    }
}
