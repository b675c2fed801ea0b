// tests/library_api.rs

use dirprint::core_types::FileOutcome;
use dirprint::errors::Error;
use dirprint::prelude::*;
use std::fs;
use tempfile::tempdir;

fn build(root: &std::path::Path, out: &std::path::Path) -> Result<Config> {
    ConfigBuilder::new()
        .input_path(root.to_str().unwrap())
        .output_dir(out.to_str().unwrap())
        .assume_yes(true)
        .build()
}

#[test]
fn test_prepare_and_execute() -> Result<()> {
    let project = tempdir().unwrap();
    let out = tempdir().unwrap();
    fs::write(project.path().join("a.ts"), "a").unwrap();
    fs::write(project.path().join("b.json"), "{}").unwrap();

    let config = build(project.path(), out.path())?;
    let token = CancellationToken::new();
    let plan = prepare(&config, &token)?;
    assert!(!plan.resume);
    assert_eq!(plan.previously_processed(), 0);

    let keys: Vec<_> = plan.candidates.iter().map(|f| f.key.as_str()).collect();
    assert_eq!(keys, vec!["a.ts", "b.json"]);

    let summary = execute(plan, &config, &token, None)?;
    assert_eq!(summary.total_files, 2);
    assert_eq!(summary.processed_files, 2);
    assert_eq!(summary.counts.written, 2);

    let plan = prepare(&config, &token)?;
    assert!(plan.resume);
    assert_eq!(plan.previously_processed(), 2);
    Ok(())
}

#[test]
fn test_processor_outcomes() -> Result<()> {
    let project = tempdir().unwrap();
    let out = tempdir().unwrap();
    fs::write(project.path().join("a.ts"), "a").unwrap();
    fs::write(project.path().join("big.ts"), "0123456789").unwrap();

    let config = ConfigBuilder::new()
        .input_path(project.path().to_str().unwrap())
        .output_dir(out.path().to_str().unwrap())
        .max_size("4")
        .build()?;
    let files = discover(&config, &CancellationToken::new())?;
    assert_eq!(files.len(), 2);

    let mut processor = Processor::new(
        &config.processing,
        &config.output.state_path,
        ProcessedSet::new(),
    );
    let mut sink = Vec::new();
    let outcomes: Vec<FileOutcome> = files
        .iter()
        .map(|f| processor.process_file(f, &mut sink))
        .collect::<Result<_>>()?;

    assert_eq!(outcomes[0], FileOutcome::Written);
    assert_eq!(outcomes[1], FileOutcome::SkippedTooLarge { size: 10 });
    assert_eq!(processor.error_log().len(), 1);
    Ok(())
}

#[test]
fn test_no_files_found() -> Result<()> {
    let project = tempdir().unwrap();
    let out = tempdir().unwrap();
    fs::write(project.path().join("notes.txt"), "n").unwrap();

    let config = build(project.path(), out.path())?;
    let result = prepare(&config, &CancellationToken::new());
    assert!(matches!(result, Err(Error::NoFilesFound)));
    Ok(())
}

#[test]
fn test_state_and_output_must_differ() {
    let project = tempdir().unwrap();
    let out = tempdir().unwrap();
    let clash = out.path().join("same.txt");

    let result = ConfigBuilder::new()
        .input_path(project.path().to_str().unwrap())
        .output_dir(out.path().to_str().unwrap())
        .output_file("same.txt")
        .state_file(clash.to_str().unwrap())
        .build();
    assert!(matches!(result, Err(Error::Config(_))));
}
