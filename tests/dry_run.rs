// tests/dry_run.rs

mod common;

use common::{create_file, dirprint_cmd};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_dry_run_lists_candidates_only() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "b.ts", "b")?;
    create_file(temp.path(), "a.md", "a")?;
    create_file(temp.path(), "src/c.tsx", "c")?;
    create_file(temp.path(), ".next/d.js", "d")?;

    dirprint_cmd()
        .arg("--dry-run")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(concat!(
            "\n--- Dry Run: Files that would be processed ---\n",
            "- a.md\n- b.ts\n- src/c.tsx\n",
            "--- End Dry Run ---\n"
        )))
        .stdout(predicate::str::contains("d.js").not());

    // Nothing is written, not even the output directory.
    assert!(!temp.path().join("output").exists());
    Ok(())
}

#[test]
fn test_dry_run_marks_processed_files() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "a.ts", "a")?;
    create_file(temp.path(), "b.ts", "b")?;
    let out = temp.path().join("output");
    fs::create_dir_all(&out)?;
    fs::write(out.join("print-project.txt"), "previous")?;
    fs::write(out.join(".print_state.json"), r#"{"processed_files":["a.ts"]}"#)?;

    dirprint_cmd()
        .arg("-D")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("- a.ts (already processed)\n"))
        .stdout(predicate::str::contains("- b.ts\n"));

    assert_eq!(fs::read_to_string(out.join("print-project.txt"))?, "previous");
    Ok(())
}

#[test]
fn test_dry_run_needs_no_confirmation() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "a.ts", "a")?;

    dirprint_cmd()
        .arg("-D")
        .current_dir(temp.path())
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("(y/n)").not());
    Ok(())
}
