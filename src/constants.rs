// src/constants.rs

/// Directory names pruned from the walk unless overridden with `--exclude-dir`.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[".next", "gpt", "node_modules", ".git", ".vscode"];

/// File names skipped unless overridden with `--exclude-file`.
pub const DEFAULT_EXCLUDED_FILES: &[&str] = &["package-lock.json"];

/// Filename suffixes included unless overridden with `--ext`.
pub const DEFAULT_EXTENSIONS: &[&str] = &[".tsx", ".ts", ".js", ".jsx", ".css", ".json", ".md"];

/// Default per-file size ceiling (10 MiB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Default soft read budget per file, in seconds.
pub const DEFAULT_READ_TIMEOUT_SECS: u64 = 10;

/// Number of candidates handled between unconditional state checkpoints.
pub const DEFAULT_BATCH_SIZE: usize = 5;

/// Number of newly written files between intermediate state checkpoints.
pub const DEFAULT_CHECKPOINT_INTERVAL: usize = 5;

pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const DEFAULT_OUTPUT_FILENAME: &str = "print-project.txt";
pub const STATE_FILENAME: &str = ".print_state.json";

/// Prefix and timestamp format of the per-run error log file.
pub const ERROR_LOG_PREFIX: &str = "error_log_";
pub const ERROR_LOG_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Title written at the top of the output document.
pub const STRUCTURE_HEADER: &str = "Directory Structure:";

/// Width of the `=` rule closing the listing and each file section.
pub const SECTION_RULE_WIDTH: usize = 50;

/// Indentation unit of the directory listing.
pub const STRUCTURE_INDENT: &str = "    ";

/// Underline of the listing title.
pub const STRUCTURE_UNDERLINE: &str = "===================";
