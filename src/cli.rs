// src/cli.rs

use clap::Parser;

/// Concatenates the source files of a project into a single text report.
///
/// dirprint walks a directory, keeps the files whose names match the allowed
/// suffixes (pruning excluded directories), prints a directory listing and then
/// appends each file's content to one output document. Files already written
/// by an earlier run are remembered in a small state file and skipped, so an
/// interrupted run picks up where it stopped.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Root directory to scan.
    #[arg(default_value = ".")]
    pub input_path: String,

    // --- Filtering Options ---
    /// Directory names to prune from the walk, matched against every path segment (repeatable).
    #[arg(long = "exclude-dir", value_name = "NAME", num_args = 1..)]
    pub exclude_dirs: Option<Vec<String>>,

    /// File names to skip, matched exactly (repeatable).
    #[arg(long = "exclude-file", value_name = "NAME", num_args = 1..)]
    pub exclude_files: Option<Vec<String>>,

    /// Include only files whose names end with these suffixes (case-sensitive, repeatable).
    #[arg(short = 'e', long = "ext", value_name = "SUFFIX", num_args = 1..)]
    pub extensions: Option<Vec<String>>,

    /// Include only files with exactly these names, ignoring --ext (repeatable).
    #[arg(long = "only", value_name = "NAME", num_args = 1..)]
    pub only: Option<Vec<String>>,

    /// Respect .gitignore, .ignore, and hidden-file rules while walking.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub gitignore: bool,

    // --- Processing Options ---
    /// Maximum file size to include (e.g., "10MiB", "512k"). Larger files are logged and skipped.
    #[arg(short = 'm', long, value_name = "SIZE")]
    pub max_size: Option<String>,

    /// Soft per-file read budget in seconds. Slower reads are recorded as failures.
    #[arg(long, value_name = "SECS")]
    pub read_timeout: Option<u64>,

    /// Number of files handled between state checkpoints.
    #[arg(long, value_name = "N")]
    pub batch_size: Option<usize>,

    /// Also checkpoint after this many newly written files.
    #[arg(long = "checkpoint-every", value_name = "N")]
    pub checkpoint_interval: Option<usize>,

    // --- Output Options ---
    /// Directory receiving the report, the state file, and error logs.
    #[arg(short = 'O', long, value_name = "DIR")]
    pub output_dir: Option<String>,

    /// File name of the report inside the output directory.
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output_file: Option<String>,

    /// Location of the processed-files state (defaults to <output-dir>/.print_state.json).
    #[arg(long, value_name = "PATH")]
    pub state_file: Option<String>,

    // --- Execution Control ---
    /// Do not ask for confirmation before writing.
    #[arg(short = 'y', long, action = clap::ArgAction::SetTrue)]
    pub yes: bool,

    /// Ignore the persisted state and start a new report.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub fresh: bool,

    /// Print the files that would be processed without writing anything.
    #[arg(short = 'D', long, action = clap::ArgAction::SetTrue)]
    pub dry_run: bool,
}
