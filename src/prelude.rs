//! The `dirprint` prelude for convenient library usage.
//!
//! This module re-exports the types and functions needed to drive a run
//! programmatically.
//!
//! # Example
//!
//! ```
//! use dirprint::prelude::*;
//! # fn main() -> Result<()> {
//! # let project = tempfile::tempdir().unwrap();
//! # std::fs::write(project.path().join("index.ts"), "export {}").unwrap();
//! # let out = tempfile::tempdir().unwrap();
//!
//! let config = ConfigBuilder::new()
//!     .input_path(project.path().to_str().unwrap())
//!     .output_dir(out.path().to_str().unwrap())
//!     .build()?;
//! let token = CancellationToken::new();
//! let plan = prepare(&config, &token)?;
//! let summary = execute(plan, &config, &token, None)?;
//! assert_eq!(summary.processed_files, 1);
//!
//! # Ok(())
//! # }
//! ```

pub use crate::cancellation::CancellationToken;
pub use crate::config::{Config, ConfigBuilder};
pub use crate::core_types::{FileInfo, FileOutcome, OutcomeCounts, RunSummary};
pub use crate::errors::{Error, Result};
pub use crate::filtering::{is_excluded_dir, passes_name_filters, passes_size_filter};
pub use crate::processing::Processor;
pub use crate::progress::{NoOpProgress, ProgressReporter};
pub use crate::state::ProcessedSet;
pub use crate::{discover, dry_run, execute, prepare, RunPlan};
