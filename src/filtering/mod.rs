// src/filtering/mod.rs

//! Provides standalone functions for file filtering logic.
//!
//! Discovery uses these to decide which directories to prune and which files
//! become candidates; the processor uses the size check before reading.

mod exclusion;
mod extension;
mod file_type;
mod size;

pub use exclusion::{is_excluded_dir, is_excluded_file};
pub use extension::passes_name_filters;
pub use file_type::is_file_type;
pub use size::passes_size_filter;
