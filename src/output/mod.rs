// src/output/mod.rs

//! Everything the run writes: the output document (directory listing and
//! file sections), the error log, and the console plan and summary.

pub mod dry_run;
pub mod error_log;
pub mod file_block;
pub mod structure;
pub mod summary;
pub mod writer; // Opens the output document

pub use error_log::write_error_log;
pub use file_block::write_file_section;
pub use structure::write_directory_structure;
pub use writer::{open_output_document, OpenMode};
