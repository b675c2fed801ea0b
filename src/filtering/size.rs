// src/filtering/size.rs

/// Checks if a file's size is within the configured ceiling.
///
/// A file exactly at the ceiling passes.
#[inline]
pub fn passes_size_filter(size: u64, max_file_size: u64) -> bool {
    size <= max_file_size
}
