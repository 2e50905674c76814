//! Shared utility functions for output formatting

use crate::tree::{DirectoryEntry, format_size, indent};

/// Split a listing entry into its name part and its annotation.
///
/// Files: `("name", " (N bytes)")`, or `("name", " (1.5K)")` with human sizes.
/// Directories: `("name/", " (directory)")`.
pub fn entry_parts(entry: &DirectoryEntry, human_sizes: bool) -> (String, String) {
    if entry.is_dir() {
        (format!("{}/", entry.name), " (directory)".to_string())
    } else if human_sizes {
        (entry.name.clone(), format!(" ({})", format_size(entry.size)))
    } else {
        (entry.name.clone(), format!(" ({} bytes)", entry.size))
    }
}

/// A full, uncolored listing line for `entry` at `depth`.
pub fn list_line(entry: &DirectoryEntry, depth: usize, human_sizes: bool) -> String {
    let (name, annotation) = entry_parts(entry, human_sizes);
    format!("{}{}{}", indent(depth), name, annotation)
}

/// Header printed before search results.
pub fn search_header_line(keyword: &str) -> String {
    format!("Looking for: {}", keyword)
}
