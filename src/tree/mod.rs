//! Directory tree walking logic
//!
//! This module provides the two traversal modes:
//!
//! - `Lister`: pre-order walk that emits every entry as it is visited
//! - `Matcher`: post-order exact-name search that pushes records onto an
//!   `OutputStack`, drained last-in-first-out once the walk is done

mod config;
mod entry;
mod lister;
mod matcher;
mod sink;
mod stack;
mod traversal;
mod utils;

// Re-export public types
pub use config::WalkerConfig;
pub use entry::{DirectoryEntry, EntryKind};
pub use lister::{ListStats, Lister};
pub use matcher::Matcher;
pub use sink::TreeOutput;
pub use stack::{OutputRecord, OutputStack, RecordKind};
pub use traversal::BaseTraversal;
pub use utils::{INDENT_WIDTH, format_size, indent, serialize_path_lossy};
