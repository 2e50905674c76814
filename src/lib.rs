//! ls2 - recursive directory listing and exact-name file search

pub mod dispatch;
pub mod error;
pub mod logging;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use dispatch::{RunSummary, run};
pub use error::WalkError;
pub use output::{ColorMode, JsonFormatter, OutputConfig, StreamingFormatter};
pub use tree::{
    DirectoryEntry, EntryKind, Lister, Matcher, OutputRecord, OutputStack, TreeOutput,
    WalkerConfig,
};
