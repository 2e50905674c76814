//! Errors raised while walking a directory tree
//!
//! None of these abort a run. The walkers hand them to the output sink,
//! which reports them, and then carry on with the next entry or subtree.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WalkError {
    /// The directory could not be opened (missing, not a directory, no permission).
    #[error("cannot open directory '{}': {source}", .path.display())]
    DirectoryOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The link-aware status lookup of an entry failed.
    #[error("cannot stat '{}': {source}", .path.display())]
    EntryStatus {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The directory stream itself yielded an error mid-iteration.
    #[error("cannot read entry in '{}': {source}", .path.display())]
    EntryRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl WalkError {
    /// The path this error occurred at.
    pub fn path(&self) -> &Path {
        match self {
            Self::DirectoryOpen { path, .. }
            | Self::EntryStatus { path, .. }
            | Self::EntryRead { path, .. } => path,
        }
    }

    /// The underlying I/O error kind.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            Self::DirectoryOpen { source, .. }
            | Self::EntryStatus { source, .. }
            | Self::EntryRead { source, .. } => source.kind(),
        }
    }
}
