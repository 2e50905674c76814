//! Filesystem access shared by the Lister and the Matcher.
//!
//! Both walkers read one directory at a time through `BaseTraversal`, which
//! opens the directory, classifies every child with a link-aware status
//! lookup, and applies the walker configuration (depth limit, sorting).
//! The directory handle is released before the caller recurses.

use std::fs;
use std::path::Path;

use super::config::WalkerConfig;
use super::entry::{DirectoryEntry, EntryKind};
use crate::error::WalkError;

/// Common base traversal functionality shared by both walker implementations.
pub struct BaseTraversal<'a> {
    pub config: &'a WalkerConfig,
}

impl<'a> BaseTraversal<'a> {
    pub fn new(config: &'a WalkerConfig) -> Self {
        Self { config }
    }

    /// Check whether a walker may produce entries at `depth`.
    pub fn within_depth(&self, depth: usize) -> bool {
        !self.config.beyond_max_depth(depth)
    }

    /// Read and classify the children of `path`.
    ///
    /// Opening the directory is the only failure that loses the whole node.
    /// Per-entry failures come back inline so the caller can report them and
    /// keep going with the siblings.
    pub fn read_entries(
        &self,
        path: &Path,
    ) -> Result<Vec<Result<DirectoryEntry, WalkError>>, WalkError> {
        let read_dir = fs::read_dir(path).map_err(|source| WalkError::DirectoryOpen {
            path: path.to_path_buf(),
            source,
        })?;

        let mut raw: Vec<_> = read_dir.collect();
        if self.config.sort_entries {
            raw.sort_by_key(|e| e.as_ref().ok().map(|e| e.file_name()));
        }

        Ok(raw
            .into_iter()
            .map(|entry| match entry {
                Ok(entry) => classify(&entry),
                Err(source) => Err(WalkError::EntryRead {
                    path: path.to_path_buf(),
                    source,
                }),
            })
            .collect())
    }
}

/// Status lookup on the entry itself; a symlink is reported as a symlink.
fn classify(entry: &fs::DirEntry) -> Result<DirectoryEntry, WalkError> {
    let path = entry.path();
    let meta = match fs::symlink_metadata(&path) {
        Ok(m) => m,
        Err(source) => return Err(WalkError::EntryStatus { path, source }),
    };
    let kind = EntryKind::from_metadata(&meta);
    Ok(DirectoryEntry {
        name: entry.file_name().to_string_lossy().into_owned(),
        path,
        kind,
        size: meta.len(),
    })
}
