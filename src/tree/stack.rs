//! Output collection for search mode
//!
//! The Matcher appends records in post-order: everything inside a directory
//! goes in before the directory itself. Draining last-in-first-out turns that
//! back into a top-down view where each directory line precedes its matches.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::utils::{indent, serialize_path_lossy};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    File,
    Directory,
}

/// A formatted search result line. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRecord {
    #[serde(rename = "type")]
    kind: RecordKind,
    #[serde(serialize_with = "serialize_path_lossy")]
    path: PathBuf,
    depth: usize,
}

impl OutputRecord {
    pub fn file(path: &Path, depth: usize) -> Self {
        Self {
            kind: RecordKind::File,
            path: path.to_path_buf(),
            depth,
        }
    }

    pub fn directory(path: &Path, depth: usize) -> Self {
        Self {
            kind: RecordKind::Directory,
            path: path.to_path_buf(),
            depth,
        }
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn is_dir(&self) -> bool {
        self.kind == RecordKind::Directory
    }

    /// The record text without indentation: the path, plus `/` for directories.
    pub fn label(&self) -> String {
        match self.kind {
            RecordKind::File => self.path.display().to_string(),
            RecordKind::Directory => format!("{}/", self.path.display()),
        }
    }
}

impl fmt::Display for OutputRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", indent(self.depth), self.label())
    }
}

/// Last-in-first-out collection of search records.
#[derive(Debug, Default)]
pub struct OutputStack {
    records: Vec<OutputRecord>,
}

impl OutputStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: OutputRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consume the stack, yielding the most recently pushed record first.
    pub fn drain(self) -> impl Iterator<Item = OutputRecord> {
        self.records.into_iter().rev()
    }
}
