//! Test utilities for building temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::error::WalkError;
use crate::output::{list_line, search_header_line};
use crate::tree::{DirectoryEntry, OutputRecord, TreeOutput};

/// A temporary directory tree for testing.
///
/// The tree is automatically cleaned up when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add an (empty) directory, creating parents as needed.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Populate a balanced tree: `width` directories per level, `depth`
    /// levels deep, `files` files per directory named `file{n}.txt`.
    pub fn populate(&self, width: usize, depth: usize, files: usize) {
        fn fill(dir: &Path, width: usize, depth: usize, files: usize) {
            for n in 0..files {
                fs::write(dir.join(format!("file{}.txt", n)), "content")
                    .expect("Failed to write file");
            }
            if depth == 0 {
                return;
            }
            for n in 0..width {
                let sub = dir.join(format!("dir{}", n));
                fs::create_dir(&sub).expect("Failed to create dir");
                fill(&sub, width, depth - 1, files);
            }
        }
        fill(self.dir.path(), width, depth, files);
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Sink that keeps uncolored output lines and error messages in memory.
#[derive(Debug, Default)]
pub struct CollectingOutput {
    pub lines: Vec<String>,
    pub errors: Vec<String>,
    pub finished: bool,
}

impl TreeOutput for CollectingOutput {
    fn output_entry(&mut self, entry: &DirectoryEntry, depth: usize) -> io::Result<()> {
        self.lines.push(list_line(entry, depth, false));
        Ok(())
    }

    fn search_header(&mut self, keyword: &str) -> io::Result<()> {
        self.lines.push(search_header_line(keyword));
        Ok(())
    }

    fn output_record(&mut self, record: &OutputRecord) -> io::Result<()> {
        self.lines.push(record.to_string());
        Ok(())
    }

    fn report_error(&mut self, err: &WalkError) {
        self.errors.push(err.to_string());
    }

    fn finish(&mut self) -> io::Result<()> {
        self.finished = true;
        Ok(())
    }
}

/// Sink that discards everything; useful for benchmarks.
#[derive(Debug, Default)]
pub struct NullOutput;

impl TreeOutput for NullOutput {
    fn output_entry(&mut self, _entry: &DirectoryEntry, _depth: usize) -> io::Result<()> {
        Ok(())
    }

    fn search_header(&mut self, _keyword: &str) -> io::Result<()> {
        Ok(())
    }

    fn output_record(&mut self, _record: &OutputRecord) -> io::Result<()> {
        Ok(())
    }

    fn report_error(&mut self, _err: &WalkError) {}
}
