//! Mode selection: full listing or exact-name search

use std::io;
use std::path::Path;

use crate::error::WalkError;
use crate::tree::{
    DirectoryEntry, Lister, Matcher, OutputRecord, OutputStack, TreeOutput, WalkerConfig,
};

/// What a run produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Listing lines or search records written.
    pub emitted: usize,
    /// Whether a search found anything. Always false for listings.
    pub matched: bool,
    /// Non-fatal traversal errors reported along the way.
    pub errors: usize,
}

/// Run a listing (`pattern == None`) or a search rooted at `root`.
///
/// Only output write errors are returned. The search's output stack lives
/// exactly as long as this call: created before the walk, drained after it.
pub fn run<O: TreeOutput>(
    root: &Path,
    pattern: Option<&str>,
    config: &WalkerConfig,
    output: &mut O,
) -> io::Result<RunSummary> {
    let summary = match pattern {
        None => {
            let stats = Lister::new(config.clone()).list(root, output)?;
            RunSummary {
                emitted: stats.files + stats.directories,
                matched: false,
                errors: stats.errors,
            }
        }
        Some(keyword) => {
            output.search_header(keyword)?;

            let matcher = Matcher::new(config.clone(), keyword);
            let mut stack = OutputStack::new();
            let mut counting = ErrorCounter::new(output);
            let matched = matcher.search(root, 0, &mut stack, &mut counting);
            let errors = counting.count;

            tracing::debug!(records = stack.len(), matched, "search finished");
            let mut emitted = 0;
            for record in stack.drain() {
                output.output_record(&record)?;
                emitted += 1;
            }
            RunSummary {
                emitted,
                matched,
                errors,
            }
        }
    };
    output.finish()?;
    Ok(summary)
}

/// Forwards errors to the wrapped sink while counting them.
struct ErrorCounter<'a, O: TreeOutput> {
    inner: &'a mut O,
    count: usize,
}

impl<'a, O: TreeOutput> ErrorCounter<'a, O> {
    fn new(inner: &'a mut O) -> Self {
        Self { inner, count: 0 }
    }
}

impl<O: TreeOutput> TreeOutput for ErrorCounter<'_, O> {
    fn output_entry(&mut self, entry: &DirectoryEntry, depth: usize) -> io::Result<()> {
        self.inner.output_entry(entry, depth)
    }

    fn search_header(&mut self, keyword: &str) -> io::Result<()> {
        self.inner.search_header(keyword)
    }

    fn output_record(&mut self, record: &OutputRecord) -> io::Result<()> {
        self.inner.output_record(record)
    }

    fn report_error(&mut self, err: &WalkError) {
        self.count += 1;
        self.inner.report_error(err);
    }

    fn finish(&mut self) -> io::Result<()> {
        self.inner.finish()
    }
}
