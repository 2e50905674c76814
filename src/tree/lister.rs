//! Lister - full pre-order listing streamed straight to the output

use std::io;
use std::path::Path;

use super::config::WalkerConfig;
use super::sink::TreeOutput;
use super::traversal::BaseTraversal;

/// Counts gathered during a listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListStats {
    pub files: usize,
    pub directories: usize,
    pub errors: usize,
}

/// Depth-first walker that emits every entry as soon as it is visited.
pub struct Lister {
    config: WalkerConfig,
}

impl Lister {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// List everything beneath `root`, children of the root at depth 0.
    ///
    /// Only write errors from the output are returned; traversal failures go
    /// to `output.report_error` and the walk continues.
    pub fn list<O: TreeOutput>(&self, root: &Path, output: &mut O) -> io::Result<ListStats> {
        let mut stats = ListStats::default();
        self.list_dir(root, 0, output, &mut stats)?;
        Ok(stats)
    }

    fn list_dir<O: TreeOutput>(
        &self,
        path: &Path,
        depth: usize,
        output: &mut O,
        stats: &mut ListStats,
    ) -> io::Result<()> {
        let traversal = BaseTraversal::new(&self.config);
        if !traversal.within_depth(depth) {
            return Ok(());
        }

        tracing::debug!(path = %path.display(), depth, "listing directory");
        let entries = match traversal.read_entries(path) {
            Ok(entries) => entries,
            Err(e) => {
                stats.errors += 1;
                output.report_error(&e);
                return Ok(());
            }
        };

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    stats.errors += 1;
                    output.report_error(&e);
                    continue;
                }
            };

            if entry.is_file() {
                stats.files += 1;
                output.output_entry(&entry, depth)?;
            } else if entry.is_dir() {
                stats.directories += 1;
                output.output_entry(&entry, depth)?;
                self.list_dir(&entry.path, depth + 1, output, stats)?;
            } else {
                tracing::trace!(path = %entry.path.display(), "skipping non-regular entry");
            }
        }
        Ok(())
    }
}
