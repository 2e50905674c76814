//! Matcher - exact-name search with post-order directory emission

use std::path::Path;

use super::config::WalkerConfig;
use super::sink::TreeOutput;
use super::stack::{OutputRecord, OutputStack};
use super::traversal::BaseTraversal;

/// Depth-first search for files named exactly `keyword`.
///
/// A directory is recorded only when something beneath it matched, and its
/// record is pushed after every record from inside it.
pub struct Matcher<'k> {
    config: WalkerConfig,
    keyword: &'k str,
}

impl<'k> Matcher<'k> {
    pub fn new(config: WalkerConfig, keyword: &'k str) -> Self {
        Self { config, keyword }
    }

    pub fn keyword(&self) -> &str {
        self.keyword
    }

    /// Search `dir` at `depth`, pushing records onto `stack`.
    ///
    /// Returns whether `dir` has a matching descendant. Traversal failures go
    /// to `errors.report_error`; a directory that cannot be opened counts as
    /// having no matches and leaves nothing on the stack.
    pub fn search<O: TreeOutput>(
        &self,
        dir: &Path,
        depth: usize,
        stack: &mut OutputStack,
        errors: &mut O,
    ) -> bool {
        let traversal = BaseTraversal::new(&self.config);
        if !traversal.within_depth(depth) {
            return false;
        }

        let entries = match traversal.read_entries(dir) {
            Ok(entries) => entries,
            Err(e) => {
                errors.report_error(&e);
                return false;
            }
        };

        let mut has_matching_descendant = false;
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    errors.report_error(&e);
                    continue;
                }
            };

            if entry.is_dir() {
                if self.search(&entry.path, depth + 1, stack, errors) {
                    has_matching_descendant = true;
                }
            } else if entry.is_file() && entry.name_matches(self.keyword) {
                tracing::debug!(path = %entry.path.display(), "match");
                has_matching_descendant = true;
                stack.push(OutputRecord::file(&entry.path, depth));
            }
        }

        if has_matching_descendant {
            stack.push(OutputRecord::directory(dir, depth));
        }
        has_matching_descendant
    }
}
