//! Output sink trait the walkers write into

use std::io;

use super::entry::DirectoryEntry;
use super::stack::OutputRecord;
use crate::error::WalkError;

/// Callback for tree output - receives entries and records for display.
///
/// Listing entries arrive in pre-order as they are visited. Search records
/// arrive only after the walk has finished, already in drain order.
pub trait TreeOutput {
    /// One entry of a full listing, at `depth` below the root.
    fn output_entry(&mut self, entry: &DirectoryEntry, depth: usize) -> io::Result<()>;

    /// Announce the keyword before any search record is written.
    fn search_header(&mut self, keyword: &str) -> io::Result<()>;

    /// One drained search record.
    fn output_record(&mut self, record: &OutputRecord) -> io::Result<()>;

    /// A non-fatal traversal failure. The walk continues afterwards.
    fn report_error(&mut self, err: &WalkError) {
        eprintln!("ls2: {}", err);
    }

    /// Called once after the last entry or record.
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}
