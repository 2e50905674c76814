//! JSON output formatting
//!
//! Collects everything in memory and prints one pretty-printed document
//! from `finish`.

use std::io;
use std::path::PathBuf;

use serde::Serialize;

use crate::tree::{DirectoryEntry, OutputRecord, TreeOutput, serialize_path_lossy};

/// One listing entry in JSON form.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum JsonEntry {
    File {
        name: String,
        #[serde(serialize_with = "serialize_path_lossy")]
        path: PathBuf,
        depth: usize,
        size_bytes: u64,
    },
    Directory {
        name: String,
        #[serde(serialize_with = "serialize_path_lossy")]
        path: PathBuf,
        depth: usize,
    },
}

impl JsonEntry {
    fn from_entry(entry: &DirectoryEntry, depth: usize) -> Self {
        if entry.is_dir() {
            JsonEntry::Directory {
                name: entry.name.clone(),
                path: entry.path.clone(),
                depth,
            }
        } else {
            JsonEntry::File {
                name: entry.name.clone(),
                path: entry.path.clone(),
                depth,
                size_bytes: entry.size,
            }
        }
    }
}

/// Search results in JSON form; records are in drain order.
#[derive(Debug, Clone, Serialize)]
pub struct JsonSearch {
    pub pattern: String,
    pub records: Vec<OutputRecord>,
}

#[derive(Debug, Default)]
enum Collected {
    #[default]
    Nothing,
    Listing(Vec<JsonEntry>),
    Search(JsonSearch),
}

/// Formatter that buffers the run and emits a single JSON document.
#[derive(Debug, Default)]
pub struct JsonFormatter {
    collected: Collected,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the collected document. A listing that produced nothing is `[]`.
    pub fn to_json(&self) -> io::Result<String> {
        let result = match &self.collected {
            Collected::Nothing => serde_json::to_string_pretty(&Vec::<JsonEntry>::new()),
            Collected::Listing(entries) => serde_json::to_string_pretty(entries),
            Collected::Search(search) => serde_json::to_string_pretty(search),
        };
        result.map_err(io::Error::other)
    }
}

impl TreeOutput for JsonFormatter {
    fn output_entry(&mut self, entry: &DirectoryEntry, depth: usize) -> io::Result<()> {
        let json = JsonEntry::from_entry(entry, depth);
        match &mut self.collected {
            Collected::Listing(entries) => entries.push(json),
            other => *other = Collected::Listing(vec![json]),
        }
        Ok(())
    }

    fn search_header(&mut self, keyword: &str) -> io::Result<()> {
        self.collected = Collected::Search(JsonSearch {
            pattern: keyword.to_string(),
            records: Vec::new(),
        });
        Ok(())
    }

    fn output_record(&mut self, record: &OutputRecord) -> io::Result<()> {
        if let Collected::Search(search) = &mut self.collected {
            search.records.push(record.clone());
        }
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        println!("{}", self.to_json()?);
        Ok(())
    }
}
