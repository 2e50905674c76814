//! Tree formatting and display
//!
//! This module provides sinks for the walkers' output:
//! - Console output, plain or colored, streamed as entries arrive
//! - JSON output, buffered and printed once at the end
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `utils` - Line formatting shared by the sinks and tests
//! - `streaming` - Streaming formatter for console output
//! - `json` - JSON output

mod config;
mod json;
mod streaming;
mod utils;

pub use config::{ColorMode, OutputConfig, should_use_color};
pub use json::{JsonEntry, JsonFormatter, JsonSearch};
pub use streaming::StreamingFormatter;
pub use utils::{entry_parts, list_line, search_header_line};
