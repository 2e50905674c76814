//! Streaming output formatter
//!
//! This module provides `StreamingFormatter` which writes listing lines and
//! search records directly to stdout as they arrive, with optional color.
//! Traversal errors go to stderr.

use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::error::WalkError;
use crate::tree::{DirectoryEntry, OutputRecord, TreeOutput, indent};

use super::config::OutputConfig;
use super::utils::{entry_parts, search_header_line};

/// Streaming output formatter - outputs directly to stdout without buffering.
/// Implements the TreeOutput trait for use with the Lister and Matcher.
pub struct StreamingFormatter {
    config: OutputConfig,
    stdout: StandardStream,
    stderr: StandardStream,
}

impl StreamingFormatter {
    pub fn new(config: OutputConfig) -> Self {
        // Color detection already happened, per stream, when building the config.
        let choice = |enabled: bool| {
            if enabled {
                ColorChoice::Always
            } else {
                ColorChoice::Never
            }
        };
        Self {
            stdout: StandardStream::stdout(choice(config.use_color)),
            stderr: StandardStream::stderr(choice(config.use_color_stderr)),
            config,
        }
    }

    fn dir_color() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Blue)).set_bold(true);
        spec
    }
}

impl TreeOutput for StreamingFormatter {
    fn output_entry(&mut self, entry: &DirectoryEntry, depth: usize) -> io::Result<()> {
        let (name, annotation) = entry_parts(entry, self.config.human_sizes);
        write!(self.stdout, "{}", indent(depth))?;

        if entry.is_dir() {
            self.stdout.set_color(&Self::dir_color())?;
            write!(self.stdout, "{}", name)?;
            self.stdout.reset()?;
            writeln!(self.stdout, "{}", annotation)?;
        } else {
            write!(self.stdout, "{}", name)?;
            self.stdout
                .set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
            write!(self.stdout, "{}", annotation)?;
            self.stdout.reset()?;
            writeln!(self.stdout)?;
        }
        Ok(())
    }

    fn search_header(&mut self, keyword: &str) -> io::Result<()> {
        writeln!(self.stdout, "{}", search_header_line(keyword))
    }

    fn output_record(&mut self, record: &OutputRecord) -> io::Result<()> {
        write!(self.stdout, "{}", indent(record.depth()))?;
        if record.is_dir() {
            self.stdout.set_color(&Self::dir_color())?;
            write!(self.stdout, "{}", record.label())?;
            self.stdout.reset()?;
        } else {
            write!(self.stdout, "{}", record.label())?;
        }
        writeln!(self.stdout)
    }

    fn report_error(&mut self, err: &WalkError) {
        // Best effort: a failing stderr must not stop the walk.
        let _ = self
            .stderr
            .set_color(ColorSpec::new().set_fg(Some(Color::Red)));
        let _ = write!(self.stderr, "ls2:");
        let _ = self.stderr.reset();
        let _ = writeln!(self.stderr, " {}", err);
    }

    fn finish(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }
}
