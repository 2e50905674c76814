//! Output configuration types

use clap::ValueEnum;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to color one stream, given whether that stream is a terminal.
pub fn should_use_color(mode: ColorMode, is_terminal: bool) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            is_terminal
        }
    }
}

/// Configuration for output formatting.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Color listing and search output on stdout.
    pub use_color: bool,
    /// Color error reports on stderr; resolved separately from stdout.
    pub use_color_stderr: bool,
    /// Print file sizes as `1.5K` instead of `1536 bytes`.
    pub human_sizes: bool,
}

impl OutputConfig {
    /// Resolve `mode` against each stream's own terminal status.
    pub fn with_color(
        mode: ColorMode,
        stdout_is_terminal: bool,
        stderr_is_terminal: bool,
        human_sizes: bool,
    ) -> Self {
        Self {
            use_color: should_use_color(mode, stdout_is_terminal),
            use_color_stderr: should_use_color(mode, stderr_is_terminal),
            human_sizes,
        }
    }
}
