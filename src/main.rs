//! CLI entry point for ls2

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::Parser;
use ls2::logging::init_logging;
use ls2::{
    ColorMode, JsonFormatter, OutputConfig, StreamingFormatter, TreeOutput, WalkerConfig, run,
};

#[derive(Parser, Debug)]
#[command(name = "ls2")]
#[command(about = "List a directory tree, or find files by exact name")]
#[command(override_usage = "ls2 <path> [exact-match-pattern] [OPTIONS]")]
#[command(version)]
struct Args {
    /// Directory to list or search
    #[arg(allow_hyphen_values = true)]
    path: PathBuf,

    /// Show only files named exactly this (case-sensitive), plus the directories containing them
    #[arg(value_name = "exact-match-pattern", allow_hyphen_values = true)]
    pattern: Option<String>,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "level")]
    level: Option<usize>,

    /// Sort entries by name instead of filesystem order
    #[arg(long = "sort")]
    sort: bool,

    /// Show file sizes in human-readable form (1.5K, 2.0M)
    #[arg(short = 'H', long = "human-readable")]
    human_readable: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,
}

fn print_usage() {
    let program = std::env::args().next().unwrap_or_else(|| "ls2".to_string());
    println!("Usage: {} <path> [exact-match-pattern]", program);
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            ErrorKind::InvalidValue | ErrorKind::ValueValidation => {
                eprint!("{}", e);
                print_usage();
                process::exit(1);
            }
            _ => {
                print_usage();
                process::exit(1);
            }
        },
    };

    init_logging();

    let walker_config = WalkerConfig {
        max_depth: args.level,
        sort_entries: args.sort,
    };

    let result = if args.json {
        let mut formatter = JsonFormatter::new();
        execute(&args, &walker_config, &mut formatter)
    } else {
        let output_config = OutputConfig::with_color(
            args.color,
            std::io::stdout().is_terminal(),
            std::io::stderr().is_terminal(),
            args.human_readable,
        );
        let mut formatter = StreamingFormatter::new(output_config);
        execute(&args, &walker_config, &mut formatter)
    };

    if let Err(e) = result {
        eprintln!("ls2: error writing output: {}", e);
        process::exit(1);
    }
}

fn execute<O: TreeOutput>(
    args: &Args,
    walker_config: &WalkerConfig,
    output: &mut O,
) -> std::io::Result<()> {
    let summary = run(&args.path, args.pattern.as_deref(), walker_config, output)?;
    tracing::debug!(
        emitted = summary.emitted,
        matched = summary.matched,
        errors = summary.errors,
        "run complete"
    );
    Ok(())
}
