use std::path::PathBuf;

use clap::builder::{OsStringValueParser, TypedValueParser};
use clap::{Parser, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "dirlines")]
#[command(author, version, about = "Count lines of text per file extension in a directory tree")]
#[command(long_about = "Recursively walks a directory and reports the total number of lines \
    along with a per-extension breakdown.\n\n\
    Exit codes:\n  \
    0 - Report printed\n  \
    1 - A file or directory could not be read\n  \
    2 - Usage error")]
pub struct Cli {
    /// Directory to scan
    #[arg(value_parser = OsStringValueParser::new().map(PathBuf::from))]
    pub dir: PathBuf,

    /// File extensions to count (comma-separated, without dots, e.g., go,rs,ts)
    #[arg(long, value_delimiter = ',')]
    pub ext: Option<Vec<String>>,

    /// Leave whitespace-only lines out of all counts
    #[arg(long)]
    pub omit_blank: bool,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Control color output of log messages
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,
}

impl Cli {
    /// Extensions to filter on, or `None` when every file should be scanned.
    ///
    /// An empty `--ext ""` means no filter.
    #[must_use]
    pub fn accepted_extensions(&self) -> Option<&[String]> {
        match self.ext.as_deref() {
            None => None,
            Some([only]) if only.is_empty() => None,
            Some(exts) => Some(exts),
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
