//! Command-line interface definition using clap.
//!
//! [`Args`] is the argument model of the `wagroup` binary; [`CliFormat`]
//! mirrors [`OutputFormat`](crate::format::OutputFormat) as a clap value enum.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::ParserConfig;
use crate::format::OutputFormat;

/// Parse an exported WhatsApp group transcript into structured messages.
#[derive(Parser, Debug, Clone)]
#[command(name = "wagroup")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    wagroup _chat.txt --group \"Weekend Hikers\"
    wagroup _chat.txt -g Family -o messages.jsonl
    wagroup _chat.txt -g Family -o messages.out -f csv
    RUST_LOG=wagroup=debug wagroup _chat.txt -g Family")]
pub struct Args {
    /// Path to the exported transcript (_chat.txt)
    pub input: PathBuf,

    /// Name of the exported group; its own banner lines are dropped
    #[arg(short, long)]
    pub group: String,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format (defaults to the output file's extension, else JSON)
    #[arg(short, long, value_enum)]
    pub format: Option<CliFormat>,

    /// Keep "X added Y" / "X removed Y" membership events
    #[arg(long)]
    pub keep_membership: bool,

    /// Log parser diagnostics at debug level
    #[arg(short, long)]
    pub verbose: bool,

    /// Don't print the summary to stderr
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Builds the parser configuration from the arguments.
    pub fn parser_config(&self) -> ParserConfig {
        ParserConfig::new(self.group.clone()).with_skip_membership_events(!self.keep_membership)
    }

    /// Resolves the output format: explicit flag, then output extension, then JSON.
    pub fn output_format(&self) -> OutputFormat {
        if let Some(format) = self.format {
            return format.into();
        }
        self.output
            .as_deref()
            .and_then(|path| OutputFormat::from_path(path).ok())
            .unwrap_or_default()
    }
}

/// Output format options accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CliFormat {
    /// Pretty JSON array
    Json,
    /// One JSON object per line
    #[value(alias = "ndjson")]
    Jsonl,
    /// Semicolon-delimited CSV
    Csv,
}

impl From<CliFormat> for OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Json => OutputFormat::Json,
            CliFormat::Jsonl => OutputFormat::Jsonl,
            CliFormat::Csv => OutputFormat::Csv,
        }
    }
}
