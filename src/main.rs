//! # wagroup CLI
//!
//! Command-line interface for the wagroup library.

use std::io::{self, Write};
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use wagroup::cli::Args;
use wagroup::format::{to_format_string, write_to_format};
use wagroup::parser::Parser;
use wagroup::{Message, WagroupError};

fn main() {
    let args = <Args as ClapParser>::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_directive = if verbose { "wagroup=debug" } else { "wagroup=warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &Args) -> Result<(), WagroupError> {
    let start = Instant::now();

    // Validate before touching the input
    let parser = Parser::new(args.parser_config())?;
    let messages = parser.parse_file(&args.input)?;
    let format = args.output_format();

    match &args.output {
        Some(path) => write_to_format(&messages, path, format)?,
        None => {
            let rendered = to_format_string(&messages, format)?;
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            if !rendered.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
            stdout.flush()?;
        }
    }

    if !args.quiet {
        print_summary(&messages, args, start.elapsed().as_secs_f64());
    }

    Ok(())
}

fn print_summary(messages: &[Message], args: &Args, seconds: f64) {
    let count = |pred: fn(&Message) -> bool| messages.iter().filter(|m| pred(m)).count();

    eprintln!("wagroup v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("  Input:     {}", args.input.display());
    if let Some(path) = &args.output {
        eprintln!("  Output:    {} ({})", path.display(), args.output_format());
    }
    eprintln!("  Messages:  {}", messages.len());
    eprintln!("  Text:      {}", count(Message::is_text));
    eprintln!("  Media:     {}", count(|m| m.media.is_some()));
    eprintln!("  Calls:     {}", count(|m| m.call.is_some()));
    eprintln!("  Polls:     {}", count(|m| m.poll.is_some()));
    eprintln!("  Edited:    {}", count(|m| m.edited));
    eprintln!("  Deleted:   {}", count(|m| m.deleted));
    eprintln!("  Time:      {:.2}s", seconds);
}
