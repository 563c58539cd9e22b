//! # wagroup
//!
//! A Rust library for turning exported WhatsApp group transcripts into
//! structured message records.
//!
//! ## Overview
//!
//! A transcript export is one line per event, but long messages wrap across
//! physical lines and many lines aren't plain chat at all. wagroup:
//!
//! - reattaches wrapped continuation lines to the message they belong to
//! - extracts the datetime, author and content of every message
//! - classifies content as text, edit, deletion, omitted media, call or poll
//! - parses polls into `(option, votes)` pairs
//! - drops the group's own banner lines and membership churn
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use wagroup::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let parser = Parser::for_group("Weekend Hikers")?;
//!     let messages = parser.parse_file("_chat.txt")?;
//!
//!     for msg in &messages {
//!         if let Some(options) = msg.poll() {
//!             println!("{} asked {:?}: {} options", msg.author(), msg.content(), options.len());
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`Parser`](parser::Parser), the single parse entry point
//! - [`parsing`] - the individual stages (blocks, timestamps, classification, polls)
//! - [`config`] - [`ParserConfig`](config::ParserConfig)
//! - [`message`] - [`Message`], [`MediaKind`], [`CallKind`], [`PollOption`]
//! - [`output`] / [`format`] - JSON, JSONL and CSV renderers
//! - [`error`] - unified error types ([`WagroupError`], [`Result`])
//! - [`prelude`] - convenient re-exports
//!
//! ## Logging
//!
//! Diagnostics (e.g. text found before the first message header) are emitted
//! through [`tracing`]. The library never installs a subscriber.

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod message;
pub mod output;
pub mod parser;
pub mod parsing;

// Re-export the main types at the crate root for convenience
pub use error::{Result, WagroupError};
pub use message::{CallKind, MediaKind, Message, PollOption};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use wagroup::prelude::*;
/// ```
pub mod prelude {
    // Core message types
    pub use crate::message::{CallKind, MediaKind, Message, PollOption};

    // Error types
    pub use crate::error::{Result, WagroupError};

    // Parsing
    pub use crate::config::ParserConfig;
    pub use crate::parser::Parser;
    pub use crate::parsing::{ContentInfo, ContentKind};

    // Output
    pub use crate::format::{OutputFormat, to_format_string, write_to_format};
}
