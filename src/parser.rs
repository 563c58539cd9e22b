//! Transcript parser.
//!
//! [`Parser`] ties the parsing stages together: the transcript is split into
//! logical blocks, each block is matched against the message header, its
//! content classified, and group banners and membership churn are dropped.
//!
//! # Example
//!
//! ```rust
//! use wagroup::parser::Parser;
//!
//! let parser = Parser::for_group("Weekend Hikers")?;
//! let messages = parser.parse_str(
//!     "[01.02.23, 14:05:00] Weekend Hikers: Messages are end-to-end encrypted.\n\
//!      [01.02.23, 14:05:00] Alice: Hello there\n\
//!      [01.02.23, 14:06:00] Bob: image omitted",
//! )?;
//!
//! assert_eq!(messages.len(), 2);
//! assert_eq!(messages[0].content(), Some("Hello there"));
//! assert!(messages[1].media().is_some());
//! # Ok::<(), wagroup::WagroupError>(())
//! ```

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::Message;
use crate::config::ParserConfig;
use crate::error::{Result, WagroupError};
use crate::parsing::patterns::MESSAGE;
use crate::parsing::{classify, is_membership_event, parse_timestamp, reconstruct_blocks};

/// Parser for exported WhatsApp group transcripts.
///
/// Construction validates the configuration, so a `Parser` always has a
/// usable group name.
#[derive(Debug, Clone)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Creates a parser from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`WagroupError::Config`] if the group name is empty.
    pub fn new(config: ParserConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Creates a parser for the given group with default settings.
    pub fn for_group(group_name: impl Into<String>) -> Result<Self> {
        Self::new(ParserConfig::new(group_name))
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Reads a transcript file and parses it.
    ///
    /// # Errors
    ///
    /// I/O failures are returned unchanged as [`WagroupError::Io`];
    /// an empty file yields [`WagroupError::EmptyTranscript`].
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<Vec<Message>> {
        let transcript = read_transcript(path)?;
        self.parse_str(&transcript)
    }

    /// Parses transcript text already held in memory.
    ///
    /// Output order follows transcript order. Blocks that don't match the
    /// message shape, banners authored by the group itself and (by default)
    /// membership events are left out.
    ///
    /// # Errors
    ///
    /// Returns [`WagroupError::EmptyTranscript`] if `transcript` is empty
    /// after trimming.
    pub fn parse_str(&self, transcript: &str) -> Result<Vec<Message>> {
        let transcript = transcript.trim_start_matches('\u{feff}').trim();
        if transcript.is_empty() {
            return Err(WagroupError::EmptyTranscript);
        }

        let blocks = reconstruct_blocks(transcript);
        let messages: Vec<Message> = blocks
            .iter()
            .filter_map(|block| self.extract(block))
            .collect();

        debug!(
            blocks = blocks.len(),
            messages = messages.len(),
            "parsed transcript"
        );

        Ok(messages)
    }

    /// Extracts a message from one logical block.
    ///
    /// Returns `None` if the block doesn't match `[DD.MM.YY, HH:MM:SS] Author: content`,
    /// its timestamp can't be represented, its author is the group itself,
    /// or its content is a membership event. Out-of-range date fields roll
    /// over (see [`parse_timestamp`]).
    pub fn extract(&self, block: &str) -> Option<Message> {
        let caps = MESSAGE.captures(block)?;

        let author = caps["author"].trim();
        if author == self.config.group_name {
            return None;
        }

        let info = classify(caps["content"].trim());
        if self.config.skip_membership_events
            && info.content.as_deref().is_some_and(is_membership_event)
        {
            return None;
        }

        let date = parse_timestamp(&caps["datetime"])?;
        Some(Message::new(author, date, info))
    }
}

/// Reads a whole transcript file into memory, trimmed.
///
/// # Errors
///
/// Returns [`WagroupError::Io`] if the file can't be read.
pub fn read_transcript(path: impl AsRef<Path>) -> Result<String> {
    let raw = fs::read_to_string(path)?;
    Ok(raw.trim().to_string())
}
