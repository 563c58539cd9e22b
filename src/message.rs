//! Parsed chat event types.
//!
//! This module provides [`Message`], one chat event reconstructed from a
//! transcript, plus the closed vocabularies it refers to: [`MediaKind`],
//! [`CallKind`] and [`PollOption`].
//!
//! # Overview
//!
//! Every message has an `author` and a `date`. What it *is* depends on the
//! classification of its text:
//!
//! | Event | `content` | payload |
//! |-------|-----------|---------|
//! | plain text | the text | none |
//! | deleted | `None` | none, `deleted = true` |
//! | media placeholder | `None` | `media` |
//! | call record | `None` | `call` |
//! | poll | the question | `poll` |
//!
//! At most one of `media`, `call` and `poll` is ever set.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use wagroup::Message;
//!
//! let date = NaiveDate::from_ymd_opt(2023, 2, 1)
//!     .unwrap()
//!     .and_hms_opt(14, 5, 0)
//!     .unwrap();
//!
//! let msg = Message::text("Alice", date, "Hello there");
//! assert_eq!(msg.author(), "Alice");
//! assert_eq!(msg.content(), Some("Hello there"));
//! assert!(msg.is_text());
//! ```

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::parsing::content::{ContentInfo, ContentKind};

/// Kind of media attachment a placeholder line stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Voice message or audio file
    Audio,
    /// Round video message
    #[serde(rename = "video note")]
    VideoNote,
    /// Video file
    Video,
    /// Photo
    Image,
    /// Animated GIF
    Gif,
    /// Sticker
    Sticker,
}

impl MediaKind {
    /// Returns the lowercase name used in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Audio => "audio",
            MediaKind::VideoNote => "video note",
            MediaKind::Video => "video",
            MediaKind::Image => "image",
            MediaKind::Gif => "gif",
            MediaKind::Sticker => "sticker",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of call a call record refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallKind {
    /// Voice call (placed, missed or started)
    Voice,
    /// Video call (placed, missed or started)
    Video,
}

impl CallKind {
    /// Returns the lowercase name used in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            CallKind::Voice => "voice",
            CallKind::Video => "video",
        }
    }
}

impl fmt::Display for CallKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One answer of a poll together with the number of votes it received.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PollOption {
    /// Option text, trimmed. May contain newlines.
    pub option: String,
    /// Number of votes
    pub votes: u32,
}

impl PollOption {
    /// Creates a poll option.
    pub fn new(option: impl Into<String>, votes: u32) -> Self {
        Self {
            option: option.into(),
            votes,
        }
    }
}

/// One parsed chat event.
///
/// Fields are public for pattern matching and struct-literal construction in
/// tests; messages produced by the [`Parser`](crate::parser::Parser) always
/// satisfy the exclusivity rules described in the [module docs](self).
///
/// # Serialization
///
/// All fields are always present in serialized output (`null` when absent),
/// so every record has the same shape. `date` is an ISO 8601 local datetime
/// without offset, e.g. `2023-02-01T14:05:00`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Display name of the author, trimmed.
    pub author: String,

    /// When the event happened, as written in the transcript (no time zone).
    pub date: NaiveDateTime,

    /// Displayable text; `None` for deleted, media and call events.
    pub content: Option<String>,

    /// The original line carried the edit marker.
    pub edited: bool,

    /// The original line was a deletion notice.
    pub deleted: bool,

    /// Omitted media placeholder kind.
    pub media: Option<MediaKind>,

    /// Call record kind.
    pub call: Option<CallKind>,

    /// Poll options in transcript order.
    pub poll: Option<Vec<PollOption>>,
}

impl Message {
    /// Builds a message from its header fields and classified content.
    pub fn new(author: impl Into<String>, date: NaiveDateTime, info: ContentInfo) -> Self {
        let ContentInfo {
            content,
            edited,
            kind,
        } = info;

        let mut msg = Self {
            author: author.into(),
            date,
            content,
            edited,
            deleted: false,
            media: None,
            call: None,
            poll: None,
        };

        match kind {
            ContentKind::Text => {}
            ContentKind::Deleted => msg.deleted = true,
            ContentKind::Media(media) => msg.media = Some(media),
            ContentKind::Call(call) => msg.call = Some(call),
            ContentKind::Poll(options) => msg.poll = Some(options),
        }

        msg
    }

    /// Creates a plain, unedited text message.
    pub fn text(author: impl Into<String>, date: NaiveDateTime, content: impl Into<String>) -> Self {
        Self::new(author, date, ContentInfo::text(content))
    }

    // =========================================================================
    // Accessor methods
    // =========================================================================

    /// Returns the author name.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the event datetime.
    pub fn date(&self) -> NaiveDateTime {
        self.date
    }

    /// Returns the displayable content, if any.
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Returns `true` if the message was edited.
    pub fn is_edited(&self) -> bool {
        self.edited
    }

    /// Returns `true` if the message was deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    /// Returns the omitted media kind, if any.
    pub fn media(&self) -> Option<MediaKind> {
        self.media
    }

    /// Returns the call kind, if any.
    pub fn call(&self) -> Option<CallKind> {
        self.call
    }

    /// Returns the poll options, if this message is a poll.
    pub fn poll(&self) -> Option<&[PollOption]> {
        self.poll.as_deref()
    }

    // =========================================================================
    // Utility methods
    // =========================================================================

    /// Returns `true` for plain text: not deleted and no media, call or poll.
    pub fn is_text(&self) -> bool {
        !self.deleted && self.media.is_none() && self.call.is_none() && self.poll.is_none()
    }

    /// Total votes cast in the poll, if this message is a poll.
    pub fn total_votes(&self) -> Option<u64> {
        self.poll
            .as_ref()
            .map(|options| options.iter().map(|o| u64::from(o.votes)).sum())
    }
}
