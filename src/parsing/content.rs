//! Content classification.
//!
//! The text after `Author: ` is classified by a fixed chain, each step
//! working on what the previous one left:
//!
//! 1. deletion notice (wins outright, no text or payload survives)
//! 2. edit marker, stripped from the text
//! 3. omitted-media placeholder
//! 4. voice call, then video call
//! 5. poll block
//! 6. otherwise plain text

use crate::message::{CallKind, MediaKind, PollOption};

use super::patterns::{DELETED, EDIT_MARKER, MEDIA_SIGNATURES, MEMBERSHIP, VIDEO_CALL, VOICE_CALL};
use super::poll::parse_poll;

/// What a piece of content turned out to be.
///
/// Variants are mutually exclusive, so a deleted media message or a poll
/// with a call attached can't be represented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentKind {
    /// Freeform text
    Text,
    /// Deletion notice
    Deleted,
    /// Omitted media placeholder
    Media(MediaKind),
    /// Call record
    Call(CallKind),
    /// Poll with its options
    Poll(Vec<PollOption>),
}

/// Result of classifying one message's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentInfo {
    /// Displayable text: the (unmarked) text, the poll question, or `None`.
    pub content: Option<String>,
    /// The edit marker was present.
    pub edited: bool,
    /// Classification.
    pub kind: ContentKind,
}

impl ContentInfo {
    /// Plain, unedited text.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            edited: false,
            kind: ContentKind::Text,
        }
    }

    /// A deletion notice.
    pub fn deleted() -> Self {
        Self {
            content: None,
            edited: false,
            kind: ContentKind::Deleted,
        }
    }
}

/// Classifies raw message content.
///
/// # Example
///
/// ```rust
/// use wagroup::parsing::{classify, ContentKind};
/// use wagroup::MediaKind;
///
/// let info = classify("image omitted");
/// assert_eq!(info.kind, ContentKind::Media(MediaKind::Image));
/// assert!(info.content.is_none());
///
/// let info = classify("See you soon <This message was edited>");
/// assert!(info.edited);
/// assert_eq!(info.content.as_deref(), Some("See you soon"));
/// ```
pub fn classify(raw: &str) -> ContentInfo {
    if DELETED.is_match(raw) {
        return ContentInfo::deleted();
    }

    let (text, edited) = strip_edit_marker(raw);

    let (content, kind) = if let Some(media) = media_kind(text) {
        (None, ContentKind::Media(media))
    } else if let Some(call) = call_kind(text) {
        (None, ContentKind::Call(call))
    } else if let Some(poll) = parse_poll(text) {
        (Some(poll.question), ContentKind::Poll(poll.options))
    } else {
        (Some(text.to_string()), ContentKind::Text)
    };

    ContentInfo {
        content,
        edited,
        kind,
    }
}

/// Removes a trailing edit marker and the whitespace before it.
fn strip_edit_marker(content: &str) -> (&str, bool) {
    match content.strip_suffix(EDIT_MARKER) {
        Some(rest) => (rest.trim_end(), true),
        None => (content, false),
    }
}

fn media_kind(content: &str) -> Option<MediaKind> {
    MEDIA_SIGNATURES
        .iter()
        .find(|(_, signature)| content.ends_with(signature))
        .map(|(kind, _)| *kind)
}

fn call_kind(content: &str) -> Option<CallKind> {
    if VOICE_CALL.is_match(content) {
        Some(CallKind::Voice)
    } else if VIDEO_CALL.is_match(content) {
        Some(CallKind::Video)
    } else {
        None
    }
}

/// Returns `true` for group membership churn ("X added Y", "X removed Y", ...).
pub fn is_membership_event(content: &str) -> bool {
    MEMBERSHIP.is_match(content)
}
