//! Signature tables for WhatsApp group transcripts.
//!
//! Every pattern is compiled once per process and shared by all parser
//! instances.

use std::sync::LazyLock;

use regex::Regex;

use crate::message::MediaKind;

/// Zero-width left-to-right mark sprinkled through iOS exports.
pub const DIRECTION_MARK: char = '\u{200e}';

/// Trailing marker appended to edited messages.
pub const EDIT_MARKER: &str = "<This message was edited>";

/// Omitted-media signatures, tried in this order.
///
/// "video note omitted" must come before "video omitted".
pub const MEDIA_SIGNATURES: &[(MediaKind, &str)] = &[
    (MediaKind::VideoNote, "video note omitted"),
    (MediaKind::Video, "video omitted"),
    (MediaKind::Image, "image omitted"),
    (MediaKind::Gif, "GIF omitted"),
    (MediaKind::Sticker, "sticker omitted"),
    (MediaKind::Audio, "audio omitted"),
];

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("signature pattern must compile")
}

/// `[DD.MM.YY, HH:MM:SS]` at the start of a physical line.
pub static MESSAGE_START: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^\[\d{2}\.\d{2}\.\d{2}, \d{2}:\d{2}:\d{2}\]"));

/// `[DD.MM.YY, HH:MM:SS] <author>: <content>`, content may span lines.
pub static MESSAGE: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?s)^(?P<datetime>\[\d{2}\.\d{2}\.\d{2}, \d{2}:\d{2}:\d{2}\]) (?P<author>[^:]+): (?P<content>.*)$",
    )
});

pub static DELETED: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?:This message was deleted\.|You deleted this message\.|You deleted this message as admin)$",
    )
});

pub static VOICE_CALL: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"^(?:Call\. .+|Missed voice call\. .+|.+ started a call)$")
});

pub static VIDEO_CALL: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"^(?:Video call\. .+|Missed video call\. .+|.+ started a video call)$")
});

/// Group membership churn: "X added Y", "X joined using Y", "X was added", "X removed Y".
pub static MEMBERSHIP: LazyLock<Regex> = LazyLock::new(|| {
    compile(r".+ added .+|.+ joined using .+|.+ was added|.+ removed .+")
});

pub static POLL: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"^POLL:\n(?P<question>[^\n]+)\n(?P<options>(?:OPTION:[\s\S]*?\(\d+ votes?\)\n?)+)$",
    )
});

pub static POLL_OPTION: LazyLock<Regex> =
    LazyLock::new(|| compile(r"OPTION:(?P<text>[\s\S]*?)\((?P<votes>\d+) votes?\)"));
