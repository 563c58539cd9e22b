//! Transcript parsing stages.
//!
//! Each stage is a pure function over text, shared by [`Parser`](crate::parser::Parser):
//!
//! - [`reconstruct_blocks`] - physical lines to logical message blocks
//! - [`parse_timestamp`] - `[DD.MM.YY, HH:MM:SS]` to a datetime
//! - [`classify`] - content to text / deleted / media / call / poll
//! - [`parse_poll`] - poll block to question and options

pub mod content;
pub mod lines;
pub mod patterns;
pub mod poll;
pub mod timestamp;

pub use content::{ContentInfo, ContentKind, classify, is_membership_event};
pub use lines::reconstruct_blocks;
pub use poll::{Poll, parse_poll};
pub use timestamp::parse_timestamp;
