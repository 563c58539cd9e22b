//! Poll block parsing.
//!
//! Polls are exported as:
//!
//! ```text
//! POLL:
//! <question>
//! OPTION:<text>(<N> votes)
//! OPTION:<text>(1 vote)
//! ```
//!
//! Option text may wrap onto several lines; it runs up to the vote count.

use crate::message::PollOption;

use super::patterns::{POLL, POLL_OPTION};

/// A recognized poll: its question and options in transcript order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Poll {
    /// Question text, trimmed.
    pub question: String,
    /// Options in transcript order, duplicates kept.
    pub options: Vec<PollOption>,
}

/// Parses a poll block, returning `None` if `content` isn't one.
///
/// The whole trimmed content must have the poll shape. A vote count too large
/// for `u32` also yields `None`, so the caller keeps the text as-is.
///
/// # Example
///
/// ```rust
/// use wagroup::parsing::parse_poll;
///
/// let poll = parse_poll("POLL:\nFavorite color?\nOPTION:Red(3 votes)\nOPTION:Blue(1 vote)\n")
///     .unwrap();
/// assert_eq!(poll.question, "Favorite color?");
/// assert_eq!(poll.options[0].option, "Red");
/// assert_eq!(poll.options[1].votes, 1);
/// ```
pub fn parse_poll(content: &str) -> Option<Poll> {
    let caps = POLL.captures(content.trim())?;
    let question = caps.name("question")?.as_str().trim().to_string();
    let options_text = caps.name("options")?.as_str();

    let options = POLL_OPTION
        .captures_iter(options_text)
        .map(|option| {
            let votes = option["votes"].parse().ok()?;
            Some(PollOption::new(option["text"].trim(), votes))
        })
        .collect::<Option<Vec<_>>>()?;

    Some(Poll { question, options })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_poll() {
        let poll =
            parse_poll("POLL:\nFavorite color?\nOPTION:Red(3 votes)\nOPTION:Blue(1 vote)\n")
                .unwrap();
        assert_eq!(poll.question, "Favorite color?");
        assert_eq!(
            poll.options,
            vec![PollOption::new("Red", 3), PollOption::new("Blue", 1)]
        );
    }

    #[test]
    fn test_zero_votes() {
        let poll = parse_poll("POLL:\nLunch?\nOPTION:Pizza(0 votes)").unwrap();
        assert_eq!(poll.options, vec![PollOption::new("Pizza", 0)]);
    }

    #[test]
    fn test_option_trimmed() {
        let poll = parse_poll("POLL:\n  Where?  \nOPTION: Park (2 votes)").unwrap();
        assert_eq!(poll.question, "Where?");
        assert_eq!(poll.options[0].option, "Park");
    }

    #[test]
    fn test_multiline_option() {
        let poll = parse_poll(
            "POLL:\nPlan?\nOPTION:Go hiking\nthen lunch(4 votes)\nOPTION:Stay home(1 vote)",
        )
        .unwrap();
        assert_eq!(poll.options.len(), 2);
        assert_eq!(poll.options[0].option, "Go hiking\nthen lunch");
        assert_eq!(poll.options[0].votes, 4);
    }

    #[test]
    fn test_parentheses_in_option_text() {
        let poll = parse_poll("POLL:\nSize?\nOPTION:Large (XL)(2 votes)").unwrap();
        assert_eq!(poll.options[0].option, "Large (XL)");
        assert_eq!(poll.options[0].votes, 2);
    }

    #[test]
    fn test_duplicates_and_order_preserved() {
        let poll = parse_poll(
            "POLL:\nPick\nOPTION:B(1 vote)\nOPTION:A(5 votes)\nOPTION:B(2 votes)",
        )
        .unwrap();
        let names: Vec<&str> = poll.options.iter().map(|o| o.option.as_str()).collect();
        assert_eq!(names, vec!["B", "A", "B"]);
    }

    #[test]
    fn test_not_a_poll() {
        assert!(parse_poll("Hello there").is_none());
        assert!(parse_poll("POLL:\nQuestion only").is_none());
        assert!(parse_poll("POLL:\nQ?\nOPTION:A").is_none());
        assert!(parse_poll("POLL:\nQ?\nOPTION:A(1 vote)\ntrailing text").is_none());
        assert!(parse_poll("").is_none());
    }

    #[test]
    fn test_vote_overflow_rejected() {
        assert!(parse_poll("POLL:\nQ?\nOPTION:A(99999999999 votes)").is_none());
    }
}
