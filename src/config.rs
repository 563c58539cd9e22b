//! Parser configuration.
//!
//! [`ParserConfig`] carries the group name the transcript was exported from
//! (used to drop the group's own banner lines) and the switches that shape
//! which chat events are kept.
//!
//! # Example
//!
//! ```rust
//! use wagroup::config::ParserConfig;
//! use wagroup::parser::Parser;
//!
//! let config = ParserConfig::new("Weekend Hikers")
//!     .with_skip_membership_events(true);
//!
//! let parser = Parser::new(config)?;
//! # Ok::<(), wagroup::WagroupError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, WagroupError};

/// Configuration for transcript parsing.
///
/// The group name is required: lines authored as the group itself are system
/// banners, not chat messages. Construction of a [`Parser`](crate::parser::Parser)
/// validates it before any transcript is read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Display name of the exported group (required, non-empty)
    pub group_name: String,

    /// Drop "X added Y" / "X joined using Y" / "X was added" / "X removed Y"
    /// events (default: true)
    #[serde(default = "default_skip_membership_events")]
    pub skip_membership_events: bool,
}

fn default_skip_membership_events() -> bool {
    true
}

impl ParserConfig {
    /// Creates a configuration for the given group with default switches.
    pub fn new(group_name: impl Into<String>) -> Self {
        Self {
            group_name: group_name.into(),
            skip_membership_events: default_skip_membership_events(),
        }
    }

    /// Sets whether membership-change events are discarded.
    #[must_use]
    pub fn with_skip_membership_events(mut self, skip: bool) -> Self {
        self.skip_membership_events = skip;
        self
    }

    /// Checks that the configuration can drive a parse run.
    ///
    /// # Errors
    ///
    /// Returns [`WagroupError::Config`] if the group name is empty or
    /// whitespace-only.
    pub fn validate(&self) -> Result<()> {
        if self.group_name.trim().is_empty() {
            return Err(WagroupError::config("group name is required"));
        }
        Ok(())
    }
}
