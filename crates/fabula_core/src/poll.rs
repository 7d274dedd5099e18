//! Poll option types.

use serde::{Deserialize, Serialize};

/// Number of options attached to every poll.
pub const OPTION_COUNT: usize = 3;

/// Longest option label, in characters, the bot will publish.
pub const MAX_OPTION_CHARS: usize = 20;

/// Placeholder used when the story did not supply an option at `position`
/// (1-based).
///
/// ```
/// assert_eq!(fabula_core::placeholder_option(2), "Choice 2");
/// ```
pub fn placeholder_option(position: usize) -> String {
    format!("Choice {}", position)
}

/// Exactly three poll option labels, in display order.
///
/// # Examples
///
/// ```
/// use fabula_core::PollOptions;
///
/// let options = PollOptions::new(["Run".into(), "Hide".into(), "Fight".into()]);
/// assert_eq!(options.first(), "Run");
/// assert_eq!(options.iter().count(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PollOptions([String; OPTION_COUNT]);

impl PollOptions {
    /// Wrap three labels.
    pub fn new(options: [String; OPTION_COUNT]) -> Self {
        Self(options)
    }

    /// The first option; the fallback winner when a poll yields no result.
    pub fn first(&self) -> &str {
        &self.0[0]
    }

    /// Iterate labels in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Borrow the labels as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Copy the labels into a vector, as the social API expects.
    pub fn to_vec(&self) -> Vec<String> {
        self.0.to_vec()
    }
}
