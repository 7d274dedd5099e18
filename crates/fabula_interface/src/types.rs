//! Value types exchanged across the trait seams.

use serde::{Deserialize, Serialize};

/// Platform-specific post identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{}", _0)]
pub struct PostId(pub String);

/// What a poll lookup revealed.
///
/// # Examples
///
/// ```
/// use fabula_interface::PollOutcome;
///
/// assert_eq!(PollOutcome::Decided("Run".into()).winner(), Some("Run"));
/// assert_eq!(PollOutcome::Open.winner(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PollOutcome {
    /// Voting closed; carries the label with the most votes
    Decided(String),
    /// Voting is still open
    Open,
    /// The response held no poll, or a poll with no options
    NoPollData,
}

impl PollOutcome {
    /// Winning label, or `None` when the poll has not been decided.
    pub fn winner(&self) -> Option<&str> {
        match self {
            Self::Decided(label) => Some(label),
            Self::Open | Self::NoPollData => None,
        }
    }
}
