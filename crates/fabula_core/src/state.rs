//! State carried from one loop iteration to the next.

use crate::PollOptions;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Label used when neither a winner nor any option survived an iteration.
const MISSING_CHOICE: &str = "Option 1 missing";

/// Outcome of one iteration that seeds the next prompt.
///
/// Produced fresh by every iteration and passed by value into the next one;
/// nothing here outlives the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct IterationState {
    /// Winning label of the poll, if one was determined
    winning_option: Option<String>,
    /// Options that were offered in the poll
    poll_options: PollOptions,
}

impl IterationState {
    /// Create a carried state.
    pub fn new(winning_option: Option<String>, poll_options: PollOptions) -> Self {
        Self {
            winning_option,
            poll_options,
        }
    }

    /// The choice the next chapter should continue from.
    ///
    /// Prefers the winner, then the first offered option.
    ///
    /// ```
    /// use fabula_core::{IterationState, PollOptions};
    ///
    /// let options = PollOptions::new(["Left".into(), "Right".into(), "Stay".into()]);
    /// let state = IterationState::new(None, options);
    /// assert_eq!(state.carried_choice(), "Left");
    /// ```
    pub fn carried_choice(&self) -> &str {
        match self.winning_option.as_deref() {
            Some(winner) if !winner.is_empty() => winner,
            _ => {
                let first = self.poll_options.first();
                if first.is_empty() { MISSING_CHOICE } else { first }
            }
        }
    }
}
