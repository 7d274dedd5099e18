//! Prompt pair sent to the narrative generator.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A system instruction plus the user instruction for one generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Prompt {
    /// Standing instruction describing the storyteller
    system: String,
    /// Per-iteration instruction (opening scene or continuation)
    user: String,
}

impl Prompt {
    /// Create a prompt pair.
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
        }
    }
}
