//! Request and response types for text generation.

use crate::{Message, Prompt};
use serde::{Deserialize, Serialize};

/// Generic generation request.
///
/// # Examples
///
/// ```
/// use fabula_core::{GenerateRequest, Prompt, Role};
///
/// let prompt = Prompt::new("You tell stories.", "Begin.");
/// let request = GenerateRequest::from_prompt(&prompt);
///
/// assert_eq!(request.messages.len(), 2);
/// assert_eq!(request.messages[0].role, Role::System);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GenerateRequest {
    /// The conversation messages to send
    pub messages: Vec<Message>,
    /// Maximum number of tokens to generate
    pub max_tokens: Option<u32>,
    /// Sampling temperature
    pub temperature: Option<f32>,
    /// Model identifier override
    pub model: Option<String>,
    /// Reasoning depth hint for models that support it (e.g., "high")
    pub reasoning_effort: Option<String>,
}

impl GenerateRequest {
    /// Build a two-message request (system, then user) from a prompt pair.
    pub fn from_prompt(prompt: &Prompt) -> Self {
        Self {
            messages: vec![
                Message::system(prompt.system().as_str()),
                Message::user(prompt.user().as_str()),
            ],
            ..Default::default()
        }
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the reasoning effort hint.
    pub fn with_reasoning_effort(mut self, effort: Option<String>) -> Self {
        self.reasoning_effort = effort;
        self
    }
}

/// Token accounting reported by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Tokens in the prompt
    pub input_tokens: u64,
    /// Tokens in the completion
    pub output_tokens: u64,
    /// Total tokens billed
    pub total_tokens: u64,
}

/// The text produced by a generation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Generated text of the first choice
    pub text: String,
    /// Token usage, when the provider reports it
    pub usage: Option<TokenUsage>,
}
