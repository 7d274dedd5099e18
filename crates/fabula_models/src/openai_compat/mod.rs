//! Generic OpenAI-compatible API client.
//!
//! Any API following the chat-completions format works here; Fabula points it
//! at x.ai by default.

mod client;
mod conversions;
mod dto;

pub use client::{API_KEY_VAR, OpenAICompatibleClient};
pub use dto::{ChatChoice, ChatMessage, ChatRequest, ChatRequestBuilder, ChatResponse, ChatUsage};
