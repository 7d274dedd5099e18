//! LLM provider integrations for Fabula.
//!
//! Story chapters are written through any endpoint that speaks the OpenAI
//! chat-completions format; the x.ai Grok API is the default.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod openai_compat;

pub use openai_compat::{
    API_KEY_VAR, ChatChoice, ChatMessage, ChatRequest, ChatRequestBuilder, ChatResponse,
    ChatUsage, OpenAICompatibleClient,
};
