//! Core data types for the Fabula story bot.
//!
//! This crate provides the data model shared by the generation client, the
//! social client and the orchestration loop, plus the pure option extractor.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod extraction;
mod message;
mod poll;
mod prompt;
mod request;
mod role;
mod state;

pub use extraction::{extract_poll_options, extract_poll_options_with_limit};
pub use message::Message;
pub use poll::{MAX_OPTION_CHARS, OPTION_COUNT, PollOptions, placeholder_option};
pub use prompt::Prompt;
pub use request::{GenerateRequest, GenerateResponse, TokenUsage};
pub use role::Role;
pub use state::IterationState;
