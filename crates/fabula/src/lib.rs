//! Fabula - a serial choose-your-own-adventure bot.
//!
//! Each iteration asks a chat-completion model for a short chapter, pulls
//! three poll options out of it, posts the chapter to X with a poll, waits
//! for voting to close, and feeds the winning option into the next chapter.
//!
//! # Architecture
//!
//! - `fabula_error` - Error types
//! - `fabula_core` - Data model and option extraction
//! - `fabula_interface` - `CompletionDriver` and `PollPlatform` traits
//! - `fabula_models` - OpenAI-compatible completion client (x.ai)
//! - `fabula_social` - X API client with OAuth 1.0a signing
//! - `fabula_bot` - Configuration, prompts and the story loop
//!
//! This crate re-exports everything for convenience.
//!
//! # Cargo Features
//!
//! - `observability` - Export tracing spans through OpenTelemetry (stdout)

pub use fabula_bot::*;
pub use fabula_core::*;
pub use fabula_error::*;
pub use fabula_interface::*;
pub use fabula_models::*;
pub use fabula_social::*;

pub mod observability;
