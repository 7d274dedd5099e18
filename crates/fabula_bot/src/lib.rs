//! Orchestration for the Fabula story bot.
//!
//! [`StoryBot`] asks a [`CompletionDriver`](fabula_interface::CompletionDriver)
//! for a chapter, publishes it with a poll through a
//! [`PollPlatform`](fabula_interface::PollPlatform), waits for the vote to
//! close and feeds the winner into the next chapter's prompt.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod compose;
mod config;
mod generator;
mod prompts;
mod story_loop;

pub use compose::compose_post_text;
pub use config::{
    BotConfig, CompletionConfig, MAX_PLATFORM_OPTION_CHARS, MIN_SAFETY_MARGIN, SocialConfig,
    StoryConfig,
};
pub use generator::NarrativeGenerator;
pub use prompts::{INITIAL_PROMPT, SYSTEM_PROMPT, build_prompt, continuation_prompt};
pub use story_loop::{
    IterationError, IterationOutcome, LoopExit, LoopReport, StoryBot, wait_duration,
};
