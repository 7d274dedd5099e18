//! Trait definitions for the remote services the story loop depends on.
//!
//! The loop only ever talks to a [`CompletionDriver`] and a [`PollPlatform`];
//! production code plugs in HTTP clients, tests plug in mocks.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::{CompletionDriver, PollPlatform};
pub use types::{PollOutcome, PostId};
