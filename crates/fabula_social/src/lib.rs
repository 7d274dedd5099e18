//! Social platform integration for Fabula.
//!
//! Fabula publishes each chapter as an X post with an attached poll and later
//! reads back the poll to learn which choice won.
//!
//! Platform implementations follow a common pattern:
//! - Wire DTOs mirroring the platform's JSON
//! - Pure interpretation of responses (testable without a network)
//! - A client implementing [`fabula_interface::PollPlatform`]

#![warn(missing_docs)]

mod x;

pub use x::{
    CreatePostRequest, CreatePostResponse, CreatedPost, OAuthCredentials, OAuthSigner, Poll,
    PollChoice, PollIncludes, PollSpec, PostLookupResponse, XClient, decide, interpret_create,
    interpret_lookup, percent_encode,
};
