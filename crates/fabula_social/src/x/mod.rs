//! X (formerly Twitter) API v2 integration.

mod client;
mod dto;
mod oauth;
mod poll;
mod response;

pub use client::XClient;
pub use dto::{
    CreatePostRequest, CreatePostResponse, CreatedPost, Poll, PollChoice, PollIncludes, PollSpec,
    PostLookupResponse,
};
pub use oauth::{OAuthCredentials, OAuthSigner, percent_encode};
pub use poll::decide;
pub use response::{interpret_create, interpret_lookup};
