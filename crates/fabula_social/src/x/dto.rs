//! JSON models for the X API v2 endpoints Fabula uses.

use serde::{Deserialize, Serialize};

/// Body of `POST /2/tweets` when attaching a poll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatePostRequest {
    /// Post text
    pub text: String,
    /// Poll attached to the post
    pub poll: PollSpec,
}

/// Poll attached to a new post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PollSpec {
    /// Option labels, in display order
    pub options: Vec<String>,
    /// How long voting stays open
    pub duration_minutes: u32,
}

/// Response of `POST /2/tweets`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePostResponse {
    /// The created post
    #[serde(default)]
    pub data: Option<CreatedPost>,
}

/// Minimal view of a created post.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedPost {
    /// Post id
    #[serde(default)]
    pub id: Option<String>,
    /// Post text as stored by the platform
    #[serde(default)]
    pub text: Option<String>,
}

/// Response of `GET /2/tweets?ids=...&expansions=attachments.poll_ids`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostLookupResponse {
    /// Expanded objects referenced by the posts
    #[serde(default)]
    pub includes: Option<PollIncludes>,
}

/// The `includes` section of a lookup response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PollIncludes {
    /// Polls attached to the looked-up posts
    #[serde(default)]
    pub polls: Vec<Poll>,
}

/// A poll object.
#[derive(Debug, Clone, Deserialize)]
pub struct Poll {
    /// Poll id
    #[serde(default)]
    pub id: Option<String>,
    /// Choices with their tallies
    #[serde(default)]
    pub options: Vec<PollChoice>,
    /// `open` or `closed`
    #[serde(default)]
    pub voting_status: Option<String>,
}

/// A single poll choice.
#[derive(Debug, Clone, Deserialize)]
pub struct PollChoice {
    /// 1-based position
    #[serde(default)]
    pub position: Option<u32>,
    /// Option label
    #[serde(default)]
    pub label: Option<String>,
    /// Vote count
    #[serde(default)]
    pub votes: u64,
}
