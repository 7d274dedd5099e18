//! Trait definitions for completion backends and poll-capable platforms.

use crate::{PollOutcome, PostId};
use async_trait::async_trait;
use fabula_core::{GenerateRequest, GenerateResponse, PollOptions};
use fabula_error::FabulaResult;

/// Core trait that every text-generation backend implements.
#[async_trait]
pub trait CompletionDriver: Send + Sync {
    /// Generate text for the given request.
    async fn generate(&self, req: &GenerateRequest) -> FabulaResult<GenerateResponse>;

    /// Provider name (e.g., "xai").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "grok-3-mini").
    fn model_name(&self) -> &str;
}

/// A social platform that can publish posts carrying a poll.
#[async_trait]
pub trait PollPlatform: Send + Sync {
    /// Publish `text` with an attached poll open for `duration_minutes`.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform rejects the post or cannot be reached.
    async fn publish_poll(
        &self,
        text: &str,
        options: &PollOptions,
        duration_minutes: u32,
    ) -> FabulaResult<PostId>;

    /// Look up the poll attached to `post`.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup request fails.
    async fn poll_outcome(&self, post: &PostId) -> FabulaResult<PollOutcome>;

    /// Platform name for logging.
    fn platform_name(&self) -> &str;
}
