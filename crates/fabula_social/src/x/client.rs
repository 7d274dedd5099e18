//! HTTP client for the X API v2 post and poll endpoints.

use crate::x::dto::{CreatePostRequest, PollSpec};
use crate::x::oauth::{OAuthCredentials, OAuthSigner};
use crate::x::response::{interpret_create, interpret_lookup};
use async_trait::async_trait;
use fabula_core::PollOptions;
use fabula_error::{FabulaResult, SocialError, SocialErrorKind};
use fabula_interface::{PollOutcome, PollPlatform, PostId};
use reqwest::Client;
use tracing::{debug, error, info, instrument};

/// Client for creating posts with polls and reading poll results.
#[derive(Debug, Clone)]
pub struct XClient {
    client: Client,
    signer: OAuthSigner,
    posts_url: String,
}

impl XClient {
    /// Create a client rooted at `base_url` (e.g. `https://api.x.com`).
    pub fn new(credentials: OAuthCredentials, base_url: &str) -> Self {
        let posts_url = format!("{}/2/tweets", base_url.trim_end_matches('/'));
        debug!(url = %posts_url, "Created X client");
        Self {
            client: Client::new(),
            signer: OAuthSigner::new(credentials),
            posts_url,
        }
    }

    /// Create a client with credentials read from the environment.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if any of the four secrets is missing.
    pub fn from_env(base_url: &str) -> FabulaResult<Self> {
        Ok(Self::new(OAuthCredentials::from_env()?, base_url))
    }

    /// URL of the posts endpoint.
    pub fn posts_url(&self) -> &str {
        &self.posts_url
    }

    /// Query parameters selecting a post and expanding its poll.
    pub fn poll_lookup_params(post_id: &str) -> [(&str, &str); 4] {
        [
            ("ids", post_id),
            ("tweet.fields", "attachments"),
            ("expansions", "attachments.poll_ids"),
            ("poll.fields", "options,voting_status"),
        ]
    }

    /// Publish a post with an attached poll.
    ///
    /// # Errors
    ///
    /// Any status other than `201 Created` is an error carrying the status and
    /// body, as is a success body without a post id.
    #[instrument(skip(self, text, options), fields(text_len = text.len()))]
    pub async fn create_post_with_poll(
        &self,
        text: &str,
        options: Vec<String>,
        duration_minutes: u32,
    ) -> Result<PostId, SocialError> {
        let payload = CreatePostRequest {
            text: text.to_string(),
            poll: PollSpec {
                options,
                duration_minutes,
            },
        };
        let authorization = self.signer.authorization_header("POST", &self.posts_url, &[]);

        let response = self
            .client
            .post(&self.posts_url)
            .header(reqwest::header::AUTHORIZATION, authorization)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Post request failed");
                SocialError::new(SocialErrorKind::Http(e.to_string()))
            })?;

        let status = response.status();
        let body = read_body(response).await?;

        let id = interpret_create(status.as_u16(), &body).inspect_err(|e| {
            error!(status = %status, error = %e, "Post creation rejected");
        })?;

        info!(post_id = %id, "Post created");
        Ok(id)
    }

    /// Look up the poll attached to `post_id` and decide its outcome.
    ///
    /// # Errors
    ///
    /// Any status other than `200 OK` is an error carrying the status and body.
    #[instrument(skip(self))]
    pub async fn fetch_poll_outcome(&self, post_id: &str) -> Result<PollOutcome, SocialError> {
        let params = Self::poll_lookup_params(post_id);
        let authorization = self.signer.authorization_header("GET", &self.posts_url, &params);

        let response = self
            .client
            .get(&self.posts_url)
            .query(&params)
            .header(reqwest::header::AUTHORIZATION, authorization)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Poll lookup request failed");
                SocialError::new(SocialErrorKind::Http(e.to_string()))
            })?;

        let status = response.status();
        let body = read_body(response).await?;

        interpret_lookup(status.as_u16(), &body).inspect_err(|e| {
            error!(status = %status, error = %e, "Poll lookup rejected");
        })
    }
}

async fn read_body(response: reqwest::Response) -> Result<String, SocialError> {
    response.text().await.map_err(|e| {
        error!(error = ?e, "Failed to read response body");
        SocialError::new(SocialErrorKind::Http(e.to_string()))
    })
}

#[async_trait]
impl PollPlatform for XClient {
    async fn publish_poll(
        &self,
        text: &str,
        options: &PollOptions,
        duration_minutes: u32,
    ) -> FabulaResult<PostId> {
        Ok(self
            .create_post_with_poll(text, options.to_vec(), duration_minutes)
            .await?)
    }

    async fn poll_outcome(&self, post: &PostId) -> FabulaResult<PollOutcome> {
        Ok(self.fetch_poll_outcome(&post.0).await?)
    }

    fn platform_name(&self) -> &str {
        "x"
    }
}
