//! Generic client for OpenAI-compatible APIs.

use crate::openai_compat::{ChatResponse, conversions};
use async_trait::async_trait;
use fabula_core::{GenerateRequest, GenerateResponse};
use fabula_error::{ConfigError, FabulaResult, GenerationError, GenerationErrorKind};
use fabula_interface::CompletionDriver;
use reqwest::Client;
use tracing::{debug, error, instrument};

/// Environment variable holding the completion API bearer token.
pub const API_KEY_VAR: &str = "XAI_API_KEY";

/// Generic client for any OpenAI-compatible API.
#[derive(Debug, Clone)]
pub struct OpenAICompatibleClient {
    client: Client,
    api_key: String,
    model: String,
    endpoint: String,
    temperature: Option<f32>,
    provider_name: &'static str,
}

impl OpenAICompatibleClient {
    /// Creates a new OpenAI-compatible client.
    ///
    /// # Arguments
    ///
    /// * `api_key` - API key for bearer authentication
    /// * `model` - Model identifier
    /// * `base_url` - API root; `/chat/completions` is appended
    /// * `provider_name` - Name of the provider (for logging/tracing)
    #[instrument(skip(api_key), fields(provider = provider_name, model = %model))]
    pub fn new(
        api_key: String,
        model: String,
        base_url: &str,
        provider_name: &'static str,
    ) -> Self {
        let endpoint = format!("{}/chat/completions", base_url.trim_end_matches('/'));

        debug!(
            provider = provider_name,
            model = %model,
            url = %endpoint,
            "Created OpenAI-compatible client"
        );

        Self {
            client: Client::new(),
            api_key,
            model,
            endpoint,
            temperature: None,
            provider_name,
        }
    }

    /// Creates a client authenticated from [`API_KEY_VAR`].
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the variable is unset or empty.
    pub fn from_env(model: String, base_url: &str) -> FabulaResult<Self> {
        Self::from_lookup(|var| std::env::var(var).ok(), model, base_url)
    }

    /// Creates a client, resolving the API key through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `lookup` yields nothing for [`API_KEY_VAR`].
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
        model: String,
        base_url: &str,
    ) -> FabulaResult<Self> {
        let api_key = lookup(API_KEY_VAR)
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ConfigError::missing_env(API_KEY_VAR))?;
        Ok(Self::new(api_key, model, base_url, "xai"))
    }

    /// Sets the default sampling temperature for requests that carry none.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Full URL requests are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends one chat-completion request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API answers with a
    /// non-success status, or the response cannot be parsed.
    #[instrument(skip(self, req), fields(provider = self.provider_name, model = %self.model))]
    pub async fn complete(&self, req: &GenerateRequest) -> Result<GenerateResponse, GenerationError> {
        let chat_request = conversions::to_chat_request(req, &self.model, self.temperature)?;

        debug!(
            message_count = chat_request.messages().len(),
            "Sending request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&chat_request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                GenerationError::new(GenerationErrorKind::Http(format!("Request failed: {}", e)))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(status = %status, error = %error_text, "API error");

            return Err(GenerationError::new(GenerationErrorKind::Api {
                status: status.as_u16(),
                message: error_text,
            }));
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse response");
            GenerationError::new(GenerationErrorKind::ResponseParsing(format!(
                "Failed to parse JSON: {}",
                e
            )))
        })?;

        debug!(choices = chat_response.choices.len(), "Received response");

        conversions::from_chat_response(&chat_response)
    }
}

#[async_trait]
impl CompletionDriver for OpenAICompatibleClient {
    async fn generate(&self, req: &GenerateRequest) -> FabulaResult<GenerateResponse> {
        Ok(self.complete(req).await?)
    }

    fn provider_name(&self) -> &'static str {
        self.provider_name
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
