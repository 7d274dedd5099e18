//! Narrative generation on top of a completion driver.

use fabula_core::{GenerateRequest, Prompt};
use fabula_error::FabulaResult;
use fabula_interface::CompletionDriver;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Turns a prompt pair into story text through a [`CompletionDriver`].
pub struct NarrativeGenerator<D: CompletionDriver> {
    driver: Arc<D>,
    temperature: f32,
    reasoning_effort: Option<String>,
}

impl<D: CompletionDriver> NarrativeGenerator<D> {
    /// Create a generator that samples at `temperature`.
    pub fn new(driver: Arc<D>, temperature: f32) -> Self {
        Self {
            driver,
            temperature,
            reasoning_effort: None,
        }
    }

    /// Ask for `effort` reasoning on every request.
    pub fn with_reasoning_effort(mut self, effort: Option<String>) -> Self {
        self.reasoning_effort = effort;
        self
    }

    /// Request one chapter.
    ///
    /// # Errors
    ///
    /// Returns the driver's error unchanged; the caller decides how to
    /// recover.
    #[instrument(
        skip(self, prompt),
        fields(
            provider = self.driver.provider_name(),
            model = self.driver.model_name(),
            temperature = self.temperature,
            reasoning_effort = self.reasoning_effort.as_deref(),
        )
    )]
    pub async fn generate(&self, prompt: &Prompt) -> FabulaResult<String> {
        let request = GenerateRequest::from_prompt(prompt)
            .with_temperature(self.temperature)
            .with_reasoning_effort(self.reasoning_effort.clone());
        let response = self.driver.generate(&request).await?;

        if let Some(usage) = response.usage {
            debug!(
                input_tokens = usage.input_tokens,
                output_tokens = usage.output_tokens,
                "Generation usage"
            );
        }

        Ok(response.text.trim().to_string())
    }

    /// The underlying driver.
    pub fn driver(&self) -> &Arc<D> {
        &self.driver
    }
}
