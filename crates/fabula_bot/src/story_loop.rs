//! The story loop: generate, publish, wait, read the winner, repeat.

use crate::{BotConfig, NarrativeGenerator, StoryConfig, build_prompt, compose_post_text};
use fabula_core::{IterationState, PollOptions, extract_poll_options_with_limit};
use fabula_error::FabulaError;
use fabula_interface::{CompletionDriver, PollOutcome, PollPlatform, PostId};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, instrument, warn};

/// Result of one completed iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct IterationOutcome {
    /// Identifier of the published post
    pub post_id: PostId,
    /// Generated story (empty when generation failed)
    pub story: String,
    /// Text that was published
    pub post_text: String,
    /// Options attached to the poll
    pub poll_options: PollOptions,
    /// Poll duration used, in minutes
    pub poll_minutes: u32,
    /// Winner carried into the next iteration
    pub winner: String,
    /// True when the poll gave no result and the first option was used
    pub fell_back: bool,
}

impl IterationOutcome {
    /// State to hand to the next iteration.
    pub fn state(&self) -> IterationState {
        IterationState::new(Some(self.winner.clone()), self.poll_options.clone())
    }
}

/// Why an iteration did not complete.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum IterationError {
    /// The post could not be published; the loop cannot continue
    #[display("Publishing failed: {}", _0)]
    Publish(FabulaError),
    /// Cancelled while waiting for the poll to close
    #[display("Cancelled while waiting on post {}", post_id)]
    Cancelled {
        /// Post whose poll was pending
        post_id: PostId,
        /// Options offered, with no winner
        state: IterationState,
    },
}

/// Why the loop stopped.
#[derive(Debug)]
pub enum LoopExit {
    /// Publishing failed
    PublishFailed(FabulaError),
    /// The cancellation token fired
    Cancelled,
    /// The configured iteration limit was reached
    IterationLimit,
}

/// Summary returned when the loop stops.
#[derive(Debug)]
pub struct LoopReport {
    /// Iterations that ran to completion
    pub iterations: u64,
    /// Final poll duration that the next iteration would have used
    pub next_poll_minutes: u32,
    /// Why the loop stopped
    pub exit: LoopExit,
    /// Last state produced, including a partial one from a cancelled wait
    pub last_state: Option<IterationState>,
}

/// Drives the story from one poll to the next.
pub struct StoryBot<D: CompletionDriver, P: PollPlatform> {
    story: StoryConfig,
    generator: NarrativeGenerator<D>,
    platform: Arc<P>,
    max_iterations: Option<u64>,
}

impl<D: CompletionDriver, P: PollPlatform> StoryBot<D, P> {
    /// Creates a new story bot.
    pub fn new(config: BotConfig, driver: Arc<D>, platform: Arc<P>) -> Self {
        Self {
            generator: NarrativeGenerator::new(driver, config.completion.temperature)
                .with_reasoning_effort(config.completion.reasoning_effort),
            story: config.story,
            platform,
            max_iterations: None,
        }
    }

    /// Stop after `limit` completed iterations.
    pub fn with_max_iterations(mut self, limit: Option<u64>) -> Self {
        self.max_iterations = limit;
        self
    }

    /// Story tuning in effect.
    pub fn story_config(&self) -> &StoryConfig {
        &self.story
    }

    /// Run iterations until publishing fails, `cancel` fires, or the
    /// iteration limit is reached.
    #[instrument(skip_all, fields(platform = self.platform.platform_name()))]
    pub async fn run(&self, cancel: CancellationToken) -> LoopReport {
        info!("Story loop started");

        let mut previous: Option<IterationState> = None;
        let mut poll_minutes = self.story.initial_poll_minutes;
        let mut iterations = 0u64;

        let exit = loop {
            if cancel.is_cancelled() {
                info!("Cancellation requested");
                break LoopExit::Cancelled;
            }
            if self.max_iterations.is_some_and(|limit| iterations >= limit) {
                info!(iterations, "Iteration limit reached");
                break LoopExit::IterationLimit;
            }

            match self
                .run_iteration(previous.as_ref(), poll_minutes, &cancel)
                .await
            {
                Ok(outcome) => {
                    iterations += 1;
                    previous = Some(outcome.state());
                    poll_minutes += self.story.poll_increment_minutes;
                    info!(
                        iterations,
                        next_poll_minutes = poll_minutes,
                        "Iteration complete"
                    );
                }
                Err(IterationError::Publish(e)) => {
                    error!(error = %e, "Stopping story loop");
                    break LoopExit::PublishFailed(e);
                }
                Err(IterationError::Cancelled { post_id, state }) => {
                    warn!(post_id = %post_id, "Cancelled during poll wait");
                    previous = Some(state);
                    break LoopExit::Cancelled;
                }
            }
        };

        LoopReport {
            iterations,
            next_poll_minutes: poll_minutes,
            exit,
            last_state: previous,
        }
    }

    /// Run a single generate, publish, wait, and read cycle.
    ///
    /// Generation and poll lookup failures are logged and recovered from
    /// here. Only a publish failure or a cancelled wait is returned as an
    /// error.
    #[instrument(skip(self, previous, cancel), fields(continued = previous.is_some()))]
    pub async fn run_iteration(
        &self,
        previous: Option<&IterationState>,
        poll_minutes: u32,
        cancel: &CancellationToken,
    ) -> Result<IterationOutcome, IterationError> {
        let prompt = build_prompt(previous);
        debug!(prompt = %prompt.user(), "Built prompt");

        let story = match self.generator.generate(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                error!(error = %e, "Story generation failed, continuing with empty story");
                String::new()
            }
        };
        info!(story = %story, "Generated story");

        let poll_options = extract_poll_options_with_limit(&story, self.story.max_option_chars);
        info!(options = ?poll_options.as_slice(), "Extracted poll options");

        let post_text = compose_post_text(
            &story,
            &self.story.call_to_action,
            self.story.post_ceiling,
            self.story.safety_margin,
        );
        debug!(chars = post_text.chars().count(), "Composed post text");

        let post_id = self
            .platform
            .publish_poll(&post_text, &poll_options, poll_minutes)
            .await
            .map_err(IterationError::Publish)?;
        info!(post_id = %post_id, poll_minutes, "Published post with poll");

        let wait = wait_duration(poll_minutes, self.story.grace_minutes);
        info!(wait_secs = wait.as_secs(), "Waiting for poll to close");
        tokio::select! {
            _ = cancel.cancelled() => {
                return Err(IterationError::Cancelled {
                    post_id,
                    state: IterationState::new(None, poll_options),
                });
            }
            _ = tokio::time::sleep(wait) => {}
        }

        let outcome = match self.platform.poll_outcome(&post_id).await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!(error = %e, "Poll lookup failed");
                PollOutcome::NoPollData
            }
        };

        let (winner, fell_back) = match outcome.winner() {
            Some(label) => (label.to_string(), false),
            None => {
                warn!(outcome = ?outcome, "No poll result, falling back to first option");
                (poll_options.first().to_string(), true)
            }
        };
        info!(winner = %winner, fell_back, "Poll decided");

        Ok(IterationOutcome {
            post_id,
            story,
            post_text,
            poll_options,
            poll_minutes,
            winner,
            fell_back,
        })
    }
}

/// Time between publishing and reading the poll.
pub fn wait_duration(poll_minutes: u32, grace_minutes: u32) -> Duration {
    Duration::from_secs(u64::from(poll_minutes + grace_minutes) * 60)
}
