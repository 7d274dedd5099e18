//! Story loop command handler.

use fabula_bot::{BotConfig, LoopExit, StoryBot};
use fabula_models::OpenAICompatibleClient;
use fabula_social::XClient;
use std::path::Path;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Run the story loop until publishing fails, Ctrl+C, or `max_iterations`.
///
/// # Errors
///
/// Returns an error if configuration or credentials are missing, or if the
/// loop stopped because a post could not be published.
pub async fn run_story(
    config_path: Option<&Path>,
    max_iterations: Option<u64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = BotConfig::load_with(config_path)?;

    let driver = OpenAICompatibleClient::from_env(
        config.completion.model.clone(),
        &config.completion.base_url,
    )?
    .with_temperature(config.completion.temperature);
    let platform = XClient::from_env(&config.social.base_url)?;

    info!(
        model = %config.completion.model,
        initial_poll_minutes = config.story.initial_poll_minutes,
        "Starting story loop"
    );

    let bot = StoryBot::new(config, Arc::new(driver), Arc::new(platform))
        .with_max_iterations(max_iterations);

    let cancel = CancellationToken::new();
    let signal = cancel.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Shutdown signal received, stopping gracefully...");
                signal.cancel();
            }
            Err(e) => warn!(error = %e, "Failed to install CTRL+C signal handler"),
        }
    });

    let report = bot.run(cancel).await;
    info!(
        iterations = report.iterations,
        last_choice = report.last_state.as_ref().map(|s| s.carried_choice()),
        "Story loop stopped"
    );

    match report.exit {
        LoopExit::PublishFailed(e) => Err(e.into()),
        LoopExit::Cancelled | LoopExit::IterationLimit => Ok(()),
    }
}
