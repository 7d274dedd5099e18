//! Dry-run command handler.

use fabula_bot::BotConfig;
use fabula_models::OpenAICompatibleClient;
use fabula_social::XClient;
use std::path::Path;

/// Resolve configuration and credentials and print what `run` would use.
///
/// Nothing is sent over the network.
///
/// # Errors
///
/// Returns the first configuration or credential error encountered.
pub fn check_setup(config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = BotConfig::load_with(config_path)?;

    let driver = OpenAICompatibleClient::from_env(
        config.completion.model.clone(),
        &config.completion.base_url,
    )?
    .with_temperature(config.completion.temperature);
    let platform = XClient::from_env(&config.social.base_url)?;

    println!("Completion endpoint: {}", driver.endpoint());
    println!("Model:               {}", config.completion.model);
    println!("Temperature:         {}", config.completion.temperature);
    println!("Posts endpoint:      {}", platform.posts_url());
    println!(
        "Poll minutes:        {} (+{} per iteration, {} min grace)",
        config.story.initial_poll_minutes,
        config.story.poll_increment_minutes,
        config.story.grace_minutes
    );
    println!(
        "Post ceiling:        {} chars ({} margin)",
        config.story.post_ceiling, config.story.safety_margin
    );
    println!("Call to action:      {}", config.story.call_to_action);
    println!("Credentials:         all present");

    Ok(())
}
