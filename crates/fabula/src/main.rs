//! Fabula CLI binary.
//!
//! - `run` drives the story loop against x.ai and X
//! - `console` opens an interactive chat with the model
//! - `check` resolves configuration and credentials without network calls

use clap::Parser;
use fabula::observability::{
    ObservabilityConfig, init_observability_with_config, shutdown_observability,
};

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, check_setup, run_console, run_story};

    // Credentials may live in a local .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut observability = ObservabilityConfig::new("fabula").with_json_logs(cli.json_logs);
    if cli.verbose {
        observability = observability.with_log_level("debug");
    }
    init_observability_with_config(observability)?;

    let result = match cli.command {
        Commands::Run {
            config,
            max_iterations,
        } => run_story(config.as_deref(), max_iterations).await,
        Commands::Console { config } => run_console(config.as_deref()).await,
        Commands::Check { config } => check_setup(config.as_deref()),
    };

    shutdown_observability();
    result
}
