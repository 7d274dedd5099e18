//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Fabula - serial choose-your-own-adventure stories decided by X polls
#[derive(Parser, Debug)]
#[command(name = "fabula")]
#[command(about = "Serial choose-your-own-adventure stories decided by X polls", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the story loop until publishing fails or Ctrl+C
    Run {
        /// Extra configuration file, applied last
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Stop after this many completed iterations
        #[arg(long)]
        max_iterations: Option<u64>,
    },

    /// Chat with the model interactively
    Console {
        /// Extra configuration file, applied last
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Resolve configuration and credentials, then exit
    Check {
        /// Extra configuration file, applied last
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_run_with_limit() {
        let cli = Cli::parse_from(["fabula", "run", "--max-iterations", "3", "--verbose"]);
        assert!(cli.verbose);
        match cli.command {
            Commands::Run {
                config,
                max_iterations,
            } => {
                assert!(config.is_none());
                assert_eq!(max_iterations, Some(3));
            }
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_console_with_config() {
        let cli = Cli::parse_from(["fabula", "--json-logs", "console", "-c", "story.toml"]);
        assert!(cli.json_logs);
        assert!(matches!(
            cli.command,
            Commands::Console { config: Some(ref path) } if path == &PathBuf::from("story.toml")
        ));
    }
}
