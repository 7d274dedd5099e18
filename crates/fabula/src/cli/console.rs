//! Interactive console handler.
//!
//! Sends a fixed opening prompt, prints the reply, then forwards each line
//! typed on stdin as a fresh single-turn prompt until `quit` or `exit`.

use fabula_bot::{BotConfig, NarrativeGenerator};
use fabula_core::Prompt;
use fabula_models::OpenAICompatibleClient;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Storyteller instruction for the console.
const CONSOLE_SYSTEM_PROMPT: &str = "You are an AI that writes a Lil X choose-your-own-adventure on Mars. \
Mentally track karma: one morally Good choice, one morally Bad. \
End with exactly two choices labeled:\n  Good: <25 chars\n  Bad:  <25 chars\n\
Don't mention word counts.";

/// First message sent when the console opens.
const CONSOLE_OPENING_PROMPT: &str = "Lil X is stranded on Mars, craving to see his dad Elon. \
He's haunted by a cosmic deity, grokGantua, which holds the answers to the universe. \
Write 125-175 words in second-person perspective.";

/// What a line typed at the console asks for.
#[derive(Debug, PartialEq, Eq)]
enum ConsoleInput<'a> {
    Quit,
    Blank,
    Message(&'a str),
}

fn parse_input(line: &str) -> ConsoleInput<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        ConsoleInput::Blank
    } else if trimmed.eq_ignore_ascii_case("quit") || trimmed.eq_ignore_ascii_case("exit") {
        ConsoleInput::Quit
    } else {
        ConsoleInput::Message(trimmed)
    }
}

/// Run the interactive console.
///
/// # Errors
///
/// Returns an error if configuration or `XAI_API_KEY` is missing, or stdin
/// cannot be read. Generation failures are printed and the console continues.
pub async fn run_console(config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = BotConfig::load_with(config_path)?;
    let driver = OpenAICompatibleClient::from_env(
        config.completion.model.clone(),
        &config.completion.base_url,
    )?
    .with_temperature(config.completion.temperature);
    let generator = NarrativeGenerator::new(Arc::new(driver), config.completion.temperature)
        .with_reasoning_effort(config.completion.reasoning_effort.clone());

    reply(&generator, CONSOLE_OPENING_PROMPT).await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("You > ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match parse_input(&line) {
            ConsoleInput::Quit => {
                println!("Bye!");
                break;
            }
            ConsoleInput::Blank => continue,
            ConsoleInput::Message(text) => reply(&generator, text).await,
        }
    }

    Ok(())
}

async fn reply(generator: &NarrativeGenerator<OpenAICompatibleClient>, user: &str) {
    let prompt = Prompt::new(CONSOLE_SYSTEM_PROMPT, user);
    match generator.generate(&prompt).await {
        Ok(text) => println!("\nGrok > {}\n", text),
        Err(e) => println!("Error: {}\n", e),
    }
}
