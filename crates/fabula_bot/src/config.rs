//! Bot configuration with layered sources.
//!
//! Values come from the bundled `fabula.toml`, then
//! `~/.config/fabula/fabula.toml`, then `./fabula.toml`, then an explicit
//! file passed on the command line. Later sources override earlier ones.
//! Credentials are never read from these files.

use config::{Config, ConfigBuilder, File, FileFormat, builder::DefaultState};
use fabula_error::{ConfigError, FabulaError, FabulaResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../fabula.toml");

/// Smallest margin that still fits the `...` and blank-line separator.
pub const MIN_SAFETY_MARGIN: usize = 5;

/// Longest poll option label X accepts.
pub const MAX_PLATFORM_OPTION_CHARS: usize = 25;

/// Top-level configuration for the story bot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BotConfig {
    /// Chat-completion backend settings
    #[serde(default)]
    pub completion: CompletionConfig,
    /// Social platform settings
    #[serde(default)]
    pub social: SocialConfig,
    /// Story loop tuning
    #[serde(default)]
    pub story: StoryConfig,
}

/// Chat-completion backend settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionConfig {
    /// Base URL of the OpenAI-compatible API (without `/chat/completions`)
    pub base_url: String,
    /// Model identifier
    pub model: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Reasoning depth sent to reasoning models; omitted when unset
    #[serde(default)]
    pub reasoning_effort: Option<String>,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.x.ai/v1".to_string(),
            model: "grok-3-mini".to_string(),
            temperature: 0.6,
            reasoning_effort: Some("high".to_string()),
        }
    }
}

/// Social platform settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialConfig {
    /// Base URL of the X API (without `/2/tweets`)
    pub base_url: String,
}

impl Default for SocialConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.x.com".to_string(),
        }
    }
}

/// Tuning for the story loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryConfig {
    /// Poll duration of the first iteration, in minutes
    pub initial_poll_minutes: u32,
    /// Minutes added to the poll duration after every iteration
    pub poll_increment_minutes: u32,
    /// Minutes to wait past the poll close before reading results
    pub grace_minutes: u32,
    /// Maximum post length accepted by the platform, in characters
    pub post_ceiling: usize,
    /// Characters held back from the story budget
    ///
    /// Must cover the `...` and blank-line separator added during composition.
    pub safety_margin: usize,
    /// Text appended to every post
    pub call_to_action: String,
    /// Longest poll option label, in characters
    pub max_option_chars: usize,
}

impl Default for StoryConfig {
    fn default() -> Self {
        Self {
            initial_poll_minutes: 5,
            poll_increment_minutes: 1,
            grace_minutes: 4,
            post_ceiling: 2500,
            safety_margin: 50,
            call_to_action: "vote on X's next move".to_string(),
            max_option_chars: fabula_core::MAX_OPTION_CHARS,
        }
    }
}

impl StoryConfig {
    /// Reject values that would produce posts the platform refuses.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if `safety_margin` is below
    /// [`MIN_SAFETY_MARGIN`] or `max_option_chars` is outside
    /// `1..=`[`MAX_PLATFORM_OPTION_CHARS`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.safety_margin < MIN_SAFETY_MARGIN {
            return Err(ConfigError::new(format!(
                "story.safety_margin must be at least {}, got {}",
                MIN_SAFETY_MARGIN, self.safety_margin
            )));
        }
        if !(1..=MAX_PLATFORM_OPTION_CHARS).contains(&self.max_option_chars) {
            return Err(ConfigError::new(format!(
                "story.max_option_chars must be between 1 and {}, got {}",
                MAX_PLATFORM_OPTION_CHARS, self.max_option_chars
            )));
        }
        Ok(())
    }
}

impl BotConfig {
    /// Parse only the bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled file is malformed.
    pub fn bundled() -> FabulaResult<Self> {
        Self::finish(Self::base())
    }

    /// Load configuration from a specific file path, on top of the bundled
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> FabulaResult<Self> {
        debug!("Loading configuration from file");
        Self::finish(Self::base().add_source(File::from(path.as_ref())))
    }

    /// Load configuration with precedence: current dir > home dir > bundled
    /// defaults.
    ///
    /// User config files are optional and silently skipped if absent.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use fabula_bot::BotConfig;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = BotConfig::load()?;
    /// assert!(config.story.initial_poll_minutes > 0);
    /// # Ok(())
    /// # }
    /// ```
    pub fn load() -> FabulaResult<Self> {
        Self::load_with(None::<&Path>)
    }

    /// Like [`BotConfig::load`], with an optional explicit file on top.
    ///
    /// Unlike the implicit locations, an explicit file must exist.
    #[instrument(skip(explicit))]
    pub fn load_with(explicit: Option<impl AsRef<Path>>) -> FabulaResult<Self> {
        debug!("Loading configuration with precedence: explicit > current dir > home dir > bundled defaults");

        let mut builder = Self::base();

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/fabula/fabula.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("fabula").required(false));

        if let Some(path) = explicit {
            debug!(path = %path.as_ref().display(), "Adding explicit config file");
            builder = builder.add_source(File::from(path.as_ref()));
        }

        Self::finish(builder)
    }

    fn base() -> ConfigBuilder<DefaultState> {
        Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> FabulaResult<Self> {
        let config: Self = builder
            .build()
            .map_err(|e| {
                FabulaError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                FabulaError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        config.story.validate()?;
        Ok(config)
    }
}
