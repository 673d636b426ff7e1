//! Game settings, loadable from a TOML file.

use std::path::Path;

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Tunable session settings.
///
/// Every field has a default, so a config file only needs the keys it
/// wants to change, and no file at all is fine too.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Fewest players a game can seat.
    #[serde(default = "default_min_players")]
    min_players: usize,

    /// Smallest grid side selectable for Frenzy.
    #[serde(default = "default_min_grid_size")]
    min_grid_size: usize,

    /// Fixed seed for the opening-turn draw and the bot's random fallback;
    /// unset means seeding from the operating system.
    #[serde(default)]
    rng_seed: Option<u64>,

    /// Pause before a bot move, in milliseconds. Zero plays instantly.
    #[serde(default)]
    bot_think_millis: u64,
}

fn default_min_players() -> usize {
    2
}

fn default_min_grid_size() -> usize {
    3
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_players: default_min_players(),
            min_grid_size: default_min_grid_size(),
            rng_seed: None,
            bot_think_millis: 0,
        }
    }
}

impl GameConfig {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::new(format!("failed to read config file: {e}")))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("failed to parse config: {e}")))?;
        config.validate()?;

        info!(
            min_players = config.min_players,
            min_grid_size = config.min_grid_size,
            "config loaded"
        );
        Ok(config)
    }

    /// Loads settings from `path` when the file exists, otherwise falls
    /// back to the defaults.
    pub fn from_file_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces the RNG seed, e.g. from a command-line override.
    pub fn with_rng_seed(mut self, seed: Option<u64>) -> Self {
        self.rng_seed = seed;
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.min_players < 2 {
            return Err(ConfigError::new("min_players must be at least 2"));
        }
        if self.min_grid_size < 3 {
            return Err(ConfigError::new("min_grid_size must be at least 3"));
        }
        Ok(())
    }
}

/// Configuration error with caller location.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {message} at {file}:{line}")]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line where the error was created.
    pub line: u32,
    /// File where the error was created.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
