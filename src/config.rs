//! Client configuration.
//!
//! Sources, lowest to highest precedence: built-in defaults, a TOML file,
//! the `BULLS_COWS_API_BASE` environment variable, command-line flags.

use crate::games::bulls_cows::Difficulty;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Environment variable overriding the service address.
pub const API_BASE_ENV: &str = "BULLS_COWS_API_BASE";

/// Configuration for the game client.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base address of the game service.
    #[serde(default = "default_api_base")]
    api_base: String,

    /// Difficulty preselected for new games.
    #[serde(default)]
    difficulty: Difficulty,
}

#[instrument]
fn default_api_base() -> String {
    "http://localhost:8080".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(default_api_base(), Difficulty::default())
    }
}

impl ClientConfig {
    /// Creates a new client configuration.
    #[instrument(skip(api_base), fields(api_base = %api_base))]
    pub fn new(api_base: String, difficulty: Difficulty) -> Self {
        Self {
            api_base,
            difficulty,
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            api_base = %config.api_base,
            difficulty = %config.difficulty,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads the file if it exists (defaults otherwise), then applies the
    /// environment override.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::load_with_env(path, std::env::var(API_BASE_ENV).ok())
    }

    /// [`ClientConfig::load`] with the environment value supplied by the caller.
    #[instrument(skip(path), fields(path = %path.display()))]
    pub fn load_with_env(path: &Path, env_api_base: Option<String>) -> Result<Self, ConfigError> {
        let config = if path.exists() {
            Self::from_file(path)?
        } else {
            info!("Config file not found, using defaults");
            Self::default()
        };
        Ok(config.with_env_override(env_api_base))
    }

    /// Replaces the service address with a non-empty environment value.
    #[instrument(skip(self))]
    pub fn with_env_override(mut self, api_base: Option<String>) -> Self {
        if let Some(api_base) = api_base.filter(|v| !v.trim().is_empty()) {
            debug!(api_base = %api_base, "Service address taken from environment");
            self.api_base = api_base;
        }
        self
    }

    /// Applies command-line overrides.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        api_base: Option<String>,
        difficulty: Option<Difficulty>,
    ) -> Self {
        if let Some(api_base) = api_base {
            self.api_base = api_base;
        }
        if let Some(difficulty) = difficulty {
            self.difficulty = difficulty;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
