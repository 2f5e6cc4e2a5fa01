//! Presentation configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// What the console shows around the board.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PresentationConfig {
    /// Header text printed above the board.
    #[serde(default = "default_title")]
    title: String,

    /// Whether to print one label line per player.
    #[serde(default = "default_show_labels")]
    show_labels: bool,

    /// Link printed below the board.
    #[serde(default = "default_footer_link")]
    footer_link: String,
}

fn default_title() -> String {
    "Tic Tac Toe".to_string()
}

fn default_show_labels() -> bool {
    true
}

fn default_footer_link() -> String {
    "https://reactjs.org".to_string()
}

impl PresentationConfig {
    /// Creates a configuration.
    pub fn new(title: String, show_labels: bool, footer_link: String) -> Self {
        Self {
            title,
            show_labels,
            footer_link,
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

        info!(title = %config.title, "Config loaded successfully");
        Ok(config)
    }

    /// Loads from `path` when given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self::new(default_title(), default_show_labels(), default_footer_link())
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
