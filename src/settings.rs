//! Game settings loaded from TOML.

use crate::games::tictactoe::{Canvas, DEFAULT_CELL_SIZE, DrawRule, GameController, MAX_CELL_SIZE};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// User-configurable settings for a game session.
///
/// Every field has a default, so an empty file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameSettings {
    /// Canvas pixels per cell.
    #[serde(default = "default_cell_size")]
    cell_size: u32,

    /// When a full board counts as a draw.
    #[serde(default)]
    draw_rule: DrawRule,

    /// Where the terminal UI writes its log.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_cell_size() -> u32 {
    DEFAULT_CELL_SIZE
}

fn default_log_file() -> PathBuf {
    PathBuf::from("noughts_and_crosses.log")
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            cell_size: default_cell_size(),
            draw_rule: DrawRule::default(),
            log_file: default_log_file(),
        }
    }
}

impl GameSettings {
    /// Creates settings with defaults.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;
        let settings = Self::from_toml(&content)?;
        info!(cell_size = settings.cell_size, draw_rule = %settings.draw_rule, "Settings loaded");
        Ok(settings)
    }

    /// Parses settings from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serializes the settings back to TOML.
    #[instrument(skip(self))]
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize settings: {}", e)))
    }

    /// Overrides the cell size.
    #[instrument(skip(self))]
    pub fn with_cell_size(mut self, cell_size: u32) -> Result<Self, ConfigError> {
        self.cell_size = cell_size;
        self.validate()?;
        Ok(self)
    }

    /// Builds a fresh controller from these settings.
    #[instrument(skip(self))]
    pub fn new_game(&self) -> GameController {
        GameController::with_options(Canvas::new(self.cell_size), self.draw_rule)
    }

    #[track_caller]
    fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_CELL_SIZE).contains(&self.cell_size) {
            return Err(ConfigError::new(format!(
                "cell_size must be between 1 and {}, got {}",
                MAX_CELL_SIZE, self.cell_size
            )));
        }
        Ok(())
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
