use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::ai::Difficulty;
use crate::error::ConfigError;
use crate::game::{Player, COLS, ROWS};

/// Smallest and largest accepted board dimension.
pub const MIN_DIMENSION: usize = 4;
pub const MAX_DIMENSION: usize = 16;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub ai: AiConfig,
    pub game: GameConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: ROWS,
            cols: COLS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Tier name; anything unrecognised plays as medium.
    pub difficulty: String,
    /// Fixed RNG seed for reproducible games.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for AiConfig {
    fn default() -> Self {
        AiConfig {
            difficulty: Difficulty::default().name().to_string(),
            seed: None,
        }
    }
}

impl AiConfig {
    /// Resolved difficulty tier.
    pub fn difficulty(&self) -> Difficulty {
        Difficulty::parse(&self.difficulty).unwrap_or_else(|| {
            warn!(name = %self.difficulty, "unknown difficulty, using medium");
            Difficulty::default()
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Colour played by the human.
    pub human: Player,
    /// Colour that moves first.
    pub first: Player,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            human: Player::Red,
            first: Player::Red,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let range = MIN_DIMENSION..=MAX_DIMENSION;
        if !range.contains(&self.board.rows) {
            return Err(ConfigError::Validation(format!(
                "board.rows must be in {MIN_DIMENSION}..={MAX_DIMENSION}"
            )));
        }
        if !range.contains(&self.board.cols) {
            return Err(ConfigError::Validation(format!(
                "board.cols must be in {MIN_DIMENSION}..={MAX_DIMENSION}"
            )));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(&AppConfig::default())?)
    }
}
