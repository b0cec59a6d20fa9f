//! Engine configuration.
//!
//! Difficulty level, board dimensions, and strategy seeding. All types
//! deserialize from JSON with missing fields taking their defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{DEFAULT_CENTER_SIZE, MAX_CENTER_SIZE};

/// Highest number of simultaneous threats the strategy buckets.
pub const MAX_THREATS: usize = 8;

/// Prey count of the traditional game.
pub const DEFAULT_PREY_COUNT: usize = 20;

/// Errors raised while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("level {0} out of range 1..={max}", max = MAX_THREATS)]
    LevelOutOfRange(i64),

    #[error("board centre {width}x{height} outside 1..={max}", max = MAX_CENTER_SIZE)]
    BoardSize { width: usize, height: usize },

    #[error("invalid value '{value}' for option '{name}'")]
    InvalidOption { name: String, value: String },

    #[error("malformed configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Difficulty: the highest threat count the predator deliberately aims for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Level(u8);

impl Level {
    pub const MIN: Level = Level(1);
    pub const MAX: Level = Level(MAX_THREATS as u8);

    pub fn new(level: i64) -> Result<Self, ConfigError> {
        if (1..=MAX_THREATS as i64).contains(&level) {
            Ok(Level(level as u8))
        } else {
            Err(ConfigError::LevelOutOfRange(level))
        }
    }

    pub const fn get(self) -> usize {
        self.0 as usize
    }
}

impl Default for Level {
    fn default() -> Self {
        Level(3)
    }
}

impl TryFrom<i64> for Level {
    type Error = ConfigError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Level::new(value)
    }
}

impl From<Level> for i64 {
    fn from(level: Level) -> Self {
        level.0 as i64
    }
}

/// Predator strategy settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyConfig {
    pub level: Level,
    /// Seed for move selection; `None` draws from entropy.
    pub seed: Option<u64>,
}

impl StrategyConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Board dimensions and opening layout.
///
/// Centre dimensions are checked against `1..=MAX_CENTER_SIZE` when
/// deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardFields")]
pub struct BoardConfig {
    pub center_width: usize,
    pub center_height: usize,
    pub prey_count: usize,
}

#[derive(Deserialize)]
#[serde(default)]
struct BoardFields {
    center_width: usize,
    center_height: usize,
    prey_count: usize,
}

impl Default for BoardFields {
    fn default() -> Self {
        let BoardConfig { center_width, center_height, prey_count } = BoardConfig::default();
        BoardFields { center_width, center_height, prey_count }
    }
}

impl TryFrom<BoardFields> for BoardConfig {
    type Error = ConfigError;

    fn try_from(fields: BoardFields) -> Result<Self, Self::Error> {
        BoardConfig::new(fields.center_width, fields.center_height, fields.prey_count)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            center_width: DEFAULT_CENTER_SIZE,
            center_height: DEFAULT_CENTER_SIZE,
            prey_count: DEFAULT_PREY_COUNT,
        }
    }
}

impl BoardConfig {
    pub fn new(center_width: usize, center_height: usize, prey_count: usize) -> Result<Self, ConfigError> {
        let extent = 1..=MAX_CENTER_SIZE;
        if !extent.contains(&center_width) || !extent.contains(&center_height) {
            return Err(ConfigError::BoardSize {
                width: center_width,
                height: center_height,
            });
        }
        Ok(BoardConfig { center_width, center_height, prey_count })
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
