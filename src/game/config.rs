// Game configuration loaded from JSON
//
// Every field has a default, so a config file only needs the values it wants
// to change. A missing file means "use the defaults".

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use super::types::Arena;

pub const DEFAULT_CONFIG_PATH: &str = "assets/config/game.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: u32,
    pub height: u32,
    pub starting_lives: i32,
    /// Number of big meteors in the first wave. Each wave adds one.
    pub initial_meteors: u32,
    pub ufo_spawn_interval_ms: u64,
    pub game_over_delay_ms: u64,
    /// Speed range for new meteors, in px/s.
    pub meteor_min_speed: f64,
    pub meteor_max_speed: f64,
    /// Fixed RNG seed. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: 1000,
            height: 600,
            starting_lives: 3,
            initial_meteors: 1,
            ufo_spawn_interval_ms: 10_000,
            game_over_delay_ms: 3_000,
            meteor_min_speed: 60.0,
            meteor_max_speed: 180.0,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(GameConfig::default());
        }
        GameConfig::load_from_file(path)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "arena size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.meteor_min_speed < 0.0 || self.meteor_min_speed > self.meteor_max_speed {
            return Err(ConfigError::Invalid(format!(
                "bad meteor speed range {}..{}",
                self.meteor_min_speed, self.meteor_max_speed
            )));
        }
        Ok(())
    }

    pub fn arena(&self) -> Arena {
        Arena::new(f64::from(self.width), f64::from(self.height))
    }

    pub fn ufo_spawn_interval(&self) -> Duration {
        Duration::from_millis(self.ufo_spawn_interval_ms)
    }

    pub fn game_over_delay(&self) -> Duration {
        Duration::from_millis(self.game_over_delay_ms)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Invalid(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}
