use anyhow::{Context, Result, ensure};
use clap::ValueEnum;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use super::state::Cell;

/// Side of the square grid used by the classic game
pub const DEFAULT_GRID_SIZE: usize = 15;

/// Largest accepted grid side
pub const MAX_GRID_SIZE: usize = 255;

/// Period between two simulation steps
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 200;

/// Where newly spawned food is allowed to land
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum FoodSpawn {
    /// Any cell of the grid, including cells occupied by the snake
    #[default]
    Anywhere,
    /// Only cells not occupied by the snake
    AvoidSnake,
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side of the square game grid, in cells
    pub grid_size: usize,
    /// Milliseconds between simulation steps
    pub tick_interval_ms: u64,
    /// Food placement policy
    pub food_spawn: FoodSpawn,
    /// Fixed RNG seed for reproducible food placement
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            food_spawn: FoodSpawn::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom grid size
    pub fn new(grid_size: usize) -> Self {
        Self {
            grid_size,
            ..Default::default()
        }
    }

    /// Load a configuration from a JSON file; missing fields take their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: GameConfig = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.grid_size >= 1, "grid_size must be at least 1");
        ensure!(
            self.grid_size <= MAX_GRID_SIZE,
            "grid_size {} exceeds the maximum of {MAX_GRID_SIZE}",
            self.grid_size
        );
        ensure!(
            self.tick_interval_ms >= 1,
            "tick_interval_ms must be at least 1"
        );
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Starting cell of the snake
    pub fn center(&self) -> Cell {
        let mid = (self.grid_size / 2) as i32;
        Cell::new(mid, mid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_size, 15);
        assert_eq!(config.tick_interval(), Duration::from_millis(200));
        assert_eq!(config.food_spawn, FoodSpawn::Anywhere);
        assert_eq!(config.center(), Cell::new(7, 7));
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(10);
        assert_eq!(config.grid_size, 10);
        assert_eq!(config.center(), Cell::new(5, 5));
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "grid_size": 21, "food_spawn": "avoid-snake" }}"#).unwrap();

        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.grid_size, 21);
        assert_eq!(config.food_spawn, FoodSpawn::AvoidSnake);
        assert_eq!(config.tick_interval_ms, DEFAULT_TICK_INTERVAL_MS);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_load_rejects_bad_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "grid_size = 3").unwrap();

        let err = GameConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = GameConfig::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_validate_rejects_oversize_grid() {
        let config = GameConfig {
            grid_size: 1_000_000,
            food_spawn: FoodSpawn::AvoidSnake,
            ..Default::default()
        };

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("exceeds the maximum"));
        assert!(GameConfig::new(MAX_GRID_SIZE + 1).validate().is_err());
    }

    #[test]
    fn test_validate() {
        assert!(GameConfig::default().validate().is_ok());
        assert!(GameConfig::new(1).validate().is_ok());
        assert!(GameConfig::new(0).validate().is_err());
        assert!(GameConfig::new(MAX_GRID_SIZE).validate().is_ok());

        let config = GameConfig {
            tick_interval_ms: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
