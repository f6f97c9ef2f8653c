use anyhow::{Context, Result};
use clap::Parser;
use grid_snake::game::{FoodSpawn, GameConfig};
use grid_snake::logging;
use grid_snake::modes::HumanMode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Tick-driven Snake game for the terminal")]
struct Cli {
    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Side of the square grid, in cells
    #[arg(long)]
    grid_size: Option<usize>,

    /// Milliseconds between simulation steps
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Where new food may appear
    #[arg(long, value_enum)]
    food_spawn: Option<FoodSpawn>,

    /// Seed for reproducible food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (filtered by RUST_LOG, default "info")
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        if let Some(grid_size) = self.grid_size {
            config.grid_size = grid_size;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_interval_ms = tick_ms;
        }
        if let Some(food_spawn) = self.food_spawn {
            config.food_spawn = food_spawn;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        config.validate().context("Invalid game configuration")?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.log_file.as_deref())?;
    let config = cli.game_config()?;
    tracing::debug!(?config, "configuration loaded");

    let mut human_mode = HumanMode::new(config);
    human_mode.run().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Cli::parse_from(["grid_snake"]).game_config().unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_flags_override_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "grid_size": 30, "tick_interval_ms": 90 }}"#).unwrap();
        let path = file.path().to_str().unwrap();

        let cli = Cli::parse_from([
            "grid_snake",
            "--config",
            path,
            "--grid-size",
            "20",
            "--food-spawn",
            "avoid-snake",
            "--seed",
            "4",
        ]);
        let config = cli.game_config().unwrap();

        assert_eq!(config.grid_size, 20);
        assert_eq!(config.tick_interval_ms, 90);
        assert_eq!(config.food_spawn, FoodSpawn::AvoidSnake);
        assert_eq!(config.seed, Some(4));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let cli = Cli::parse_from(["grid_snake", "--grid-size", "0"]);
        assert!(cli.game_config().is_err());

        let cli = Cli::parse_from(["grid_snake", "--grid-size", "1000000"]);
        assert!(cli.game_config().is_err());
    }
}
