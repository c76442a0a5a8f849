//! YAML configuration
//!
//! Every section is optional and falls back to defaults, so an empty file
//! (or no file at all) yields a playable game. Validation runs before any
//! simulation state is constructed.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::strategy::StrategyKind;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub game: GameSettings,
    pub hamiltonian: HamiltonianSettings,
    pub graphics: GraphicsSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub grid_width: i32,
    pub grid_height: i32,
    pub wrap_around: bool,
    pub strategy: StrategyKind,
    pub properties: SpeedSettings,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            grid_width: 20,
            grid_height: 20,
            wrap_around: true,
            strategy: StrategyKind::Player,
            properties: SpeedSettings::default(),
        }
    }
}

/// Tick pacing, all in milliseconds
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeedSettings {
    /// Interval between simulation steps at the start of a game
    pub initial_speed: u64,
    /// How much the interval shrinks per point scored
    pub speed_acceleration: u64,
    /// Floor the interval never drops below
    pub min_speed: u64,
}

impl Default for SpeedSettings {
    fn default() -> Self {
        Self {
            initial_speed: 200,
            speed_acceleration: 5,
            min_speed: 50,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HamiltonianSettings {
    /// Generate the adaptive strategy's tour from a random maze instead of
    /// the fixed serpentine pattern
    pub random_cycle: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphicsSettings {
    /// Windowed UI when true, terminal UI when false
    pub enable: bool,
}

impl Default for GraphicsSettings {
    fn default() -> Self {
        Self { enable: true }
    }
}

impl Config {
    /// Load and validate a YAML config file
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Config = serde_yaml_ng::from_str(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the simulation cannot run on
    pub fn validate(&self) -> Result<()> {
        let game = &self.game;
        if game.grid_width < 2 || game.grid_height < 2 {
            bail!(
                "grid must be at least 2x2, got {}x{}",
                game.grid_width,
                game.grid_height
            );
        }
        if game.grid_width % 2 != 0 || game.grid_height % 2 != 0 {
            bail!(
                "grid dimensions must be even, got {}x{}",
                game.grid_width,
                game.grid_height
            );
        }
        if game.properties.min_speed > game.properties.initial_speed {
            bail!(
                "min_speed ({}ms) exceeds initial_speed ({}ms)",
                game.properties.min_speed,
                game.properties.initial_speed
            );
        }
        Ok(())
    }
}
