use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Configuration for the game
///
/// The grid is derived from a fixed canvas: `canvas_width / cell_size`
/// columns by `canvas_height / cell_size` rows. Every field has a default so
/// a config file only needs to name what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Canvas width in canvas units
    pub canvas_width: u32,
    /// Canvas height in canvas units
    pub canvas_height: u32,
    /// Side of one grid cell in canvas units
    pub cell_size: u32,
    /// Simulation ticks per second
    pub tick_rate_hz: u32,
    /// Minimum drag distance (canvas units) before a swipe counts
    pub min_swipe_distance: f32,
    /// Whether the pre-generated next food is shown
    pub show_next_food: bool,
    /// Seed for food placement; random when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: 400,
            canvas_height: 400,
            cell_size: 20,
            tick_rate_hz: 10,
            min_swipe_distance: 15.0,
            show_next_food: false,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a configuration whose grid is exactly `width` x `height` cells
    pub fn with_grid(width: u32, height: u32) -> Self {
        let defaults = Self::default();
        Self {
            canvas_width: width * defaults.cell_size,
            canvas_height: height * defaults.cell_size,
            ..defaults
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::with_grid(10, 10)
    }

    /// Load a configuration from a JSON file; missing fields keep their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Reject configurations the game cannot run with
    pub fn validate(&self) -> Result<()> {
        ensure!(self.cell_size > 0, "cell size must be positive");
        ensure!(
            self.grid_width() > 0 && self.grid_height() > 0,
            "canvas {}x{} is smaller than one {}-unit cell",
            self.canvas_width,
            self.canvas_height,
            self.cell_size
        );
        ensure!(self.tick_rate_hz > 0, "tick rate must be positive");
        ensure!(
            self.min_swipe_distance >= 0.0,
            "minimum swipe distance must not be negative"
        );
        Ok(())
    }

    /// Number of grid columns
    pub fn grid_width(&self) -> usize {
        if self.cell_size == 0 {
            return 0;
        }
        (self.canvas_width / self.cell_size) as usize
    }

    /// Number of grid rows
    pub fn grid_height(&self) -> usize {
        if self.cell_size == 0 {
            return 0;
        }
        (self.canvas_height / self.cell_size) as usize
    }

    /// Time between two simulation ticks
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate_hz.max(1)
    }
}
