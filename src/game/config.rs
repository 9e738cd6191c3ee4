use serde::{Deserialize, Serialize};

use super::grid::Grid;

/// Game mode, selected when a game starts.
///
/// Modes differ only in their base tick interval; wall mode carries no
/// special wall rule beyond the usual boundary collision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    Classic,
    Speed,
    Wall,
}

impl GameMode {
    /// Base tick interval in milliseconds
    pub fn base_interval_ms(&self) -> u64 {
        match self {
            GameMode::Classic => 100,
            GameMode::Speed => 70,
            GameMode::Wall => 120,
        }
    }
}

/// Configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the game grid in tiles
    pub grid_width: usize,
    /// Height of the game grid in tiles
    pub grid_height: usize,
    /// Points awarded per food eaten
    pub food_points: u32,
    /// The game speeds up each time the score crosses a multiple of this
    pub points_per_speedup: u32,
    /// How much the tick interval shrinks per speedup, in milliseconds
    pub speedup_step_ms: u64,
    /// Tick interval floor in milliseconds
    pub min_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 20,
            grid_height: 20,
            food_points: 10,
            points_per_speedup: 50,
            speedup_step_ms: 10,
            min_interval_ms: 50,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.grid_width, self.grid_height)
    }
}
