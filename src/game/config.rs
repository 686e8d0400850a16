use serde::{Deserialize, Serialize};

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of tiles along each side of the square board
    pub tile_count: usize,
    /// Tick interval at the start of a game, in milliseconds
    pub initial_speed_ms: u64,
    /// How much faster each correct letter makes the game
    pub speed_step_ms: u64,
    /// Fastest allowed tick interval
    pub min_speed_ms: u64,
    /// Wrong letters allowed before the game ends
    pub max_mistakes: u32,
    /// Random samples tried before the spawn planner scans for free cells
    pub spawn_attempts: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tile_count: 20,
            initial_speed_ms: 200,
            speed_step_ms: 2,
            min_speed_ms: 70,
            max_mistakes: 3,
            spawn_attempts: 1000,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom board size
    pub fn new(tile_count: usize) -> Self {
        Self {
            tile_count,
            ..Default::default()
        }
    }

    /// Create a small board for testing
    pub fn small() -> Self {
        Self::new(10)
    }

    /// The cell a fresh snake starts on
    pub fn center(&self) -> (i32, i32) {
        let mid = (self.tile_count / 2) as i32;
        (mid, mid)
    }
}
