//! Placement of letter tiles.
//!
//! Tiles only spawn on interior cells, one tile in from every edge, and never
//! on the snake or on another tile.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

use super::state::{LetterOption, Position, Snake};
use super::word::WordEntry;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpawnError {
    #[error("no free interior cell left on a {tile_count}x{tile_count} board")]
    Exhausted { tile_count: usize },
}

/// Picks free interior cells for letter tiles.
#[derive(Debug, Clone)]
pub struct SpawnPlanner {
    attempts: usize,
}

impl SpawnPlanner {
    /// `attempts` bounds the rejection-sampling phase
    pub fn new(attempts: usize) -> Self {
        Self { attempts }
    }

    /// Sample a free interior cell uniformly.
    ///
    /// Tries `attempts` random cells first; if all of them are taken, picks
    /// uniformly among the remaining free cells. Fails only when the interior
    /// is completely covered.
    pub fn spawn<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        excluding: &HashSet<Position>,
        tile_count: usize,
    ) -> Result<Position, SpawnError> {
        if tile_count < 3 {
            return Err(SpawnError::Exhausted { tile_count });
        }
        let hi = tile_count as i32 - 1;

        for _ in 0..self.attempts {
            let pos = Position::new(rng.gen_range(1..hi), rng.gen_range(1..hi));
            if !excluding.contains(&pos) {
                return Ok(pos);
            }
        }

        let free: Vec<Position> = (1..hi)
            .flat_map(|y| (1..hi).map(move |x| Position::new(x, y)))
            .filter(|pos| !excluding.contains(pos))
            .collect();

        free.choose(rng)
            .copied()
            .ok_or(SpawnError::Exhausted { tile_count })
    }

    /// Place the correct tile, then the incorrect one, clear of the snake
    /// and of each other.
    pub fn plan_options<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        entry: &WordEntry,
        snake: &Snake,
        tile_count: usize,
    ) -> Result<[LetterOption; 2], SpawnError> {
        let mut taken: HashSet<Position> = snake.body.iter().copied().collect();

        let correct = self.spawn(rng, &taken, tile_count)?;
        taken.insert(correct);
        let incorrect = self.spawn(rng, &taken, tile_count)?;

        Ok([
            LetterOption {
                letter: entry.correct_letter,
                is_correct: true,
                position: correct,
            },
            LetterOption {
                letter: entry.incorrect_letter,
                is_correct: false,
                position: incorrect,
            },
        ])
    }
}

impl Default for SpawnPlanner {
    fn default() -> Self {
        Self::new(1000)
    }
}
