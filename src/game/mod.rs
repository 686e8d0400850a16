//! Core game logic module for the word snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Ticks are driven from outside; nothing in here sleeps or awaits.

pub mod action;
pub mod config;
pub mod engine;
pub mod spawn;
pub mod state;
pub mod word;

// Re-export commonly used types
pub use action::Direction;
pub use config::GameConfig;
pub use engine::{GameEngine, GameError, TickEvent};
pub use spawn::{SpawnError, SpawnPlanner};
pub use state::{GameOverReason, GameState, LetterOption, Phase, Position, Snake};
pub use word::WordEntry;
