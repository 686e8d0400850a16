//! Word Snake - a vocabulary game played as Snake
//!
//! This library provides:
//! - Core game logic: ticks, collisions, tile spawning, speed-up (game module)
//! - Game orchestration: phases, tick timer, list picker (controller module)
//! - Word list loading from JSON files (words module)
//! - TUI rendering and key mapping (render, input modules)
//! - The interactive terminal mode (modes module)

pub mod controller;
pub mod game;
pub mod input;
pub mod modes;
pub mod render;
pub mod words;
