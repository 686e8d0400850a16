//! Game orchestration: the phase state machine, the tick timer and the
//! word list picker.

pub mod game_controller;
pub mod scheduler;
pub mod selection;

pub use game_controller::{GameController, GameEvent, RestartOutcome};
pub use scheduler::TickScheduler;
pub use selection::{ListSelection, SelectionError, describe_selection};
