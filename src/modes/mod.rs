pub mod play;

pub use play::{PlayConfig, PlayMode};
