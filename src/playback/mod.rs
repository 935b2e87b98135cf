//! Playback navigation: the session state, the next/previous resolver and
//! the simulated progress timer.

pub mod progress;
pub mod resolver;
pub mod state;
pub mod system;

pub use state::{Direction, PlaybackState};
pub use system::PlaybackSystem;
