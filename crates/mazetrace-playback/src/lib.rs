//! Scrubbable playback of maze search event logs.
//!
//! [`Playback`] holds a cursor over an [`EventLog`](mazetrace_core::EventLog)
//! and the grid obtained by applying batches up to it. [`Player`] drives a
//! playback forward from elapsed time.

mod config;
mod engine;
mod error;
mod player;
mod undo;

pub use config::{PlaybackConfig, PlayerConfig, SeekStrategy};
pub use engine::Playback;
pub use error::LoadError;
pub use player::Player;
pub use undo::{Mismatch, undo_kind, verify};
