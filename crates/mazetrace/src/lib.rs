//! Record maze searches step by step and scrub through them.
//!
//! This crate re-exports the pieces of the workspace and adds [`Session`],
//! which keeps an editable maze, the last search run over it and a player
//! for that run in step.
//!
//! ```
//! use mazetrace::{Algorithm, Session};
//!
//! let mut session = Session::parse("S.#\n...\n#.E").unwrap();
//! session.set_algorithm(Algorithm::AStar);
//! let moves = session.solve().unwrap().path_len();
//! assert_eq!(moves, Some(4));
//!
//! session.player_mut().seek(isize::MAX);
//! assert_eq!(session.playback().current_grid().to_string(), "S*#\n.**\n#.E");
//! assert_eq!(session.path()[0], mazetrace::model::Coord::ZERO);
//! ```

mod error;
mod session;

pub use error::SessionError;
pub use session::Session;

pub use mazetrace_core::{CellKind, Coord, EmptyBatch, Event, EventBatch, EventLog, Grid, GridError};
pub use mazetrace_playback::{
    LoadError, Playback, PlaybackConfig, Player, PlayerConfig, SeekStrategy,
};
pub use mazetrace_search::{
    AStar, Algorithm, Bfs, Dfs, Dijkstra, Search, SearchConfig, SearchError, SearchOutcome, run,
    run_between,
};

/// The individual crates, for items not re-exported above.
pub use mazetrace_core as model;
pub use mazetrace_playback as playback;
pub use mazetrace_search as search;
