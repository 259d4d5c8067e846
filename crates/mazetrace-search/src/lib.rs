//! Event-recording graph searches on mazes.
//!
//! Each procedure explores a [`Grid`](mazetrace_core::Grid) from a start cell
//! to an end cell and returns the path it found together with an
//! [`EventLog`](mazetrace_core::EventLog) describing, step by step, which
//! cells it visited (and, for DFS, backtracked out of):
//!
//! - **BFS** — FIFO frontier, shortest path ([`Bfs`])
//! - **DFS** — explicit stack with visible backtracking ([`Dfs`])
//! - **Dijkstra** — uniform-cost priority frontier ([`Dijkstra`])
//! - **A\*** — Manhattan heuristic scaled by an adjustable weight ([`AStar`])
//!
//! All four explore neighbors up, down, left, right and break priority ties by
//! coordinate, so logs are reproducible run to run.
//!
//! # Batching
//!
//! Events are grouped into batches of `batch_size` (default 1), each one
//! playback step. A successful run ends with a batch marking every path cell
//! other than the anchors.

mod astar;
mod bfs;
mod config;
mod dfs;
mod dijkstra;
mod distance;
mod error;
mod frontier;
mod neighbors;
mod outcome;
mod trace;
mod traits;

use std::num::NonZeroUsize;

pub use astar::AStar;
pub use bfs::Bfs;
pub use config::{Algorithm, SearchConfig, run, run_between};
pub use dfs::Dfs;
pub use dijkstra::Dijkstra;
pub use distance::manhattan;
pub use error::SearchError;
pub use neighbors::Neighbors;
pub use outcome::SearchOutcome;
pub use traits::Search;

/// Default number of events per playback step.
pub const DEFAULT_BATCH_SIZE: NonZeroUsize = NonZeroUsize::MIN;

/// Default A* heuristic weight.
pub const DEFAULT_HEURISTIC_WEIGHT: f64 = 2.0;
