use mazetrace_core::GridError;
use thiserror::Error;

/// Errors raised when configuring or launching a search.
///
/// Unreachable ends and `start == end` are not errors; they produce an
/// empty [`SearchOutcome`](crate::SearchOutcome).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    #[error("unknown algorithm \u{201c}{0}\u{201d} (expected BFS, DFS, Dijkstra or A*)")]
    UnknownAlgorithm(String),
    #[error("heuristic weight must be finite and non-negative, got {0}")]
    InvalidHeuristicWeight(f64),
    #[error(transparent)]
    Grid(#[from] GridError),
}
