use mazetrace_core::{CellKind, Coord, GridError};
use mazetrace_playback::LoadError;
use mazetrace_search::SearchError;
use thiserror::Error;

/// Errors raised by [`Session`](crate::Session).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("{0} is outside the maze")]
    OutOfBounds(Coord),
    /// Only walls, empty cells and anchors can be placed by hand.
    #[error("cannot place a {0} cell by hand")]
    NotEditable(CellKind),
}
