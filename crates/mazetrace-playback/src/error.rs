use mazetrace_core::Coord;
use thiserror::Error;

/// Errors raised by [`Playback::load`](crate::Playback::load).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// An event addresses a cell outside the grid it is played on.
    #[error("batch {batch} references {coord}, outside the {rows}x{cols} grid")]
    OutOfBounds {
        batch: usize,
        coord: Coord,
        rows: i32,
        cols: i32,
    },
}
