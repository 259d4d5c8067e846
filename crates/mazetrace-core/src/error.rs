use thiserror::Error;

use crate::geom::Coord;

/// Errors raised while building a [`Grid`](crate::Grid) or locating its
/// anchors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// The text contained no rows, or rows with no columns.
    #[error("grid has no cells")]
    Empty,
    /// A row's width differs from the first row.
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character outside the glyph set was found.
    #[error("invalid glyph \u{201c}{glyph}\u{201d} at {coord}")]
    InvalidGlyph { glyph: char, coord: Coord },
    #[error("grid has no start cell")]
    MissingStart,
    #[error("grid has no end cell")]
    MissingEnd,
    #[error("grid has more than one start cell: {0} and {1}")]
    DuplicateStart(Coord, Coord),
    #[error("grid has more than one end cell: {0} and {1}")]
    DuplicateEnd(Coord, Coord),
}
