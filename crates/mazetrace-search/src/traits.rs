use mazetrace_core::{Coord, Grid};

use crate::outcome::SearchOutcome;

/// A search procedure that records how it explores the grid.
///
/// Implementations never mutate `grid`; they work on a private copy. When
/// `start` or `end` lies outside the grid, or `start == end`, they return an
/// empty [`SearchOutcome`].
pub trait Search {
    /// Short display name, e.g. `"BFS"`.
    fn name(&self) -> &'static str;

    /// Search from `start` to `end`.
    fn search(&self, grid: &Grid, start: Coord, end: Coord) -> SearchOutcome;
}
