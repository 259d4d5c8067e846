use std::num::NonZeroUsize;

use mazetrace_core::{Coord, Grid};

use crate::frontier::best_first;
use crate::outcome::SearchOutcome;
use crate::trace::Trace;
use crate::traits::Search;
use crate::DEFAULT_BATCH_SIZE;

/// Uniform-cost (Dijkstra) search.
///
/// Pops the frontier cell with the lowest accumulated cost. Every move costs
/// 1, so ties are frequent; they resolve to the smaller coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dijkstra {
    batch_size: NonZeroUsize,
}

impl Default for Dijkstra {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl Dijkstra {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of visits grouped into one playback step.
    pub fn with_batch_size(mut self, batch_size: NonZeroUsize) -> Self {
        self.batch_size = batch_size;
        self
    }
}

impl Search for Dijkstra {
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn search(&self, grid: &Grid, start: Coord, end: Coord) -> SearchOutcome {
        match Trace::new(self.name(), grid, start, end, self.batch_size) {
            Some(trace) => best_first(trace, |g, _| f64::from(g)),
            None => SearchOutcome::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Bfs;

    #[test]
    fn matches_bfs_path_length() {
        let g = Grid::parse(
            "\
S....#
.###.#
...#..
.#...E",
        )
        .unwrap();
        let (s, e) = g.anchors().unwrap();
        let d = Dijkstra::new().search(&g, s, e);
        let b = Bfs::new().search(&g, s, e);
        assert!(d.found());
        assert_eq!(d.path_len(), b.path_len());
    }

    #[test]
    fn ties_expand_smaller_coordinates_first() {
        let g = Grid::parse("...\n.S.\n...\n..E").unwrap();
        let out = Dijkstra::new().search(&g, Coord::new(1, 1), Coord::new(3, 2));
        let first: Vec<Coord> = out
            .log
            .exploration()
            .iter()
            .take(4)
            .flat_map(|b| b.iter().map(|e| e.coord))
            .collect();
        // All four neighbors sit at cost 1; row-major order decides.
        assert_eq!(first, [(0, 1), (1, 0), (1, 2), (2, 1)].map(Coord::from));
    }

    #[test]
    fn walled_off_end() {
        let g = Grid::parse("S.#.\n..#E").unwrap();
        let out = Dijkstra::new().search(&g, Coord::new(0, 0), Coord::new(1, 3));
        assert!(!out.found());
        assert_eq!(out.visited_count(), 3);
        assert!(!out.log.has_path());
    }
}
