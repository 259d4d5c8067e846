use std::collections::VecDeque;
use std::num::NonZeroUsize;

use mazetrace_core::{Coord, Grid};

use crate::neighbors::Neighbors;
use crate::outcome::SearchOutcome;
use crate::trace::Trace;
use crate::traits::Search;
use crate::DEFAULT_BATCH_SIZE;

/// Breadth-first search.
///
/// Expands the grid level by level from a FIFO frontier, so the path found is
/// a shortest one. Never backtracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bfs {
    batch_size: NonZeroUsize,
}

impl Default for Bfs {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl Bfs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of visits grouped into one playback step.
    pub fn with_batch_size(mut self, batch_size: NonZeroUsize) -> Self {
        self.batch_size = batch_size;
        self
    }
}

impl Search for Bfs {
    fn name(&self) -> &'static str {
        "BFS"
    }

    fn search(&self, grid: &Grid, start: Coord, end: Coord) -> SearchOutcome {
        let Some(mut trace) = Trace::new(self.name(), grid, start, end, self.batch_size) else {
            return SearchOutcome::default();
        };

        // Each entry carries the cell it was discovered from.
        let mut queue: VecDeque<(Coord, Option<Coord>)> = VecDeque::new();
        queue.push_back((start, None));
        let mut nbuf = Neighbors::new();

        let mut found = false;
        while let Some((c, parent)) = queue.pop_front() {
            if !trace.visit(c, parent) {
                continue;
            }
            if c == end {
                found = true;
                break;
            }
            for &n in nbuf.cardinal(c, |n| trace.is_open(n)) {
                queue.push_back((n, Some(c)));
            }
        }

        trace.finish(found)
    }
}
