use std::num::NonZeroUsize;

use mazetrace_core::{Coord, Grid};

use crate::neighbors::Neighbors;
use crate::outcome::SearchOutcome;
use crate::trace::Trace;
use crate::traits::Search;
use crate::DEFAULT_BATCH_SIZE;

/// One entry of the explicit depth-first stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Frame {
    /// Try to enter `coord`, reached from `parent`.
    Enter { coord: Coord, parent: Option<Coord> },
    /// Every branch below `coord` is exhausted; backtrack out of it.
    Leave(Coord),
}

/// Depth-first search with visible backtracking.
///
/// Runs on an explicit stack of [`Frame`]s rather than recursion. A visited
/// cell whose branch dead-ends is reverted to `Empty`, so the log shows the
/// search retreating. The path returned is the branch that reached the end;
/// it is not necessarily shortest.
///
/// A cell's parent is the cell whose `Enter` frame actually entered it, which
/// is the last cell to push it rather than the first to discover it. Every
/// path cell is therefore still on the current branch, and still `Visited`,
/// when the end is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dfs {
    batch_size: NonZeroUsize,
}

impl Default for Dfs {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl Dfs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of events grouped into one playback step.
    pub fn with_batch_size(mut self, batch_size: NonZeroUsize) -> Self {
        self.batch_size = batch_size;
        self
    }
}

impl Search for Dfs {
    fn name(&self) -> &'static str {
        "DFS"
    }

    fn search(&self, grid: &Grid, start: Coord, end: Coord) -> SearchOutcome {
        let Some(mut trace) = Trace::new(self.name(), grid, start, end, self.batch_size) else {
            return SearchOutcome::default();
        };

        let mut stack = vec![Frame::Enter {
            coord: start,
            parent: None,
        }];
        let mut nbuf = Neighbors::new();

        let mut found = false;
        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Enter { coord, parent } => {
                    if coord == end {
                        // Records the parent link; the end itself is never marked.
                        trace.visit(coord, parent);
                        found = true;
                        break;
                    }
                    if !trace.visit(coord, parent) {
                        continue;
                    }
                    stack.push(Frame::Leave(coord));
                    for &n in nbuf.cardinal(coord, |n| trace.is_open(n)) {
                        stack.push(Frame::Enter {
                            coord: n,
                            parent: Some(coord),
                        });
                    }
                }
                Frame::Leave(coord) => trace.revert(coord),
            }
        }

        trace.finish(found)
    }
}
