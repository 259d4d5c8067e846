//! Priority frontier shared by Dijkstra and A*.
//!
//! Entries are popped by lowest priority; ties go to the smaller coordinate
//! (row-major), then to the earlier insertion, so every run pops in the same
//! order.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use mazetrace_core::Coord;

use crate::neighbors::Neighbors;
use crate::outcome::SearchOutcome;
use crate::trace::Trace;

#[derive(Debug, Clone, Copy)]
pub(crate) struct Entry {
    pub(crate) priority: f64,
    /// Path length from the start.
    pub(crate) g: u32,
    pub(crate) coord: Coord,
    pub(crate) parent: Option<Coord>,
    /// Insertion counter; breaks any remaining ties FIFO.
    seq: u64,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap (max-heap) pops the smallest entry first.
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.coord.cmp(&self.coord))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Entry>,
    seq: u64,
}

impl Frontier {
    pub(crate) fn push(&mut self, priority: f64, g: u32, coord: Coord, parent: Option<Coord>) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Entry {
            priority,
            g,
            coord,
            parent,
            seq,
        });
    }

    pub(crate) fn pop(&mut self) -> Option<Entry> {
        self.heap.pop()
    }
}

/// Run a best-first search over unit-weight edges.
///
/// `priority(g, c)` ranks a cell reached after `g` moves. The start is pushed
/// with priority 0. Popped cells already visited are skipped; otherwise they
/// are visited and their open neighbors pushed with `g + 1`.
pub(crate) fn best_first(mut trace: Trace, priority: impl Fn(u32, Coord) -> f64) -> SearchOutcome {
    let start = trace.start();
    let end = trace.end();
    let mut open = Frontier::default();
    open.push(0.0, 0, start, None);
    let mut nbuf = Neighbors::new();

    let found = 'search: loop {
        let Some(current) = open.pop() else {
            break 'search false;
        };
        if !trace.visit(current.coord, current.parent) {
            continue;
        }
        if current.coord == end {
            break 'search true;
        }
        let g = current.g + 1;
        for &n in nbuf.cardinal(current.coord, |n| trace.is_open(n)) {
            open.push(priority(g, n), g, n, Some(current.coord));
        }
    };

    trace.finish(found)
}
