//! Shared bookkeeping for an event-recording search run.

use std::num::NonZeroUsize;

use mazetrace_core::{CellKind, Coord, Event, EventBatch, EventLog, Grid};

use crate::outcome::SearchOutcome;

const NO_PARENT: usize = usize::MAX;

/// Working state of one search: a private copy of the caller's grid, the
/// visited set, discoverer links, and the batches recorded so far.
///
/// Every procedure drives a `Trace` the same way: [`visit`](Self::visit) a
/// cell when it leaves the frontier, optionally [`revert`](Self::revert) it,
/// and [`finish`](Self::finish) once the goal is reached or the frontier is
/// exhausted.
pub(crate) struct Trace {
    label: &'static str,
    work: Grid,
    start: Coord,
    end: Coord,
    visited: Vec<bool>,
    parent: Vec<usize>,
    batch_size: usize,
    pending: Vec<Event>,
    batches: Vec<EventBatch>,
}

impl Trace {
    /// Start a trace, or return `None` for degenerate input: an anchor
    /// outside the grid, or `start == end`.
    pub(crate) fn new(
        label: &'static str,
        grid: &Grid,
        start: Coord,
        end: Coord,
        batch_size: NonZeroUsize,
    ) -> Option<Self> {
        if !grid.contains(start) || !grid.contains(end) || start == end {
            log::debug!("{label}: nothing to search from {start} to {end}");
            return None;
        }
        let len = grid.len();
        Some(Self {
            label,
            work: grid.clone(),
            start,
            end,
            visited: vec![false; len],
            parent: vec![NO_PARENT; len],
            batch_size: batch_size.get(),
            pending: Vec::with_capacity(batch_size.get()),
            batches: Vec::new(),
        })
    }

    #[inline]
    pub(crate) fn start(&self) -> Coord {
        self.start
    }

    #[inline]
    pub(crate) fn end(&self) -> Coord {
        self.end
    }

    /// In bounds, not a wall, and not yet visited.
    #[inline]
    pub(crate) fn is_open(&self, c: Coord) -> bool {
        match self.work.index(c) {
            Some(i) => !self.visited[i] && self.work.at(c).is_some_and(CellKind::is_passable),
            None => false,
        }
    }

    /// Anchors keep their kind for the whole run.
    #[inline]
    fn is_anchor(&self, c: Coord) -> bool {
        c == self.start || c == self.end || self.work.at(c).is_some_and(CellKind::is_anchor)
    }

    /// Mark `c` visited, remembering `parent` as the cell it was reached from.
    ///
    /// Returns `false`, recording nothing, if `c` was already visited.
    pub(crate) fn visit(&mut self, c: Coord, parent: Option<Coord>) -> bool {
        let Some(i) = self.work.index(c) else {
            return false;
        };
        if self.visited[i] {
            return false;
        }
        let pi = parent
            .and_then(|p| self.work.index(p))
            .unwrap_or(NO_PARENT);
        self.visited[i] = true;
        self.parent[i] = pi;
        if !self.is_anchor(c) {
            self.work.set(c, CellKind::Visited);
            self.record(Event::visit(c));
        }
        true
    }

    /// Backtrack out of `c`: a visited non-anchor cell reverts to `Empty`.
    /// It stays in the visited set.
    pub(crate) fn revert(&mut self, c: Coord) {
        if self.is_anchor(c) || self.work.at(c) != Some(CellKind::Visited) {
            return;
        }
        self.work.set(c, CellKind::Empty);
        self.record(Event::revert(c));
    }

    fn record(&mut self, event: Event) {
        self.pending.push(event);
        if self.pending.len() >= self.batch_size {
            self.flush();
        }
    }

    fn flush(&mut self) {
        let events = std::mem::take(&mut self.pending);
        if let Some(batch) = EventBatch::new(events) {
            self.batches.push(batch);
        }
    }

    /// Close the open batch and, if the goal was reached, append the path
    /// batch.
    pub(crate) fn finish(mut self, found: bool) -> SearchOutcome {
        self.flush();

        let path = if found { self.reconstruct() } else { Vec::new() };
        let marks: Vec<Event> = path
            .iter()
            .filter(|&&c| !self.is_anchor(c))
            .map(|&c| Event::path(c))
            .collect();
        if let Some(batch) = EventBatch::new(marks) {
            self.batches.push(batch);
        }

        let outcome = SearchOutcome {
            path,
            log: EventLog::from_batches(self.batches),
        };
        log::debug!(
            "{}: {} cells visited in {} batches, path {}",
            self.label,
            outcome.visited_count(),
            outcome.log.len(),
            match outcome.path_len() {
                Some(n) => format!("of {n} moves"),
                None => "not found".to_owned(),
            }
        );
        outcome
    }

    /// Follow parent links from the end back to the start.
    fn reconstruct(&self) -> Vec<Coord> {
        let mut path = Vec::new();
        let Some(mut ci) = self.work.index(self.end) else {
            return path;
        };
        while ci != NO_PARENT {
            path.push(self.work.coord(ci));
            ci = self.parent[ci];
        }
        path.reverse();
        path
    }
}
