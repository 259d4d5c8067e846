//! Playback engine: a cursor over an [`EventLog`] and the grid it produces.
//!
//! The cursor ranges over `-1..=len-1`. At `-1` the grid equals the initial
//! grid; at `k` batches `0..=k` have been applied, in order.

use mazetrace_core::{Coord, Event, EventLog, Grid};

use crate::config::{PlaybackConfig, SeekStrategy};
use crate::error::LoadError;
use crate::undo;

/// Replays a recorded search log over a private copy of its grid.
///
/// Seeking forward applies batches in order. Seeking backward either
/// rebuilds from the initial grid or undoes batches in reverse, depending on
/// [`Playback::strategy`].
#[derive(Debug, Clone, Default)]
pub struct Playback {
    config: PlaybackConfig,
    initial: Grid,
    grid: Grid,
    log: EventLog,
    /// Number of applied batches, that is `cursor + 1`.
    applied: usize,
    strategy: SeekStrategy,
    delta: Vec<Event>,
    touched: Touched,
}

impl Playback {
    /// An empty playback: no grid, no batches.
    pub fn new(config: PlaybackConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// A playback loaded with `log` over `grid`.
    pub fn with_log(
        config: PlaybackConfig,
        grid: &Grid,
        log: EventLog,
    ) -> Result<Self, LoadError> {
        let mut pb = Self::new(config);
        pb.load(grid, log)?;
        Ok(pb)
    }

    /// Replace the current session with `log` played over a copy of `grid`.
    ///
    /// The cursor is reset to `-1`. Fails without changing anything if an
    /// event addresses a cell outside `grid`.
    pub fn load(&mut self, grid: &Grid, log: EventLog) -> Result<(), LoadError> {
        for (batch, events) in log.batches().iter().enumerate() {
            if let Some(e) = events.iter().find(|e| !grid.contains(e.coord)) {
                return Err(LoadError::OutOfBounds {
                    batch,
                    coord: e.coord,
                    rows: grid.rows(),
                    cols: grid.cols(),
                });
            }
        }

        let log = if self.config.subdivide_single_batch
            && log.len() == 1
            && log.event_count() > 1
        {
            log.subdivided()
        } else {
            log
        };

        self.strategy = match self.config.strategy {
            SeekStrategy::Rebuild => SeekStrategy::Rebuild,
            SeekStrategy::Incremental => match undo::verify(grid, &log) {
                Ok(()) => SeekStrategy::Incremental,
                Err(m) => {
                    log::warn!(
                        "log is not invertible at batch {} ({}, found {:?}), seeking by rebuild",
                        m.batch, m.event, m.found
                    );
                    SeekStrategy::Rebuild
                }
            },
        };

        self.install(grid, log);
        log::debug!(
            "loaded {} batches ({} events) over a {}x{} grid, {:?} seeking",
            self.log.len(),
            self.log.event_count(),
            grid.rows(),
            grid.cols(),
            self.strategy
        );
        Ok(())
    }

    /// Drop the loaded log and show `grid` with nothing to play.
    pub fn clear(&mut self, grid: &Grid) {
        self.strategy = SeekStrategy::Rebuild;
        self.install(grid, EventLog::new());
    }

    fn install(&mut self, grid: &Grid, log: EventLog) {
        self.initial.clone_from(grid);
        self.grid.clone_from(grid);
        self.log = log;
        self.applied = 0;
        self.delta.clear();
        self.touched.reset(grid.len());
    }

    /// Move the cursor to `target`, clamped to `-1..=len-1`.
    pub fn seek(&mut self, target: isize) {
        let last = self.log.len() as isize - 1;
        let want = (target.clamp(-1, last) + 1) as usize;
        log::trace!("seek {} -> {}", self.cursor(), want as isize - 1);
        self.touched.begin();
        if want >= self.applied {
            self.forward_to(want);
        } else {
            for batch in &self.log.batches()[want..self.applied] {
                for e in batch {
                    self.touched.mark(&self.grid, e.coord);
                }
            }
            match self.strategy {
                SeekStrategy::Rebuild => self.rebuild_to(want),
                SeekStrategy::Incremental => self.undo_to(want),
            }
        }
        self.end_delta();
    }

    /// Advance one batch. Returns false at the end.
    pub fn step_forward(&mut self) -> bool {
        if self.is_at_end() {
            return false;
        }
        self.seek(self.cursor() + 1);
        true
    }

    /// Go back one batch. Returns false at `-1`.
    pub fn step_back(&mut self) -> bool {
        if self.is_pristine() {
            return false;
        }
        self.seek(self.cursor() - 1);
        true
    }

    /// Return to the initial grid.
    pub fn reset(&mut self) {
        self.seek(-1);
    }

    /// Jump to the last batch.
    pub fn seek_end(&mut self) {
        self.seek(self.log.len() as isize - 1);
    }

    /// The grid with batches `0..=cursor` applied.
    #[inline]
    pub fn current_grid(&self) -> &Grid {
        &self.grid
    }

    /// The grid the log was loaded over.
    #[inline]
    pub fn initial_grid(&self) -> &Grid {
        &self.initial
    }

    #[inline]
    pub fn log(&self) -> &EventLog {
        &self.log
    }

    /// Index of the last applied batch, `-1` before the first.
    #[inline]
    pub fn cursor(&self) -> isize {
        self.applied as isize - 1
    }

    /// Number of batches in the loaded log.
    #[inline]
    pub fn len(&self) -> usize {
        self.log.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    /// Whether every batch has been applied.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.applied == self.log.len()
    }

    /// Whether no batch has been applied.
    #[inline]
    pub fn is_pristine(&self) -> bool {
        self.applied == 0
    }

    /// The strategy actually used for backward seeks on the loaded log.
    #[inline]
    pub fn strategy(&self) -> SeekStrategy {
        self.strategy
    }

    #[inline]
    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    /// Cells changed by the last seek with their resulting kinds, in the
    /// order they were first touched. Cells changed and changed back within
    /// one seek are still reported.
    #[inline]
    pub fn last_delta(&self) -> &[Event] {
        &self.delta
    }

    fn forward_to(&mut self, want: usize) {
        while self.applied < want {
            let Some(batch) = self.log.get(self.applied) else {
                break;
            };
            for e in batch {
                self.grid.apply(e);
                self.touched.mark(&self.grid, e.coord);
            }
            self.applied += 1;
        }
    }

    fn rebuild_to(&mut self, want: usize) {
        self.grid.clone_from(&self.initial);
        for batch in &self.log.batches()[..want] {
            for e in batch {
                self.grid.apply(e);
            }
        }
        self.applied = want;
    }

    fn undo_to(&mut self, want: usize) {
        let mut stuck = false;
        'undo: while self.applied > want {
            let idx = self.applied - 1;
            let in_path = self.log.is_path_batch(idx);
            let Some(batch) = self.log.get(idx) else {
                break;
            };
            for e in batch.events().iter().rev() {
                let Some(prev) = undo::undo_kind(e, in_path) else {
                    log::warn!("cannot undo {e} in batch {idx}, rebuilding");
                    stuck = true;
                    break 'undo;
                };
                self.grid.set(e.coord, prev);
            }
            self.applied -= 1;
        }
        if stuck {
            self.rebuild_to(want);
        }
    }

    fn end_delta(&mut self) {
        self.delta.clear();
        let grid = &self.grid;
        self.delta.extend(
            self.touched
                .coords
                .iter()
                .filter_map(|&c| grid.at(c).map(|kind| Event::new(c, kind))),
        );
    }
}

/// Cells touched by the current seek, deduplicated with generation stamps.
#[derive(Debug, Clone, Default)]
struct Touched {
    coords: Vec<Coord>,
    stamps: Vec<u32>,
    generation: u32,
}

impl Touched {
    fn reset(&mut self, cells: usize) {
        self.coords.clear();
        self.stamps.clear();
        self.stamps.resize(cells, 0);
        self.generation = 0;
    }

    fn begin(&mut self) {
        self.coords.clear();
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            self.stamps.fill(0);
            self.generation = 1;
        }
    }

    fn mark(&mut self, grid: &Grid, c: Coord) {
        let Some(idx) = grid.index(c) else {
            return;
        };
        if self.stamps[idx] != self.generation {
            self.stamps[idx] = self.generation;
            self.coords.push(c);
        }
    }
}
