//! Search events and the replayable log they form.
//!
//! An [`Event`] records only the kind a cell transitions *to*. Events are
//! grouped into non-empty [`EventBatch`]es, each one playback step, and the
//! batches of one search run form an [`EventLog`]. A log may end with a run
//! of path-marking batches (every event `PathMarker`); playback uses that to
//! tell "visited" from "visited and on the final path" when stepping back.

use std::fmt;

use crate::cell::CellKind;
use crate::geom::Coord;

/// A single recorded cell transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    pub coord: Coord,
    pub kind: CellKind,
}

impl Event {
    #[inline]
    pub const fn new(coord: Coord, kind: CellKind) -> Self {
        Self { coord, kind }
    }

    /// The cell became `Visited`.
    #[inline]
    pub const fn visit(coord: Coord) -> Self {
        Self::new(coord, CellKind::Visited)
    }

    /// The cell was backtracked out of and reverts to `Empty`.
    #[inline]
    pub const fn revert(coord: Coord) -> Self {
        Self::new(coord, CellKind::Empty)
    }

    /// The cell lies on the discovered path.
    #[inline]
    pub const fn path(coord: Coord) -> Self {
        Self::new(coord, CellKind::PathMarker)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.coord, self.kind)
    }
}

// ---------------------------------------------------------------------------
// EventBatch
// ---------------------------------------------------------------------------

/// An ordered, non-empty group of events applied as one playback step.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Event>", into = "Vec<Event>")
)]
pub struct EventBatch {
    events: Vec<Event>,
}

impl EventBatch {
    /// Wrap `events`, or return `None` if there are none.
    pub fn new(events: Vec<Event>) -> Option<Self> {
        if events.is_empty() {
            None
        } else {
            Some(Self { events })
        }
    }

    /// A batch holding one event.
    pub fn single(event: Event) -> Self {
        Self {
            events: vec![event],
        }
    }

    #[inline]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }

    /// Whether every event marks a path cell.
    pub fn is_path_marking(&self) -> bool {
        self.events.iter().all(|e| e.kind == CellKind::PathMarker)
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events
    }
}

impl<'a> IntoIterator for &'a EventBatch {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

/// Returned when building an [`EventBatch`] from no events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("an event batch must hold at least one event")]
pub struct EmptyBatch;

impl TryFrom<Vec<Event>> for EventBatch {
    type Error = EmptyBatch;

    fn try_from(events: Vec<Event>) -> Result<Self, Self::Error> {
        Self::new(events).ok_or(EmptyBatch)
    }
}

impl From<EventBatch> for Vec<Event> {
    fn from(batch: EventBatch) -> Self {
        batch.events
    }
}

// ---------------------------------------------------------------------------
// EventLog
// ---------------------------------------------------------------------------

/// The ordered batches of one search run. Immutable once built.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Vec<EventBatch>", into = "Vec<EventBatch>")
)]
pub struct EventLog {
    batches: Vec<EventBatch>,
    /// Index of the first batch of the trailing path-marking run, if any.
    path_start: Option<usize>,
}

impl EventLog {
    /// An empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a log from batches. A trailing run of path-marking batches is
    /// recognised as the path section.
    pub fn from_batches(batches: Vec<EventBatch>) -> Self {
        let exploring = batches
            .iter()
            .rposition(|b| !b.is_path_marking())
            .map_or(0, |i| i + 1);
        let path_start = (exploring < batches.len()).then_some(exploring);
        Self {
            batches,
            path_start,
        }
    }

    /// Number of batches. The highest valid playback cursor is `len() - 1`.
    #[inline]
    pub fn len(&self) -> usize {
        self.batches.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    #[inline]
    pub fn batches(&self) -> &[EventBatch] {
        &self.batches
    }

    #[inline]
    pub fn get(&self, idx: usize) -> Option<&EventBatch> {
        self.batches.get(idx)
    }

    /// Every event in playback order.
    pub fn iter_events(&self) -> impl Iterator<Item = &Event> + '_ {
        self.batches.iter().flat_map(EventBatch::iter)
    }

    /// Total number of events across all batches.
    pub fn event_count(&self) -> usize {
        self.batches.iter().map(EventBatch::len).sum()
    }

    /// Number of events of the given kind.
    pub fn count_kind(&self, kind: CellKind) -> usize {
        self.iter_events().filter(|e| e.kind == kind).count()
    }

    /// Whether batch `idx` belongs to the trailing path section.
    #[inline]
    pub fn is_path_batch(&self, idx: usize) -> bool {
        self.path_start.is_some_and(|s| idx >= s && idx < self.batches.len())
    }

    /// The exploration batches, excluding the path section.
    pub fn exploration(&self) -> &[EventBatch] {
        &self.batches[..self.path_start.unwrap_or(self.batches.len())]
    }

    /// The path-marking batches (empty when no path was found).
    pub fn path_batches(&self) -> &[EventBatch] {
        &self.batches[self.path_start.unwrap_or(self.batches.len())..]
    }

    /// Whether the log ends with a discovered path.
    #[inline]
    pub fn has_path(&self) -> bool {
        self.path_start.is_some()
    }

    /// The same events with one event per batch.
    pub fn subdivided(&self) -> Self {
        let batches = self
            .iter_events()
            .map(|&e| EventBatch::single(e))
            .collect();
        Self::from_batches(batches)
    }
}

impl From<Vec<EventBatch>> for EventLog {
    fn from(batches: Vec<EventBatch>) -> Self {
        Self::from_batches(batches)
    }
}

impl From<EventLog> for Vec<EventBatch> {
    fn from(log: EventLog) -> Self {
        log.batches
    }
}

impl<'a> IntoIterator for &'a EventLog {
    type Item = &'a EventBatch;
    type IntoIter = std::slice::Iter<'a, EventBatch>;

    fn into_iter(self) -> Self::IntoIter {
        self.batches.iter()
    }
}
