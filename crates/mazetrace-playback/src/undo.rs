//! Inferring the kind a cell had before an event.
//!
//! Events only store the kind a cell moves *to*. For logs produced by the
//! search procedures the previous kind follows from the event alone:
//!
//! | event kind   | batch        | previous kind |
//! |--------------|--------------|---------------|
//! | `Visited`    | exploration  | `Empty`       |
//! | `Empty`      | exploration  | `Visited` (DFS backtrack) |
//! | `PathMarker` | path section | `Visited`     |

use mazetrace_core::{CellKind, Event, EventLog, Grid};

/// The kind `event.coord` held just before `event`, or `None` when it cannot
/// be inferred.
pub fn undo_kind(event: &Event, in_path_batch: bool) -> Option<CellKind> {
    match (event.kind, in_path_batch) {
        (CellKind::PathMarker, true) => Some(CellKind::Visited),
        (CellKind::Visited, false) => Some(CellKind::Empty),
        (CellKind::Empty, false) => Some(CellKind::Visited),
        _ => None,
    }
}

/// The first event whose previous kind [`undo_kind`] gets wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    pub batch: usize,
    pub event: Event,
    /// Kind actually found before the event, `None` outside the grid.
    pub found: Option<CellKind>,
}

/// Replay `log` over `initial` and check that [`undo_kind`] recovers every
/// previous kind, so that undoing batches in reverse matches a rebuild.
pub fn verify(initial: &Grid, log: &EventLog) -> Result<(), Mismatch> {
    let mut grid = initial.clone();
    for (batch, events) in log.batches().iter().enumerate() {
        let in_path = log.is_path_batch(batch);
        for &event in events {
            let found = grid.at(event.coord);
            if found.is_none() || undo_kind(&event, in_path) != found {
                return Err(Mismatch {
                    batch,
                    event,
                    found,
                });
            }
            grid.apply(&event);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazetrace_core::{Coord, EventBatch};

    fn c(row: i32, col: i32) -> Coord {
        Coord::new(row, col)
    }

    #[test]
    fn undo_table() {
        let e = |kind| Event::new(c(0, 0), kind);
        assert_eq!(undo_kind(&e(CellKind::Visited), false), Some(CellKind::Empty));
        assert_eq!(undo_kind(&e(CellKind::Empty), false), Some(CellKind::Visited));
        assert_eq!(undo_kind(&e(CellKind::PathMarker), true), Some(CellKind::Visited));
        assert_eq!(undo_kind(&e(CellKind::PathMarker), false), None);
        assert_eq!(undo_kind(&e(CellKind::Visited), true), None);
        assert_eq!(undo_kind(&e(CellKind::Wall), false), None);
        assert_eq!(undo_kind(&e(CellKind::Start), false), None);
    }

    #[test]
    fn verify_accepts_search_shaped_log() {
        let g = Grid::parse("S..E").unwrap();
        let log = EventLog::from_batches(vec![
            EventBatch::single(Event::visit(c(0, 1))),
            EventBatch::new(vec![Event::visit(c(0, 2)), Event::revert(c(0, 2))]).unwrap(),
            EventBatch::single(Event::visit(c(0, 2))),
            EventBatch::single(Event::path(c(0, 1))),
        ]);
        // A cell may be revisited after a revert; the inference still holds.
        assert_eq!(verify(&g, &log), Ok(()));
    }

    #[test]
    fn verify_rejects_foreign_events() {
        let g = Grid::parse("S..E").unwrap();
        let log = EventLog::from_batches(vec![EventBatch::single(Event::new(
            c(0, 1),
            CellKind::Wall,
        ))]);
        let err = verify(&g, &log).unwrap_err();
        assert_eq!(err.batch, 0);
        assert_eq!(err.found, Some(CellKind::Empty));
    }

    #[test]
    fn verify_rejects_double_visit() {
        let g = Grid::parse("S..E").unwrap();
        let log = EventLog::from_batches(vec![
            EventBatch::single(Event::visit(c(0, 1))),
            EventBatch::single(Event::visit(c(0, 1))),
        ]);
        let err = verify(&g, &log).unwrap_err();
        assert_eq!(err.batch, 1);
        assert_eq!(err.found, Some(CellKind::Visited));
    }
}
