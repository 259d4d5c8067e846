use mazetrace_core::{CellKind, Coord, EventLog};

/// Result of one search run: the path found (empty if none) and the log of
/// how the grid was explored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOutcome {
    /// Cells from start to end inclusive, or empty when no path exists.
    pub path: Vec<Coord>,
    pub log: EventLog,
}

impl SearchOutcome {
    /// Whether a path was found.
    #[inline]
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of moves along the path, or `None` if no path was found.
    pub fn path_len(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }

    /// Number of cells the search marked visited.
    pub fn visited_count(&self) -> usize {
        self.log.count_kind(CellKind::Visited)
    }

    pub fn into_parts(self) -> (Vec<Coord>, EventLog) {
        (self.path, self.log)
    }
}
