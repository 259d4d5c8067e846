use std::num::NonZeroUsize;

use mazetrace_core::{Coord, Grid};

use crate::distance::manhattan;
use crate::error::SearchError;
use crate::frontier::best_first;
use crate::outcome::SearchOutcome;
use crate::trace::Trace;
use crate::traits::Search;
use crate::{DEFAULT_BATCH_SIZE, DEFAULT_HEURISTIC_WEIGHT};

/// Heuristic (A*) search.
///
/// Ranks frontier cells by `g + heuristic_weight × h`, where `g` is the
/// number of moves from the start and `h` the Manhattan distance to the end.
/// A weight of 0 behaves exactly like [`Dijkstra`](crate::Dijkstra), 1 is
/// classic admissible A*, and larger weights converge faster on paths that
/// may not be shortest.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "AStarFields")
)]
pub struct AStar {
    batch_size: NonZeroUsize,
    heuristic_weight: f64,
}

impl Default for AStar {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            heuristic_weight: DEFAULT_HEURISTIC_WEIGHT,
        }
    }
}

impl AStar {
    /// A* with the given heuristic weight, which must be finite and ≥ 0.
    pub fn new(heuristic_weight: f64) -> Result<Self, SearchError> {
        Ok(Self {
            heuristic_weight: check_weight(heuristic_weight)?,
            ..Self::default()
        })
    }

    /// Number of visits grouped into one playback step.
    pub fn with_batch_size(mut self, batch_size: NonZeroUsize) -> Self {
        self.batch_size = batch_size;
        self
    }

    #[inline]
    pub fn heuristic_weight(&self) -> f64 {
        self.heuristic_weight
    }
}

pub(crate) fn check_weight(w: f64) -> Result<f64, SearchError> {
    if w.is_finite() && w >= 0.0 {
        Ok(w)
    } else {
        Err(SearchError::InvalidHeuristicWeight(w))
    }
}

/// Unchecked field values; deserialized `AStar`s go through
/// [`AStar::new`] so the weight is validated.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct AStarFields {
    batch_size: NonZeroUsize,
    heuristic_weight: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<AStarFields> for AStar {
    type Error = SearchError;

    fn try_from(f: AStarFields) -> Result<Self, Self::Error> {
        Ok(AStar::new(f.heuristic_weight)?.with_batch_size(f.batch_size))
    }
}

impl Search for AStar {
    fn name(&self) -> &'static str {
        "A*"
    }

    fn search(&self, grid: &Grid, start: Coord, end: Coord) -> SearchOutcome {
        let Some(trace) = Trace::new(self.name(), grid, start, end, self.batch_size) else {
            return SearchOutcome::default();
        };
        let w = self.heuristic_weight;
        best_first(trace, |g, c| f64::from(g) + w * f64::from(manhattan(c, end)))
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn round_trips_valid_settings() {
        let a = AStar::new(1.5)
            .unwrap()
            .with_batch_size(NonZeroUsize::new(3).unwrap());
        let json = serde_json::to_string(&a).unwrap();
        let back: AStar = serde_json::from_str(&json).unwrap();
        assert_eq!(back, a);
    }

    #[test]
    fn rejects_negative_weight() {
        let json = r#"{"batch_size":1,"heuristic_weight":-1.0}"#;
        let err = serde_json::from_str::<AStar>(json).unwrap_err();
        assert!(err.to_string().contains("-1"), "{err}");
    }
}
