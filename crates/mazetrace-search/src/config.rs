//! Algorithm selection and the search configuration.

use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use mazetrace_core::{Coord, Grid};

use crate::astar::{AStar, check_weight};
use crate::error::SearchError;
use crate::outcome::SearchOutcome;
use crate::traits::Search;
use crate::{Bfs, DEFAULT_BATCH_SIZE, DEFAULT_HEURISTIC_WEIGHT, Dfs, Dijkstra};

/// Which search procedure to run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    #[default]
    Bfs,
    Dfs,
    Dijkstra,
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Dijkstra,
        Algorithm::AStar,
    ];

    /// Canonical display name.
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::Dijkstra => "Dijkstra",
            Algorithm::AStar => "A*",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SearchError;

    /// Case-insensitive; accepts `A*`, `AStar` and `A-Star` for A*.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "a*" | "astar" | "a-star" => Ok(Algorithm::AStar),
            _ => Err(SearchError::UnknownAlgorithm(s.to_owned())),
        }
    }
}

/// Configuration for one search run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    pub algorithm: Algorithm,
    /// Events grouped into one playback step.
    pub batch_size: NonZeroUsize,
    /// Only read by A*.
    pub heuristic_weight: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            batch_size: DEFAULT_BATCH_SIZE,
            heuristic_weight: DEFAULT_HEURISTIC_WEIGHT,
        }
    }
}

impl SearchConfig {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            ..Self::default()
        }
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_batch_size(mut self, batch_size: NonZeroUsize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn with_heuristic_weight(mut self, heuristic_weight: f64) -> Self {
        self.heuristic_weight = heuristic_weight;
        self
    }

    /// Check the heuristic weight, even when the algorithm ignores it.
    pub fn validate(&self) -> Result<(), SearchError> {
        check_weight(self.heuristic_weight).map(|_| ())
    }

    /// Build the configured procedure.
    pub fn procedure(&self) -> Result<Box<dyn Search>, SearchError> {
        let n = self.batch_size;
        Ok(match self.algorithm {
            Algorithm::Bfs => Box::new(Bfs::new().with_batch_size(n)),
            Algorithm::Dfs => Box::new(Dfs::new().with_batch_size(n)),
            Algorithm::Dijkstra => Box::new(Dijkstra::new().with_batch_size(n)),
            Algorithm::AStar => Box::new(AStar::new(self.heuristic_weight)?.with_batch_size(n)),
        })
    }
}

/// Locate the maze's `Start` and `End` cells and run the configured search.
///
/// Fails if the configuration is invalid or the maze lacks exactly one of
/// each anchor.
pub fn run(grid: &Grid, config: &SearchConfig) -> Result<SearchOutcome, SearchError> {
    config.validate()?;
    let (start, end) = grid.anchors()?;
    run_between(grid, start, end, config)
}

/// Run the configured search between explicit cells.
///
/// Only configuration errors fail; degenerate anchors give an empty outcome.
pub fn run_between(
    grid: &Grid,
    start: Coord,
    end: Coord,
    config: &SearchConfig,
) -> Result<SearchOutcome, SearchError> {
    config.validate()?;
    Ok(config.procedure()?.search(grid, start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazetrace_core::GridError;

    #[test]
    fn algorithm_names_round_trip() {
        for alg in Algorithm::ALL {
            assert_eq!(alg.to_string().parse::<Algorithm>(), Ok(alg));
        }
        assert_eq!("astar".parse::<Algorithm>(), Ok(Algorithm::AStar));
        assert_eq!(" dijkstra ".parse::<Algorithm>(), Ok(Algorithm::Dijkstra));
        assert_eq!(
            "greedy".parse::<Algorithm>(),
            Err(SearchError::UnknownAlgorithm("greedy".into()))
        );
    }

    #[test]
    fn defaults() {
        let cfg = SearchConfig::default();
        assert_eq!(cfg.algorithm, Algorithm::Bfs);
        assert_eq!(cfg.batch_size.get(), 1);
        assert_eq!(cfg.heuristic_weight, 2.0);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn procedure_matches_algorithm() {
        for alg in Algorithm::ALL {
            let p = SearchConfig::new(alg).procedure().unwrap();
            assert_eq!(p.name(), alg.name());
        }
    }

    #[test]
    fn run_requires_anchors() {
        let g = Grid::from_text("S..\n...").unwrap();
        assert_eq!(
            run(&g, &SearchConfig::default()),
            Err(SearchError::Grid(GridError::MissingEnd))
        );
    }

    #[test]
    fn run_rejects_negative_weight() {
        let g = Grid::parse("S.E").unwrap();
        let cfg = SearchConfig::new(Algorithm::Bfs).with_heuristic_weight(-1.0);
        assert_eq!(run(&g, &cfg), Err(SearchError::InvalidHeuristicWeight(-1.0)));
    }

    #[test]
    fn run_between_tolerates_degenerate_anchors() {
        let g = Grid::parse("S.E").unwrap();
        for alg in Algorithm::ALL {
            let cfg = SearchConfig::new(alg);
            let same = run_between(&g, Coord::new(0, 0), Coord::new(0, 0), &cfg).unwrap();
            assert_eq!(same, SearchOutcome::default());
            let outside = run_between(&g, Coord::new(0, 0), Coord::new(4, 4), &cfg).unwrap();
            assert_eq!(outside, SearchOutcome::default());
        }
    }

    #[test]
    fn run_finds_path() {
        let g = Grid::parse("S.#\n...\n#.E").unwrap();
        for alg in Algorithm::ALL {
            let out = run(&g, &SearchConfig::new(alg)).unwrap();
            assert!(out.found(), "{alg} found no path");
            assert_eq!(out.path.first(), Some(&Coord::new(0, 0)));
            assert_eq!(out.path.last(), Some(&Coord::new(2, 2)));
        }
    }
}
