use std::num::NonZeroUsize;

use mazetrace_core::{CellKind, Coord, Grid};
use mazetrace_playback::{Playback, PlaybackConfig, Player, PlayerConfig};
use mazetrace_search::{Algorithm, SearchConfig, SearchOutcome};

use crate::error::SessionError;

/// An editable maze, the last search run over it, and a player for that run.
///
/// Any edit to the maze or to the search settings discards the run: the
/// player is cleared and shows the maze as it now stands until the next
/// [`Session::solve`].
///
/// The playback timeline always matches the run's log batch for batch: the
/// search batch size decides the step granularity, so single-batch logs are
/// never subdivided here.
#[derive(Debug, Clone)]
pub struct Session {
    maze: Grid,
    search: SearchConfig,
    player: Player,
    outcome: Option<SearchOutcome>,
}

impl Session {
    /// A session over `maze` with default settings.
    pub fn new(maze: Grid) -> Self {
        Self::with_config(
            maze,
            SearchConfig::default(),
            PlaybackConfig::default(),
            PlayerConfig::default(),
        )
    }

    pub fn with_config(
        maze: Grid,
        search: SearchConfig,
        playback: PlaybackConfig,
        player: PlayerConfig,
    ) -> Self {
        let playback = playback.with_subdivide_single_batch(false);
        let mut player = Player::new(Playback::new(playback), player);
        player.clear(&maze);
        Self {
            maze,
            search,
            player,
            outcome: None,
        }
    }

    /// A session over a maze in text form (see [`Grid::parse`]).
    pub fn parse(text: &str) -> Result<Self, SessionError> {
        Ok(Self::new(Grid::parse(text)?))
    }

    #[inline]
    pub fn maze(&self) -> &Grid {
        &self.maze
    }

    #[inline]
    pub fn search_config(&self) -> &SearchConfig {
        &self.search
    }

    /// Run the configured search over the maze and load its log, paused at
    /// the initial grid.
    pub fn solve(&mut self) -> Result<&SearchOutcome, SessionError> {
        let outcome = mazetrace_search::run(&self.maze, &self.search)?;
        self.player.load(&self.maze, outcome.log.clone())?;
        Ok(&*self.outcome.insert(outcome))
    }

    /// The last run, if the maze and settings are unchanged since.
    #[inline]
    pub fn outcome(&self) -> Option<&SearchOutcome> {
        self.outcome.as_ref()
    }

    #[inline]
    pub fn is_solved(&self) -> bool {
        self.outcome.is_some()
    }

    /// The path found by the last run; empty if none.
    pub fn path(&self) -> &[Coord] {
        self.outcome
            .as_ref()
            .map(|o| o.path.as_slice())
            .unwrap_or_default()
    }

    #[inline]
    pub fn player(&self) -> &Player {
        &self.player
    }

    #[inline]
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    #[inline]
    pub fn playback(&self) -> &Playback {
        self.player.playback()
    }

    /// Place `kind` at `c`. Placing a `Start` or `End` moves that anchor:
    /// the previous one becomes `Empty`.
    pub fn set_cell(&mut self, c: Coord, kind: CellKind) -> Result<(), SessionError> {
        if !kind.is_static() {
            return Err(SessionError::NotEditable(kind));
        }
        if !self.maze.contains(c) {
            return Err(SessionError::OutOfBounds(c));
        }
        if kind.is_anchor() {
            let stale: Vec<Coord> = self
                .maze
                .iter()
                .filter(|&(at, k)| k == kind && at != c)
                .map(|(at, _)| at)
                .collect();
            for at in stale {
                self.maze.set(at, CellKind::Empty);
            }
        }
        if self.maze.replace(c, kind) != Some(kind) {
            log::debug!("maze edited: {kind} at {c}");
        }
        self.invalidate();
        Ok(())
    }

    /// Replace the whole maze, for instance with a freshly generated one.
    pub fn set_maze(&mut self, maze: Grid) {
        self.maze = maze;
        self.invalidate();
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.search.algorithm = algorithm;
        self.invalidate();
    }

    /// Set the A* heuristic weight. Rejects negative or non-finite weights
    /// and keeps the current one.
    pub fn set_heuristic_weight(&mut self, weight: f64) -> Result<(), SessionError> {
        let search = self.search.with_heuristic_weight(weight);
        search.validate()?;
        self.search = search;
        self.invalidate();
        Ok(())
    }

    pub fn set_batch_size(&mut self, batch_size: NonZeroUsize) {
        self.search.batch_size = batch_size;
        self.invalidate();
    }

    fn invalidate(&mut self) {
        if self.outcome.take().is_some() {
            log::debug!("discarding {} run", self.search.algorithm);
        }
        self.player.clear(&self.maze);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(row: i32, col: i32) -> Coord {
        Coord::new(row, col)
    }

    #[test]
    fn new_session_shows_the_maze() {
        let s = Session::parse("S..\n.#.\n..E").unwrap();
        assert!(!s.is_solved());
        assert!(s.path().is_empty());
        assert!(s.playback().is_empty());
        assert_eq!(s.playback().current_grid(), s.maze());
    }

    #[test]
    fn moving_the_start() {
        let mut s = Session::parse("S..\n...\n..E").unwrap();
        s.set_cell(c(1, 1), CellKind::Start).unwrap();
        assert_eq!(s.maze().anchors().unwrap(), (c(1, 1), c(2, 2)));
        assert_eq!(s.maze().at(c(0, 0)), Some(CellKind::Empty));
        assert_eq!(s.solve().unwrap().path_len(), Some(2));
    }

    #[test]
    fn rejects_search_kinds_and_stray_coords() {
        let mut s = Session::parse("S.E").unwrap();
        assert_eq!(
            s.set_cell(c(0, 1), CellKind::Visited),
            Err(SessionError::NotEditable(CellKind::Visited))
        );
        assert_eq!(
            s.set_cell(c(3, 0), CellKind::Wall),
            Err(SessionError::OutOfBounds(c(3, 0)))
        );
        assert_eq!(s.maze().to_string(), "S.E");
    }

    #[test]
    fn bad_weight_keeps_the_run() {
        let mut s = Session::parse("S.E").unwrap();
        s.solve().unwrap();
        assert!(s.set_heuristic_weight(-1.0).is_err());
        assert!(s.is_solved());
        assert_eq!(s.search_config().heuristic_weight, 2.0);
    }

    #[test]
    fn large_batch_keeps_one_step_per_batch() {
        let mut s = Session::with_config(
            Grid::parse("S..#\n...#\n###E").unwrap(),
            SearchConfig::new(Algorithm::Bfs).with_batch_size(NonZeroUsize::new(100).unwrap()),
            PlaybackConfig::default(),
            PlayerConfig::default(),
        );
        let batches = s.solve().unwrap().log.len();
        assert_eq!(batches, 1);
        assert_eq!(s.playback().len(), batches);
        assert_eq!(s.playback().log(), &s.outcome().unwrap().log);
    }

    #[test]
    fn overwriting_an_anchor_fails_the_next_solve() {
        let mut s = Session::parse("S.E").unwrap();
        s.set_cell(c(0, 2), CellKind::Wall).unwrap();
        assert!(matches!(
            s.solve(),
            Err(SessionError::Search(mazetrace_search::SearchError::Grid(
                mazetrace_core::GridError::MissingEnd
            )))
        ));
    }
}
