//! End-to-end: edit a maze, solve it, play the run back, edit again.

use std::time::Duration;

use mazetrace::{
    Algorithm, CellKind, Coord, Grid, PlaybackConfig, PlayerConfig, SearchConfig, SeekStrategy,
    Session,
};
use proptest::prelude::*;

const MAZE: &str = "\
S.#....
..#.##.
....#..
.##...E";

#[test]
fn solve_then_play_to_the_end() {
    let mut s = Session::parse(MAZE).unwrap();
    let moves = s.solve().unwrap().path_len().unwrap();
    assert_eq!(moves, 9);
    assert!(s.playback().is_pristine());

    let player = s.player_mut();
    player.set_speed(20);
    player.play();
    let mut ticks = 0;
    while player.is_playing() {
        player.advance(Duration::from_millis(16));
        ticks += 1;
        assert!(ticks < 10_000);
    }
    assert!(s.playback().is_at_end());

    let shown = s.playback().current_grid();
    for &c in &s.path()[1..s.path().len() - 1] {
        assert_eq!(shown.at(c), Some(CellKind::PathMarker));
    }
    assert_eq!(shown.count(CellKind::PathMarker), moves - 1);
}

#[test]
fn edits_discard_the_run() {
    let mut s = Session::parse(MAZE).unwrap();
    s.solve().unwrap();
    s.player_mut().seek(5);

    s.set_cell(Coord::new(2, 3), CellKind::Wall).unwrap();
    assert!(!s.is_solved());
    assert!(s.playback().is_empty());
    assert_eq!(s.playback().current_grid(), s.maze());
    assert_eq!(s.maze().at(Coord::new(2, 3)), Some(CellKind::Wall));

    // The wall closes the only passage.
    let outcome = s.solve().unwrap();
    assert!(!outcome.found());
    assert!(s.path().is_empty());

    s.set_algorithm(Algorithm::Dfs);
    assert!(!s.is_solved());
}

#[test]
fn settings_flow_into_the_run() {
    let search = SearchConfig::new(Algorithm::Dijkstra)
        .with_batch_size(std::num::NonZeroUsize::new(4).unwrap());
    let playback = PlaybackConfig::default().with_strategy(SeekStrategy::Incremental);
    let mut s = Session::with_config(
        Grid::parse(MAZE).unwrap(),
        search,
        playback,
        PlayerConfig::default(),
    );
    let outcome = s.solve().unwrap().clone();
    assert_eq!(s.playback().strategy(), SeekStrategy::Incremental);
    for batch in outcome.log.exploration() {
        assert!(batch.len() <= 4);
    }
    assert_eq!(s.playback().log(), &outcome.log);
}

#[test]
fn regenerated_maze_replaces_the_old_one() {
    let mut s = Session::parse(MAZE).unwrap();
    s.solve().unwrap();
    s.set_maze(Grid::parse("S.E").unwrap());
    assert!(!s.is_solved());
    assert_eq!(s.solve().unwrap().path, vec![
        Coord::new(0, 0),
        Coord::new(0, 1),
        Coord::new(0, 2)
    ]);
}

fn algorithm() -> impl Strategy<Value = Algorithm> {
    prop::sample::select(Algorithm::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn moved_anchors_stay_unique(
        alg in algorithm(),
        start in (0i32..4, 0i32..7),
        end in (0i32..4, 0i32..7),
    ) {
        let mut s = Session::parse(MAZE).unwrap();
        s.set_algorithm(alg);
        s.set_cell(start.into(), CellKind::Start).unwrap();
        s.set_cell(end.into(), CellKind::End).unwrap();
        prop_assert_eq!(s.maze().count(CellKind::Start), usize::from(start != end));
        prop_assert_eq!(s.maze().count(CellKind::End), 1);

        if start != end {
            let outcome = s.solve().unwrap().clone();
            s.player_mut().seek(isize::MAX);
            let shown = s.playback().current_grid();
            prop_assert_eq!(shown.at(start.into()), Some(CellKind::Start));
            prop_assert_eq!(shown.at(end.into()), Some(CellKind::End));
            prop_assert_eq!(
                shown.count(CellKind::PathMarker),
                outcome.path.len().saturating_sub(2)
            );
        }
    }
}
