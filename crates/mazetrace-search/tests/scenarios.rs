//! Fixed scenarios plus seeded random mazes.

use mazetrace_core::{CellKind, Coord, Grid};
use mazetrace_search::{AStar, Algorithm, Bfs, Search, SearchConfig, run};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn open_3x3() -> Grid {
    Grid::parse("S..\n...\n..E").unwrap()
}

/// A `rows × cols` maze with roughly `wall_pct` walls, start top-left and end
/// bottom-right.
fn random_maze(rng: &mut impl Rng, rows: i32, cols: i32, wall_pct: f64) -> Grid {
    let mut g = Grid::new(rows, cols);
    for row in 0..rows {
        for col in 0..cols {
            if rng.random::<f64>() < wall_pct {
                g.set(Coord::new(row, col), CellKind::Wall);
            }
        }
    }
    g.set(Coord::new(0, 0), CellKind::Start);
    g.set(Coord::new(rows - 1, cols - 1), CellKind::End);
    g
}

#[test]
fn bfs_on_open_grid_takes_manhattan_moves() {
    let g = open_3x3();
    let out = run(&g, &SearchConfig::new(Algorithm::Bfs)).unwrap();
    assert_eq!(out.path.len(), 5);
    assert_eq!(out.path_len(), Some(4));
    assert!(out.path[1] == Coord::new(0, 1) || out.path[1] == Coord::new(1, 0));

    // Visit events match the distinct cells visited before the end.
    let distinct: std::collections::HashSet<Coord> = out
        .log
        .iter_events()
        .filter(|e| e.kind == CellKind::Visited)
        .map(|e| e.coord)
        .collect();
    assert_eq!(out.visited_count(), distinct.len());
    assert!(out.visited_count() <= 9);
}

#[test]
fn centre_wall_keeps_lengths_equal() {
    let mut g = open_3x3();
    g.set(Coord::new(1, 1), CellKind::Wall);
    let (s, e) = g.anchors().unwrap();
    let bfs = Bfs::new().search(&g, s, e);
    let astar = AStar::new(0.0).unwrap().search(&g, s, e);
    assert_eq!(bfs.path_len(), Some(4));
    assert_eq!(astar.path_len(), Some(4));
}

#[test]
fn start_equals_end_for_every_algorithm() {
    let g = open_3x3();
    let s = Coord::new(0, 0);
    for alg in Algorithm::ALL {
        let p = SearchConfig::new(alg).procedure().unwrap();
        let first = p.search(&g, s, s);
        let second = p.search(&g, s, s);
        assert!(first.path.is_empty());
        assert!(first.log.is_empty());
        assert_eq!(first, second);
    }
}

#[test]
fn walled_off_end_logs_every_reachable_cell() {
    let g = Grid::parse(
        "\
S...#..
.##.#..
....###
....#.E",
    )
    .unwrap();
    let reachable = 13;
    for alg in Algorithm::ALL {
        let out = run(&g, &SearchConfig::new(alg)).unwrap();
        assert!(out.path.is_empty(), "{alg}");
        assert!(!out.log.has_path(), "{alg}");
        assert_eq!(out.log.count_kind(CellKind::PathMarker), 0);
        assert_eq!(out.visited_count(), reachable, "{alg}");
    }
}

#[test]
fn seeded_random_mazes_agree_on_shortest_length() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..50 {
        let rows = rng.random_range(2..12);
        let cols = rng.random_range(2..12);
        let g = random_maze(&mut rng, rows, cols, 0.3);
        let bfs = run(&g, &SearchConfig::new(Algorithm::Bfs)).unwrap();
        let dijkstra = run(&g, &SearchConfig::new(Algorithm::Dijkstra)).unwrap();
        let astar = run(
            &g,
            &SearchConfig::new(Algorithm::AStar).with_heuristic_weight(1.0),
        )
        .unwrap();
        let dfs = run(&g, &SearchConfig::new(Algorithm::Dfs)).unwrap();
        assert_eq!(bfs.path_len(), dijkstra.path_len(), "\n{g}");
        assert_eq!(bfs.path_len(), astar.path_len(), "\n{g}");
        assert_eq!(bfs.found(), dfs.found(), "\n{g}");
        if let (Some(shortest), Some(dfs_len)) = (bfs.path_len(), dfs.path_len()) {
            assert!(dfs_len >= shortest);
        }
    }
}
