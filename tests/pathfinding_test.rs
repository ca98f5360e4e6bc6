// Integration tests for the grid search engine

use algotty::grid::search::{chebyshev, euclidean, manhattan};
use algotty::grid::{astar, dijkstra, Grid, SearchOptions};

fn opts(diagonals: bool, tiebreaker: bool) -> SearchOptions {
    SearchOptions {
        diagonals,
        tiebreaker,
    }
}

#[test]
fn empty_five_by_five_grid_reference_case() {
    let grid = Grid::new(5, 5);
    let result = dijkstra(&grid, (0, 0), (4, 4), opts(false, false));
    assert_eq!(result.path.len(), 9, "9 cells on the shortest route");
    assert_eq!(result.cost, Some(8.0), "8 unit moves");
}

#[test]
fn astar_equals_dijkstra_for_every_heuristic() {
    let mut grid = Grid::new(10, 12);
    for col in 2..10 {
        grid.set_wall((4, col), true);
    }
    grid.set_wall((4, 6), false);
    for row in 6..9 {
        grid.set_weight((row, 3), 4);
    }

    let start = (0, 0);
    let goal = (9, 11);

    // Orthogonal movement: all three heuristics are admissible
    let d = dijkstra(&grid, start, goal, opts(false, false));
    for h in [manhattan, euclidean, chebyshev] {
        let a = astar(&grid, start, goal, h, opts(false, false));
        assert_eq!(a.cost, d.cost);
    }

    // Diagonal movement: euclidean and chebyshev stay admissible
    let d = dijkstra(&grid, start, goal, opts(true, false));
    for h in [euclidean, chebyshev] {
        let a = astar(&grid, start, goal, h, opts(true, false));
        assert!((a.cost.unwrap() - d.cost.unwrap()).abs() < 1e-9);
    }
}

#[test]
fn tiebreak_nudge_never_changes_the_cost() {
    let grid = Grid::new(8, 8);
    let plain = astar(&grid, (0, 0), (7, 7), manhattan, opts(false, false));
    let nudged = astar(&grid, (0, 0), (7, 7), manhattan, opts(false, true));
    assert_eq!(plain.cost, nudged.cost);
    assert_eq!(plain.path.len(), nudged.path.len());
}

#[test]
fn enclosed_goal_visits_every_reachable_cell_exactly_once() {
    let mut grid = Grid::new(6, 6);
    // Wall off the bottom-right corner completely
    grid.set_wall((4, 4), true);
    grid.set_wall((4, 5), true);
    grid.set_wall((5, 4), true);

    let result = dijkstra(&grid, (0, 0), (5, 5), opts(false, false));
    assert!(result.path.is_empty());
    assert_eq!(result.cost, None);

    // 36 cells - 3 walls - 1 unreachable goal
    assert_eq!(result.visit_order.len(), 32);
    let mut seen = result.visit_order.clone();
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), 32, "a cell was finalized twice");
}

#[test]
fn path_endpoints_and_adjacency() {
    let mut grid = Grid::new(7, 7);
    grid.set_wall((3, 3), true);
    let result = astar(&grid, (6, 0), (0, 6), manhattan, opts(false, false));

    let path = &result.path;
    assert_eq!(*path.first().unwrap(), (6, 0));
    assert_eq!(*path.last().unwrap(), (0, 6));
    for pair in path.windows(2) {
        let dr = pair[0].0.abs_diff(pair[1].0);
        let dc = pair[0].1.abs_diff(pair[1].1);
        assert_eq!(dr + dc, 1, "non-orthogonal hop in an orthogonal search");
    }
}

#[test]
fn diagonal_cost_uses_sqrt_two_times_weight() {
    let mut grid = Grid::new(2, 2);
    grid.set_weight((1, 1), 3);
    let result = dijkstra(&grid, (0, 0), (1, 1), opts(true, false));
    let expected = 3.0 * std::f64::consts::SQRT_2;
    assert!((result.cost.unwrap() - expected).abs() < 1e-9);
    assert_eq!(result.path, vec![(0, 0), (1, 1)]);
}

#[test]
fn goal_pop_stops_the_exploration_wave() {
    let grid = Grid::new(20, 20);
    let result = dijkstra(&grid, (10, 10), (10, 12), opts(false, false));
    assert_eq!(*result.visit_order.last().unwrap(), (10, 12));
    // Nothing farther than the goal's distance should have been finalized
    assert!(result.visit_order.len() < 400);
}

#[test]
fn walls_make_the_search_detour() {
    let mut grid = Grid::new(5, 5);
    for row in 0..4 {
        grid.set_wall((row, 2), true);
    }
    let result = dijkstra(&grid, (0, 0), (0, 4), opts(false, false));
    // Forced down around the wall: 4 + 4 + 4 = 12 moves
    assert_eq!(result.cost, Some(12.0));
    assert!(result.path.contains(&(4, 2)));
}
