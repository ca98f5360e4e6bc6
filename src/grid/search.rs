//! Dijkstra and A* over a weighted grid
//!
//! Both searches share one loop: pop the open-set minimum, finalize it into
//! `visit_order`, relax its neighbors. Dijkstra is the degenerate case with
//! a zero heuristic. The search stops as soon as the goal is finalized — an
//! optimization the playback animation relies on, since `visit_order` is
//! drawn as an exploration wave that should end at the goal — or when the
//! open set empties (unreachable goal: empty path, no error, no spin).
//!
//! Heap entries carry a monotonically increasing sequence number so pops
//! among equal keys are reproducible across runs.

use super::{Grid, Pos};
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Nudge added to A*'s `f` when [`SearchOptions::tiebreaker`] is on:
/// `f += TIEBREAK_NUDGE * (row + col)`. Purely a preference among equal-cost
/// paths (it biases toward visually straighter routes); it never changes the
/// reported cost.
pub const TIEBREAK_NUDGE: f64 = 1e-4;

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchOptions {
    /// Allow the four diagonal moves (at √2 × destination weight).
    pub diagonals: bool,
    /// Apply [`TIEBREAK_NUDGE`] to A*'s priority. Ignored by Dijkstra.
    pub tiebreaker: bool,
}

/// Outcome of one search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Cells in the order they were finalized; ends at the goal when it was
    /// reached.
    pub visit_order: Vec<Pos>,
    /// Start-to-goal route, empty when the goal is unreachable.
    pub path: Vec<Pos>,
    /// Cost of `path`, `None` when unreachable.
    pub cost: Option<f64>,
}

/// Manhattan distance `|dr| + |dc|`; admissible for orthogonal movement.
pub fn manhattan(a: Pos, b: Pos) -> f64 {
    (a.0.abs_diff(b.0) + a.1.abs_diff(b.1)) as f64
}

/// Straight-line distance; admissible for any movement.
pub fn euclidean(a: Pos, b: Pos) -> f64 {
    let dr = a.0.abs_diff(b.0) as f64;
    let dc = a.1.abs_diff(b.1) as f64;
    dr.hypot(dc)
}

/// Chebyshev distance `max(|dr|, |dc|)`; admissible with diagonals enabled.
pub fn chebyshev(a: Pos, b: Pos) -> f64 {
    a.0.abs_diff(b.0).max(a.1.abs_diff(b.1)) as f64
}

/// Uniform-cost search: no heuristic, tie-break nudge never applies.
pub fn dijkstra(grid: &Grid, start: Pos, goal: Pos, options: SearchOptions) -> SearchResult {
    search(grid, start, goal, |_, _| 0.0, false, options.diagonals)
}

/// A* with a caller-supplied heuristic.
///
/// With an admissible heuristic the reported cost equals Dijkstra's on the
/// same grid (the chosen path may differ under ties).
pub fn astar(
    grid: &Grid,
    start: Pos,
    goal: Pos,
    heuristic: impl Fn(Pos, Pos) -> f64,
    options: SearchOptions,
) -> SearchResult {
    search(
        grid,
        start,
        goal,
        heuristic,
        options.tiebreaker,
        options.diagonals,
    )
}

/// Open-set entry ordered as a min-heap on (priority, sequence).
#[derive(Debug, Clone, Copy, PartialEq)]
struct OpenEntry {
    priority: f64,
    seq: u64,
    pos: Pos,
}

impl Eq for OpenEntry {}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap pops the smallest priority; earlier
        // sequence wins among equals for reproducibility.
        other
            .priority
            .total_cmp(&self.priority)
            .then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn search(
    grid: &Grid,
    start: Pos,
    goal: Pos,
    heuristic: impl Fn(Pos, Pos) -> f64,
    tiebreaker: bool,
    diagonals: bool,
) -> SearchResult {
    let mut dist: Vec<f64> = vec![f64::INFINITY; grid.rows() * grid.cols()];
    let mut closed: Vec<bool> = vec![false; grid.rows() * grid.cols()];
    let mut prev: FxHashMap<Pos, Pos> = FxHashMap::default();
    let mut open = BinaryHeap::new();
    let mut visit_order = Vec::new();
    let mut seq = 0u64;

    dist[grid.index(start)] = 0.0;
    open.push(OpenEntry {
        priority: priority_of(0.0, start, goal, &heuristic, tiebreaker),
        seq,
        pos: start,
    });

    while let Some(OpenEntry { pos, .. }) = open.pop() {
        let idx = grid.index(pos);
        if closed[idx] {
            continue; // stale entry superseded by a cheaper relaxation
        }
        closed[idx] = true;
        visit_order.push(pos);

        if pos == goal {
            break;
        }

        for (npos, step_cost) in grid.neighbors(pos, diagonals) {
            let nidx = grid.index(npos);
            if closed[nidx] {
                continue;
            }
            let tentative = dist[idx] + step_cost;
            if tentative < dist[nidx] {
                dist[nidx] = tentative;
                prev.insert(npos, pos);
                seq += 1;
                open.push(OpenEntry {
                    priority: priority_of(tentative, npos, goal, &heuristic, tiebreaker),
                    seq,
                    pos: npos,
                });
            }
        }
    }

    let goal_dist = dist[grid.index(goal)];
    let path = if goal_dist.is_finite() {
        reconstruct(&prev, start, goal)
    } else {
        Vec::new()
    };
    SearchResult {
        visit_order,
        path,
        cost: goal_dist.is_finite().then_some(goal_dist),
    }
}

fn priority_of(
    g: f64,
    pos: Pos,
    goal: Pos,
    heuristic: &impl Fn(Pos, Pos) -> f64,
    tiebreaker: bool,
) -> f64 {
    let mut f = g + heuristic(pos, goal);
    if tiebreaker {
        f += TIEBREAK_NUDGE * (pos.0 + pos.1) as f64;
    }
    f
}

/// Walk predecessor links backward from the goal, then reverse.
fn reconstruct(prev: &FxHashMap<Pos, Pos>, start: Pos, goal: Pos) -> Vec<Pos> {
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        match prev.get(&current) {
            Some(&p) => {
                path.push(p);
                current = p;
            }
            None => return Vec::new(), // goal never linked back to start
        }
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_grid_shortest_path() {
        let grid = Grid::new(5, 5);
        let result = dijkstra(&grid, (0, 0), (4, 4), SearchOptions::default());
        assert_eq!(result.path.len(), 9);
        assert_eq!(result.cost, Some(8.0));
        assert_eq!(*result.visit_order.last().unwrap(), (4, 4));
    }

    #[test]
    fn astar_matches_dijkstra_cost() {
        let mut grid = Grid::new(6, 6);
        grid.set_wall((1, 1), true);
        grid.set_wall((2, 1), true);
        grid.set_wall((3, 3), true);
        grid.set_weight((4, 4), 5);

        let opts = SearchOptions::default();
        let d = dijkstra(&grid, (0, 0), (5, 5), opts);
        let a = astar(&grid, (0, 0), (5, 5), manhattan, opts);
        assert_eq!(d.cost, a.cost);
    }

    #[test]
    fn astar_with_tiebreaker_preserves_cost() {
        let grid = Grid::new(5, 5);
        let plain = astar(&grid, (0, 0), (4, 4), manhattan, SearchOptions::default());
        let nudged = astar(
            &grid,
            (0, 0),
            (4, 4),
            manhattan,
            SearchOptions {
                diagonals: false,
                tiebreaker: true,
            },
        );
        assert_eq!(plain.cost, nudged.cost);
    }

    #[test]
    fn enclosed_goal_yields_empty_path_and_full_sweep() {
        let mut grid = Grid::new(4, 4);
        // Box in (3, 3)
        grid.set_wall((2, 2), true);
        grid.set_wall((2, 3), true);
        grid.set_wall((3, 2), true);

        let result = dijkstra(&grid, (0, 0), (3, 3), SearchOptions::default());
        assert!(result.path.is_empty());
        assert_eq!(result.cost, None);

        // Every reachable cell finalized exactly once: 16 - 3 walls - 1 enclosed
        assert_eq!(result.visit_order.len(), 12);
        let mut seen = result.visit_order.clone();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), result.visit_order.len());
    }

    #[test]
    fn diagonal_movement_shortens_the_route() {
        let grid = Grid::new(5, 5);
        let opts = SearchOptions {
            diagonals: true,
            tiebreaker: false,
        };
        let result = dijkstra(&grid, (0, 0), (4, 4), opts);
        assert_eq!(result.path.len(), 5);
        let expected = 4.0 * std::f64::consts::SQRT_2;
        assert!((result.cost.unwrap() - expected).abs() < 1e-9);
    }

    #[test]
    fn weights_steer_the_path() {
        let mut grid = Grid::new(3, 3);
        grid.set_weight((1, 1), 9);

        let result = dijkstra(&grid, (1, 0), (1, 2), SearchOptions::default());
        // Four unit steps around the expensive center beat 9 + 1 through it
        assert_eq!(result.cost, Some(4.0));
        assert!(!result.path.contains(&(1, 1)));
    }

    #[test]
    fn start_equals_goal() {
        let grid = Grid::new(3, 3);
        let result = dijkstra(&grid, (1, 1), (1, 1), SearchOptions::default());
        assert_eq!(result.path, vec![(1, 1)]);
        assert_eq!(result.cost, Some(0.0));
        assert_eq!(result.visit_order, vec![(1, 1)]);
    }

    #[test]
    fn visit_order_stops_at_goal() {
        let grid = Grid::new(8, 8);
        let result = astar(&grid, (0, 0), (2, 2), manhattan, SearchOptions::default());
        assert_eq!(*result.visit_order.last().unwrap(), (2, 2));
        // A* should not have swept the whole 64-cell grid for a nearby goal
        assert!(result.visit_order.len() < 30);
    }

    #[test]
    fn deterministic_visit_order() {
        let mut grid = Grid::new(6, 6);
        grid.set_wall((3, 1), true);
        let opts = SearchOptions::default();
        let a = dijkstra(&grid, (0, 0), (5, 5), opts);
        let b = dijkstra(&grid, (0, 0), (5, 5), opts);
        assert_eq!(a.visit_order, b.visit_order);
        assert_eq!(a.path, b.path);
    }

    #[test]
    fn chebyshev_is_admissible_with_diagonals() {
        let mut grid = Grid::new(6, 6);
        grid.set_wall((1, 2), true);
        grid.set_wall((2, 2), true);
        let opts = SearchOptions {
            diagonals: true,
            tiebreaker: false,
        };
        let d = dijkstra(&grid, (0, 0), (5, 5), opts);
        let a = astar(&grid, (0, 0), (5, 5), chebyshev, opts);
        assert!((d.cost.unwrap() - a.cost.unwrap()).abs() < 1e-9);
    }
}
