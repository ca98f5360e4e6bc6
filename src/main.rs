// algotty: step-trace algorithm visualizer with terminal playback

mod dsl;
mod engine;
mod graph;
mod grid;
mod puzzle;
mod ui;

use std::fs;
use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use dsl::Sandbox;
use engine::bst::Traversal;
use graph::Edge;
use grid::{astar, chebyshev, dijkstra, euclidean, manhattan, Grid, SearchOptions};
use puzzle::Puzzle;
use ui::scenes::mst::{MstAlgorithm, MstScene};
use ui::scenes::path::PathScene;
use ui::scenes::puzzle::PuzzleScene;
use ui::scenes::queens::QueensScene;
use ui::scenes::sort::SortScene;
use ui::scenes::tree::{AvlScene, BstScene};
use ui::scenes::Scene;
use ui::store::ProgressStore;
use ui::App;

fn usage(program: &str) -> String {
    format!(
        "Usage: {program} <demo> [options]\n\
         \n\
         Demos:\n\
         \x20 sort [seed]                          merge sort trace on a seeded array\n\
         \x20 queens [n]                           N-Queens backtracking (4-8, default 6)\n\
         \x20 mst [kruskal|prim]                   minimum spanning tree trace\n\
         \x20 path [dijkstra|astar] [heuristic]    grid search; heuristic is one of\n\
         \x20                                      manhattan|euclidean|chebyshev\n\
         \x20      [--diagonals] [--tiebreak]\n\
         \x20 avl                                  AVL rotations on a scripted sequence\n\
         \x20 bst [inorder|preorder|postorder|level]\n\
         \x20 dsl <file> [values...]               run a sort program in the sandbox\n\
         \x20 puzzle [easy|medium|hard]            interactive swap puzzle\n\
         \n\
         Examples:\n\
         \x20 {program} sort 42\n\
         \x20 {program} path astar manhattan --diagonals --tiebreak\n\
         \x20 {program} dsl demos/bubble.steps 5 3 8 1"
    )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map(|s| s.as_str()).unwrap_or("algotty");

    if args.len() < 2 {
        eprintln!("Error: no demo selected");
        eprintln!();
        eprintln!("{}", usage(program));
        std::process::exit(1);
    }

    let store = ProgressStore::load_default();

    let scene = match build_scene(&args[1], &args[2..], &store) {
        Ok(scene) => scene,
        Err(message) => {
            eprintln!("Error: {message}");
            eprintln!();
            eprintln!("{}", usage(program));
            std::process::exit(1);
        }
    };

    eprintln!(
        "Prepared '{}' with {} playback step(s).",
        scene.title(),
        scene.total_steps()
    );

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(scene, store);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn build_scene(
    demo: &str,
    rest: &[String],
    store: &ProgressStore,
) -> Result<Box<dyn Scene>, String> {
    match demo {
        "sort" => {
            let seed = match rest.first() {
                Some(s) => s
                    .parse::<u64>()
                    .map_err(|_| format!("'{s}' is not a valid seed"))?,
                None => 1,
            };
            Ok(Box::new(SortScene::new(seeded_array(16, seed))))
        }
        "queens" => {
            let n = match rest.first() {
                Some(s) => s
                    .parse::<usize>()
                    .map_err(|_| format!("'{s}' is not a valid board size"))?,
                None => 6,
            };
            if !(4..=8).contains(&n) {
                return Err(format!("board size must be between 4 and 8, got {n}"));
            }
            Ok(Box::new(QueensScene::new(n)))
        }
        "mst" => {
            let algorithm = match rest.first().map(|s| s.as_str()) {
                None | Some("kruskal") => MstAlgorithm::Kruskal,
                Some("prim") => MstAlgorithm::Prim,
                Some(other) => return Err(format!("unknown MST algorithm '{other}'")),
            };
            let (nodes, edges) = demo_graph();
            Ok(Box::new(MstScene::new(algorithm, nodes, edges)))
        }
        "path" => build_path_scene(rest),
        "avl" => Ok(Box::new(AvlScene::new(&demo_tree_ops()))),
        "bst" => {
            let order = match rest.first().map(|s| s.as_str()) {
                None | Some("inorder") => Traversal::Inorder,
                Some("preorder") => Traversal::Preorder,
                Some("postorder") => Traversal::Postorder,
                Some("level") | Some("levelorder") => Traversal::LevelOrder,
                Some(other) => return Err(format!("unknown traversal '{other}'")),
            };
            Ok(Box::new(BstScene::new(
                &[50, 30, 70, 20, 40, 60, 80, 35, 45, 75],
                order,
            )))
        }
        "dsl" => {
            let Some(file) = rest.first() else {
                return Err("dsl needs a program file".to_string());
            };
            let source = fs::read_to_string(file)
                .map_err(|e| format!("cannot read '{file}': {e}"))?;
            let array = if rest.len() > 1 {
                rest[1..]
                    .iter()
                    .map(|s| {
                        s.parse::<i32>()
                            .map_err(|_| format!("'{s}' is not a valid array value"))
                    })
                    .collect::<Result<Vec<i32>, String>>()?
            } else {
                vec![5, 3, 8, 1, 9, 2, 7, 4]
            };
            let sandbox =
                Sandbox::new(&source, array).map_err(|e| format!("program rejected: {e}"))?;
            Ok(Box::new(ui::scenes::dsl::DslScene::new(sandbox, &source)))
        }
        "puzzle" => {
            let (id, tiles) = match rest.first().map(|s| s.as_str()) {
                None | Some("easy") => ("easy", vec![2, 1, 3, 5, 4]),
                Some("medium") => ("medium", vec![4, 2, 5, 1, 3, 6]),
                Some("hard") => ("hard", vec![7, 3, 1, 6, 2, 5, 4]),
                Some(other) => return Err(format!("unknown puzzle '{other}'")),
            };
            let best = store.best(id);
            Ok(Box::new(PuzzleScene::new(Puzzle::new(id, tiles), best)))
        }
        other => Err(format!("unknown demo '{other}'")),
    }
}

fn build_path_scene(rest: &[String]) -> Result<Box<dyn Scene>, String> {
    let mut algorithm = "dijkstra";
    let mut heuristic = "manhattan";
    let mut options = SearchOptions::default();

    for (i, arg) in rest.iter().enumerate() {
        match arg.as_str() {
            "dijkstra" | "astar" => algorithm = rest[i].as_str(),
            "manhattan" | "euclidean" | "chebyshev" => heuristic = rest[i].as_str(),
            "--diagonals" => options.diagonals = true,
            "--tiebreak" => options.tiebreaker = true,
            other => return Err(format!("unknown path option '{other}'")),
        }
    }

    let (grid, start, goal) = demo_grid();
    let (title, result) = match algorithm {
        "dijkstra" => ("Dijkstra", dijkstra(&grid, start, goal, options)),
        _ => {
            let h = match heuristic {
                "euclidean" => euclidean,
                "chebyshev" => chebyshev,
                _ => manhattan,
            };
            (
                match heuristic {
                    "euclidean" => "A* (euclidean)",
                    "chebyshev" => "A* (chebyshev)",
                    _ => "A* (manhattan)",
                },
                astar(&grid, start, goal, h, options),
            )
        }
    };

    eprintln!(
        "Search finalized {} cell(s); path cost {:?}.",
        result.visit_order.len(),
        result.cost
    );
    Ok(Box::new(PathScene::new(title, grid, start, goal, result)))
}

/// Deterministic pseudo-random array; same seed, same array. Callers pick
/// the seed so the engine itself stays free of randomness.
fn seeded_array(len: usize, seed: u64) -> Vec<i32> {
    let mut state = seed.wrapping_mul(2).wrapping_add(1);
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ((state >> 33) % 50) as i32 + 1
        })
        .collect()
}

/// The MST demo graph: 7 nodes, mixed weights, one weight tie.
fn demo_graph() -> (usize, Vec<Edge>) {
    let edges = vec![
        Edge::new(0, 1, 7.0),
        Edge::new(0, 3, 5.0),
        Edge::new(1, 2, 8.0),
        Edge::new(1, 3, 9.0),
        Edge::new(1, 4, 7.0),
        Edge::new(2, 4, 5.0),
        Edge::new(3, 4, 15.0),
        Edge::new(3, 5, 6.0),
        Edge::new(4, 5, 8.0),
        Edge::new(4, 6, 9.0),
        Edge::new(5, 6, 11.0),
    ];
    (7, edges)
}

/// The pathfinding demo grid: a wall with a gap and a patch of costly mud.
fn demo_grid() -> (Grid, grid::Pos, grid::Pos) {
    let mut grid = Grid::new(15, 28);
    for row in 2..13 {
        grid.set_wall((row, 12), true);
    }
    grid.set_wall((7, 12), false); // the gap
    for row in 4..9 {
        for col in 16..21 {
            grid.set_weight((row, col), 5);
        }
    }
    (grid, (7, 2), (7, 25))
}

/// The AVL demo script: inserts that exercise all four rotation cases,
/// then deletions that rebalance several ancestors.
fn demo_tree_ops() -> Vec<ui::scenes::tree::TreeOp> {
    use ui::scenes::tree::TreeOp::{Insert, Remove};
    vec![
        Insert(10),
        Insert(20),
        Insert(30), // single left rotation at 10
        Insert(25),
        Insert(28), // left-right double rotation at 30
        Insert(5),
        Insert(3), // single right rotation at 10
        Insert(4),
        Remove(30),
        Remove(28), // rebalances an ancestor on the unwind
        Remove(25),
        Insert(1),
        Remove(20),
    ]
}
