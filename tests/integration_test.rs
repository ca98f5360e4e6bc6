// Integration tests for the step-trace engines

use algotty::engine::avl::AvlTree;
use algotty::engine::bst::{Bst, Traversal};
use algotty::engine::mst::{kruskal_trace, prim_trace, trace_weight, MstStepKind};
use algotty::engine::queens::{queens_trace, QueensStepKind};
use algotty::engine::sort::merge_sort_trace;
use algotty::graph::{Edge, UnionFind};

// === TRACE FIDELITY ===

#[test]
fn merge_sort_final_snapshot_equals_untraced_sort() {
    let inputs: Vec<Vec<i32>> = vec![
        vec![5, 3, 8, 1],
        vec![1],
        vec![2, 1],
        vec![9, 9, 9, 1, 1, 1],
        vec![-4, 12, 0, -4, 7, 3, 3, 8, -1, 5, 2],
    ];
    for input in inputs {
        let steps = merge_sort_trace(&input);
        let mut expected = input.clone();
        expected.sort();
        let last = steps.last().map(|s| s.values.clone()).unwrap_or(input);
        assert_eq!(last, expected);
    }
}

#[test]
fn merge_sort_steps_replay_monotonically() {
    // Each step's snapshot only changes inside its own scope
    let input = vec![6, 2, 9, 4, 1, 8];
    let steps = merge_sort_trace(&input);
    let mut previous = input;
    for step in steps {
        for (i, (&new, &old)) in step.values.iter().zip(previous.iter()).enumerate() {
            if new != old {
                assert!(
                    i >= step.lo && i <= step.hi,
                    "index {i} changed outside scope [{}, {}]",
                    step.lo,
                    step.hi
                );
            }
        }
        previous = step.values;
    }
}

// === MST ===

#[test]
fn kruskal_and_prim_agree_on_total_weight() {
    let graphs: Vec<(usize, Vec<Edge>)> = vec![
        (
            3,
            vec![
                Edge::new(0, 1, 1.0),
                Edge::new(1, 2, 2.0),
                Edge::new(0, 2, 3.0),
            ],
        ),
        (
            6,
            vec![
                Edge::new(0, 1, 4.0),
                Edge::new(0, 2, 4.0),
                Edge::new(1, 2, 2.0),
                Edge::new(2, 3, 3.0),
                Edge::new(3, 4, 2.0),
                Edge::new(2, 5, 4.0),
                Edge::new(4, 5, 3.0),
                Edge::new(1, 4, 9.0),
            ],
        ),
    ];

    for (nodes, edges) in graphs {
        let k = kruskal_trace(nodes, &edges);
        let p = prim_trace(nodes, &edges, 0);
        assert_eq!(k.last().unwrap().kind, MstStepKind::Complete);
        assert_eq!(p.last().unwrap().kind, MstStepKind::Complete);
        assert_eq!(
            trace_weight(&edges, &k),
            trace_weight(&edges, &p),
            "MST weights diverged on a {nodes}-node graph"
        );
        // A spanning tree has exactly nodes - 1 edges
        assert_eq!(k.last().unwrap().accepted.len(), nodes - 1);
        assert_eq!(p.last().unwrap().accepted.len(), nodes - 1);
    }
}

#[test]
fn mst_trace_emits_considering_before_each_verdict() {
    let edges = vec![
        Edge::new(0, 1, 1.0),
        Edge::new(1, 2, 2.0),
        Edge::new(0, 2, 3.0),
    ];
    let steps = kruskal_trace(3, &edges);
    for window in steps.windows(2) {
        if matches!(window[1].kind, MstStepKind::Accept | MstStepKind::Reject) {
            assert_eq!(window[0].kind, MstStepKind::Considering);
            assert_eq!(window[0].edge, window[1].edge);
        }
    }
}

// === N-QUEENS ===

#[test]
fn four_queens_finds_two_solutions_with_verbose_trace() {
    let trace = queens_trace(4);
    assert_eq!(trace.solutions.len(), 2);

    // The trace must include failed branches, not just the solution path
    let rejects = trace
        .steps
        .iter()
        .filter(|s| s.kind == QueensStepKind::Reject)
        .count();
    let backtracks = trace
        .steps
        .iter()
        .filter(|s| s.kind == QueensStepKind::Backtrack)
        .count();
    assert!(rejects > 0, "expected rejected placements in the trace");
    assert!(backtracks > 0, "expected backtracks in the trace");

    // Placements and backtracks pair up over a finished search
    let places = trace
        .steps
        .iter()
        .filter(|s| s.kind == QueensStepKind::Place)
        .count();
    assert_eq!(places, backtracks);
}

#[test]
fn queens_traces_are_deterministic() {
    let a = queens_trace(5);
    let b = queens_trace(5);
    assert_eq!(a.steps.len(), b.steps.len());
    assert_eq!(a.solutions, b.solutions);
    for (x, y) in a.steps.iter().zip(&b.steps) {
        assert_eq!(x.kind, y.kind);
        assert_eq!((x.row, x.col), (y.row, y.col));
    }
}

// === AVL ===

#[test]
fn avl_balance_holds_after_every_public_call() {
    let mut tree = AvlTree::new();
    let values = [41, 20, 65, 11, 29, 50, 91, 32, 72, 99, 1, 15, 26, 37];
    for v in values {
        tree.insert(v);
        assert!(tree.is_balanced(), "unbalanced after insert {v}");
    }
    for v in [41, 11, 99, 20, 1, 65] {
        tree.remove(v);
        assert!(tree.is_balanced(), "unbalanced after remove {v}");
    }
}

#[test]
fn avl_ascending_example_from_the_rotation_table() {
    let mut tree = AvlTree::new();
    tree.insert(10);
    tree.insert(20);
    let log = tree.insert(30);

    assert_eq!(log, vec!["Left rotation at node 10".to_string()]);
    let root = tree.root().unwrap();
    assert_eq!(root.value, 20);
    assert_eq!(root.left.as_ref().unwrap().value, 10);
    assert_eq!(root.right.as_ref().unwrap().value, 30);
}

#[test]
fn avl_matches_bst_contents_under_same_operations() {
    let mut avl = AvlTree::new();
    let mut bst = Bst::new();
    let ops = [12, 5, 20, 3, 8, 15, 25, 7, 9, 17];
    for v in ops {
        avl.insert(v);
        bst.insert(v);
    }
    avl.remove(12);
    bst.remove(12);
    avl.remove(3);
    bst.remove(3);
    assert_eq!(avl.inorder(), bst.traverse(Traversal::Inorder));
}

// === UNION-FIND ===

#[test]
fn union_find_survives_arbitrary_union_orders() {
    let mut uf = UnionFind::new(10);
    // Repeated and redundant unions, including self-unions
    let pairs = [
        (0, 1),
        (1, 0),
        (2, 3),
        (3, 2),
        (0, 0),
        (4, 5),
        (1, 3),
        (5, 6),
        (0, 3),
        (6, 4),
    ];
    for (a, b) in pairs {
        uf.union(a, b);
    }
    // find terminates and groups are consistent
    assert_eq!(uf.find(0), uf.find(2));
    assert_eq!(uf.find(4), uf.find(6));
    assert_ne!(uf.find(0), uf.find(4));
    assert_ne!(uf.find(7), uf.find(8));
}
