//! Minimum-spanning-tree traces (Kruskal and Prim)
//!
//! Both engines emit the same step vocabulary so one playback scene serves
//! either: a "considering" step as an edge comes under the cursor, then an
//! "accept" or "reject" verdict, and finally a terminal "complete" (spanning
//! tree finished) or "partial" (edges exhausted on a disconnected graph).
//!
//! Every step carries the accepted/rejected edge-index sets accumulated so
//! far plus a component snapshot (representative per node) so the UI can
//! color connected groups at any point of the scrub. An edge's render status
//! at a step is derived from those sets, never stored on the edge.

use crate::graph::{Edge, UnionFind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MstStepKind {
    /// The edge at `edge` is under consideration.
    Considering,
    /// The edge joined two components and entered the MST.
    Accept,
    /// The edge would have closed a cycle.
    Reject,
    /// node_count - 1 edges accepted; the spanning tree is complete.
    Complete,
    /// Edges ran out first; the graph is disconnected.
    Partial,
}

#[derive(Debug, Clone)]
pub struct MstStep {
    pub kind: MstStepKind,
    /// Index into the caller's edge list, absent on terminal steps.
    pub edge: Option<usize>,
    /// Edge indices accepted into the MST so far.
    pub accepted: Vec<usize>,
    /// Edge indices rejected so far (Kruskal only; Prim never rejects).
    pub rejected: Vec<usize>,
    /// Representative node id per node, for component coloring.
    pub components: Vec<usize>,
    pub description: String,
}

/// Kruskal's algorithm: consider edges in ascending weight order (stable, so
/// equal weights keep their input order) and accept any edge whose endpoints
/// are in different union-find sets.
pub fn kruskal_trace(node_count: usize, edges: &[Edge]) -> Vec<MstStep> {
    let mut steps = Vec::new();
    let mut uf = UnionFind::new(node_count);
    let mut accepted: Vec<usize> = Vec::new();
    let mut rejected: Vec<usize> = Vec::new();

    let target = node_count.saturating_sub(1);
    if target == 0 {
        steps.push(terminal_step(
            MstStepKind::Complete,
            &accepted,
            &rejected,
            &mut uf,
            0.0,
        ));
        return steps;
    }

    let mut order: Vec<usize> = (0..edges.len()).collect();
    order.sort_by(|&i, &j| edges[i].weight.total_cmp(&edges[j].weight));

    let mut total = 0.0;
    for idx in order {
        let edge = edges[idx];
        steps.push(MstStep {
            kind: MstStepKind::Considering,
            edge: Some(idx),
            accepted: accepted.clone(),
            rejected: rejected.clone(),
            components: uf.components(),
            description: format!(
                "Considering edge {}–{} (weight {})",
                edge.a, edge.b, edge.weight
            ),
        });

        if uf.union(edge.a, edge.b) {
            accepted.push(idx);
            total += edge.weight;
            steps.push(MstStep {
                kind: MstStepKind::Accept,
                edge: Some(idx),
                accepted: accepted.clone(),
                rejected: rejected.clone(),
                components: uf.components(),
                description: format!(
                    "Accepted edge {}–{}: joins two components",
                    edge.a, edge.b
                ),
            });
            if accepted.len() == target {
                steps.push(terminal_step(
                    MstStepKind::Complete,
                    &accepted,
                    &rejected,
                    &mut uf,
                    total,
                ));
                return steps;
            }
        } else {
            rejected.push(idx);
            steps.push(MstStep {
                kind: MstStepKind::Reject,
                edge: Some(idx),
                accepted: accepted.clone(),
                rejected: rejected.clone(),
                components: uf.components(),
                description: format!(
                    "Rejected edge {}–{}: would create a cycle",
                    edge.a, edge.b
                ),
            });
        }
    }

    steps.push(terminal_step(
        MstStepKind::Partial,
        &accepted,
        &rejected,
        &mut uf,
        total,
    ));
    steps
}

/// Prim's algorithm from `start`: grow the visited set one cheapest boundary
/// edge at a time.
///
/// The candidate set holds boundary edges sorted ascending by weight with
/// ties broken by discovery order, deduplicated so at most one candidate
/// reaches any unvisited node (the lighter one wins). After each acceptance
/// the set is refreshed: edges now internal to the visited set drop out and
/// the new node's boundary edges join.
pub fn prim_trace(node_count: usize, edges: &[Edge], start: usize) -> Vec<MstStep> {
    let mut steps = Vec::new();
    let mut uf = UnionFind::new(node_count);
    let mut accepted: Vec<usize> = Vec::new();
    let rejected: Vec<usize> = Vec::new();

    let target = node_count.saturating_sub(1);
    if target == 0 {
        steps.push(terminal_step(
            MstStepKind::Complete,
            &accepted,
            &rejected,
            &mut uf,
            0.0,
        ));
        return steps;
    }

    let mut visited = vec![false; node_count];
    visited[start] = true;

    // (edge index, discovery order); kept sorted by (weight, discovery)
    let mut candidates: Vec<(usize, usize)> = Vec::new();
    let mut discovered = 0usize;
    let mut add_boundary = |node: usize, candidates: &mut Vec<(usize, usize)>| {
        for (idx, edge) in edges.iter().enumerate() {
            if edge.touches(node) && !candidates.iter().any(|&(i, _)| i == idx) {
                candidates.push((idx, discovered));
                discovered += 1;
            }
        }
    };
    add_boundary(start, &mut candidates);

    let mut total = 0.0;
    while accepted.len() < target {
        // Drop edges now internal to the visited set, dedup per far endpoint
        candidates.retain(|&(idx, _)| frontier_node(&edges[idx], &visited).is_some());
        candidates.sort_by(|&(i, di), &(j, dj)| {
            edges[i]
                .weight
                .total_cmp(&edges[j].weight)
                .then(di.cmp(&dj))
        });
        dedup_by_target(&mut candidates, edges, &visited);

        let Some(&(idx, _)) = candidates.first() else {
            steps.push(terminal_step(
                MstStepKind::Partial,
                &accepted,
                &rejected,
                &mut uf,
                total,
            ));
            return steps;
        };

        let edge = edges[idx];
        steps.push(MstStep {
            kind: MstStepKind::Considering,
            edge: Some(idx),
            accepted: accepted.clone(),
            rejected: rejected.clone(),
            components: uf.components(),
            description: format!(
                "Considering edge {}–{} (weight {})",
                edge.a, edge.b, edge.weight
            ),
        });

        let far = frontier_node(&edge, &visited).expect("candidate has an unvisited endpoint");
        visited[far] = true;
        uf.union(edge.a, edge.b);
        accepted.push(idx);
        total += edge.weight;

        steps.push(MstStep {
            kind: MstStepKind::Accept,
            edge: Some(idx),
            accepted: accepted.clone(),
            rejected: rejected.clone(),
            components: uf.components(),
            description: format!("Accepted edge {}–{}: reaches node {far}", edge.a, edge.b),
        });

        add_boundary(far, &mut candidates);
    }

    steps.push(terminal_step(
        MstStepKind::Complete,
        &accepted,
        &rejected,
        &mut uf,
        total,
    ));
    steps
}

/// The unvisited endpoint of a boundary edge, or `None` if both ends are
/// visited (internal) or neither is (not yet on the frontier).
fn frontier_node(edge: &Edge, visited: &[bool]) -> Option<usize> {
    match (visited[edge.a], visited[edge.b]) {
        (true, false) => Some(edge.b),
        (false, true) => Some(edge.a),
        _ => None,
    }
}

/// Keep only the best candidate per unvisited target node. `candidates` must
/// already be sorted by (weight, discovery), so the first hit per node wins.
fn dedup_by_target(candidates: &mut Vec<(usize, usize)>, edges: &[Edge], visited: &[bool]) {
    let mut seen: Vec<usize> = Vec::new();
    candidates.retain(|&(idx, _)| {
        match frontier_node(&edges[idx], visited) {
            Some(node) if !seen.contains(&node) => {
                seen.push(node);
                true
            }
            _ => false,
        }
    });
}

fn terminal_step(
    kind: MstStepKind,
    accepted: &[usize],
    rejected: &[usize],
    uf: &mut UnionFind,
    total: f64,
) -> MstStep {
    let description = match kind {
        MstStepKind::Complete => format!(
            "Spanning tree complete: {} edges, total weight {}",
            accepted.len(),
            total
        ),
        MstStepKind::Partial => format!(
            "Graph is disconnected: spanning forest of {} edges, weight {}",
            accepted.len(),
            total
        ),
        _ => unreachable!("terminal_step only builds terminal steps"),
    };
    MstStep {
        kind,
        edge: None,
        accepted: accepted.to_vec(),
        rejected: rejected.to_vec(),
        components: uf.components(),
        description,
    }
}

/// Total weight of the accepted edges in a finished trace.
pub fn trace_weight(edges: &[Edge], steps: &[MstStep]) -> f64 {
    steps
        .last()
        .map(|s| s.accepted.iter().map(|&i| edges[i].weight).sum())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Vec<Edge> {
        vec![
            Edge::new(0, 1, 1.0),
            Edge::new(1, 2, 2.0),
            Edge::new(0, 2, 3.0),
        ]
    }

    #[test]
    fn kruskal_triangle_rejects_cycle_edge() {
        let edges = triangle();
        let steps = kruskal_trace(3, &edges);
        let last = steps.last().unwrap();
        assert_eq!(last.kind, MstStepKind::Complete);
        assert_eq!(last.accepted, vec![0, 1]);
        assert_eq!(trace_weight(&edges, &steps), 3.0);
    }

    #[test]
    fn prim_matches_kruskal_weight() {
        let edges = triangle();
        let k = kruskal_trace(3, &edges);
        let p = prim_trace(3, &edges, 0);
        assert_eq!(trace_weight(&edges, &k), trace_weight(&edges, &p));
        assert_eq!(p.last().unwrap().kind, MstStepKind::Complete);
    }

    #[test]
    fn disconnected_graph_ends_partial() {
        let edges = vec![Edge::new(0, 1, 1.0)];
        for steps in [kruskal_trace(4, &edges), prim_trace(4, &edges, 0)] {
            let last = steps.last().unwrap();
            assert_eq!(last.kind, MstStepKind::Partial);
            assert_eq!(last.accepted.len(), 1);
        }
    }

    #[test]
    fn kruskal_tie_break_is_input_order() {
        let edges = vec![
            Edge::new(0, 1, 1.0),
            Edge::new(1, 2, 1.0),
            Edge::new(2, 3, 1.0),
        ];
        let steps = kruskal_trace(4, &edges);
        let considered: Vec<usize> = steps
            .iter()
            .filter(|s| s.kind == MstStepKind::Considering)
            .map(|s| s.edge.unwrap())
            .collect();
        assert_eq!(considered, vec![0, 1, 2]);
    }

    #[test]
    fn prim_dedups_candidates_to_lighter_edge() {
        // Two edges reach node 2; the lighter one (index 2) must win.
        let edges = vec![
            Edge::new(0, 1, 1.0),
            Edge::new(0, 2, 5.0),
            Edge::new(1, 2, 2.0),
        ];
        let steps = prim_trace(3, &edges, 0);
        let accepted = &steps.last().unwrap().accepted;
        assert!(accepted.contains(&0));
        assert!(accepted.contains(&2));
        assert!(!accepted.contains(&1));
    }

    #[test]
    fn components_merge_as_edges_accept() {
        let edges = triangle();
        let steps = kruskal_trace(3, &edges);
        let first = steps.first().unwrap();
        // Before any acceptance each node is its own component
        assert_eq!(first.components, vec![0, 1, 2]);
        let last = steps.last().unwrap();
        assert!(last.components.iter().all(|&c| c == last.components[0]));
    }

    #[test]
    fn single_node_graph_is_trivially_complete() {
        for steps in [kruskal_trace(1, &[]), prim_trace(1, &[], 0)] {
            assert_eq!(steps.len(), 1);
            assert_eq!(steps[0].kind, MstStepKind::Complete);
        }
    }

    #[test]
    fn every_step_snapshots_components_for_all_nodes() {
        let edges = triangle();
        for step in kruskal_trace(3, &edges) {
            assert_eq!(step.components.len(), 3);
        }
    }
}
