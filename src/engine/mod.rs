//! Step-trace engines
//!
//! Every engine here follows the same contract: run a classic algorithm to
//! completion in one synchronous pass while appending a discrete, replayable
//! step record at each interesting instant. The returned sequence is finite,
//! deterministic for a given input, and free of side effects — inputs are
//! defensively copied before any working state is mutated, so a caller can
//! re-run an engine on the same data and get the identical trace.
//!
//! Step index doubles as logical time: replaying steps `0..k` reproduces the
//! algorithm's state after `k` operations, and the final step's snapshot is
//! exactly what the untraced algorithm would have produced.
//!
//! - [`sort`]: top-down merge sort with divide/compare/place scope tracking
//! - [`queens`]: N-Queens backtracking, failed attempts included by design
//! - [`avl`]: AVL tree with a human-readable rotation log per operation
//! - [`bst`]: plain binary search tree with four traversal orders
//! - [`mst`]: Kruskal and Prim minimum-spanning-tree traces

pub mod avl;
pub mod bst;
pub mod mst;
pub mod queens;
pub mod sort;
