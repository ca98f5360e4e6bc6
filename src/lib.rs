//! # Introduction
//!
//! algotty generates replayable step traces for classic data-structure and
//! graph algorithms, then plays them back in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).  Each demo runs its algorithm to
//! completion up front, recording a snapshot at every interesting instant;
//! the UI then scrubs forward and backward through the recorded steps.
//!
//! ## Pipeline
//!
//! ```text
//! Input → Engine → Steps → Scene → TUI playback
//! ```
//!
//! 1. [`engine`] — step-trace generators: merge sort, N-Queens, AVL
//!    rotations, BST traversals, Kruskal/Prim MST.
//! 2. [`grid`] — weighted-grid Dijkstra and A* with visit order and path
//!    reconstruction.
//! 3. [`dsl`] — the `compare`/`swap`/`mark`/`sleep` mini-language and its
//!    cooperative stepping sandbox.
//! 4. [`graph`] — union-find and the edge model backing the MST engines.
//! 5. [`puzzle`] — the swap-puzzle side game.
//! 6. [`ui`] — ratatui playback shell; not part of the stable library API.
//!
//! The engines are pure: they never touch the terminal, the filesystem, or
//! the progress store, and the same input always yields the same trace.

pub mod dsl;
pub mod engine;
pub mod graph;
pub mod grid;
pub mod puzzle;
pub mod ui;
