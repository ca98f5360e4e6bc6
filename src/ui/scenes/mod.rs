//! Playback scenes
//!
//! A [`Scene`] adapts one demo to the shared playback surface: a cursor over
//! a finite number of positions, a diagram rendered as styled text, and a
//! narration log. Trace-backed scenes (sort, queens, MST, pathfinding, the
//! trees) precompute their steps and support scrubbing both directions; the
//! DSL scene wraps the live sandbox and only moves forward; the puzzle scene
//! is driven by its own key handling instead of the cursor.

use crossterm::event::KeyEvent;
use ratatui::text::{Line, Text};
use std::time::Duration;

use super::store::ProgressStore;

pub mod dsl;
pub mod mst;
pub mod path;
pub mod puzzle;
pub mod queens;
pub mod sort;
pub mod tree;

/// One demo adapted to the playback shell.
pub trait Scene {
    fn title(&self) -> &str;

    /// Number of cursor positions; position 0 is the initial state.
    fn total_steps(&self) -> usize;

    fn cursor(&self) -> usize;

    /// Advance one position; false when nothing further can run.
    fn step_forward(&mut self) -> bool;

    /// Rewind one position; false at the start or when unsupported.
    fn step_back(&mut self) -> bool;

    /// Back to position 0 and the initial structure. Idempotent.
    fn reset(&mut self);

    /// Delay before the next auto-play step.
    fn play_delay(&self) -> Duration {
        Duration::from_millis(600)
    }

    fn diagram(&self) -> Text<'static>;

    /// Narration lines for everything up to the cursor, oldest first.
    fn narration(&self) -> Vec<Line<'static>>;

    /// Short state description for the status bar.
    fn status(&self) -> String;

    /// Scene-specific key handling; true when the key was consumed.
    fn handle_key(&mut self, _key: KeyEvent, _store: &mut ProgressStore) -> bool {
        false
    }

    /// Achievement id to unlock when the end of the trace is reached.
    fn achievement(&self) -> Option<&'static str> {
        None
    }

    /// Whether the scene is stopped on a user-visible error (DSL sandbox).
    fn halted(&self) -> bool {
        false
    }
}

/// Read-only view of a binary tree node, for the shared ASCII renderer.
pub trait TreeView {
    fn value(&self) -> i32;
    fn left(&self) -> Option<&Self>;
    fn right(&self) -> Option<&Self>;
    /// Extra per-node annotation, e.g. the AVL height.
    fn suffix(&self) -> String {
        String::new()
    }
}

impl TreeView for crate::engine::avl::AvlNode {
    fn value(&self) -> i32 {
        self.value
    }
    fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }
    fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }
    fn suffix(&self) -> String {
        format!(" (h={})", self.height)
    }
}

impl TreeView for crate::engine::bst::BstNode {
    fn value(&self) -> i32 {
        self.value
    }
    fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }
    fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }
}

/// One output row of the sideways tree renderer.
pub struct TreeRow {
    pub prefix: String,
    /// `None` only for the empty-tree placeholder row.
    pub value: Option<i32>,
    pub suffix: String,
}

/// Render a tree sideways with box-drawing branch prefixes: right subtree
/// above its parent, left subtree below, so larger values read upward.
pub fn tree_rows<N: TreeView>(root: Option<&N>) -> Vec<TreeRow> {
    let mut out = Vec::new();
    match root {
        None => out.push(TreeRow {
            prefix: "(empty)".to_string(),
            value: None,
            suffix: String::new(),
        }),
        Some(node) => walk(node, "", "", "", &mut out),
    }
    out
}

/// Plain-string variant of [`tree_rows`].
pub fn tree_lines<N: TreeView>(root: Option<&N>) -> Vec<String> {
    tree_rows(root)
        .into_iter()
        .map(|row| match row.value {
            Some(v) => format!("{}{v}{}", row.prefix, row.suffix),
            None => row.prefix,
        })
        .collect()
}

fn walk<N: TreeView>(
    node: &N,
    right_prefix: &str,
    node_prefix: &str,
    left_prefix: &str,
    out: &mut Vec<TreeRow>,
) {
    if let Some(right) = node.right() {
        walk(
            right,
            &format!("{right_prefix}    "),
            &format!("{right_prefix}┌── "),
            &format!("{right_prefix}│   "),
            out,
        );
    }
    out.push(TreeRow {
        prefix: node_prefix.to_string(),
        value: Some(node.value()),
        suffix: node.suffix(),
    });
    if let Some(left) = node.left() {
        walk(
            left,
            &format!("{left_prefix}│   "),
            &format!("{left_prefix}└── "),
            &format!("{left_prefix}    "),
            out,
        );
    }
}
