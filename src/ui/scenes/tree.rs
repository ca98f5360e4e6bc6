//! Tree playback scenes: AVL operation log and BST traversal walk

use crate::engine::avl::AvlTree;
use crate::engine::bst::{Bst, Traversal};
use crate::ui::scenes::{tree_lines, tree_rows, Scene};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};

/// One scripted mutation of the AVL demo.
#[derive(Debug, Clone, Copy)]
pub enum TreeOp {
    Insert(i32),
    Remove(i32),
}

/// Snapshot taken after one operation.
struct AvlFrame {
    description: String,
    /// Rotation events logged by this operation.
    events: Vec<String>,
    lines: Vec<String>,
    balanced: bool,
}

/// Replays a scripted operation sequence; each cursor position shows the
/// tree after one more insert/remove, with that call's rotation log.
pub struct AvlScene {
    frames: Vec<AvlFrame>,
    cursor: usize,
}

impl AvlScene {
    pub fn new(ops: &[TreeOp]) -> Self {
        let mut tree = AvlTree::new();
        let mut frames = vec![AvlFrame {
            description: "Empty tree".to_string(),
            events: Vec::new(),
            lines: tree_lines(tree.root()),
            balanced: true,
        }];

        for op in ops {
            let (description, events) = match *op {
                TreeOp::Insert(v) => (format!("Insert {v}"), tree.insert(v)),
                TreeOp::Remove(v) => (format!("Remove {v}"), tree.remove(v)),
            };
            frames.push(AvlFrame {
                description,
                events,
                lines: tree_lines(tree.root()),
                balanced: tree.is_balanced(),
            });
        }

        AvlScene { frames, cursor: 0 }
    }
}

impl Scene for AvlScene {
    fn title(&self) -> &str {
        "AVL Tree"
    }

    fn total_steps(&self) -> usize {
        self.frames.len()
    }

    fn cursor(&self) -> usize {
        self.cursor
    }

    fn step_forward(&mut self) -> bool {
        if self.cursor + 1 < self.frames.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    fn step_back(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    fn reset(&mut self) {
        self.cursor = 0;
    }

    fn play_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(900)
    }

    fn diagram(&self) -> Text<'static> {
        let theme = &DEFAULT_THEME;
        let frame = &self.frames[self.cursor];
        let rotated = !frame.events.is_empty();

        let mut lines: Vec<Line> = frame
            .lines
            .iter()
            .map(|l| {
                Line::from(Span::styled(
                    l.clone(),
                    Style::default().fg(if rotated { theme.highlight } else { theme.fg }),
                ))
            })
            .collect();

        lines.push(Line::default());
        let badge = if frame.balanced {
            Span::styled("balanced", Style::default().fg(theme.success))
        } else {
            Span::styled("UNBALANCED", Style::default().fg(theme.error))
        };
        lines.push(Line::from(badge));
        Text::from(lines)
    }

    fn narration(&self) -> Vec<Line<'static>> {
        let theme = &DEFAULT_THEME;
        let mut lines = Vec::new();
        for frame in &self.frames[1..=self.cursor] {
            lines.push(Line::from(Span::styled(
                frame.description.clone(),
                Style::default().fg(theme.fg),
            )));
            for event in &frame.events {
                lines.push(Line::from(Span::styled(
                    format!("  {event}"),
                    Style::default()
                        .fg(theme.secondary)
                        .add_modifier(Modifier::BOLD),
                )));
            }
        }
        lines
    }

    fn status(&self) -> String {
        let frame = &self.frames[self.cursor];
        match frame.events.len() {
            0 => frame.description.clone(),
            n => format!("{} ({n} rotation{})", frame.description, if n == 1 { "" } else { "s" }),
        }
    }

    fn achievement(&self) -> Option<&'static str> {
        (self.cursor + 1 == self.frames.len()).then_some("avl_rotations_watched")
    }
}

/// Walks one traversal order of a fixed tree, one value per cursor step.
pub struct BstScene {
    tree: Bst,
    order: Traversal,
    sequence: Vec<i32>,
    cursor: usize,
}

impl BstScene {
    pub fn new(values: &[i32], order: Traversal) -> Self {
        let mut tree = Bst::new();
        for &v in values {
            tree.insert(v);
        }
        let sequence = tree.traverse(order);
        BstScene {
            tree,
            order,
            sequence,
            cursor: 0,
        }
    }

    fn visited(&self) -> &[i32] {
        &self.sequence[..self.cursor]
    }
}

impl Scene for BstScene {
    fn title(&self) -> &str {
        "BST Traversal"
    }

    fn total_steps(&self) -> usize {
        self.sequence.len() + 1
    }

    fn cursor(&self) -> usize {
        self.cursor
    }

    fn step_forward(&mut self) -> bool {
        if self.cursor < self.sequence.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    fn step_back(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    fn reset(&mut self) {
        self.cursor = 0;
    }

    fn diagram(&self) -> Text<'static> {
        let theme = &DEFAULT_THEME;
        let just_visited = self.cursor.checked_sub(1).map(|i| self.sequence[i]);

        let mut lines: Vec<Line> = tree_rows(self.tree.root())
            .into_iter()
            .map(|row| {
                let Some(value) = row.value else {
                    return Line::from(Span::styled(
                        row.prefix,
                        Style::default().fg(theme.comment),
                    ));
                };
                let style = if just_visited == Some(value) {
                    Style::default()
                        .fg(theme.highlight)
                        .add_modifier(Modifier::BOLD)
                } else if self.visited().contains(&value) {
                    Style::default().fg(theme.visited)
                } else {
                    Style::default().fg(theme.comment)
                };
                Line::from(vec![
                    Span::styled(row.prefix, Style::default().fg(theme.comment)),
                    Span::styled(format!("{value}{}", row.suffix), style),
                ])
            })
            .collect();

        lines.push(Line::default());
        let visited: Vec<String> = self.visited().iter().map(|v| v.to_string()).collect();
        lines.push(Line::from(Span::styled(
            format!("{}: {}", self.order.label(), visited.join(" ")),
            Style::default().fg(theme.primary),
        )));
        Text::from(lines)
    }

    fn narration(&self) -> Vec<Line<'static>> {
        let theme = &DEFAULT_THEME;
        self.visited()
            .iter()
            .map(|v| {
                Line::from(Span::styled(
                    format!("Visit {v}"),
                    Style::default().fg(theme.visited),
                ))
            })
            .collect()
    }

    fn status(&self) -> String {
        format!(
            "{} traversal: {}/{} values",
            self.order.label(),
            self.cursor,
            self.sequence.len()
        )
    }

    fn achievement(&self) -> Option<&'static str> {
        (self.cursor == self.sequence.len() && !self.sequence.is_empty())
            .then_some("traversal_watched")
    }
}
