//! Minimum-spanning-tree playback scene (Kruskal or Prim)

use crate::engine::mst::{kruskal_trace, prim_trace, MstStep, MstStepKind};
use crate::graph::Edge;
use crate::ui::scenes::Scene;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MstAlgorithm {
    Kruskal,
    Prim,
}

pub struct MstScene {
    algorithm: MstAlgorithm,
    node_count: usize,
    edges: Vec<Edge>,
    steps: Vec<MstStep>,
    cursor: usize,
}

impl MstScene {
    pub fn new(algorithm: MstAlgorithm, node_count: usize, edges: Vec<Edge>) -> Self {
        let steps = match algorithm {
            MstAlgorithm::Kruskal => kruskal_trace(node_count, &edges),
            MstAlgorithm::Prim => prim_trace(node_count, &edges, 0),
        };
        MstScene {
            algorithm,
            node_count,
            edges,
            steps,
            cursor: 0,
        }
    }

    fn current(&self) -> Option<&MstStep> {
        self.cursor.checked_sub(1).map(|i| &self.steps[i])
    }
}

impl Scene for MstScene {
    fn title(&self) -> &str {
        match self.algorithm {
            MstAlgorithm::Kruskal => "Kruskal MST",
            MstAlgorithm::Prim => "Prim MST",
        }
    }

    fn total_steps(&self) -> usize {
        self.steps.len() + 1
    }

    fn cursor(&self) -> usize {
        self.cursor
    }

    fn step_forward(&mut self) -> bool {
        if self.cursor + 1 < self.total_steps() {
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
        let step = self.current();
        let mut lines = Vec::new();

        for (idx, edge) in self.edges.iter().enumerate() {
            // Status is derived from the step's accumulated sets
            let (tag, style) = match step {
                Some(s) if s.edge == Some(idx) && s.kind == MstStepKind::Considering => (
                    "current ",
                    Style::default()
                        .fg(theme.highlight)
                        .add_modifier(Modifier::BOLD),
                ),
                Some(s) if s.accepted.contains(&idx) => {
                    ("accepted", Style::default().fg(theme.accepted))
                }
                Some(s) if s.rejected.contains(&idx) => {
                    ("rejected", Style::default().fg(theme.rejected))
                }
                _ => ("pending ", Style::default().fg(theme.comment)),
            };
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{} ── {}  w={:<4}  ", edge.a, edge.b, edge.weight),
                    style,
                ),
                Span::styled(format!("[{tag}]"), style),
            ]));
        }

        lines.push(Line::default());

        // Group nodes by representative for component coloring
        let components: Vec<String> = match step {
            Some(s) => {
                let mut groups: Vec<(usize, Vec<usize>)> = Vec::new();
                for (node, &rep) in s.components.iter().enumerate() {
                    match groups.iter_mut().find(|(r, _)| *r == rep) {
                        Some((_, members)) => members.push(node),
                        None => groups.push((rep, vec![node])),
                    }
                }
                groups
                    .iter()
                    .map(|(_, members)| {
                        let ids: Vec<String> =
                            members.iter().map(|n| n.to_string()).collect();
                        format!("{{{}}}", ids.join(" "))
                    })
                    .collect()
            }
            None => (0..self.node_count).map(|n| format!("{{{n}}}")).collect(),
        };
        lines.push(Line::from(Span::styled(
            format!("components: {}", components.join("  ")),
            Style::default().fg(theme.primary),
        )));

        Text::from(lines)
    }

    fn narration(&self) -> Vec<Line<'static>> {
        let theme = &DEFAULT_THEME;
        self.steps[..self.cursor]
            .iter()
            .map(|s| {
                let color = match s.kind {
                    MstStepKind::Considering => theme.highlight,
                    MstStepKind::Accept => theme.accepted,
                    MstStepKind::Reject => theme.rejected,
                    MstStepKind::Complete => theme.success,
                    MstStepKind::Partial => theme.secondary,
                };
                Line::from(Span::styled(
                    s.description.clone(),
                    Style::default().fg(color),
                ))
            })
            .collect()
    }

    fn status(&self) -> String {
        match self.current() {
            Some(s) => s.description.clone(),
            None => format!(
                "{} nodes, {} edges",
                self.node_count,
                self.edges.len()
            ),
        }
    }

    fn achievement(&self) -> Option<&'static str> {
        let complete = self
            .steps
            .last()
            .is_some_and(|s| s.kind == MstStepKind::Complete);
        (self.cursor + 1 == self.total_steps() && complete).then_some("mst_trace_watched")
    }
}
