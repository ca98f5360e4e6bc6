//! N-Queens playback scene

use crate::engine::queens::{queens_trace, QueensStep, QueensStepKind, QueensTrace};
use crate::ui::scenes::Scene;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};

pub struct QueensScene {
    trace: QueensTrace,
    cursor: usize,
}

impl QueensScene {
    pub fn new(n: usize) -> Self {
        QueensScene {
            trace: queens_trace(n),
            cursor: 0,
        }
    }

    fn current(&self) -> Option<&QueensStep> {
        self.cursor.checked_sub(1).map(|i| &self.trace.steps[i])
    }

    /// Solutions found in the trace prefix up to the cursor.
    fn solutions_so_far(&self) -> usize {
        let mut boards: Vec<&Vec<Vec<bool>>> = Vec::new();
        for step in &self.trace.steps[..self.cursor] {
            if step.kind == QueensStepKind::Solution && !boards.contains(&&step.board) {
                boards.push(&step.board);
            }
        }
        boards.len()
    }
}

impl Scene for QueensScene {
    fn title(&self) -> &str {
        "N-Queens"
    }

    fn total_steps(&self) -> usize {
        self.trace.steps.len() + 1
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

    fn play_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(250)
    }

    fn diagram(&self) -> Text<'static> {
        let theme = &DEFAULT_THEME;
        let n = self.trace.n;
        let step = self.current();
        let mut lines = Vec::new();

        for row in 0..n {
            let mut spans = vec![Span::styled(
                format!("{row:>2} "),
                Style::default().fg(theme.comment),
            )];
            for col in 0..n {
                let occupied = step.is_some_and(|s| s.board[row][col]);
                let is_focus = step.is_some_and(|s| s.row == row && s.col == col);

                let (glyph, style) = if occupied {
                    let color = match step.map(|s| s.kind) {
                        Some(QueensStepKind::Solution) => theme.success,
                        _ if is_focus => theme.highlight,
                        _ => theme.fg,
                    };
                    ("♛", Style::default().fg(color).add_modifier(Modifier::BOLD))
                } else if is_focus {
                    match step.map(|s| s.kind) {
                        Some(QueensStepKind::Reject) => {
                            ("✗", Style::default().fg(theme.rejected))
                        }
                        Some(QueensStepKind::Backtrack) => {
                            ("·", Style::default().fg(theme.secondary))
                        }
                        _ => ("·", Style::default().fg(theme.comment)),
                    }
                } else {
                    ("·", Style::default().fg(theme.comment))
                };
                spans.push(Span::styled(format!(" {glyph}"), style));
            }
            lines.push(Line::from(spans));
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!(
                "solutions found: {} / {}",
                self.solutions_so_far(),
                self.trace.solutions.len()
            ),
            Style::default().fg(theme.success),
        )));

        Text::from(lines)
    }

    fn narration(&self) -> Vec<Line<'static>> {
        let theme = &DEFAULT_THEME;
        self.trace.steps[..self.cursor]
            .iter()
            .map(|s| {
                let color = match s.kind {
                    QueensStepKind::Place => theme.accepted,
                    QueensStepKind::Reject => theme.rejected,
                    QueensStepKind::Backtrack => theme.secondary,
                    QueensStepKind::Solution => theme.success,
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
            None => format!("{0}×{0} board, empty", self.trace.n),
        }
    }

    fn achievement(&self) -> Option<&'static str> {
        (self.cursor + 1 == self.total_steps() && !self.trace.solutions.is_empty())
            .then_some("queens_search_watched")
    }
}
