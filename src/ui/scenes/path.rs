//! Grid pathfinding playback scene
//!
//! The cursor first sweeps the exploration wave (one finalized cell per
//! step), then one final position reveals the reconstructed path.

use crate::grid::{Grid, Pos, SearchResult};
use crate::ui::scenes::Scene;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};

pub struct PathScene {
    title: String,
    grid: Grid,
    start: Pos,
    goal: Pos,
    result: SearchResult,
    cursor: usize,
}

impl PathScene {
    pub fn new(
        title: impl Into<String>,
        grid: Grid,
        start: Pos,
        goal: Pos,
        result: SearchResult,
    ) -> Self {
        PathScene {
            title: title.into(),
            grid,
            start,
            goal,
            result,
            cursor: 0,
        }
    }

    /// Number of visited cells shown at the current cursor.
    fn wave_len(&self) -> usize {
        self.cursor.min(self.result.visit_order.len())
    }

    /// The path is revealed only at the final position.
    fn path_revealed(&self) -> bool {
        self.cursor == self.total_steps() - 1 && !self.result.path.is_empty()
    }
}

impl Scene for PathScene {
    fn title(&self) -> &str {
        &self.title
    }

    fn total_steps(&self) -> usize {
        // initial + one per finalized cell + the path reveal
        self.result.visit_order.len() + 2
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
        std::time::Duration::from_millis(60)
    }

    fn diagram(&self) -> Text<'static> {
        let theme = &DEFAULT_THEME;
        let wave = &self.result.visit_order[..self.wave_len()];
        let on_path = |pos: Pos| self.path_revealed() && self.result.path.contains(&pos);
        let frontier = wave.last().copied();

        let mut lines = Vec::new();
        for row in 0..self.grid.rows() {
            let mut spans = Vec::with_capacity(self.grid.cols());
            for col in 0..self.grid.cols() {
                let pos = (row, col);
                let cell = self.grid.cell(pos);

                let (glyph, style) = if pos == self.start {
                    ("S", Style::default().fg(theme.success).add_modifier(Modifier::BOLD))
                } else if pos == self.goal {
                    ("G", Style::default().fg(theme.error).add_modifier(Modifier::BOLD))
                } else if cell.wall {
                    ("█", Style::default().fg(theme.comment))
                } else if on_path(pos) {
                    ("●", Style::default().fg(theme.path).add_modifier(Modifier::BOLD))
                } else if frontier == Some(pos) {
                    ("o", Style::default().fg(theme.highlight))
                } else if wave.contains(&pos) {
                    ("o", Style::default().fg(theme.visited))
                } else if cell.weight > 1 {
                    // expensive terrain reads as its weight digit
                    weight_glyph(cell.weight, theme)
                } else {
                    ("·", Style::default().fg(theme.comment))
                };
                spans.push(Span::styled(format!("{glyph} "), style));
            }
            lines.push(Line::from(spans));
        }
        Text::from(lines)
    }

    fn narration(&self) -> Vec<Line<'static>> {
        let theme = &DEFAULT_THEME;
        let mut lines: Vec<Line> = self.result.visit_order[..self.wave_len()]
            .iter()
            .map(|(r, c)| {
                Line::from(Span::styled(
                    format!("Finalized ({r}, {c})"),
                    Style::default().fg(theme.visited),
                ))
            })
            .collect();
        if self.cursor == self.total_steps() - 1 {
            let summary = match self.result.cost {
                Some(cost) => format!(
                    "Path found: {} cells, cost {cost:.2}",
                    self.result.path.len()
                ),
                None => "Goal unreachable: no path".to_string(),
            };
            let color = if self.result.cost.is_some() {
                theme.success
            } else {
                theme.error
            };
            lines.push(Line::from(Span::styled(
                summary,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )));
        }
        lines
    }

    fn status(&self) -> String {
        if self.cursor == 0 {
            format!(
                "{}×{} grid, start {:?}, goal {:?}",
                self.grid.rows(),
                self.grid.cols(),
                self.start,
                self.goal
            )
        } else if self.cursor == self.total_steps() - 1 {
            match self.result.cost {
                Some(cost) => format!("Done: path cost {cost:.2}"),
                None => "Done: goal unreachable".to_string(),
            }
        } else {
            format!(
                "Explored {}/{} cells",
                self.wave_len(),
                self.result.visit_order.len()
            )
        }
    }

    fn achievement(&self) -> Option<&'static str> {
        (self.path_revealed()).then_some("path_trace_watched")
    }
}

fn weight_glyph(weight: u32, theme: &crate::ui::theme::Theme) -> (&'static str, Style) {
    let glyph = match weight.min(9) {
        2 => "2",
        3 => "3",
        4 => "4",
        5 => "5",
        6 => "6",
        7 => "7",
        8 => "8",
        _ => "9",
    };
    (glyph, Style::default().fg(theme.secondary))
}
