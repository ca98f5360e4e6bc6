//! Merge sort playback scene

use crate::engine::sort::{merge_sort_trace, SortStep, SortStepKind};
use crate::ui::scenes::Scene;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};

pub struct SortScene {
    input: Vec<i32>,
    steps: Vec<SortStep>,
    cursor: usize,
}

impl SortScene {
    pub fn new(input: Vec<i32>) -> Self {
        let steps = merge_sort_trace(&input);
        SortScene {
            input,
            steps,
            cursor: 0,
        }
    }

    /// The step shown at the cursor; `None` at position 0 (initial array).
    fn current(&self) -> Option<&SortStep> {
        self.cursor.checked_sub(1).map(|i| &self.steps[i])
    }

    fn values(&self) -> &[i32] {
        self.current().map_or(&self.input, |s| &s.values)
    }
}

impl Scene for SortScene {
    fn title(&self) -> &str {
        "Merge Sort"
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

        if let Some(s) = step {
            let scope = match s.mid {
                Some(mid) => format!("scope [{}..{}], mid {}", s.lo, s.hi, mid),
                None => format!("scope [{}..{}]", s.lo, s.hi),
            };
            lines.push(Line::from(Span::styled(
                scope,
                Style::default().fg(theme.scope),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "initial array".to_string(),
                Style::default().fg(theme.comment),
            )));
        }
        lines.push(Line::default());

        let max = self.values().iter().copied().max().unwrap_or(1).max(1);
        for (i, &v) in self.values().iter().enumerate() {
            let in_scope = step.is_some_and(|s| i >= s.lo && i <= s.hi);
            let highlighted = step.is_some_and(|s| s.highlights.contains(&i));

            let bar_style = if highlighted {
                Style::default()
                    .fg(theme.highlight)
                    .add_modifier(Modifier::BOLD)
            } else if in_scope {
                Style::default().fg(theme.primary)
            } else {
                Style::default().fg(theme.comment)
            };

            let width = (v.max(0) as usize * 30 / max.max(1) as usize).max(1);
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{i:>3} "),
                    Style::default().fg(if in_scope { theme.fg } else { theme.comment }),
                ),
                Span::styled(
                    if in_scope { "│" } else { " " }.to_string(),
                    Style::default().fg(theme.scope),
                ),
                Span::styled(format!(" {} {v}", "█".repeat(width)), bar_style),
            ]));
        }

        Text::from(lines)
    }

    fn narration(&self) -> Vec<Line<'static>> {
        let theme = &DEFAULT_THEME;
        self.steps[..self.cursor]
            .iter()
            .map(|s| {
                let color = match s.kind {
                    SortStepKind::Divide => theme.primary,
                    SortStepKind::Compare => theme.highlight,
                    SortStepKind::Place => theme.success,
                    SortStepKind::Copy => theme.secondary,
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
            None => format!("{} elements, ready to sort", self.input.len()),
        }
    }

    fn achievement(&self) -> Option<&'static str> {
        // The trace is complete once the last step (fully merged) is shown
        (self.cursor + 1 == self.total_steps()).then_some("merge_sort_watched")
    }
}
