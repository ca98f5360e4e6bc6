//! DSL sandbox playback scene
//!
//! Unlike the trace scenes this one wraps a live interpreter: stepping
//! forward executes the next instruction for real, and there is no stepping
//! back — reset is the only way to rewind, exactly as in the sandbox
//! contract. The auto-play delay comes from the instruction that just ran,
//! so `sleep 1200` actually holds the animation for 1.2 seconds.

use crate::dsl::sandbox::DEFAULT_TICK;
use crate::dsl::{Sandbox, StepOutcome};
use crate::ui::scenes::Scene;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use std::time::Duration;

pub struct DslScene {
    sandbox: Sandbox,
    source_lines: Vec<String>,
    next_delay: Duration,
}

impl DslScene {
    pub fn new(sandbox: Sandbox, source: &str) -> Self {
        DslScene {
            sandbox,
            source_lines: source.lines().map(|l| l.to_string()).collect(),
            next_delay: DEFAULT_TICK,
        }
    }
}

impl Scene for DslScene {
    fn title(&self) -> &str {
        "Sort Sandbox"
    }

    fn total_steps(&self) -> usize {
        self.sandbox.program_len() + 1
    }

    fn cursor(&self) -> usize {
        self.sandbox.pc()
    }

    fn step_forward(&mut self) -> bool {
        match self.sandbox.step() {
            StepOutcome::Ran { delay } => {
                self.next_delay = delay;
                true
            }
            StepOutcome::Finished | StepOutcome::Halted => false,
        }
    }

    fn step_back(&mut self) -> bool {
        false // the sandbox only runs forward; reset to rewind
    }

    fn reset(&mut self) {
        self.sandbox.reset();
        self.next_delay = DEFAULT_TICK;
    }

    fn play_delay(&self) -> Duration {
        self.next_delay
    }

    fn diagram(&self) -> Text<'static> {
        let theme = &DEFAULT_THEME;
        let mut lines = Vec::new();

        // Array with marks and the highlighted pair
        let max = self.sandbox.array().iter().copied().max().unwrap_or(1).max(1);
        for (i, &v) in self.sandbox.array().iter().enumerate() {
            let highlighted = self
                .sandbox
                .highlight()
                .is_some_and(|(a, b)| i == a || i == b);
            let marked = self.sandbox.marked().contains(&i);

            let style = if highlighted {
                Style::default()
                    .fg(theme.highlight)
                    .add_modifier(Modifier::BOLD)
            } else if marked {
                Style::default().fg(theme.marked)
            } else {
                Style::default().fg(theme.fg)
            };
            let width = (v.max(0) as usize * 30 / max.max(1) as usize).max(1);
            let mark = if marked { "✓" } else { " " };
            lines.push(Line::from(vec![
                Span::styled(format!("{i:>3} {mark} "), style),
                Span::styled(format!("{} {v}", "█".repeat(width)), style),
            ]));
        }

        lines.push(Line::default());

        // Program listing with the current line marked
        let current = self.sandbox.current_line();
        let error_line = self.sandbox.error().map(|e| e.line());
        for (i, text) in self.source_lines.iter().enumerate() {
            let line_no = i + 1;
            let is_current = current == Some(line_no);
            let is_error = error_line == Some(line_no);

            let style = if is_error {
                Style::default().fg(theme.error).add_modifier(Modifier::BOLD)
            } else if is_current {
                Style::default()
                    .fg(theme.highlight)
                    .add_modifier(Modifier::BOLD)
            } else if text.trim_start().starts_with('#') {
                Style::default().fg(theme.comment)
            } else {
                Style::default().fg(theme.fg)
            };
            let marker = if is_current || is_error { "→" } else { " " };
            lines.push(Line::from(Span::styled(
                format!("{marker} {line_no:>3} {text}"),
                style,
            )));
        }

        Text::from(lines)
    }

    fn narration(&self) -> Vec<Line<'static>> {
        let theme = &DEFAULT_THEME;
        let mut lines = vec![Line::from(Span::styled(
            format!(
                "{}/{} instructions executed",
                self.sandbox.pc(),
                self.sandbox.program_len()
            ),
            Style::default().fg(theme.fg),
        ))];
        if let Some(err) = self.sandbox.error() {
            lines.push(Line::from(Span::styled(
                err.to_string(),
                Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                "Execution halted; press r to reset".to_string(),
                Style::default().fg(theme.comment),
            )));
        } else if self.sandbox.finished() {
            lines.push(Line::from(Span::styled(
                "Program finished".to_string(),
                Style::default().fg(theme.success),
            )));
        }
        lines
    }

    fn status(&self) -> String {
        if let Some(err) = self.sandbox.error() {
            format!("Error: {err}")
        } else if self.sandbox.finished() {
            "Program finished".to_string()
        } else {
            format!(
                "Instruction {}/{}",
                self.sandbox.pc(),
                self.sandbox.program_len()
            )
        }
    }

    fn achievement(&self) -> Option<&'static str> {
        // Only a clean, fully sorted finish counts
        let sorted = self.sandbox.array().windows(2).all(|w| w[0] <= w[1]);
        (self.sandbox.finished() && sorted).then_some("sandbox_sorted")
    }

    fn halted(&self) -> bool {
        self.sandbox.halted()
    }
}
