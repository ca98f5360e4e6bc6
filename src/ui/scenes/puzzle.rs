//! Interactive swap-puzzle scene
//!
//! The only scene driven by its own keys instead of the playback cursor:
//! digits pick two tile positions, the second pick performs the swap. On a
//! solve the scene records the score and unlocks the achievement itself —
//! the decision lives here in the presentation layer, after inspecting the
//! puzzle state, never inside `puzzle.rs`.

use crate::puzzle::Puzzle;
use crate::ui::scenes::Scene;
use crate::ui::store::ProgressStore;
use crate::ui::theme::DEFAULT_THEME;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};

pub struct PuzzleScene {
    puzzle: Puzzle,
    selected: Option<usize>,
    best: Option<u32>,
    solved_reported: bool,
}

impl PuzzleScene {
    pub fn new(puzzle: Puzzle, best: Option<u32>) -> Self {
        PuzzleScene {
            puzzle,
            selected: None,
            best,
            solved_reported: false,
        }
    }
}

impl Scene for PuzzleScene {
    fn title(&self) -> &str {
        "Swap Puzzle"
    }

    fn total_steps(&self) -> usize {
        1
    }

    fn cursor(&self) -> usize {
        0
    }

    fn step_forward(&mut self) -> bool {
        false
    }

    fn step_back(&mut self) -> bool {
        false
    }

    fn reset(&mut self) {
        self.puzzle.reset();
        self.selected = None;
        self.solved_reported = false;
    }

    fn diagram(&self) -> Text<'static> {
        let theme = &DEFAULT_THEME;
        let solved = self.puzzle.is_solved();

        let mut index_spans = vec![Span::styled(
            "pos  ".to_string(),
            Style::default().fg(theme.comment),
        )];
        let mut tile_spans = vec![Span::styled(
            "tile ".to_string(),
            Style::default().fg(theme.comment),
        )];
        for (i, &v) in self.puzzle.tiles().iter().enumerate() {
            let style = if self.selected == Some(i) {
                Style::default()
                    .fg(theme.highlight)
                    .add_modifier(Modifier::BOLD)
            } else if solved {
                Style::default().fg(theme.success)
            } else {
                Style::default().fg(theme.fg)
            };
            index_spans.push(Span::styled(
                format!("{i:^5}"),
                Style::default().fg(theme.comment),
            ));
            tile_spans.push(Span::styled(format!("[{v:^3}]"), style));
        }

        let mut lines = vec![Line::from(index_spans), Line::from(tile_spans)];
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            match self.selected {
                Some(i) => format!("selected position {i}; pick a second digit to swap"),
                None => "press a digit to select a position".to_string(),
            },
            Style::default().fg(theme.primary),
        )));
        if solved {
            lines.push(Line::from(Span::styled(
                format!("Solved in {} moves!", self.puzzle.moves()),
                Style::default()
                    .fg(theme.success)
                    .add_modifier(Modifier::BOLD),
            )));
        }
        Text::from(lines)
    }

    fn narration(&self) -> Vec<Line<'static>> {
        let theme = &DEFAULT_THEME;
        let mut lines = vec![Line::from(Span::styled(
            format!("Moves: {}", self.puzzle.moves()),
            Style::default().fg(theme.fg),
        ))];
        lines.push(Line::from(Span::styled(
            match self.best {
                Some(best) => format!("Best for '{}': {best} moves", self.puzzle.id()),
                None => format!("No recorded best for '{}' yet", self.puzzle.id()),
            },
            Style::default().fg(theme.comment),
        )));
        lines
    }

    fn status(&self) -> String {
        if self.puzzle.is_solved() {
            format!("Solved in {} moves", self.puzzle.moves())
        } else {
            format!("{} moves so far", self.puzzle.moves())
        }
    }

    fn handle_key(&mut self, key: KeyEvent, store: &mut ProgressStore) -> bool {
        let KeyCode::Char(c) = key.code else {
            return false;
        };
        let Some(digit) = c.to_digit(10) else {
            return false;
        };
        let pos = digit as usize;
        if pos >= self.puzzle.tiles().len() {
            return true; // consumed, but nothing to select
        }

        match self.selected.take() {
            None => self.selected = Some(pos),
            Some(first) => {
                self.puzzle.swap(first, pos);
                if self.puzzle.is_solved() && !self.solved_reported {
                    self.solved_reported = true;
                    store.unlock("puzzle_novice");
                    if store.record_best(self.puzzle.id(), self.puzzle.moves()) {
                        self.best = Some(self.puzzle.moves());
                    }
                }
            }
        }
        true
    }
}
