//! Main TUI application state and logic

use crate::ui::scenes::Scene;
use crate::ui::store::ProgressStore;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Which pane is currently focused (for scrolling)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Diagram,
    Narration,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Diagram => FocusedPane::Narration,
            FocusedPane::Narration => FocusedPane::Diagram,
        }
    }
}

/// The main application state
pub struct App {
    /// The demo being played back
    scene: Box<dyn Scene>,

    /// Achievements and puzzle best scores
    store: ProgressStore,

    /// Currently focused pane
    focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    diagram_scroll: usize,
    narration_scroll: usize,

    /// Whether the app should quit
    should_quit: bool,

    /// Status message to display
    status_message: String,

    /// Whether auto-play mode is active
    is_playing: bool,

    /// Last time a step was taken in play mode
    last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    last_space_press: Instant,
}

impl App {
    pub fn new(scene: Box<dyn Scene>, store: ProgressStore) -> Self {
        let status_message = scene.status();
        App {
            scene,
            store,
            focused_pane: FocusedPane::Diagram,
            diagram_scroll: 0,
            narration_scroll: 0,
            should_quit: false,
            status_message,
            is_playing: false,
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or_else(Instant::now),
        }
    }

    /// Run the TUI event loop until quit.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Auto-play: the scene decides the per-step delay, so the DSL
            // sandbox's sleep instruction really holds the animation
            if self.is_playing && self.last_play_time.elapsed() >= self.scene.play_delay() {
                if self.scene.step_forward() {
                    self.on_advanced();
                } else {
                    self.is_playing = false;
                    self.status_message = if self.scene.halted() {
                        self.scene.status()
                    } else {
                        "Playback complete".to_string()
                    };
                    self.try_unlock();
                }
                self.last_play_time = Instant::now();
            }

            // Poll with timeout so auto-play keeps ticking
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
            .split(main_chunks[0]);

        super::panes::render_diagram(
            frame,
            columns[0],
            self.scene.title(),
            self.scene.diagram(),
            self.focused_pane == FocusedPane::Diagram,
            &mut self.diagram_scroll,
        );

        super::panes::render_narration(
            frame,
            columns[1],
            self.scene.narration(),
            self.focused_pane == FocusedPane::Narration,
            &mut self.narration_scroll,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.scene.cursor(),
            self.scene.total_steps(),
            self.is_playing,
            self.scene.halted(),
        );
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        // Scene-specific keys first (the puzzle claims the digits)
        if self.scene.handle_key(key, &mut self.store) {
            self.status_message = self.scene.status();
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let mut stepped = 0;
                for _ in 0..n {
                    if self.scene.step_forward() {
                        stepped += 1;
                    } else {
                        break;
                    }
                }
                self.status_message = format!("Stepped forward {stepped} step(s)");
                self.narration_scroll = usize::MAX;
                self.try_unlock();
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Left => {
                self.is_playing = false;
                if self.scene.step_back() {
                    self.status_message = self.scene.status();
                    self.narration_scroll = usize::MAX;
                } else {
                    self.status_message = "Cannot step backward".to_string();
                }
            }
            KeyCode::Right => {
                self.is_playing = false;
                if self.scene.step_forward() {
                    self.on_advanced();
                    self.try_unlock();
                } else {
                    self.status_message = if self.scene.halted() {
                        self.scene.status()
                    } else {
                        "Already at the end".to_string()
                    };
                }
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Diagram => {
                    self.diagram_scroll = self.diagram_scroll.saturating_sub(1);
                }
                FocusedPane::Narration => {
                    self.narration_scroll = self.narration_scroll.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Diagram => {
                    self.diagram_scroll = self.diagram_scroll.saturating_add(1);
                }
                FocusedPane::Narration => {
                    self.narration_scroll = self.narration_scroll.saturating_add(1);
                }
            },
            KeyCode::Char(' ') => {
                // Toggle auto-play (200ms debounce against key repeat)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.is_playing = !self.is_playing;
                    if self.is_playing {
                        // First play step fires immediately
                        self.last_play_time = Instant::now()
                            .checked_sub(self.scene.play_delay())
                            .unwrap_or_else(Instant::now);
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.status_message = "Paused".to_string();
                    }
                }
            }
            KeyCode::Enter => {
                // Jump to end
                self.is_playing = false;
                while self.scene.step_forward() {}
                self.status_message = "Jumped to end".to_string();
                self.narration_scroll = usize::MAX;
                self.try_unlock();
            }
            KeyCode::Backspace | KeyCode::Char('r') | KeyCode::Char('R') => {
                // Reset: stop scheduling and roll back to the initial state.
                // Safe from any state, including already-reset.
                self.is_playing = false;
                self.scene.reset();
                self.status_message = self.scene.status();
                self.narration_scroll = 0;
            }
            _ => {}
        }
    }

    fn on_advanced(&mut self) {
        self.status_message = self.scene.status();
        self.narration_scroll = usize::MAX;
    }

    /// Unlock the scene's achievement if its condition is met now.
    fn try_unlock(&mut self) {
        if let Some(key) = self.scene.achievement() {
            if self.store.unlock(key) {
                self.status_message = format!("Achievement unlocked: {key}");
            }
        }
    }
}
