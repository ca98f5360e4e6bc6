//! Stateless pane rendering
//!
//! Three fixed panes: the diagram (the algorithm's current structure), the
//! narration log (one line per step taken so far), and a single-row status
//! bar with keybindings and playback badges.

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the diagram pane with a scroll offset clamped to the content.
pub fn render_diagram(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    content: Text<'static>,
    focused: bool,
    scroll: &mut usize,
) {
    let border = if focused {
        DEFAULT_THEME.border_focused
    } else {
        DEFAULT_THEME.border_normal
    };

    let inner_height = area.height.saturating_sub(2) as usize;
    let max_scroll = content.lines.len().saturating_sub(inner_height);
    *scroll = (*scroll).min(max_scroll);

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(format!(" {title} "))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        )
        .scroll((*scroll as u16, 0));
    frame.render_widget(paragraph, area);
}

/// Render the narration log. `scroll == usize::MAX` pins to the bottom,
/// which is what stepping does so the newest line stays visible.
pub fn render_narration(
    frame: &mut Frame,
    area: Rect,
    lines: Vec<Line<'static>>,
    focused: bool,
    scroll: &mut usize,
) {
    let border = if focused {
        DEFAULT_THEME.border_focused
    } else {
        DEFAULT_THEME.border_normal
    };

    let inner_height = area.height.saturating_sub(2) as usize;
    let max_scroll = lines.len().saturating_sub(inner_height);
    *scroll = (*scroll).min(max_scroll);

    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .title(" Narration ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        )
        .scroll((*scroll as u16, 0));
    frame.render_widget(paragraph, area);
}

/// Render the status bar at the bottom.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    current_step: usize,
    total_steps: usize,
    is_playing: bool,
    is_error: bool,
) {
    let layout = ratatui::layout::Layout::default()
        .direction(ratatui::layout::Direction::Horizontal)
        .constraints([
            ratatui::layout::Constraint::Percentage(55),
            ratatui::layout::Constraint::Percentage(45),
        ])
        .split(area);

    // Left side: step counter and scene status
    let left_spans = vec![
        Span::styled(
            format!(" Step {}/{} ", current_step + 1, total_steps),
            Style::default()
                .bg(if is_error {
                    DEFAULT_THEME.error
                } else {
                    DEFAULT_THEME.primary
                })
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {message} "),
            Style::default().bg(DEFAULT_THEME.status_bg).fg(if is_error {
                DEFAULT_THEME.error
            } else {
                DEFAULT_THEME.fg
            }),
        ),
    ];
    let left = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Left);
    frame.render_widget(left, layout[0]);

    // Right side: keybinds and playback badges
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.comment);

    let mut right_spans = vec![
        Span::styled(" ←/→ ", key_style),
        Span::styled(" step ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ⎵ ", key_style),
        Span::styled(" play ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" r ", key_style),
        Span::styled(" reset ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" q ", key_style),
        Span::styled(" quit ", desc_style),
    ];

    let is_at_start = current_step == 0;
    let is_at_end = current_step + 1 >= total_steps;
    if is_playing {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            " ▶ PLAYING ",
            Style::default()
                .bg(DEFAULT_THEME.secondary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    } else if is_at_end {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            " END ",
            Style::default()
                .bg(DEFAULT_THEME.error)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    } else if is_at_start {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            " START ",
            Style::default()
                .bg(DEFAULT_THEME.success)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let right = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Right);
    frame.render_widget(right, layout[1]);
}
