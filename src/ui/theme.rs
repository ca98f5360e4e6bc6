use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub status_bg: Color,
    pub highlight: Color, // Yellow for compared/considered items
    pub accepted: Color,  // Green for accepted edges / placed queens
    pub rejected: Color,  // Red for rejected edges / attacked squares
    pub visited: Color,   // Teal for the exploration wave
    pub path: Color,      // Pink for the final route
    pub marked: Color,    // Green for marked/sorted indices
    pub scope: Color,     // Blue bracket over the active sub-array
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),
    secondary: Color::Rgb(250, 179, 135),
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175),
    border_normal: Color::Rgb(108, 112, 134),
    status_bg: Color::Rgb(50, 50, 70),
    highlight: Color::Rgb(249, 226, 175),
    accepted: Color::Rgb(166, 227, 161),
    rejected: Color::Rgb(243, 139, 168),
    visited: Color::Rgb(148, 226, 213),
    path: Color::Rgb(245, 194, 231),
    marked: Color::Rgb(166, 227, 161),
    scope: Color::Rgb(137, 180, 250),
};
