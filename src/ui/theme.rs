//! Checkmate color theme

use ratatui::style::{Color, Modifier, Style};

// Brand colors - Violet/Cyan theme
pub const PRIMARY: Color = Color::Rgb(94, 92, 230);
pub const SECONDARY: Color = Color::Cyan;
pub const SUCCESS: Color = Color::Green;
pub const ERROR: Color = Color::Red;
pub const TEXT: Color = Color::White;
pub const DIM: Color = Color::DarkGray;

/// Title style (headers)
pub fn title() -> Style {
    Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
}

/// Normal text
pub fn text() -> Style {
    Style::default().fg(TEXT)
}

/// Dimmed/inactive text
pub fn dim() -> Style {
    Style::default().fg(DIM)
}

/// Selected/highlighted item
pub fn selected() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(SECONDARY)
        .add_modifier(Modifier::BOLD)
}

/// Success message
pub fn success() -> Style {
    Style::default().fg(SUCCESS)
}

/// Error message
pub fn error() -> Style {
    Style::default().fg(ERROR)
}

/// Border style
pub fn border() -> Style {
    Style::default().fg(SECONDARY)
}

/// Active border (focused)
pub fn border_active() -> Style {
    Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
}

/// Key hint style
pub fn key_hint() -> Style {
    Style::default().fg(SECONDARY)
}

/// Info style (spinner, prompts)
pub fn info() -> Style {
    Style::default().fg(SECONDARY)
}

/// Enabled action button
pub fn button() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(TEXT)
        .add_modifier(Modifier::BOLD)
}

/// Disabled action button
pub fn button_disabled() -> Style {
    Style::default().fg(DIM).bg(Color::Reset)
}
