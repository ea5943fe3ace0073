//! Pieces shared by the wizard screens

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme;

/// Boxed screen title with the service name on the border
pub fn draw_header(frame: &mut Frame, area: Rect, title: &str) {
    let header = Paragraph::new(Line::from(Span::styled(title, theme::title())))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::border_active())
                .title(Span::styled(" Checkmate ", theme::dim())),
        );
    frame.render_widget(header, area);
}

/// Key hints as `[key] action` pairs
pub fn draw_footer(frame: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let mut spans = Vec::with_capacity(hints.len() * 4);
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled("[", theme::dim()));
        spans.push(Span::styled(*key, theme::key_hint()));
        spans.push(Span::styled(format!("] {}", action), theme::dim()));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

/// Advance button, greyed out while it cannot be pressed
pub fn draw_button(frame: &mut Frame, area: Rect, label: &str, enabled: bool) {
    let (style, border) = if enabled {
        (theme::button(), theme::border_active())
    } else {
        (theme::button_disabled(), theme::dim())
    };
    let button = Paragraph::new(Line::from(Span::styled(format!("  {}  ", label), style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border));
    frame.render_widget(button, area);
}
