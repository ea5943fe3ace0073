//! Common layout helpers

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Create a centered box with specified percentage width and height
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// Create a centered box with fixed width and height
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Split the registration card: header, progress, body, button, toast, footer
pub struct WizardAreas {
    pub header: Rect,
    pub progress: Rect,
    pub body: Rect,
    pub button: Rect,
    pub toast: Rect,
    pub footer: Rect,
}

pub fn wizard_layout(area: Rect) -> WizardAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(6), // Step list
            Constraint::Min(8),    // Step body
            Constraint::Length(3), // Button
            Constraint::Length(1), // Toast
            Constraint::Length(1), // Footer
        ])
        .split(area);
    WizardAreas {
        header: chunks[0],
        progress: chunks[1],
        body: chunks[2],
        button: chunks[3],
        toast: chunks[4],
        footer: chunks[5],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_fixed_clamps_to_area() {
        let area = Rect::new(0, 0, 20, 10);
        let rect = centered_fixed(40, 7, area);
        assert_eq!(rect.width, 20);
        assert_eq!(rect.height, 7);
        assert_eq!(rect.y, 1);
    }

    #[test]
    fn test_wizard_layout_fits() {
        let areas = wizard_layout(Rect::new(0, 0, 60, 30));
        assert_eq!(areas.header.height, 3);
        assert_eq!(areas.footer.y + areas.footer.height, 30);
        assert!(areas.body.height >= 8);
    }
}
