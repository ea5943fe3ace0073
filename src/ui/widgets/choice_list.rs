//! Single-choice list for the language step

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, StatefulWidget, Widget},
};

use crate::ui::theme;

/// Renders `(code, label)` choices with the highlighted one marked
pub struct ChoiceList<'a> {
    choices: &'a [(&'a str, &'a str)],
    highlighted: usize,
    title: Option<&'a str>,
}

impl<'a> ChoiceList<'a> {
    pub fn new(choices: &'a [(&'a str, &'a str)], highlighted: usize) -> Self {
        Self {
            choices,
            highlighted: highlighted.min(choices.len().saturating_sub(1)),
            title: None,
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }
}

impl Widget for ChoiceList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = self
            .choices
            .iter()
            .enumerate()
            .map(|(i, (code, label))| {
                let on = i == self.highlighted;
                let (marker, style) = if on {
                    ("(*) ", theme::selected())
                } else {
                    ("( ) ", theme::text())
                };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, style),
                    Span::styled(format!("{} ({})", label, code), style),
                ]))
            })
            .collect();

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border());
        if let Some(title) = self.title {
            block = block.title(Span::styled(title, theme::title()));
        }

        let mut state = ListState::default().with_selected(Some(self.highlighted));
        StatefulWidget::render(List::new(items).block(block), area, buf, &mut state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_is_clamped() {
        let choices = [("ko", "Korean"), ("en", "English")];
        assert_eq!(ChoiceList::new(&choices, 9).highlighted, 1);
        assert_eq!(ChoiceList::new(&[], 3).highlighted, 0);
    }
}
