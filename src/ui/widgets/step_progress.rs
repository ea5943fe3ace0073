//! Wizard step list with per-step status marks

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use checkmate::wizard::{Phase, Step};

use crate::ui::theme;
use crate::ui::widgets::Spinner;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepMark {
    Pending,
    Current,
    Sending,
    Done,
}

impl StepMark {
    /// Mark for `step` given where the wizard is
    pub fn for_step(step: Step, phase: Phase) -> Self {
        match phase {
            Phase::Collecting { step: current, .. } => {
                if step.index() < current.index() {
                    StepMark::Done
                } else if step == current {
                    StepMark::Current
                } else {
                    StepMark::Pending
                }
            }
            Phase::Submitting if step.is_last() => StepMark::Sending,
            Phase::Submitting | Phase::Succeeded => StepMark::Done,
        }
    }
}

pub struct StepProgress {
    phase: Phase,
    /// (step number, total) as reported by the wizard
    progress: (usize, usize),
    spinner_state: usize,
}

impl StepProgress {
    pub fn new(phase: Phase, progress: (usize, usize), spinner_state: usize) -> Self {
        Self {
            phase,
            progress,
            spinner_state,
        }
    }
}

impl Widget for StepProgress {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = Step::ALL
            .iter()
            .map(|step| {
                let (icon, style) = match StepMark::for_step(*step, self.phase) {
                    StepMark::Pending => ("[ ]".to_string(), theme::dim()),
                    StepMark::Current => ("[>]".to_string(), theme::info()),
                    StepMark::Sending => {
                        let spinner = Spinner::new(self.spinner_state);
                        (format!("[{}]", spinner.char()), theme::info())
                    }
                    StepMark::Done => ("[✓]".to_string(), theme::success()),
                };
                Line::from(vec![
                    Span::styled(format!(" {} ", icon), style),
                    Span::styled(step.title(), theme::text()),
                ])
            })
            .collect();

        let (n, total) = self.progress;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border())
            .title(Span::styled(format!(" Step {} / {} ", n, total), theme::title()));

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
