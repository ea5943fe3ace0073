//! Registration wizard screens

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use checkmate::wizard::{NoticeLevel, Phase, Step, LANGUAGES, WELCOME_MESSAGE};

use super::helpers::{draw_button, draw_footer, draw_header};
use crate::app::{App, StepInput, Toast};
use crate::ui::layout::{centered_rect, wizard_layout};
use crate::ui::theme;
use crate::ui::widgets::{ChoiceList, Spinner, StepProgress};

/// Draw the wizard while steps are being collected or submitted
pub fn draw_wizard(frame: &mut Frame, app: &App) {
    let center = centered_rect(60, 90, frame.area());
    let areas = wizard_layout(center);
    let wizard = &app.wizard;

    draw_header(frame, areas.header, "Sign Up");

    frame.render_widget(
        StepProgress::new(wizard.phase(), wizard.progress(), app.spinner_state),
        areas.progress,
    );

    match wizard.phase() {
        Phase::Collecting {
            step: Step::Language,
            ..
        } => draw_language_step(frame, areas.body, &app.input),
        Phase::Collecting { step, .. } => draw_text_step(frame, areas.body, step, &app.input),
        Phase::Submitting => draw_submitting(frame, areas.body, app.spinner_state),
        Phase::Succeeded => {}
    }

    draw_button(
        frame,
        areas.button,
        wizard.button_label().text(),
        wizard.can_advance(),
    );
    draw_toast(frame, areas.toast, app.toast.as_ref());

    let hints: &[(&str, &str)] = match wizard.current_step() {
        Some(Step::Language) => &[("↑/↓", "Choose"), ("Enter", "Next"), ("Esc", "Quit")],
        Some(step) if step.is_last() => &[("Enter", "Sign up"), ("Esc", "Quit")],
        Some(_) => &[("Enter", "Next"), ("Esc", "Quit")],
        None => &[("Esc", "Quit")],
    };
    draw_footer(frame, areas.footer, hints);
}

fn draw_language_step(frame: &mut Frame, area: Rect, input: &StepInput) {
    let title = format!(" {} ", Step::Language.prompt());
    let list = ChoiceList::new(LANGUAGES, input.language_selected).title(&title);
    frame.render_widget(list, area);
}

fn draw_text_step(frame: &mut Frame, area: Rect, step: Step, input: &StepInput) {
    let shown = if step.is_secret() {
        "*".repeat(input.text.chars().count())
    } else {
        input.text.clone()
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(step.prompt(), theme::text())),
        Line::from(""),
        Line::from(vec![
            Span::styled("> ", theme::info()),
            Span::styled(shown, theme::text()),
            Span::styled("_", theme::info()),
        ]),
        Line::from(""),
    ];

    match &input.error {
        Some(err) => lines.push(Line::from(Span::styled(err.as_str(), theme::error()))),
        None => lines.push(Line::from(Span::styled(step.hint(), theme::dim()))),
    }

    let body = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border())
            .title(Span::styled(format!(" {} ", step.title()), theme::title())),
    );
    frame.render_widget(body, area);
}

fn draw_submitting(frame: &mut Frame, area: Rect, spinner_state: usize) {
    let spinner = Spinner::new(spinner_state);
    let body = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(spinner.char().to_string(), theme::info()),
            Span::styled(" Creating your account...", theme::text()),
        ]),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border()),
    );
    frame.render_widget(body, area);
}

/// Draw the welcome screen shown after a successful registration
pub fn draw_success(frame: &mut Frame, app: &App) {
    let center = centered_rect(60, 90, frame.area());
    let areas = wizard_layout(center);
    let fields = app.wizard.fields();

    draw_header(frame, areas.header, "Sign Up");

    frame.render_widget(
        StepProgress::new(app.wizard.phase(), app.wizard.progress(), app.spinner_state),
        areas.progress,
    );

    let body = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(WELCOME_MESSAGE, theme::success())),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Nickname: ", theme::dim()),
            Span::styled(fields.nickname.as_str(), theme::text()),
        ]),
        Line::from(vec![
            Span::styled("  Email:    ", theme::dim()),
            Span::styled(fields.email.as_str(), theme::text()),
        ]),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_active()),
    );
    frame.render_widget(body, areas.body);

    draw_button(frame, areas.button, app.wizard.button_label().text(), true);
    draw_toast(frame, areas.toast, app.toast.as_ref());
    draw_footer(frame, areas.footer, &[("Enter", "Go to login"), ("q", "Quit")]);
}

fn draw_toast(frame: &mut Frame, area: Rect, toast: Option<&Toast>) {
    let Some(toast) = toast else {
        return;
    };
    let style = match toast.notice.level {
        NoticeLevel::Info => theme::info(),
        NoticeLevel::Success => theme::success(),
        NoticeLevel::Error => theme::error(),
    };
    let line = Paragraph::new(Line::from(Span::styled(toast.notice.message.as_str(), style)))
        .alignment(Alignment::Center);
    frame.render_widget(line, area);
}
