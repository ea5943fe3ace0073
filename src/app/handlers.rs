//! Keyboard input handlers for the application

use anyhow::Result;
use crossterm::event::KeyCode;

use checkmate::constants::MAX_INPUT_LENGTH;
use checkmate::wizard::{Advance, Phase, Step};

use super::state::ExitAction;
use super::App;
use crate::commands;

impl App {
    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyCode) -> Result<()> {
        // Handle exit confirmation dialog
        if self.show_exit_confirm {
            match key {
                KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
                    self.should_quit = true;
                }
                KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
                    self.show_exit_confirm = false;
                }
                _ => {}
            }
            return Ok(());
        }

        if key == KeyCode::Esc {
            self.show_exit_confirm = true;
            return Ok(());
        }

        match self.wizard.phase() {
            Phase::Collecting {
                step: Step::Language,
                ..
            } => self.handle_language_key(key),
            Phase::Collecting { step, .. } => self.handle_text_key(key, step),
            // Request in flight: nothing to do until it returns
            Phase::Submitting => Ok(()),
            Phase::Succeeded => self.handle_success_key(key),
        }
    }

    fn handle_language_key(&mut self, key: KeyCode) -> Result<()> {
        match key {
            KeyCode::Up | KeyCode::Char('k') => self.input.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.input.select_next(),
            KeyCode::Enter => {
                let code = Step::Language.validate(self.input.selected_language())?;
                self.wizard.capture_language(code)?;
                self.press_advance();
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_text_key(&mut self, key: KeyCode, step: Step) -> Result<()> {
        match key {
            KeyCode::Char(c) => {
                if self.input.text.chars().count() < MAX_INPUT_LENGTH {
                    self.input.text.push(c);
                }
                self.report_input(step)?;
            }
            KeyCode::Backspace => {
                self.input.text.pop();
                self.report_input(step)?;
            }
            KeyCode::Enter => {
                self.press_advance();
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_success_key(&mut self, key: KeyCode) -> Result<()> {
        match key {
            KeyCode::Enter => self.press_advance(),
            KeyCode::Char('q') | KeyCode::Char('Q') => self.show_exit_confirm = true,
            _ => {}
        }
        Ok(())
    }

    /// Validate the typed text and tell the wizard whether it may advance
    fn report_input(&mut self, step: Step) -> Result<()> {
        match step.validate(&self.input.text) {
            Ok(value) => {
                self.wizard.capture_for(step, value)?;
                self.input.error = None;
            }
            Err(e) => {
                self.wizard.retract();
                self.input.error = if self.input.text.is_empty() {
                    None
                } else {
                    Some(e.to_string())
                };
            }
        }
        Ok(())
    }

    /// The advance button: next step, submit, or leave for login
    fn press_advance(&mut self) {
        match self.wizard.advance() {
            Advance::Moved(next) => self.show_step(next),
            Advance::Submit(submission) => {
                commands::register::start_submission(
                    self.cmd_tx.clone(),
                    self.api.clone(),
                    submission,
                );
            }
            Advance::Blocked => {
                if self.input.error.is_none() {
                    self.input.error = Some("Please fill this in first".to_string());
                }
            }
            Advance::ProceedToLogin => {
                self.exit_action = ExitAction::GoToLogin {
                    email: self.wizard.fields().email.clone(),
                };
                self.should_quit = true;
            }
            // Incomplete raised its own notice; Busy waits for the response
            Advance::Incomplete(_) | Advance::Busy => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use checkmate::api::ApiError;
    use checkmate::wizard::{
        NoticeLevel, RegistrationApi, RegistrationSubmission, RegistrationWizard,
    };
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::mpsc;

    use crate::commands::{ChannelNotifier, CommandMessage};

    struct FixedApi {
        accept: bool,
    }

    #[async_trait]
    impl RegistrationApi for FixedApi {
        async fn register(&self, _submission: &RegistrationSubmission) -> Result<(), ApiError> {
            if self.accept {
                Ok(())
            } else {
                Err(ApiError::Rejected {
                    status: 409,
                    message: "Nickname already taken".to_string(),
                })
            }
        }
    }

    fn app(accept: bool) -> (App, mpsc::Receiver<CommandMessage>) {
        let (tx, rx) = mpsc::channel(16);
        let wizard = RegistrationWizard::new(ChannelNotifier::new(tx.clone()));
        let api: Arc<dyn RegistrationApi> = Arc::new(FixedApi { accept });
        (App::new(wizard, api, tx, Duration::from_secs(3)), rx)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyCode::Char(c)).unwrap();
        }
    }

    /// Fill every step and press Enter on the nickname
    fn fill_and_submit(app: &mut App) {
        app.handle_key(KeyCode::Down).unwrap();
        app.handle_key(KeyCode::Enter).unwrap();
        type_text(app, "a@b.com");
        app.handle_key(KeyCode::Enter).unwrap();
        type_text(app, "password1");
        app.handle_key(KeyCode::Enter).unwrap();
        type_text(app, "neo");
        app.handle_key(KeyCode::Enter).unwrap();
    }

    #[tokio::test]
    async fn test_enter_on_empty_text_is_blocked() {
        let (mut app, _rx) = app(true);
        app.handle_key(KeyCode::Enter).unwrap();
        assert_eq!(app.wizard.current_step(), Some(Step::Email));

        app.handle_key(KeyCode::Enter).unwrap();
        assert_eq!(app.wizard.current_step(), Some(Step::Email));
        assert!(app.input.error.is_some());
    }

    #[tokio::test]
    async fn test_invalid_text_retracts_readiness() {
        let (mut app, _rx) = app(true);
        app.handle_key(KeyCode::Enter).unwrap();
        type_text(&mut app, "a@b.com");
        assert!(app.wizard.can_advance());

        app.handle_key(KeyCode::Backspace).unwrap();
        app.handle_key(KeyCode::Backspace).unwrap();
        app.handle_key(KeyCode::Backspace).unwrap();
        app.handle_key(KeyCode::Backspace).unwrap();
        assert!(!app.wizard.can_advance());
        assert!(app.input.error.is_some());
    }

    #[tokio::test]
    async fn test_full_flow_succeeds_and_goes_to_login() {
        let (mut app, mut rx) = app(true);
        fill_and_submit(&mut app);
        assert_eq!(app.wizard.phase(), Phase::Submitting);
        assert_eq!(app.wizard.fields().language, "en");

        // Enter while waiting does nothing
        app.handle_key(KeyCode::Enter).unwrap();
        assert_eq!(app.wizard.phase(), Phase::Submitting);

        let msg = rx.recv().await.unwrap();
        app.handle_command_message(msg).unwrap();
        assert!(app.wizard.is_complete());

        let notice = rx.recv().await.unwrap();
        app.handle_command_message(notice).unwrap();
        assert_eq!(
            app.toast.as_ref().map(|t| t.notice.level),
            Some(NoticeLevel::Success)
        );

        app.handle_key(KeyCode::Enter).unwrap();
        assert!(app.should_quit);
        assert_eq!(
            app.exit_action,
            ExitAction::GoToLogin {
                email: "a@b.com".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_rejection_returns_to_nickname_with_values() {
        let (mut app, mut rx) = app(false);
        fill_and_submit(&mut app);

        let msg = rx.recv().await.unwrap();
        app.handle_command_message(msg).unwrap();
        assert_eq!(app.wizard.current_step(), Some(Step::Nickname));
        assert_eq!(app.input.text, "neo");
        assert!(app.wizard.can_advance());

        let notice = rx.recv().await.unwrap();
        app.handle_command_message(notice).unwrap();
        let toast = app.toast.as_ref().unwrap();
        assert_eq!(toast.notice.level, NoticeLevel::Error);
        assert!(toast.notice.message.contains("Nickname already taken"));

        // Retry is one keypress away
        app.handle_key(KeyCode::Enter).unwrap();
        assert_eq!(app.wizard.phase(), Phase::Submitting);
    }

    #[tokio::test]
    async fn test_escape_asks_before_quitting() {
        let (mut app, _rx) = app(true);
        app.handle_key(KeyCode::Esc).unwrap();
        assert!(app.show_exit_confirm);
        app.handle_key(KeyCode::Char('n')).unwrap();
        assert!(!app.show_exit_confirm);
        assert!(!app.should_quit);

        app.handle_key(KeyCode::Esc).unwrap();
        app.handle_key(KeyCode::Enter).unwrap();
        assert!(app.should_quit);
        assert_eq!(app.exit_action, ExitAction::Cancelled);
    }
}
