//! UI-side state for the registration screen

use std::time::{Duration, Instant};

use checkmate::wizard::{Notice, Step, LANGUAGES};

/// Input collaborator state for the step on screen
///
/// This is what the user is typing or selecting. It only reaches the
/// wizard once it validates.
#[derive(Debug, Clone, Default)]
pub struct StepInput {
    /// Text typed for the email, password, and nickname steps
    pub text: String,
    /// Highlighted language on the language step
    pub language_selected: usize,
    /// Validation message for the current text
    pub error: Option<String>,
}

impl StepInput {
    /// Language code under the cursor
    pub fn selected_language(&self) -> &'static str {
        LANGUAGES[self.language_selected.min(LANGUAGES.len() - 1)].0
    }

    pub fn select_previous(&mut self) {
        self.language_selected = self.language_selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.language_selected + 1 < LANGUAGES.len() {
            self.language_selected += 1;
        }
    }

    /// Fresh input for the given step, pre-filled with a kept value
    pub fn for_step(step: Step, kept: &str) -> Self {
        let mut input = Self::default();
        match step {
            Step::Language => {
                if let Some(pos) = LANGUAGES.iter().position(|(code, _)| *code == kept) {
                    input.language_selected = pos;
                }
            }
            _ => input.text = kept.to_string(),
        }
        input
    }
}

/// A notice shown on screen until it expires
#[derive(Debug, Clone)]
pub struct Toast {
    pub notice: Notice,
    pub shown_at: Instant,
}

impl Toast {
    pub fn new(notice: Notice) -> Self {
        Self {
            notice,
            shown_at: Instant::now(),
        }
    }

    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.shown_at.elapsed() >= ttl
    }
}

/// What to do once the TUI closes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExitAction {
    /// User left before finishing
    Cancelled,
    /// Registration done, user chose "go to login"
    GoToLogin { email: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_selection_is_clamped() {
        let mut input = StepInput::default();
        input.select_previous();
        assert_eq!(input.language_selected, 0);
        for _ in 0..LANGUAGES.len() + 3 {
            input.select_next();
        }
        assert_eq!(input.language_selected, LANGUAGES.len() - 1);
    }

    #[test]
    fn test_for_step_prefills() {
        let input = StepInput::for_step(Step::Language, "ja");
        assert_eq!(input.selected_language(), "ja");

        let input = StepInput::for_step(Step::Nickname, "neo");
        assert_eq!(input.text, "neo");
    }

    #[test]
    fn test_toast_expiry() {
        let toast = Toast::new(Notice::info("hi"));
        assert!(!toast.is_expired(Duration::from_secs(60)));
        assert!(toast.is_expired(Duration::ZERO));
    }
}
