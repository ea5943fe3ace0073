//! Registration wizard state machine
//!
//! Flow: Language → Email → Password → Nickname → Submitting → Succeeded
//!
//! Each input step must be confirmed by its collaborator (`capture`)
//! before `advance` will move past it. Advancing from the nickname step
//! hands back a [`RegistrationSubmission`] for the caller to send; the
//! response comes back through [`RegistrationWizard::finish_submission`].
//! A rejected submission returns to the nickname step with every field
//! kept, so the user can simply try again.

use async_trait::async_trait;

use super::fields::{RegistrationFields, RegistrationSubmission};
use super::notice::{Notice, Notifier};
use super::step::Step;
use crate::api::ApiError;

/// Registration port: performs the network call for one attempt
#[async_trait]
pub trait RegistrationApi: Send + Sync {
    async fn register(&self, submission: &RegistrationSubmission) -> Result<(), ApiError>;
}

/// Where the wizard currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting on a step; `ready` is set once its value was captured
    Collecting { step: Step, ready: bool },
    /// Registration request in flight
    Submitting,
    /// Account created; only "go to login" remains
    Succeeded,
}

/// Result of pressing the advance button
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Current step has no confirmed value yet
    Blocked,
    /// Moved on to the given step
    Moved(Step),
    /// Final step reached with empty fields; nothing was sent
    Incomplete(Vec<Step>),
    /// Send this submission, then call `finish_submission`
    Submit(RegistrationSubmission),
    /// A submission is already in flight
    Busy,
    /// Registration is done; leave for the login screen
    ProceedToLogin,
}

/// Contextual label for the advance button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonLabel {
    Next,
    SignUp,
    SigningUp,
    GoToLogin,
}

impl ButtonLabel {
    pub fn text(self) -> &'static str {
        match self {
            ButtonLabel::Next => "Next",
            ButtonLabel::SignUp => "Sign up",
            ButtonLabel::SigningUp => "Signing up...",
            ButtonLabel::GoToLogin => "Go to login",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error("Expected a value for {expected}, got one for {got}")]
    StepMismatch { expected: Step, got: Step },
    #[error("Some fields were not filled in ({}). Please try again.", join_steps(.missing))]
    IncompleteFields { missing: Vec<Step> },
    #[error("{0} has not been confirmed yet")]
    NotReady(Step),
    #[error("Registration can only be sent from the last step (currently on {0})")]
    NotAtFinalStep(Step),
    #[error("A registration request is already in progress")]
    Busy,
    #[error("Registration is already complete")]
    Finished,
}

fn join_steps(steps: &[Step]) -> String {
    steps
        .iter()
        .map(|s| s.title())
        .collect::<Vec<_>>()
        .join(", ")
}

pub const WELCOME_MESSAGE: &str = "Welcome to Checkmate! Your account is ready.";

pub struct RegistrationWizard {
    phase: Phase,
    fields: RegistrationFields,
    notifier: Box<dyn Notifier>,
}

impl RegistrationWizard {
    pub fn new(notifier: impl Notifier + 'static) -> Self {
        Self {
            phase: Phase::Collecting {
                step: Step::Language,
                ready: false,
            },
            fields: RegistrationFields::default(),
            notifier: Box::new(notifier),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn fields(&self) -> &RegistrationFields {
        &self.fields
    }

    /// Step being collected, `None` while submitting or after success
    pub fn current_step(&self) -> Option<Step> {
        match self.phase {
            Phase::Collecting { step, .. } => Some(step),
            _ => None,
        }
    }

    pub fn can_advance(&self) -> bool {
        match self.phase {
            Phase::Collecting { ready, .. } => ready,
            Phase::Submitting => false,
            Phase::Succeeded => true,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Succeeded
    }

    /// (step number, total) for the "step N / total" indicator
    pub fn progress(&self) -> (usize, usize) {
        match self.phase {
            Phase::Collecting { step, .. } => (step.index() + 1, Step::COUNT),
            Phase::Submitting | Phase::Succeeded => (Step::COUNT, Step::COUNT),
        }
    }

    pub fn button_label(&self) -> ButtonLabel {
        match self.phase {
            Phase::Collecting { step, .. } if step.is_last() => ButtonLabel::SignUp,
            Phase::Collecting { .. } => ButtonLabel::Next,
            Phase::Submitting => ButtonLabel::SigningUp,
            Phase::Succeeded => ButtonLabel::GoToLogin,
        }
    }

    /// Record the current step's value and allow advancing
    pub fn capture(&mut self, value: impl Into<String>) -> Result<(), WizardError> {
        let step = self.collecting_step()?;
        self.fields.set(step, value.into());
        self.phase = Phase::Collecting { step, ready: true };
        Ok(())
    }

    pub fn capture_language(&mut self, value: impl Into<String>) -> Result<(), WizardError> {
        self.capture_for(Step::Language, value)
    }

    pub fn capture_email(&mut self, value: impl Into<String>) -> Result<(), WizardError> {
        self.capture_for(Step::Email, value)
    }

    pub fn capture_password(&mut self, value: impl Into<String>) -> Result<(), WizardError> {
        self.capture_for(Step::Password, value)
    }

    pub fn capture_nickname(&mut self, value: impl Into<String>) -> Result<(), WizardError> {
        self.capture_for(Step::Nickname, value)
    }

    /// Capture a value for `step`, which must be the step being collected
    pub fn capture_for(&mut self, step: Step, value: impl Into<String>) -> Result<(), WizardError> {
        let current = self.collecting_step()?;
        if current != step {
            return Err(WizardError::StepMismatch {
                expected: current,
                got: step,
            });
        }
        self.capture(value)
    }

    /// Withdraw readiness after the collaborator's input became invalid
    pub fn retract(&mut self) {
        if let Phase::Collecting { step, .. } = self.phase {
            self.phase = Phase::Collecting { step, ready: false };
        }
    }

    /// Press the advance button
    pub fn advance(&mut self) -> Advance {
        match self.phase {
            Phase::Collecting { ready: false, .. } => Advance::Blocked,
            Phase::Collecting { step, ready: true } => match step.next() {
                Some(next) => {
                    tracing::debug!("Wizard advanced: {} -> {}", step, next);
                    self.phase = Phase::Collecting {
                        step: next,
                        ready: false,
                    };
                    Advance::Moved(next)
                }
                None => self.begin_submission(),
            },
            Phase::Submitting => Advance::Busy,
            Phase::Succeeded => Advance::ProceedToLogin,
        }
    }

    fn begin_submission(&mut self) -> Advance {
        match self.fields.to_submission() {
            Ok(submission) => {
                tracing::info!("Submitting registration for {}", submission.email);
                self.phase = Phase::Submitting;
                Advance::Submit(submission)
            }
            Err(missing) => {
                let err = WizardError::IncompleteFields {
                    missing: missing.clone(),
                };
                tracing::warn!("Registration blocked: {}", err);
                self.notifier.notify(Notice::error(err.to_string()));
                Advance::Incomplete(missing)
            }
        }
    }

    /// Apply the response to a submission; returns true on success
    pub fn finish_submission(&mut self, result: Result<(), ApiError>) -> bool {
        if self.phase != Phase::Submitting {
            tracing::warn!("Ignoring submission result outside of submission ({:?})", self.phase);
            return false;
        }

        match result {
            Ok(()) => {
                tracing::info!("Registration succeeded for {}", self.fields.email);
                self.phase = Phase::Succeeded;
                self.notifier.notify(Notice::success(WELCOME_MESSAGE));
                true
            }
            Err(e) => {
                tracing::warn!("Registration rejected: {}", e);
                // Fields are kept so the user can retry as-is.
                self.phase = Phase::Collecting {
                    step: Step::Nickname,
                    ready: true,
                };
                self.notifier
                    .notify(Notice::error(format!("Registration failed: {}", e.user_message())));
                false
            }
        }
    }

    /// Advance from the final step and perform one registration attempt
    ///
    /// Returns whether the account was created. Nothing is sent unless the
    /// wizard sits on the nickname step with it confirmed and every field
    /// filled in.
    pub async fn submit(&mut self, api: &dyn RegistrationApi) -> Result<bool, WizardError> {
        let step = self.collecting_step()?;
        if !step.is_last() {
            return Err(WizardError::NotAtFinalStep(step));
        }

        match self.advance() {
            Advance::Submit(submission) => {
                let result = api.register(&submission).await;
                Ok(self.finish_submission(result))
            }
            Advance::Incomplete(missing) => Err(WizardError::IncompleteFields { missing }),
            _ => Err(WizardError::NotReady(step)),
        }
    }

    fn collecting_step(&self) -> Result<Step, WizardError> {
        match self.phase {
            Phase::Collecting { step, .. } => Ok(step),
            Phase::Submitting => Err(WizardError::Busy),
            Phase::Succeeded => Err(WizardError::Finished),
        }
    }
}
