//! Application state management
//!
//! This module contains the core application state and is split into:
//! - `state.rs` - Screen-side state (input buffer, toasts, exit action)
//! - `handlers.rs` - Keyboard input handlers
//! - `messages.rs` - Command message handling

mod handlers;
mod messages;
pub mod state;

use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

use checkmate::wizard::{RegistrationApi, RegistrationWizard, Step};

use checkmate::constants::SPINNER_TICK_MS;

use crate::commands::CommandMessage;

pub use state::{ExitAction, StepInput, Toast};

/// Main application state
pub struct App {
    pub wizard: RegistrationWizard,
    pub input: StepInput,
    pub toast: Option<Toast>,
    pub should_quit: bool,
    pub show_exit_confirm: bool,
    pub exit_action: ExitAction,
    pub spinner_state: usize,
    pub last_tick: Instant,
    toast_ttl: Duration,
    api: Arc<dyn RegistrationApi>,
    cmd_tx: mpsc::Sender<CommandMessage>,
}

impl App {
    pub fn new(
        wizard: RegistrationWizard,
        api: Arc<dyn RegistrationApi>,
        cmd_tx: mpsc::Sender<CommandMessage>,
        toast_ttl: Duration,
    ) -> Self {
        Self {
            wizard,
            input: StepInput::default(),
            toast: None,
            should_quit: false,
            show_exit_confirm: false,
            exit_action: ExitAction::Cancelled,
            spinner_state: 0,
            last_tick: Instant::now(),
            toast_ttl,
            api,
            cmd_tx,
        }
    }

    /// Called on each tick to update animations and expire toasts
    pub fn tick(&mut self) {
        if self.last_tick.elapsed().as_millis() >= SPINNER_TICK_MS {
            self.spinner_state = (self.spinner_state + 1) % 10;
            self.last_tick = Instant::now();
        }
        if self
            .toast
            .as_ref()
            .is_some_and(|t| t.is_expired(self.toast_ttl))
        {
            self.toast = None;
        }
    }

    /// Reset the input collaborator for a newly shown step
    fn show_step(&mut self, step: Step) {
        self.input = StepInput::for_step(step, self.wizard.fields().get(step));
    }
}
