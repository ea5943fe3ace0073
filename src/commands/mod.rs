//! Command execution module
//!
//! Long-running work runs in spawned tasks and reports back to the UI
//! through [`CommandMessage`]s. The one-shot CLI commands live here too.

pub mod answers;
pub mod login;
pub mod member;
pub mod prompt;
pub mod questions;
pub mod register;

use checkmate::api::ApiError;
use checkmate::wizard::{Notice, Notifier};
use tokio::sync::mpsc;

/// Messages sent from background tasks to the UI
#[derive(Debug)]
pub enum CommandMessage {
    /// Notice raised by the wizard, shown as a toast
    Notice(Notice),
    /// The registration request returned
    RegistrationFinished(Result<(), ApiError>),
}

/// Forwards wizard notices to the UI event loop
pub struct ChannelNotifier {
    tx: mpsc::Sender<CommandMessage>,
}

impl ChannelNotifier {
    pub fn new(tx: mpsc::Sender<CommandMessage>) -> Self {
        Self { tx }
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, notice: Notice) {
        if let Err(e) = self.tx.try_send(CommandMessage::Notice(notice)) {
            tracing::warn!("Dropped notice: {}", e);
        }
    }
}
