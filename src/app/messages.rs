//! Command message handling for the application

use anyhow::Result;

use super::state::Toast;
use super::App;
use crate::commands::CommandMessage;

impl App {
    /// Handle messages from background tasks
    pub fn handle_command_message(&mut self, msg: CommandMessage) -> Result<()> {
        match msg {
            CommandMessage::Notice(notice) => {
                tracing::debug!("Notice: {}", notice);
                self.toast = Some(Toast::new(notice));
            }
            CommandMessage::RegistrationFinished(result) => {
                let succeeded = self.wizard.finish_submission(result);
                if !succeeded {
                    // Back on the last step; show what the user entered
                    if let Some(step) = self.wizard.current_step() {
                        self.show_step(step);
                    }
                }
            }
        }
        Ok(())
    }
}
