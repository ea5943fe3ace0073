//! Registration: background submission for the TUI and the headless flow

use anyhow::{bail, Result};
use std::sync::Arc;
use tokio::sync::mpsc;

use super::CommandMessage;
use checkmate::wizard::{
    Advance, RegistrationApi, RegistrationSubmission, RegistrationWizard, Step,
};

/// Send one registration attempt in the background
///
/// The result comes back as [`CommandMessage::RegistrationFinished`].
pub fn start_submission(
    tx: mpsc::Sender<CommandMessage>,
    api: Arc<dyn RegistrationApi>,
    submission: RegistrationSubmission,
) {
    tokio::spawn(async move {
        let result = api.register(&submission).await;
        if tx
            .send(CommandMessage::RegistrationFinished(result))
            .await
            .is_err()
        {
            tracing::warn!("UI closed before registration finished");
        }
    });
}

/// Values for a non-interactive registration
#[derive(Debug, Clone, Default)]
pub struct RegisterArgs {
    pub language: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub nickname: Option<String>,
}

impl RegisterArgs {
    pub fn is_empty(&self) -> bool {
        self.language.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.nickname.is_none()
    }

    fn value(&self, step: Step) -> Option<&str> {
        match step {
            Step::Language => self.language.as_deref(),
            Step::Email => self.email.as_deref(),
            Step::Password => self.password.as_deref(),
            Step::Nickname => self.nickname.as_deref(),
        }
    }
}

/// Drive the wizard from command line values instead of the TUI
///
/// Each flag plays the part of a step's input: it is validated, captured,
/// and followed by an advance, exactly as the interactive flow does.
pub async fn run_headless(
    wizard: &mut RegistrationWizard,
    api: &dyn RegistrationApi,
    args: &RegisterArgs,
) -> Result<()> {
    let missing: Vec<&str> = Step::ALL
        .into_iter()
        .filter(|s| args.value(*s).is_none())
        .map(|s| s.title())
        .collect();
    if !missing.is_empty() {
        bail!(
            "Pass all of --language, --email, --password, --nickname (missing: {}), or none to use the interactive wizard",
            missing.join(", ")
        );
    }

    for step in Step::ALL {
        let raw = args.value(step).unwrap_or_default();
        let value = step
            .validate(raw)
            .map_err(|e| anyhow::anyhow!("{}: {}", step, e))?;
        wizard.capture_for(step, value)?;

        if step.is_last() {
            break;
        }
        match wizard.advance() {
            Advance::Moved(_) => {}
            other => bail!("Unexpected wizard state after {}: {:?}", step, other),
        }
    }

    match wizard.submit(api).await {
        Ok(true) => Ok(()),
        Ok(false) => bail!("Registration was rejected"),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use checkmate::api::ApiError;
    use checkmate::wizard::{Notice, Notifier};
    use std::sync::Mutex;

    struct NullNotifier;

    impl Notifier for NullNotifier {
        fn notify(&self, _notice: Notice) {}
    }

    #[derive(Default)]
    struct RecordingApi {
        sent: Mutex<Vec<RegistrationSubmission>>,
    }

    #[async_trait]
    impl RegistrationApi for RecordingApi {
        async fn register(&self, submission: &RegistrationSubmission) -> Result<(), ApiError> {
            self.sent.lock().unwrap().push(submission.clone());
            Ok(())
        }
    }

    fn full_args() -> RegisterArgs {
        RegisterArgs {
            language: Some("EN".to_string()),
            email: Some(" a@b.com ".to_string()),
            password: Some("correct horse".to_string()),
            nickname: Some("neo".to_string()),
        }
    }

    #[tokio::test]
    async fn test_headless_registration_sends_normalized_values() {
        let mut wizard = RegistrationWizard::new(NullNotifier);
        let api = RecordingApi::default();

        run_headless(&mut wizard, &api, &full_args()).await.unwrap();

        let sent = api.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].language, "en");
        assert_eq!(sent[0].email, "a@b.com");
        assert_eq!(sent[0].password, "correct horse");
        assert!(wizard.is_complete());
    }

    #[tokio::test]
    async fn test_headless_requires_every_flag() {
        let mut wizard = RegistrationWizard::new(NullNotifier);
        let api = RecordingApi::default();
        let args = RegisterArgs {
            nickname: None,
            ..full_args()
        };

        let err = run_headless(&mut wizard, &api, &args).await.unwrap_err();
        assert!(err.to_string().contains("Nickname"));
        assert!(api.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_headless_rejects_invalid_email() {
        let mut wizard = RegistrationWizard::new(NullNotifier);
        let api = RecordingApi::default();
        let args = RegisterArgs {
            email: Some("not-an-email".to_string()),
            ..full_args()
        };

        let err = run_headless(&mut wizard, &api, &args).await.unwrap_err();
        assert!(err.to_string().starts_with("Email"));
        assert!(api.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_start_submission_reports_back() {
        let (tx, mut rx) = mpsc::channel(4);
        let api: Arc<dyn RegistrationApi> = Arc::new(RecordingApi::default());
        let submission = RegistrationSubmission {
            language: "en".to_string(),
            email: "a@b.com".to_string(),
            password: "p".to_string(),
            nickname: "n".to_string(),
        };

        start_submission(tx, api, submission);

        match rx.recv().await {
            Some(CommandMessage::RegistrationFinished(result)) => assert!(result.is_ok()),
            other => panic!("unexpected message: {:?}", other),
        }
    }
}
