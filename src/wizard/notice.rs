//! User-visible notices and the notification port
//!
//! The wizard never talks to a screen directly. It raises [`Notice`]s
//! through a [`Notifier`], and the caller decides whether they become
//! TUI toasts, stderr lines, or desktop notifications.

use notify_rust::Notification;
use std::fmt;

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// A transient message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.level {
            NoticeLevel::Info => "info",
            NoticeLevel::Success => "ok",
            NoticeLevel::Error => "error",
        };
        write!(f, "[{}] {}", tag, self.message)
    }
}

/// Notification port injected into the wizard
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Writes notices to stderr and the log (headless mode)
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Error => tracing::warn!("{}", notice.message),
            _ => tracing::info!("{}", notice.message),
        }
        eprintln!("{}", notice);
    }
}

/// Shows success notices as desktop notifications
///
/// Errors stay in the terminal; a desktop popup is only worth it for the
/// outcome the user may have tabbed away from.
pub struct DesktopNotifier {
    timeout_ms: i32,
}

impl DesktopNotifier {
    pub fn new(timeout_ms: i32) -> Self {
        Self { timeout_ms }
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&self, notice: Notice) {
        if notice.level != NoticeLevel::Success {
            return;
        }
        let result = Notification::new()
            .appname("checkmate")
            .summary("Checkmate")
            .body(&notice.message)
            .timeout(self.timeout_ms)
            .show();
        if let Err(e) = result {
            tracing::warn!("Failed to show desktop notification: {}", e);
        }
    }
}

/// Delivers every notice to each inner notifier in order
#[derive(Default)]
pub struct FanOut {
    targets: Vec<Box<dyn Notifier>>,
}

impl FanOut {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, target: impl Notifier + 'static) -> Self {
        self.targets.push(Box::new(target));
        self
    }
}

impl Notifier for FanOut {
    fn notify(&self, notice: Notice) {
        for target in &self.targets {
            target.notify(notice.clone());
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Keeps every notice for later assertions
    #[derive(Clone, Default)]
    pub struct RecordingNotifier {
        pub notices: Arc<Mutex<Vec<Notice>>>,
    }

    impl RecordingNotifier {
        pub fn taken(&self) -> Vec<Notice> {
            self.notices.lock().unwrap().clone()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notice: Notice) {
            self.notices.lock().unwrap().push(notice);
        }
    }
}
