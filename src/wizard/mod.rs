//! Multi-step member registration
//!
//! - `step.rs` - Step identifiers, prompts and field validation
//! - `fields.rs` - Collected values and the submission built from them
//! - `machine.rs` - The wizard state machine and its registration port
//! - `notice.rs` - User-visible notices and the notification port

pub mod fields;
pub mod machine;
pub mod notice;
pub mod step;

pub use fields::{RegistrationFields, RegistrationSubmission};
pub use machine::{
    Advance, ButtonLabel, Phase, RegistrationApi, RegistrationWizard, WizardError,
    WELCOME_MESSAGE,
};
pub use notice::{DesktopNotifier, FanOut, LogNotifier, Notice, NoticeLevel, Notifier};
pub use step::{language_label, FieldError, Step, LANGUAGES};
