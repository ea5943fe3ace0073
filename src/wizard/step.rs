//! Wizard step identifiers and their per-step capabilities
//!
//! Each [`Step`] knows how to describe itself to the renderer and how to
//! validate the value its input collaborator reports.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use crate::constants::{
    MAX_EMAIL_LENGTH, MAX_NICKNAME_LENGTH, MAX_PASSWORD_LENGTH, MIN_NICKNAME_LENGTH,
    MIN_PASSWORD_LENGTH,
};

/// Languages a member can pick as their native language (code, label)
pub const LANGUAGES: &[(&str, &str)] = &[
    ("ko", "Korean"),
    ("en", "English"),
    ("ja", "Japanese"),
    ("zh", "Chinese"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
];

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

/// One input step of the registration wizard, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Language,
    Email,
    Password,
    Nickname,
}

/// Why a reported value was not accepted for a step
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("{0} cannot be empty")]
    Empty(Step),
    #[error("'{0}' is not a supported language")]
    UnknownLanguage(String),
    #[error("Enter a valid email address")]
    MalformedEmail,
    #[error("{step} is too long (max {max} characters)")]
    TooLong { step: Step, max: usize },
    #[error("{step} is too short (min {min} characters)")]
    TooShort { step: Step, min: usize },
    #[error("Nickname can only contain letters, numbers, underscore, and hyphen")]
    NicknameCharacters,
}

impl Step {
    /// Number of input steps
    pub const COUNT: usize = 4;

    /// All steps in order
    pub const ALL: [Step; Step::COUNT] = [Step::Language, Step::Email, Step::Password, Step::Nickname];

    /// Zero-based position of this step
    pub fn index(self) -> usize {
        match self {
            Step::Language => 0,
            Step::Email => 1,
            Step::Password => 2,
            Step::Nickname => 3,
        }
    }

    /// Step following this one, `None` for the last step
    pub fn next(self) -> Option<Step> {
        Step::ALL.get(self.index() + 1).copied()
    }

    pub fn is_last(self) -> bool {
        self.next().is_none()
    }

    /// Screen title for this step
    pub fn title(self) -> &'static str {
        match self {
            Step::Language => "Native Language",
            Step::Email => "Email",
            Step::Password => "Password",
            Step::Nickname => "Nickname",
        }
    }

    /// Instruction line shown above the input
    pub fn prompt(self) -> &'static str {
        match self {
            Step::Language => "Which language do you speak natively?",
            Step::Email => "Enter the email address you will sign in with:",
            Step::Password => "Choose a password:",
            Step::Nickname => "Pick a nickname other members will see:",
        }
    }

    /// Hint shown under the input
    pub fn hint(self) -> &'static str {
        match self {
            Step::Language => "Use Up/Down to choose, Enter to continue",
            Step::Email => "e.g. name@example.com",
            Step::Password => "8 to 64 characters",
            Step::Nickname => "2 to 20 letters, numbers, underscore, or hyphen",
        }
    }

    /// Whether the renderer should mask this step's input
    pub fn is_secret(self) -> bool {
        self == Step::Password
    }

    /// Validate a reported value, returning the normalized value to store
    pub fn validate(self, value: &str) -> Result<String, FieldError> {
        match self {
            Step::Language => validate_language(value),
            Step::Email => validate_email(value),
            Step::Password => validate_password(value),
            Step::Nickname => validate_nickname(value),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// Display label for a language code
pub fn language_label(code: &str) -> Option<&'static str> {
    LANGUAGES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| *label)
}

fn validate_language(value: &str) -> Result<String, FieldError> {
    let code = value.trim().to_ascii_lowercase();
    if code.is_empty() {
        return Err(FieldError::Empty(Step::Language));
    }
    if language_label(&code).is_none() {
        return Err(FieldError::UnknownLanguage(code));
    }
    Ok(code)
}

fn validate_email(value: &str) -> Result<String, FieldError> {
    let email = value.trim();
    if email.is_empty() {
        return Err(FieldError::Empty(Step::Email));
    }
    if email.chars().count() > MAX_EMAIL_LENGTH {
        return Err(FieldError::TooLong {
            step: Step::Email,
            max: MAX_EMAIL_LENGTH,
        });
    }
    if !EMAIL_RE.is_match(email) {
        return Err(FieldError::MalformedEmail);
    }
    Ok(email.to_string())
}

// Passwords are stored as typed; surrounding whitespace is significant.
fn validate_password(value: &str) -> Result<String, FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::Empty(Step::Password));
    }
    let len = value.chars().count();
    if len < MIN_PASSWORD_LENGTH {
        return Err(FieldError::TooShort {
            step: Step::Password,
            min: MIN_PASSWORD_LENGTH,
        });
    }
    if len > MAX_PASSWORD_LENGTH {
        return Err(FieldError::TooLong {
            step: Step::Password,
            max: MAX_PASSWORD_LENGTH,
        });
    }
    Ok(value.to_string())
}

fn validate_nickname(value: &str) -> Result<String, FieldError> {
    let nickname = value.trim();
    if nickname.is_empty() {
        return Err(FieldError::Empty(Step::Nickname));
    }
    let len = nickname.chars().count();
    if len < MIN_NICKNAME_LENGTH {
        return Err(FieldError::TooShort {
            step: Step::Nickname,
            min: MIN_NICKNAME_LENGTH,
        });
    }
    if len > MAX_NICKNAME_LENGTH {
        return Err(FieldError::TooLong {
            step: Step::Nickname,
            max: MAX_NICKNAME_LENGTH,
        });
    }
    if !nickname
        .chars()
        .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
    {
        return Err(FieldError::NicknameCharacters);
    }
    Ok(nickname.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_order() {
        assert_eq!(Step::Language.next(), Some(Step::Email));
        assert_eq!(Step::Email.next(), Some(Step::Password));
        assert_eq!(Step::Password.next(), Some(Step::Nickname));
        assert_eq!(Step::Nickname.next(), None);
        assert!(Step::Nickname.is_last());
        for (i, step) in Step::ALL.iter().enumerate() {
            assert_eq!(step.index(), i);
        }
    }

    #[test]
    fn test_language_validation() {
        assert_eq!(Step::Language.validate(" EN "), Ok("en".to_string()));
        assert_eq!(
            Step::Language.validate("xx"),
            Err(FieldError::UnknownLanguage("xx".to_string()))
        );
        assert_eq!(
            Step::Language.validate(""),
            Err(FieldError::Empty(Step::Language))
        );
    }

    #[test]
    fn test_email_validation() {
        assert_eq!(Step::Email.validate(" a@b.com "), Ok("a@b.com".to_string()));
        assert_eq!(Step::Email.validate("a@b"), Err(FieldError::MalformedEmail));
        assert_eq!(Step::Email.validate("a b@c.com"), Err(FieldError::MalformedEmail));
        let long = format!("{}@example.com", "a".repeat(MAX_EMAIL_LENGTH));
        assert!(matches!(
            Step::Email.validate(&long),
            Err(FieldError::TooLong { .. })
        ));
    }

    #[test]
    fn test_password_validation() {
        assert!(Step::Password.validate("hunter22").is_ok());
        assert!(matches!(
            Step::Password.validate("short"),
            Err(FieldError::TooShort { .. })
        ));
        assert_eq!(
            Step::Password.validate("        "),
            Err(FieldError::Empty(Step::Password))
        );
        // Not trimmed
        assert_eq!(
            Step::Password.validate(" spaced pass "),
            Ok(" spaced pass ".to_string())
        );
    }

    #[test]
    fn test_nickname_validation() {
        assert_eq!(Step::Nickname.validate("neo_01"), Ok("neo_01".to_string()));
        assert_eq!(Step::Nickname.validate("한글닉"), Ok("한글닉".to_string()));
        assert_eq!(
            Step::Nickname.validate("bad name"),
            Err(FieldError::NicknameCharacters)
        );
        assert!(matches!(
            Step::Nickname.validate("n"),
            Err(FieldError::TooShort { .. })
        ));
    }

    #[test]
    fn test_language_label() {
        assert_eq!(language_label("ko"), Some("Korean"));
        assert_eq!(language_label("tlh"), None);
    }
}
