//! Values collected by the wizard and the submission built from them

use super::step::Step;

/// Field values reported by the step collaborators
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationFields {
    pub language: String,
    pub email: String,
    pub password: String,
    pub nickname: String,
}

impl RegistrationFields {
    pub fn get(&self, step: Step) -> &str {
        match step {
            Step::Language => &self.language,
            Step::Email => &self.email,
            Step::Password => &self.password,
            Step::Nickname => &self.nickname,
        }
    }

    pub fn set(&mut self, step: Step, value: String) {
        let slot = match step {
            Step::Language => &mut self.language,
            Step::Email => &mut self.email,
            Step::Password => &mut self.password,
            Step::Nickname => &mut self.nickname,
        };
        *slot = value;
    }

    /// Steps whose field is still empty
    pub fn missing(&self) -> Vec<Step> {
        Step::ALL
            .into_iter()
            .filter(|step| self.get(*step).is_empty())
            .collect()
    }

    /// Build a submission, or report which fields are empty
    pub fn to_submission(&self) -> Result<RegistrationSubmission, Vec<Step>> {
        let missing = self.missing();
        if !missing.is_empty() {
            return Err(missing);
        }
        Ok(RegistrationSubmission {
            language: self.language.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            nickname: self.nickname.clone(),
        })
    }
}

/// A complete registration request, built fresh for every attempt
#[derive(Clone, PartialEq, Eq)]
pub struct RegistrationSubmission {
    pub language: String,
    pub email: String,
    pub password: String,
    pub nickname: String,
}

// Keep the password out of logs.
impl std::fmt::Debug for RegistrationSubmission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationSubmission")
            .field("language", &self.language)
            .field("email", &self.email)
            .field("password", &"********")
            .field("nickname", &self.nickname)
            .finish()
    }
}
