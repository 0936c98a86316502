//! Credential-setting form reached through a tokenized link.

use serde::Serialize;

use skypass_core::{DomainError, DomainResult};

use crate::controller::{FormController, FormModel};
use crate::field::{FieldErrors, FormField};
use crate::password::PasswordRequirements;
use crate::validation;

/// Inputs of the password form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PasswordField {
    Password,
    Confirmation,
}

impl FormField for PasswordField {
    fn key(&self) -> &'static str {
        match self {
            PasswordField::Password => "password",
            PasswordField::Confirmation => "confirmation",
        }
    }
}

/// Single-use token identifying the account whose password is being set.
#[derive(Clone, PartialEq, Eq)]
pub struct ResetToken(String);

impl ResetToken {
    /// The form cannot open without a token.
    pub fn new(token: Option<&str>) -> DomainResult<Self> {
        match token {
            Some(t) if !t.is_empty() => Ok(Self(t.to_string())),
            _ => Err(DomainError::precondition("invalid or missing token")),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Debug for ResetToken {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("ResetToken(***)")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordDraft {
    pub password: String,
    pub confirmation: String,
}

impl PasswordDraft {
    pub fn new(password: impl Into<String>, confirmation: impl Into<String>) -> Self {
        Self {
            password: password.into(),
            confirmation: confirmation.into(),
        }
    }
}

/// Body of `POST /usuarios/definir-senha`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct SetPasswordPayload {
    pub token: String,
    #[serde(rename = "senha")]
    pub password: String,
}

impl core::fmt::Debug for SetPasswordPayload {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SetPasswordPayload")
            .field("token", &"***")
            .field("password", &"***")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct PasswordForm {
    token: ResetToken,
    draft: PasswordDraft,
}

impl PasswordForm {
    pub fn new(token: ResetToken) -> Self {
        Self {
            token,
            draft: PasswordDraft::default(),
        }
    }

    pub fn draft(&self) -> &PasswordDraft {
        &self.draft
    }

    pub fn token(&self) -> &ResetToken {
        &self.token
    }
}

impl FormModel for PasswordForm {
    type Field = PasswordField;
    type Payload = SetPasswordPayload;

    fn set_field(&mut self, field: PasswordField, value: String) {
        match field {
            PasswordField::Password => self.draft.password = value,
            PasswordField::Confirmation => self.draft.confirmation = value,
        }
    }

    fn validate(&self) -> FieldErrors<PasswordField> {
        validation::validate_password(&self.draft)
    }

    fn payload(&self) -> SetPasswordPayload {
        SetPasswordPayload {
            token: self.token.0.clone(),
            password: self.draft.password.clone(),
        }
    }
}

impl FormController<PasswordForm> {
    pub fn password_requirements(&self) -> PasswordRequirements {
        PasswordRequirements::evaluate(&self.model().draft.password)
    }

    pub fn is_password_strong(&self) -> bool {
        self.password_requirements().is_strong()
    }
}
