//! Validation/submission state machine shared by every form.
//!
//! Submission is split in two steps so the controller stays free of IO:
//!
//! - `begin_submit()` validates and, when the draft is clean, moves to
//!   `Submitting` and hands back the payload for the caller to send;
//! - `finish_submit()` returns to `Editing` once the send has completed,
//!   whatever its outcome.
//!
//! A draft that failed validation never produces a payload.

use serde::Serialize;
use thiserror::Error;

use crate::field::{FieldErrors, FormField};

/// A form's data: how fields are written, validated and turned into a request.
pub trait FormModel {
    type Field: FormField;
    type Payload: Serialize + Clone + core::fmt::Debug;

    fn set_field(&mut self, field: Self::Field, value: String);

    /// Full validation pass. Never fails; an empty map means submittable.
    fn validate(&self) -> FieldErrors<Self::Field>;

    fn payload(&self) -> Self::Payload;
}

/// Externally visible controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormState {
    #[default]
    Editing,
    Submitting,
    /// Errors are on display; the next edit returns to `Editing`.
    Errored,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("form has {fields} invalid field(s)")]
    Invalid { fields: usize },

    #[error("a submission is already in progress")]
    InProgress,
}

#[derive(Debug, Clone)]
pub struct FormController<M: FormModel> {
    model: M,
    errors: FieldErrors<M::Field>,
    state: FormState,
}

impl<M: FormModel> FormController<M> {
    pub fn new(model: M) -> Self {
        Self {
            model,
            errors: FieldErrors::new(),
            state: FormState::Editing,
        }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub(crate) fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    pub fn errors(&self) -> &FieldErrors<M::Field> {
        &self.errors
    }

    pub fn error(&self, field: M::Field) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == FormState::Submitting
    }

    /// Write one field. Only that field's error is cleared; the rest of the
    /// map is left as the last validation pass produced it.
    pub fn set_field(&mut self, field: M::Field, value: impl Into<String>) {
        self.model.set_field(field, value.into());

        if self.errors.clear(field) {
            tracing::debug!(field = field.key(), "cleared field error on edit");
        }
        if self.state == FormState::Errored {
            self.state = FormState::Editing;
        }
    }

    /// Validate and, if clean, enter `Submitting` and return the payload.
    pub fn begin_submit(&mut self) -> Result<M::Payload, SubmitError> {
        if self.state == FormState::Submitting {
            tracing::warn!("submit ignored: previous submission still in progress");
            return Err(SubmitError::InProgress);
        }

        self.errors = self.model.validate();
        if !self.errors.is_empty() {
            self.state = FormState::Errored;
            tracing::debug!(invalid = self.errors.len(), "submit blocked by validation");
            return Err(SubmitError::Invalid {
                fields: self.errors.len(),
            });
        }

        self.state = FormState::Submitting;
        Ok(self.model.payload())
    }

    /// Leave `Submitting` after the send completed (success or failure).
    pub fn finish_submit(&mut self) {
        if self.state != FormState::Submitting {
            tracing::debug!(state = ?self.state, "finish_submit outside of a submission");
            return;
        }
        self.state = FormState::Editing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user_form::{UserField, UserForm};
    use crate::validation::{EMAIL_INVALID, NAME_REQUIRED};

    fn form() -> FormController<UserForm> {
        FormController::new(UserForm::default())
    }

    fn fill_valid(form: &mut FormController<UserForm>) {
        form.set_field(UserField::Name, "Ana");
        form.set_field(UserField::Email, "ana@example.com");
        form.set_field(UserField::AccessLevel, "1");
    }

    #[test]
    fn starts_editing_without_errors() {
        let form = form();
        assert_eq!(form.state(), FormState::Editing);
        assert!(form.errors().is_empty());
    }

    #[test]
    fn invalid_submit_moves_to_errored_and_yields_no_payload() {
        let mut form = form();

        let err = form.begin_submit().unwrap_err();
        assert_eq!(err, SubmitError::Invalid { fields: 3 });
        assert_eq!(form.state(), FormState::Errored);
        assert_eq!(form.error(UserField::Name), Some(NAME_REQUIRED));
    }

    #[test]
    fn editing_clears_only_the_edited_field() {
        let mut form = form();
        form.set_field(UserField::Email, "a@b");
        let _ = form.begin_submit();
        assert_eq!(form.errors().len(), 3);

        form.set_field(UserField::Name, "Ana");

        assert!(form.error(UserField::Name).is_none());
        assert_eq!(form.error(UserField::Email), Some(EMAIL_INVALID));
        assert!(form.error(UserField::AccessLevel).is_some());
        assert_eq!(form.state(), FormState::Editing);
    }

    #[test]
    fn editing_does_not_revalidate() {
        let mut form = form();
        let _ = form.begin_submit();

        form.set_field(UserField::Email, "still-not-an-email");
        assert!(form.error(UserField::Email).is_none());
    }

    #[test]
    fn valid_submit_walks_submitting_then_editing() {
        let mut form = form();
        fill_valid(&mut form);

        let payload = form.begin_submit().unwrap();
        assert_eq!(payload.name, "Ana");
        assert!(form.is_submitting());

        form.finish_submit();
        assert_eq!(form.state(), FormState::Editing);
    }

    #[test]
    fn second_submit_while_submitting_is_rejected() {
        let mut form = form();
        fill_valid(&mut form);

        form.begin_submit().unwrap();
        assert_eq!(form.begin_submit().unwrap_err(), SubmitError::InProgress);
        assert!(form.is_submitting());

        form.finish_submit();
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn revalidation_replaces_the_whole_map() {
        let mut form = form();
        let _ = form.begin_submit();
        assert_eq!(form.errors().len(), 3);

        form.set_field(UserField::Name, "Ana");
        form.set_field(UserField::AccessLevel, "1");
        form.set_field(UserField::Email, "bad");
        let _ = form.begin_submit();

        assert_eq!(form.errors().len(), 1);
        assert_eq!(form.error(UserField::Email), Some(EMAIL_INVALID));
    }

    #[test]
    fn finish_outside_submission_is_a_no_op() {
        let mut form = form();
        let _ = form.begin_submit();
        form.finish_submit();
        assert_eq!(form.state(), FormState::Errored);
    }
}
