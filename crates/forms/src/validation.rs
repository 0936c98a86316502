//! Field validation for the user and password forms.
//!
//! Every rule is checked; failures are collected rather than short-circuited so
//! the form can flag all offending inputs at once.

use crate::field::FieldErrors;
use crate::password::PasswordRequirements;
use crate::password_form::{PasswordDraft, PasswordField};
use crate::user_form::{UserDraft, UserField};

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "E-mail is required";
pub const EMAIL_INVALID: &str = "Invalid e-mail";
pub const ACCESS_LEVEL_REQUIRED: &str = "Access level is required";
pub const PASSWORD_WEAK: &str = "Password does not meet the requirements";
pub const CONFIRMATION_REQUIRED: &str = "Confirm the password";
pub const CONFIRMATION_MISMATCH: &str = "Passwords do not match";

/// `local@domain.tld` shape: three runs free of whitespace and `@`, joined by
/// `@` and a `.` that is neither the first nor the last char of the domain.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    let chars: Vec<char> = domain.chars().collect();
    chars.len() >= 3 && chars[1..chars.len() - 1].contains(&'.')
}

/// Validate the user creation/edit draft.
pub fn validate_user(draft: &UserDraft) -> FieldErrors<UserField> {
    let mut errors = FieldErrors::new();

    if draft.name.is_empty() {
        errors.insert(UserField::Name, NAME_REQUIRED);
    }

    if draft.email.is_empty() {
        errors.insert(UserField::Email, EMAIL_REQUIRED);
    } else if !is_valid_email(&draft.email) {
        errors.insert(UserField::Email, EMAIL_INVALID);
    }

    if draft.access_level.as_ref().is_none_or(|id| id.is_empty()) {
        errors.insert(UserField::AccessLevel, ACCESS_LEVEL_REQUIRED);
    }

    errors
}

/// Validate the credential-setting draft.
pub fn validate_password(draft: &PasswordDraft) -> FieldErrors<PasswordField> {
    let mut errors = FieldErrors::new();

    // An empty password fails every requirement, so it reports as weak.
    if !PasswordRequirements::evaluate(&draft.password).is_strong() {
        errors.insert(PasswordField::Password, PASSWORD_WEAK);
    }

    if draft.confirmation.is_empty() {
        errors.insert(PasswordField::Confirmation, CONFIRMATION_REQUIRED);
    } else if !draft.password.is_empty() && draft.password != draft.confirmation {
        errors.insert(PasswordField::Confirmation, CONFIRMATION_MISMATCH);
    }

    errors
}
