//! `skypass-forms` — interactive form-state engine.
//!
//! Pure, synchronous state machines behind the user administration screens:
//! password policy, screen-access selection, validation and the submission
//! state machine. No IO; sending payloads is the caller's job.

pub mod access;
pub mod controller;
pub mod field;
pub mod password;
pub mod password_form;
pub mod user_form;
pub mod validation;

pub use access::AccessSelection;
pub use controller::{FormController, FormModel, FormState, SubmitError};
pub use field::{FieldErrors, FormField};
pub use password::{PasswordRequirements, Requirement, RequirementCheck, MIN_PASSWORD_LENGTH};
pub use password_form::{PasswordDraft, PasswordField, PasswordForm, ResetToken, SetPasswordPayload};
pub use user_form::{CreateUserPayload, UserDraft, UserField, UserForm};
pub use validation::{is_valid_email, validate_password, validate_user};
