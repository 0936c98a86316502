//! Credential-setting screen session (reached from a tokenized link).

use std::sync::Arc;
use std::time::Duration;

use skypass_core::DomainError;
use skypass_forms::{FormController, PasswordField, PasswordForm, ResetToken, SubmitError};

use crate::backend::UserBackend;
use crate::outcome::{Notification, Redirect, Route};

pub const MSG_INVALID_TOKEN: &str = "Invalid or missing token.";
pub const MSG_PASSWORD_SET: &str = "Password set successfully! Please log in.";
pub const MSG_PASSWORD_NOT_SET: &str = "Could not set the password.";
pub const MSG_PASSWORD_ERROR: &str = "Error setting the password.";

/// Delay before leaving the screen after a successful reset, so the success
/// notification can be read.
pub const SUCCESS_REDIRECT_DELAY: Duration = Duration::from_millis(1200);

/// The screen cannot be used: notify and leave.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blocked {
    pub error: DomainError,
    pub notification: Notification,
    pub redirect: Redirect,
}

impl Blocked {
    fn new(error: DomainError) -> Self {
        tracing::warn!(error = %error, "password screen blocked");
        Self {
            error,
            notification: Notification::error(MSG_INVALID_TOKEN),
            redirect: Redirect::now(Route::Login),
        }
    }
}

/// Result of submitting a new password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResetOutcome {
    Rejected(SubmitError),
    Completed {
        notification: Notification,
        redirect: Redirect,
    },
    Failed {
        notification: Notification,
    },
}

/// Extract the `token` query parameter from a reset link.
pub fn token_from_link(link: &str) -> Result<ResetToken, DomainError> {
    let url = reqwest::Url::parse(link)
        .map_err(|e| DomainError::invalid_value(format!("reset link: {e}")))?;
    let token = url
        .query_pairs()
        .find(|(key, _)| key == "token")
        .map(|(_, value)| value.into_owned());
    ResetToken::new(token.as_deref())
}

pub struct PasswordResetSession<B: UserBackend + ?Sized> {
    backend: Arc<B>,
    form: FormController<PasswordForm>,
}

impl<B: UserBackend + ?Sized> PasswordResetSession<B> {
    /// Open from the raw `token` query value.
    pub fn open(backend: Arc<B>, token: Option<&str>) -> Result<Self, Blocked> {
        let token = ResetToken::new(token).map_err(Blocked::new)?;
        Ok(Self {
            backend,
            form: FormController::new(PasswordForm::new(token)),
        })
    }

    /// Open from the full link the user followed.
    pub fn open_link(backend: Arc<B>, link: &str) -> Result<Self, Blocked> {
        let token = token_from_link(link).map_err(Blocked::new)?;
        Ok(Self {
            backend,
            form: FormController::new(PasswordForm::new(token)),
        })
    }

    pub fn form(&self) -> &FormController<PasswordForm> {
        &self.form
    }

    pub fn set_field(&mut self, field: PasswordField, value: impl Into<String>) {
        self.form.set_field(field, value);
    }

    pub async fn submit(&mut self) -> ResetOutcome {
        let payload = match self.form.begin_submit() {
            Ok(payload) => payload,
            Err(e) => return ResetOutcome::Rejected(e),
        };

        let result = self.backend.set_password(&payload).await;
        self.form.finish_submit();

        match result {
            Ok(200) => {
                tracing::info!("password set");
                ResetOutcome::Completed {
                    notification: Notification::success(MSG_PASSWORD_SET),
                    redirect: Redirect::after(Route::Login, SUCCESS_REDIRECT_DELAY),
                }
            }
            Ok(status) => {
                tracing::warn!(status, "password endpoint answered without 200");
                ResetOutcome::Failed {
                    notification: Notification::error(MSG_PASSWORD_NOT_SET),
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to set password");
                let message = e
                    .server_message()
                    .unwrap_or_else(|| MSG_PASSWORD_ERROR.to_string());
                ResetOutcome::Failed {
                    notification: Notification::error(message),
                }
            }
        }
    }
}
