//! User creation/edit screen session.

use std::sync::Arc;

use skypass_core::{AccessCatalog, ModuleId, UserRecord};
use skypass_forms::{CreateUserPayload, FormController, SubmitError, UserDraft, UserField, UserForm};

use crate::backend::{read_or_empty, UserBackend};
use crate::error::ApiError;
use crate::outcome::{Redirect, Route};

/// Result of submitting the user form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// Nothing was sent: the draft is invalid or a submission is in flight.
    Rejected(SubmitError),
    /// Persistence is disabled; the validated payload was only logged.
    Staged(CreateUserPayload),
    /// The backend accepted the user.
    Created(Redirect),
    Failed(ApiError),
}

/// A user form bound to a backend. Catalogs are fetched once, on open.
pub struct UserFormSession<B: UserBackend + ?Sized> {
    backend: Arc<B>,
    form: FormController<UserForm>,
    persist: bool,
}

impl<B: UserBackend + ?Sized> UserFormSession<B> {
    /// Open a blank creation form.
    pub async fn open(backend: Arc<B>, persist: bool) -> Self {
        let levels = read_or_empty("access levels", backend.access_levels()).await;
        let screens = read_or_empty("screens", backend.screens()).await;
        tracing::info!(levels = levels.len(), screens = screens.len(), "user form opened");

        let form = UserForm::new(AccessCatalog::new(screens), levels);
        Self {
            backend,
            form: FormController::new(form),
            persist,
        }
    }

    /// Open the form prefilled from a listed user.
    pub async fn open_for_edit(backend: Arc<B>, persist: bool, record: &UserRecord) -> Self {
        let mut session = Self::open(backend, persist).await;
        let form = session.form.model().clone().with_draft(UserDraft::from_record(record));
        session.form = FormController::new(form);
        session
    }

    pub fn form(&self) -> &FormController<UserForm> {
        &self.form
    }

    pub fn set_field(&mut self, field: UserField, value: impl Into<String>) {
        self.form.set_field(field, value);
    }

    pub fn toggle_access(&mut self, id: ModuleId) -> bool {
        self.form.toggle_access(id)
    }

    pub fn toggle_all_access(&mut self) -> bool {
        self.form.toggle_all_access()
    }

    /// Validate, then hand the payload to the backend (or only log it while
    /// persistence is disabled). Invalid drafts never reach the backend.
    pub async fn submit(&mut self) -> CreateOutcome {
        let payload = match self.form.begin_submit() {
            Ok(payload) => payload,
            Err(e) => return CreateOutcome::Rejected(e),
        };

        if !self.persist {
            tracing::debug!(?payload, "user creation persistence disabled; payload not sent");
            self.form.finish_submit();
            return CreateOutcome::Staged(payload);
        }

        let result = self.backend.create_user(&payload).await;
        self.form.finish_submit();

        match result {
            Ok(()) => {
                tracing::info!(email = %payload.email, "user created");
                CreateOutcome::Created(Redirect::now(Route::UserList))
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to create user");
                CreateOutcome::Failed(e)
            }
        }
    }
}
