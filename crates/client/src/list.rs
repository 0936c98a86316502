//! User table controller.

use std::sync::Arc;

use skypass_core::{UserId, UserRecord};

use crate::backend::{read_or_empty, UserBackend};
use crate::error::ApiError;

/// Holds the user table. The backend is the only source of truth: after a
/// change the whole list is fetched again, never patched locally.
pub struct UserListController<B: UserBackend + ?Sized> {
    backend: Arc<B>,
    users: Vec<UserRecord>,
    is_loading: bool,
}

impl<B: UserBackend + ?Sized> UserListController<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self {
            backend,
            users: Vec::new(),
            is_loading: false,
        }
    }

    /// Create and perform the initial load.
    pub async fn mount(backend: Arc<B>) -> Self {
        let mut controller = Self::new(backend);
        controller.load().await;
        controller
    }

    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Replace the list with a fresh fetch. A failed fetch leaves the list
    /// empty; loading is cleared either way.
    pub async fn load(&mut self) {
        self.is_loading = true;
        self.users = read_or_empty("users", self.backend.list_users()).await;
        self.is_loading = false;
        tracing::info!(count = self.users.len(), "user list loaded");
    }

    /// Remove a user, then reload the full list.
    ///
    /// When the removal fails nothing is reloaded and the list stays as it was.
    pub async fn delete(&mut self, id: UserId) -> Result<(), ApiError> {
        if let Err(e) = self.backend.delete_user(id).await {
            tracing::error!(user_id = %id, error = %e, "failed to delete user");
            return Err(e);
        }

        tracing::info!(user_id = %id, "user deleted");
        self.load().await;
        Ok(())
    }
}
