//! Backend collaborator boundary.
//!
//! Controllers only talk to [`UserBackend`]; the HTTP implementation lives in
//! [`crate::http`] and tests substitute in-memory doubles.

use std::future::Future;

use async_trait::async_trait;

use skypass_core::{AccessLevel, AccessOption, UserId, UserRecord};
use skypass_forms::{CreateUserPayload, SetPasswordPayload};

use crate::error::ApiError;

#[async_trait]
pub trait UserBackend: Send + Sync {
    /// `GET /niveis-acesso`
    async fn access_levels(&self) -> Result<Vec<AccessLevel>, ApiError>;

    /// `GET /modulos`
    async fn screens(&self) -> Result<Vec<AccessOption>, ApiError>;

    /// `GET /usuarios`, with the response shape already negotiated.
    async fn list_users(&self) -> Result<Vec<UserRecord>, ApiError>;

    /// `POST /usuario/delete`
    async fn delete_user(&self, id: UserId) -> Result<(), ApiError>;

    /// `POST /usuarios/create`
    async fn create_user(&self, payload: &CreateUserPayload) -> Result<(), ApiError>;

    /// `POST /usuarios/definir-senha`. Returns the success status code; only
    /// `200` counts as the password having been set.
    async fn set_password(&self, payload: &SetPasswordPayload) -> Result<u16, ApiError>;
}

/// Read policy shared by every collection fetch: failures are logged and
/// degrade to an empty collection.
pub(crate) async fn read_or_empty<T, F>(what: &'static str, fetch: F) -> Vec<T>
where
    F: Future<Output = Result<Vec<T>, ApiError>>,
{
    match fetch.await {
        Ok(items) => {
            tracing::debug!(what, count = items.len(), "loaded collection");
            items
        }
        Err(e) => {
            tracing::error!(what, error = %e, "failed to load collection");
            Vec::new()
        }
    }
}
