#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;

use skypass_client::{ApiError, UserBackend};
use skypass_core::{AccessLevel, AccessOption, UserId, UserRecord};
use skypass_forms::{CreateUserPayload, SetPasswordPayload};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    AccessLevels,
    Screens,
    ListUsers,
    Delete(UserId),
    Create(CreateUserPayload),
    SetPassword { token: String, password: String },
}

/// In-memory backend that records every call in order.
pub struct RecordingBackend {
    pub calls: Mutex<Vec<Call>>,
    pub levels: Result<Vec<AccessLevel>, ApiError>,
    pub screens: Result<Vec<AccessOption>, ApiError>,
    pub users: Mutex<Result<Vec<UserRecord>, ApiError>>,
    pub delete: Result<(), ApiError>,
    pub create: Result<(), ApiError>,
    pub set_password: Result<u16, ApiError>,
}

impl Default for RecordingBackend {
    fn default() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            levels: Ok(vec![
                AccessLevel::new("1", "Administrator"),
                AccessLevel::new("2", "Operator"),
            ]),
            screens: Ok(vec![
                AccessOption::new("1", "Dashboard"),
                AccessOption::new("2", "Users"),
                AccessOption::new("3", "Reports"),
            ]),
            users: Mutex::new(Ok(vec![user(1, "Ana"), user(2, "Bruno")])),
            delete: Ok(()),
            create: Ok(()),
            set_password: Ok(200),
        }
    }
}

impl RecordingBackend {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn set_users(&self, users: Result<Vec<UserRecord>, ApiError>) {
        *self.users.lock().unwrap() = users;
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

pub fn user(id: i64, name: &str) -> UserRecord {
    UserRecord {
        id: UserId::new(id),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        phone: None,
        active: None,
    }
}

pub fn server_error(body: &str) -> ApiError {
    ApiError::Api {
        status: 500,
        body: body.to_string(),
    }
}

#[async_trait]
impl UserBackend for RecordingBackend {
    async fn access_levels(&self) -> Result<Vec<AccessLevel>, ApiError> {
        self.record(Call::AccessLevels);
        self.levels.clone()
    }

    async fn screens(&self) -> Result<Vec<AccessOption>, ApiError> {
        self.record(Call::Screens);
        self.screens.clone()
    }

    async fn list_users(&self) -> Result<Vec<UserRecord>, ApiError> {
        self.record(Call::ListUsers);
        self.users.lock().unwrap().clone()
    }

    async fn delete_user(&self, id: UserId) -> Result<(), ApiError> {
        self.record(Call::Delete(id));
        self.delete.clone()
    }

    async fn create_user(&self, payload: &CreateUserPayload) -> Result<(), ApiError> {
        self.record(Call::Create(payload.clone()));
        self.create.clone()
    }

    async fn set_password(&self, payload: &SetPasswordPayload) -> Result<u16, ApiError> {
        self.record(Call::SetPassword {
            token: payload.token.clone(),
            password: payload.password.clone(),
        });
        self.set_password.clone()
    }
}
