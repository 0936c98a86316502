//! `skypass-client`
//!
//! **Responsibility:** drive the administration screens against the backend.
//!
//! This crate provides:
//! - The [`UserBackend`] boundary and its `reqwest` implementation
//! - Response shape negotiation for the user list
//! - Screen sessions (user list, user form, password reset) that pair the
//!   pure form engine with backend calls
//!
//! The backend stays the authority; nothing is cached beyond one screen.

pub mod backend;
pub mod config;
pub mod error;
pub mod http;
pub mod list;
pub mod list_shape;
pub mod outcome;
pub mod password_session;
pub mod user_session;

pub use backend::UserBackend;
pub use config::ClientConfig;
pub use error::ApiError;
pub use http::HttpBackend;
pub use list::UserListController;
pub use list_shape::{ListShape, USER_LIST_SHAPES};
pub use outcome::{Notification, NotificationLevel, Redirect, Route};
pub use password_session::{token_from_link, Blocked, PasswordResetSession, ResetOutcome};
pub use user_session::{CreateOutcome, UserFormSession};
