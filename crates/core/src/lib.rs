//! `skypass-core` — shared data model for the user administration console.
//!
//! This crate contains **pure** types (no IO, no HTTP): identifiers, the
//! access catalog handed out by the backend, and the read-only user projection.

pub mod catalog;
pub mod error;
pub mod id;
pub mod user;

pub use catalog::{AccessCatalog, AccessLevel, AccessOption};
pub use error::{DomainError, DomainResult};
pub use id::{AccessLevelId, ModuleId, UserId};
pub use user::{ActiveFlag, UserRecord};
