//! Access catalog: the screens and access levels a user can be granted.
//!
//! Both lists are opaque data owned by the backend; the console never edits
//! them, it only selects from them.

use serde::{Deserialize, Serialize};

use crate::id::{AccessLevelId, ModuleId};

/// One grantable screen (`/modulos` entry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessOption {
    pub id: ModuleId,
    #[serde(rename = "descricao")]
    pub label: String,
}

impl AccessOption {
    pub fn new(id: impl Into<ModuleId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    /// Helper text shown under the screen's toggle.
    pub fn hint(&self) -> String {
        format!("Allow access to the {} screen", self.label.to_lowercase())
    }
}

/// One access level (`/niveis-acesso` entry). Exactly one is assigned per user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessLevel {
    pub id: AccessLevelId,
    #[serde(rename = "descricao")]
    pub label: String,
}

impl AccessLevel {
    pub fn new(id: impl Into<AccessLevelId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// The screen universe for a form session, in backend order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessCatalog {
    options: Vec<AccessOption>,
}

impl AccessCatalog {
    pub fn new(options: Vec<AccessOption>) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &[AccessOption] {
        &self.options
    }

    pub fn ids(&self) -> Vec<ModuleId> {
        self.options.iter().map(|o| o.id.clone()).collect()
    }

    pub fn get(&self, id: &ModuleId) -> Option<&AccessOption> {
        self.options.iter().find(|o| &o.id == id)
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl From<Vec<AccessOption>> for AccessCatalog {
    fn from(options: Vec<AccessOption>) -> Self {
        Self::new(options)
    }
}
