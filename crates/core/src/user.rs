//! Read-only user projection as returned by `GET /usuarios`.

use serde::{Deserialize, Serialize};

use crate::id::UserId;

/// Account activation flag. Travels as `"1"` / `"0"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveFlag {
    #[default]
    Active,
    Inactive,
}

impl ActiveFlag {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActiveFlag::Active => "1",
            ActiveFlag::Inactive => "0",
        }
    }

    /// Strict parse used for form input: only `"1"` and `"0"` are accepted.
    pub fn from_form_value(value: &str) -> Option<Self> {
        match value {
            "1" => Some(ActiveFlag::Active),
            "0" => Some(ActiveFlag::Inactive),
            _ => None,
        }
    }

    pub fn is_active(&self) -> bool {
        *self == ActiveFlag::Active
    }
}

impl core::fmt::Display for ActiveFlag {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ActiveFlag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Lenient wire form: any value decodes, but only the string `"1"` is active.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawFlag {
    Text(String),
    Number(i64),
    Bool(bool),
}

impl<'de> Deserialize<'de> for ActiveFlag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let active = match RawFlag::deserialize(deserializer)? {
            RawFlag::Text(s) => s == "1",
            RawFlag::Number(_) | RawFlag::Bool(_) => false,
        };
        Ok(if active {
            ActiveFlag::Active
        } else {
            ActiveFlag::Inactive
        })
    }
}

/// One row of the user table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "telefone", default)]
    pub phone: Option<String>,
    #[serde(rename = "ativo", default)]
    pub active: Option<ActiveFlag>,
}

impl UserRecord {
    pub fn is_active(&self) -> bool {
        self.active.is_some_and(|a| a.is_active())
    }

    /// Phone column text; `-` when absent or blank.
    pub fn phone_display(&self) -> &str {
        match self.phone.as_deref() {
            Some(phone) if !phone.is_empty() => phone,
            _ => "-",
        }
    }

    pub fn active_display(&self) -> &'static str {
        if self.is_active() { "Yes" } else { "No" }
    }
}
