//! Client configuration (environment-driven).

use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:3333";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for talking to the administration backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: String,
    pub auth_token: Option<String>,
    pub timeout: Duration,
    /// Send new users to `POST /usuarios/create`. Off by default: until the
    /// creation contract is confirmed, submissions are validated and logged only.
    pub persist_new_users: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            auth_token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            persist_new_users: false,
        }
    }
}

impl ClientConfig {
    /// Read `SKYPASS_*` variables from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Unparseable values fall back
    /// to the defaults with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let api_url = lookup("SKYPASS_API_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.api_url);

        let auth_token = lookup("SKYPASS_AUTH_TOKEN").filter(|v| !v.is_empty());

        let timeout = match lookup("SKYPASS_HTTP_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    tracing::warn!(value = %raw, "invalid SKYPASS_HTTP_TIMEOUT_SECS; using default");
                    defaults.timeout
                }
            },
            None => defaults.timeout,
        };

        let persist_new_users = match lookup("SKYPASS_PERSIST_NEW_USERS") {
            Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => {
                    tracing::warn!(value = %raw, "invalid SKYPASS_PERSIST_NEW_USERS; using default");
                    defaults.persist_new_users
                }
            },
            None => defaults.persist_new_users,
        };

        Self {
            api_url,
            auth_token,
            timeout,
            persist_new_users,
        }
    }
}
