//! `reqwest`-backed implementation of [`UserBackend`].

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;

use skypass_core::{AccessLevel, AccessOption, UserId, UserRecord};
use skypass_forms::{CreateUserPayload, SetPasswordPayload};

use crate::backend::UserBackend;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::list_shape;

/// HTTP client for the administration REST API.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    api_url: String,
    token: Option<String>,
}

impl HttpBackend {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            token: config.auth_token.clone(),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Send and turn any non-2xx status into [`ApiError::Api`] with the body.
    async fn send(&self, req: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let resp = self
            .authorize(req)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(resp)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        tracing::debug!(path, "GET");
        let resp = self.send(self.client.get(self.url(path))).await?;
        resp.json().await.map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response, ApiError> {
        tracing::debug!(path, "POST");
        self.send(self.client.post(self.url(path)).json(body)).await
    }
}

#[async_trait]
impl UserBackend for HttpBackend {
    async fn access_levels(&self) -> Result<Vec<AccessLevel>, ApiError> {
        self.get_json("/niveis-acesso").await
    }

    async fn screens(&self) -> Result<Vec<AccessOption>, ApiError> {
        self.get_json("/modulos").await
    }

    async fn list_users(&self) -> Result<Vec<UserRecord>, ApiError> {
        let body: serde_json::Value = self.get_json("/usuarios").await?;
        list_shape::extract_users(body)
    }

    async fn delete_user(&self, id: UserId) -> Result<(), ApiError> {
        self.post_json("/usuario/delete", &json!({ "id": id })).await?;
        Ok(())
    }

    async fn create_user(&self, payload: &CreateUserPayload) -> Result<(), ApiError> {
        self.post_json("/usuarios/create", payload).await?;
        Ok(())
    }

    async fn set_password(&self, payload: &SetPasswordPayload) -> Result<u16, ApiError> {
        let resp = self.post_json("/usuarios/definir-senha", payload).await?;
        Ok(resp.status().as_u16())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = ClientConfig {
            api_url: "http://localhost:3333/".to_string(),
            ..ClientConfig::default()
        };
        let backend = HttpBackend::new(&config).unwrap();
        assert_eq!(backend.url("/modulos"), "http://localhost:3333/modulos");
    }
}
