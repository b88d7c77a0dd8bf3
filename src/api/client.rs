//! Browser API client.

use serde::de::DeserializeOwned;

use super::envelope::{decode_response, decode_status};
use super::{AuthApi, DirectoryApi, LoginRequest, LoginResponse, directory_url};
use crate::config::{API_BASE, endpoints};
use crate::core::error::FetchError;
use crate::models::DirectoryEntry;
use crate::utils::fetch::{RawResponse, send_request};

/// Fetch-backed client for the directory server.
#[derive(Clone, Copy, Debug)]
pub struct ApiClient {
    base: &'static str,
}

impl ApiClient {
    pub const fn new(base: &'static str) -> Self {
        Self { base }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn send(
        &self,
        method: &str,
        path: &str,
        body: Option<&str>,
    ) -> Result<RawResponse, FetchError> {
        send_request(method, &self.url(path), body).await
    }

    /// Request whose `data` payload is returned.
    async fn request<T: DeserializeOwned>(
        &self,
        method: &str,
        path: &str,
        body: Option<&str>,
    ) -> Result<T, FetchError> {
        let resp = self.send(method, path, body).await?;
        Ok(decode_response(resp.ok, resp.status, &resp.body)?)
    }

    /// Request where only success or failure matters.
    async fn request_status(&self, method: &str, path: &str) -> Result<(), FetchError> {
        let resp = self.send(method, path, None).await?;
        Ok(decode_status(resp.ok, resp.status, &resp.body)?)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(API_BASE)
    }
}

impl AuthApi for ApiClient {
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, FetchError> {
        let body = serde_json::to_string(&LoginRequest { username, password })
            .map_err(|_| FetchError::RequestCreationFailed)?;
        self.request("POST", endpoints::LOGIN, Some(&body)).await
    }

    async fn logout(&self) -> Result<(), FetchError> {
        self.request_status("POST", endpoints::LOGOUT).await
    }

    async fn validate_session(&self) -> Result<(), FetchError> {
        self.request_status("GET", endpoints::VALIDATE_SESSION).await
    }
}

impl DirectoryApi for ApiClient {
    async fn get_directory(&self, path: &str) -> Result<DirectoryEntry, FetchError> {
        self.request("GET", &directory_url(path), None).await
    }
}
