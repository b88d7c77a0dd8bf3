//! HTTP API of the directory server.
//!
//! - [`AuthApi`], [`DirectoryApi`] - Endpoint traits the controllers depend on
//! - [`ApiClient`] - Browser implementation over the Fetch API
//! - [`envelope`] - Response envelope decoding

mod client;
pub mod envelope;

use serde::{Deserialize, Serialize};

use crate::config::endpoints;
use crate::core::error::FetchError;
use crate::models::DirectoryEntry;

pub use client::ApiClient;

/// Body of `POST /api/login`.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Payload returned by a successful login.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub username: String,
}

/// Session endpoints.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, FetchError>;

    async fn logout(&self) -> Result<(), FetchError>;

    /// Succeeds only while the server still holds a valid session.
    async fn validate_session(&self) -> Result<(), FetchError>;
}

/// Directory listing endpoint.
#[allow(async_fn_in_trait)]
pub trait DirectoryApi {
    /// Listing of `path`, relative to the served root (empty = root).
    async fn get_directory(&self, path: &str) -> Result<DirectoryEntry, FetchError>;
}

/// URL of the listing for `path`, encoded as one component.
///
/// `/` is escaped, so nested paths travel as a single segment. `!'()*` are
/// escaped as well, unlike `encodeURIComponent`.
pub fn directory_url(path: &str) -> String {
    format!("{}{}", endpoints::DIRECTORY, urlencoding::encode(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_url_root() {
        assert_eq!(directory_url(""), "/api/dir/");
    }

    #[test]
    fn test_directory_url_encodes_path_as_one_component() {
        assert_eq!(directory_url("docs"), "/api/dir/docs");
        assert_eq!(directory_url("docs/My Folder"), "/api/dir/docs%2FMy%20Folder");
        assert_eq!(directory_url("100%/a?b"), "/api/dir/100%25%2Fa%3Fb");
        assert_eq!(directory_url("q&a#1"), "/api/dir/q%26a%231");
    }

    #[test]
    fn test_directory_url_escapes_reserved_marks() {
        assert_eq!(directory_url("it's (1)!*"), "/api/dir/it%27s%20%281%29%21%2A");
        assert_eq!(directory_url("a-b_c.d~e"), "/api/dir/a-b_c.d~e");
    }
}
