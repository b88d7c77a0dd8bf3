//! Client-side routes resolved from the browser location.

use serde::{Deserialize, Serialize};

use crate::config::{ERROR_PATH, FILES_ROUTE, LOGIN_PATH, params};
use crate::utils::{QueryParams, decode_component};

/// Pathname and query string of the current browser location.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Location {
    /// Percent-encoded path, always starting with `/`
    pub pathname: String,
    /// Query string including the leading `?`, or empty
    pub search: String,
}

impl Location {
    pub fn new(pathname: impl Into<String>, search: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            search: search.into(),
        }
    }

    /// Split a relative URL such as `/files/a?sort=size:asc`.
    pub fn parse(url: &str) -> Self {
        let url = url.split('#').next().unwrap_or_default();
        match url.find('?') {
            Some(idx) => Self::new(&url[..idx], &url[idx..]),
            None => Self::new(url, ""),
        }
    }

    /// Pathname followed by the query string.
    pub fn href(&self) -> String {
        format!("{}{}", self.pathname, self.search)
    }

    pub fn is_login(&self) -> bool {
        self.pathname.starts_with(LOGIN_PATH)
    }

    pub fn query(&self) -> QueryParams {
        QueryParams::parse(&self.search)
    }

    /// Same pathname with one query parameter set, or removed when `value`
    /// is empty. Other parameters are kept.
    pub fn with_param(&self, key: &str, value: &str) -> String {
        let mut query = self.query();
        query.set(key, value);
        format!("{}{}", self.pathname, query.to_query_string())
    }
}

/// Navigation state carried to the error view.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ErrorState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Application routes.
///
/// - `/` → [`AppRoute::Index`]
/// - `/files`, `/files/*` → [`AppRoute::Files`]
/// - `/login` → [`AppRoute::Login`]
/// - `/error` → [`AppRoute::Error`]
/// - `/404` and anything else → [`AppRoute::NotFound`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Index,
    Files {
        /// Decoded directory path below the files root (empty for the root)
        path: String,
    },
    Login {
        redirect: Option<String>,
    },
    NotFound,
    Error(ErrorState),
}

impl AppRoute {
    /// Resolve a location (plus history state for the error view) to a route.
    pub fn resolve(location: &Location, state: Option<ErrorState>) -> Self {
        let pathname = location.pathname.as_str();

        if pathname == "/" || pathname.is_empty() {
            return Self::Index;
        }
        if let Some(path) = directory_path(pathname) {
            return Self::Files { path };
        }
        if trim_trailing(pathname) == LOGIN_PATH {
            return Self::Login {
                redirect: location.query().get(params::REDIRECT).map(str::to_string),
            };
        }
        if trim_trailing(pathname) == ERROR_PATH {
            return Self::Error(state.unwrap_or_default());
        }
        Self::NotFound
    }

    pub fn is_files(&self) -> bool {
        matches!(self, Self::Files { .. })
    }
}

/// Decoded directory path for a `/files/*` pathname, `None` for other routes.
///
/// `/files` and `/files/` both map to the empty (root) path.
pub fn directory_path(pathname: &str) -> Option<String> {
    let rest = pathname.strip_prefix('/')?.strip_prefix(FILES_ROUTE)?;
    if !rest.is_empty() && !rest.starts_with('/') {
        return None;
    }
    let rest = rest.strip_prefix('/').unwrap_or(rest);
    Some(decode_component(rest))
}

/// Pathname of the directory browser for `path` (segments percent-encoded).
pub fn files_href(path: &str) -> String {
    let encoded: Vec<String> = path
        .split('/')
        .filter(|s| !s.is_empty())
        .map(|s| urlencoding::encode(s).into_owned())
        .collect();
    if encoded.is_empty() {
        format!("/{FILES_ROUTE}")
    } else {
        format!("/{}/{}", FILES_ROUTE, encoded.join("/"))
    }
}

fn trim_trailing(pathname: &str) -> &str {
    match pathname.strip_suffix('/') {
        Some(rest) if !rest.is_empty() => rest,
        _ => pathname,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(url: &str) -> AppRoute {
        AppRoute::resolve(&Location::parse(url), None)
    }

    #[test]
    fn test_route_parsing() {
        assert_eq!(route("/"), AppRoute::Index);
        assert_eq!(route("/files"), AppRoute::Files { path: String::new() });
        assert_eq!(route("/files/"), AppRoute::Files { path: String::new() });
        assert_eq!(
            route("/files/docs/My%20Folder?sort=size:asc"),
            AppRoute::Files {
                path: "docs/My Folder".to_string(),
            }
        );
        assert_eq!(route("/login"), AppRoute::Login { redirect: None });
        assert_eq!(
            route("/login?redirect=%2Ffiles%2Fdocs"),
            AppRoute::Login {
                redirect: Some("/files/docs".to_string()),
            }
        );
        assert_eq!(route("/404"), AppRoute::NotFound);
        assert_eq!(route("/filesystem"), AppRoute::NotFound);
        assert_eq!(route("/somewhere/else"), AppRoute::NotFound);
    }

    #[test]
    fn test_error_route_carries_state() {
        let state = ErrorState {
            status: Some(500),
            message: Some("boom".to_string()),
        };
        assert_eq!(
            AppRoute::resolve(&Location::parse("/error"), Some(state.clone())),
            AppRoute::Error(state)
        );
        assert_eq!(route("/error"), AppRoute::Error(ErrorState::default()));
    }

    #[test]
    fn test_location_parse() {
        let location = Location::parse("/files/a?search=x#frag");
        assert_eq!(location.pathname, "/files/a");
        assert_eq!(location.search, "?search=x");
        assert_eq!(location.href(), "/files/a?search=x");
        assert!(Location::parse("/login?redirect=/files").is_login());
    }

    #[test]
    fn test_with_param_keeps_other_params() {
        let location = Location::parse("/files/a?search=x&sort=size:desc");
        assert_eq!(location.with_param("search", "y"), "/files/a?search=y&sort=size%3Adesc");
        assert_eq!(location.with_param("search", ""), "/files/a?sort=size%3Adesc");
        assert_eq!(Location::parse("/files").with_param("search", ""), "/files");
    }

    #[test]
    fn test_files_href_encodes_segments() {
        assert_eq!(files_href(""), "/files");
        assert_eq!(files_href("docs/My Folder"), "/files/docs/My%20Folder");
        assert_eq!(files_href("/docs//a/"), "/files/docs/a");
    }
}
