//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Title shown above the directory table.
pub const APP_TITLE: &str = "Teleport Directory";

// =============================================================================
// API Configuration
// =============================================================================

/// Base URL prepended to every API path (empty = same origin).
pub const API_BASE: &str = "";

/// API endpoint paths.
pub mod endpoints {
    pub const LOGIN: &str = "/api/login";
    pub const LOGOUT: &str = "/api/logout";
    pub const VALIDATE_SESSION: &str = "/api/validate-session";
    /// Prefix for directory listings; the URL-encoded path is appended.
    pub const DIRECTORY: &str = "/api/dir/";
}

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

// =============================================================================
// Routes
// =============================================================================

/// Login route. Anything starting with this prefix counts as the login page.
pub const LOGIN_PATH: &str = "/login";

/// Root segment of the guarded directory browser (`/files/*`).
pub const FILES_ROUTE: &str = "files";

/// Where a successful login lands when no usable `redirect` is given.
pub const DEFAULT_REDIRECT: &str = "/files";

/// Fixed target used while a logout is in progress.
pub const LOGOUT_REDIRECT: &str = "/login?redirect=/files";

pub const NOT_FOUND_PATH: &str = "/404";

pub const ERROR_PATH: &str = "/error";

/// Query parameter names on the directory route.
pub mod params {
    pub const SEARCH: &str = "search";
    pub const SORT: &str = "sort";
    pub const REDIRECT: &str = "redirect";
}

// =============================================================================
// Breadcrumbs
// =============================================================================

/// Label for the root crumb of the directory browser.
pub const HOME_LABEL: &str = "Home";

/// Non-home crumbs kept visible before collapsing into an ellipsis.
pub const MAX_VISIBLE_CRUMBS: usize = 3;

/// Crumb labels longer than this are truncated for display.
pub const MAX_CRUMB_LABEL_LENGTH: usize = 24;

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
