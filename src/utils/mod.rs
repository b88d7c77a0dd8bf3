//! Utility modules for browser, URL, and formatting operations.
//!
//! Provides:
//! - [`fetch`] - JSON requests with credentials and timeout
//! - [`history`] - History API navigation
//! - [`QueryParams`] - Query-string parsing and editing
//! - [`safe_redirect`] - Redirect target validation
//! - [`format_size`] - Human-readable byte sizes

pub mod console;
pub mod fetch;
mod format;
pub mod history;
mod query;
mod url;

pub use format::format_size;
pub use query::{QueryParams, decode_component};
pub use url::{RedirectValidation, RedirectValidationError, safe_redirect, validate_redirect};
