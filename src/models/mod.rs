//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`DirectoryEntry`], [`EntryKind`] - Directory listings from the server
//! - [`SessionState`] - Client projection of the server session
//! - [`SortSpec`], [`TableQuery`] - URL-driven table view state
//! - [`Breadcrumb`] - Breadcrumb trail items
//! - [`AppRoute`], [`Location`], [`ErrorState`] - Client-side routing

mod breadcrumb;
mod directory;
mod route;
mod session;
mod table;

pub use breadcrumb::{Breadcrumb, ELLIPSIS};
pub use directory::{DirectoryEntry, EntryKind};
pub use route::{AppRoute, ErrorState, Location, directory_path, files_href};
pub use session::SessionState;
pub use table::{SortDirection, SortKey, SortSpec, TableQuery};
