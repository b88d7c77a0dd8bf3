//! Core logic of the directory viewer.
//!
//! This module provides:
//! - [`Session`] authentication state transitions
//! - [`guard`] route decisions on session state
//! - [`DirectoryLoader`] listing fetches with failure dispatch
//! - [`derive_rows`] table filtering and sorting
//! - [`derive_breadcrumbs`] crumb trails for the current path

mod breadcrumbs;
pub mod error;
pub mod guard;
mod loader;
pub mod navigate;
mod session;
pub mod state;
pub mod table;

pub use breadcrumbs::derive_breadcrumbs;
pub use error::{ApiError, FetchError};
pub use guard::GuardDecision;
pub use loader::{
    DirectoryLoader, DirectoryView, FailureAction, LoadOutcome, UNEXPECTED_ERROR_MESSAGE,
    dispatch_failure, failure_action,
};
pub use navigate::{NavigateOptions, Navigator};
pub use session::{LOGIN_UNEXPECTED_ERROR, Session, login_banner, login_error_message};
pub use state::StateCell;
pub use table::{Column, derive_rows, directory_columns, directory_rows};
