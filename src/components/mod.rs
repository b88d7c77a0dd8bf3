//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`auth_guard`] - Session-gated rendering and the `/` redirect
//! - [`directory`] - Directory browser page, table and breadcrumbs
//! - [`login`] - Login page and form
//! - [`status`] - Not-found and error pages
//! - [`loader`] - Full-page spinner and redirect placeholder
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod auth_guard;
pub mod directory;
pub mod icons;
pub mod loader;
pub mod login;
pub mod router;
pub mod status;

pub use router::AppRouter;
