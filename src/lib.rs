//! Browser directory viewer for a file server with cookie sessions.
//!
//! The crate splits into a pure layer ([`models`], [`core`], [`api::envelope`])
//! that runs natively under test, and a browser layer ([`app`],
//! [`components`], [`utils::fetch`], [`utils::history`]) built on Leptos.

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

#[cfg(any(test, feature = "mock"))]
pub mod mock;
