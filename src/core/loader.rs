//! Directory fetch controller.
//!
//! Loads listings for the requested path and turns failures into
//! navigation outcomes. Each load takes a generation number; a response is
//! applied only if its generation and path are still the current ones, so a
//! slow response for an old path never overwrites a newer listing.

use crate::api::{AuthApi, DirectoryApi};
use crate::config::{ERROR_PATH, NOT_FOUND_PATH};
use crate::core::error::FetchError;
use crate::core::navigate::{NavigateOptions, Navigator};
use crate::core::session::Session;
use crate::core::state::StateCell;
use crate::models::{DirectoryEntry, ErrorState, SessionState};
use crate::utils::console;

/// Message shown for failures that never reached the server.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "Unexpected error occurred";

/// State of the directory view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DirectoryView {
    /// Path of the latest load, decoded
    pub requested_path: String,
    /// Incremented on every load
    pub generation: u64,
    pub loading: bool,
    pub listing: Option<DirectoryEntry>,
}

impl DirectoryView {
    /// Entries of the loaded directory, empty before the first listing.
    pub fn rows(&self) -> Vec<DirectoryEntry> {
        self.listing
            .as_ref()
            .map(|listing| listing.children().to_vec())
            .unwrap_or_default()
    }
}

/// What to do after a failed load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FailureAction {
    /// Session expired: log out with the server's message
    Logout { message: String },
    /// Replace-navigate to the not-found page
    NotFound,
    /// Navigate to the error page carrying this state
    ShowError(ErrorState),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FailureKind {
    Logout,
    NotFound,
}

/// Statuses with a dedicated action. Everything else shows the error page.
const STATUS_ACTIONS: &[(u16, FailureKind)] =
    &[(401, FailureKind::Logout), (404, FailureKind::NotFound)];

/// Map a fetch failure to its action.
pub fn failure_action(err: &FetchError) -> FailureAction {
    let Some(api_err) = err.as_api() else {
        return FailureAction::ShowError(ErrorState {
            status: None,
            message: Some(UNEXPECTED_ERROR_MESSAGE.to_string()),
        });
    };

    let kind = STATUS_ACTIONS
        .iter()
        .find(|(status, _)| *status == api_err.status)
        .map(|(_, kind)| *kind);

    match kind {
        Some(FailureKind::Logout) => FailureAction::Logout {
            message: api_err.message.clone(),
        },
        Some(FailureKind::NotFound) => FailureAction::NotFound,
        None => FailureAction::ShowError(ErrorState {
            status: Some(api_err.status),
            message: Some(api_err.message.clone()),
        }),
    }
}

/// Result of a single [`DirectoryLoader::load`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    /// A newer load started before this one finished; nothing was applied
    Superseded,
    Failed(FailureAction),
}

/// Directory fetch controller over a directory API and a view state cell.
#[derive(Clone, Copy, Debug)]
pub struct DirectoryLoader<A, S> {
    api: A,
    view: S,
}

impl<A, S> DirectoryLoader<A, S>
where
    A: DirectoryApi,
    S: StateCell<DirectoryView>,
{
    pub fn new(api: A, view: S) -> Self {
        Self { api, view }
    }

    pub fn view(&self) -> DirectoryView {
        self.view.snapshot()
    }

    /// Fetch the listing of `path` (decoded, relative to the files root).
    pub async fn load(&self, path: &str) -> LoadOutcome {
        let Some(generation) = self.view.modify(|v| {
            v.generation += 1;
            v.requested_path = path.to_string();
            v.loading = true;
            v.generation
        }) else {
            return LoadOutcome::Superseded;
        };

        let result = self.api.get_directory(path).await;

        let outcome = self.view.modify(|v| {
            if v.generation != generation || v.requested_path != path {
                return LoadOutcome::Superseded;
            }
            v.loading = false;
            match result {
                Ok(listing) => {
                    v.listing = Some(listing);
                    LoadOutcome::Applied
                }
                Err(err) => {
                    if err.as_api().is_none() {
                        console::error(&format!("directory request failed: {}", err));
                    }
                    LoadOutcome::Failed(failure_action(&err))
                }
            }
        });

        outcome.unwrap_or(LoadOutcome::Superseded)
    }
}

/// Carry out `action`: log out, or navigate to the not-found or error page.
pub async fn dispatch_failure<A, S, N>(
    action: FailureAction,
    session: &Session<A, S>,
    navigator: &N,
) where
    A: AuthApi,
    S: StateCell<SessionState>,
    N: Navigator,
{
    match action {
        FailureAction::Logout { message } => {
            console::error(&format!("API error 401: {}", message));
            session.handle_logout(Some(message)).await;
        }
        FailureAction::NotFound => {
            console::error("API error 404: directory not found");
            navigator.navigate(NOT_FOUND_PATH, NavigateOptions::replace());
        }
        FailureAction::ShowError(state) => {
            if let Some(status) = state.status {
                console::error(&format!(
                    "API error {}: {}",
                    status,
                    state.message.as_deref().unwrap_or_default()
                ));
            }
            navigator.navigate(ERROR_PATH, NavigateOptions::with_state(state));
        }
    }
}
