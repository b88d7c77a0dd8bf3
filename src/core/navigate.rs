//! Navigation seam between controllers and the browser history.

use crate::models::ErrorState;

/// How a navigation is recorded in history.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigateOptions {
    /// Replace the current history entry instead of pushing a new one
    pub replace: bool,
    /// State handed to the error view
    pub state: Option<ErrorState>,
}

impl NavigateOptions {
    pub fn push() -> Self {
        Self::default()
    }

    pub fn replace() -> Self {
        Self {
            replace: true,
            state: None,
        }
    }

    pub fn with_state(state: ErrorState) -> Self {
        Self {
            replace: false,
            state: Some(state),
        }
    }
}

/// Something that can move the app to another URL.
pub trait Navigator {
    fn navigate(&self, to: &str, options: NavigateOptions);
}
