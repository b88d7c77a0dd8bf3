//! Client-side projection of the server session.

/// Authentication state held by the session provider.
///
/// `loading` is only true until the startup session check completes, and
/// `is_logging_out` only while a logout call is outstanding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub is_authenticated: bool,
    pub loading: bool,
    pub is_logging_out: bool,
    /// Message from the last logout, shown on the login form
    pub logout_message: String,
}

impl SessionState {
    /// State at mount time: unauthenticated, waiting for the session check.
    pub fn new() -> Self {
        Self {
            is_authenticated: false,
            loading: true,
            is_logging_out: false,
            logout_message: String::new(),
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
