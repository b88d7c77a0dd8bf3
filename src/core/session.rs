//! Session/Auth state controller.
//!
//! Owns the transitions of [`SessionState`]: the one-shot startup check,
//! explicit login, and fail-open logout. One instance is created at the app
//! root and handed down through context; tests build their own.

use crate::api::{AuthApi, LoginResponse};
use crate::core::error::FetchError;
use crate::core::state::StateCell;
use crate::models::SessionState;
use crate::utils::console;

/// Inline login message for failures that never reached the server.
pub const LOGIN_UNEXPECTED_ERROR: &str = "Unexpected error";

/// Message shown on the login form for a failed login.
pub fn login_error_message(err: &FetchError) -> String {
    match err.as_api() {
        Some(api_err) => api_err.message.clone(),
        None => LOGIN_UNEXPECTED_ERROR.to_string(),
    }
}

/// Message shown above the login form: the login error, or the message left
/// by the last logout when there is none.
pub fn login_banner(error: &str, state: &SessionState) -> String {
    if error.is_empty() {
        state.logout_message.clone()
    } else {
        error.to_string()
    }
}

/// Session controller over an auth API and a state cell.
#[derive(Clone, Copy, Debug)]
pub struct Session<A, S> {
    api: A,
    state: S,
}

impl<A, S> Session<A, S>
where
    A: AuthApi,
    S: StateCell<SessionState>,
{
    pub fn new(api: A, state: S) -> Self {
        Self { api, state }
    }

    pub fn state(&self) -> SessionState {
        self.state.snapshot()
    }

    /// Validate the server session. Runs once at startup.
    ///
    /// Any failure, whether rejected or unreachable, leaves the user
    /// unauthenticated. `loading` is cleared when the check completes.
    pub async fn check_session(&self) {
        let is_authenticated = match self.api.validate_session().await {
            Ok(()) => true,
            Err(err) => {
                console::info(&format!("no active session: {}", err));
                false
            }
        };
        self.state.modify(|s| {
            s.is_authenticated = is_authenticated;
            s.loading = false;
        });
    }

    pub fn set_authenticated(&self, is_authenticated: bool) {
        self.state.modify(|s| s.is_authenticated = is_authenticated);
    }

    /// Log in and mark the session authenticated on success.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<LoginResponse, FetchError> {
        let response = self.api.login(username, password).await?;
        self.set_authenticated(true);
        Ok(response)
    }

    /// Log out, storing `message` for the login form.
    ///
    /// Local sign-out always happens, even if the logout call fails.
    pub async fn handle_logout(&self, message: Option<String>) {
        self.state.modify(|s| s.is_logging_out = true);

        if let Err(err) = self.api.logout().await {
            console::warn(&format!("logout request failed: {}", err));
        }

        self.state.modify(|s| {
            s.logout_message = message.unwrap_or_default();
            s.is_authenticated = false;
            s.is_logging_out = false;
        });
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::core::error::ApiError;
    use crate::mock::{Deferred, MockApi};

    fn session(api: &MockApi) -> Session<MockApi, Rc<RefCell<SessionState>>> {
        Session::new(api.clone(), Rc::new(RefCell::new(SessionState::new())))
    }

    #[test]
    fn test_initial_state() {
        let state = SessionState::new();
        assert!(state.loading);
        assert!(!state.is_authenticated);
        assert!(!state.is_logging_out);
        assert!(state.logout_message.is_empty());
    }

    #[tokio::test]
    async fn test_check_session_success() {
        let api = MockApi::new();
        let session = session(&api);

        session.check_session().await;

        let state = session.state();
        assert!(state.is_authenticated);
        assert!(!state.loading);
        assert_eq!(api.calls(), vec!["validate-session"]);
    }

    #[tokio::test]
    async fn test_check_session_rejected_or_unreachable() {
        for err in [
            FetchError::Api(ApiError::new("Unauthorized", 401)),
            FetchError::Network("offline".into()),
            FetchError::Timeout,
        ] {
            let api = MockApi::new();
            api.set_validate_result(Err(err));
            let session = session(&api);

            session.check_session().await;

            let state = session.state();
            assert!(!state.is_authenticated);
            assert!(!state.loading);
        }
    }

    #[tokio::test]
    async fn test_login_sets_authenticated() {
        let api = MockApi::new();
        let session = session(&api);
        session.check_session().await;
        session.set_authenticated(false);

        let response = session.login("alice", "secret").await.unwrap();

        assert_eq!(response.username, "alice");
        assert!(session.state().is_authenticated);
    }

    #[tokio::test]
    async fn test_login_failure_keeps_unauthenticated() {
        let api = MockApi::new();
        api.set_login_result(Err(ApiError::new("Invalid credentials", 401).into()));
        let session = session(&api);

        let err = session.login("alice", "wrong").await.unwrap_err();

        assert_eq!(err.to_string(), "Invalid credentials");
        assert!(!session.state().is_authenticated);
    }

    #[test]
    fn test_login_error_message() {
        let rejected = FetchError::Api(ApiError::new("Invalid credentials", 401));
        assert_eq!(login_error_message(&rejected), "Invalid credentials");
        assert_eq!(login_error_message(&FetchError::Timeout), "Unexpected error");
        assert_eq!(
            login_error_message(&FetchError::Network("offline".into())),
            "Unexpected error"
        );
    }

    #[test]
    fn test_login_banner_prefers_error() {
        let mut state = SessionState::new();
        assert_eq!(login_banner("", &state), "");

        state.logout_message = "Session expired".to_string();
        assert_eq!(login_banner("", &state), "Session expired");
        assert_eq!(login_banner("Invalid credentials", &state), "Invalid credentials");
    }

    #[tokio::test]
    async fn test_logout_stores_message() {
        let api = MockApi::new();
        let session = session(&api);
        session.set_authenticated(true);

        session.handle_logout(Some("Session expired".to_string())).await;

        let state = session.state();
        assert!(!state.is_authenticated);
        assert!(!state.is_logging_out);
        assert_eq!(state.logout_message, "Session expired");
    }

    #[tokio::test]
    async fn test_logout_is_fail_open() {
        let api = MockApi::new();
        api.set_logout_result(Err(FetchError::Network("offline".into())));
        let session = session(&api);
        session.set_authenticated(true);

        session.handle_logout(None).await;

        let state = session.state();
        assert!(!state.is_authenticated);
        assert!(!state.is_logging_out);
        assert_eq!(state.logout_message, "");
    }

    #[tokio::test]
    async fn test_logging_out_flag_held_during_call() {
        let api = MockApi::new();
        let gate = Deferred::new();
        api.defer_logout(gate.clone());
        let session = session(&api);
        session.set_authenticated(true);

        let observe = async {
            tokio::task::yield_now().await;
            let during = session.state();
            gate.resolve(Ok(()));
            during
        };
        let ((), during) = tokio::join!(session.handle_logout(None), observe);

        assert!(during.is_logging_out);
        assert!(during.is_authenticated);
        assert!(!session.state().is_logging_out);
        assert!(!session.state().is_authenticated);
    }
}
