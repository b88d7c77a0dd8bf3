//! Route guarding on session state.
//!
//! Pure decisions evaluated on every navigation; the components carry them
//! out (render, show the loader, or replace-navigate).

use crate::config::{DEFAULT_REDIRECT, LOGIN_PATH, LOGOUT_REDIRECT, params};
use crate::models::{Location, SessionState};
use crate::utils::safe_redirect;

/// What a guarded view should do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Show the blocking loader
    Loading,
    /// Replace the current location with this URL
    Redirect(String),
    /// Render the protected content
    Render,
}

/// Decide what the protected `/files/*` view does for `location`.
///
/// 1. While the session check runs, block on the loader.
/// 2. While logging out, leave for the login page with a fixed target, or
///    keep the loader up if already there.
/// 3. Unauthenticated users go to the login page with the original path and
///    query as `redirect`.
/// 4. Otherwise render.
pub fn evaluate(session: &SessionState, location: &Location) -> GuardDecision {
    if session.loading {
        return GuardDecision::Loading;
    }

    let on_login = location.is_login();

    if session.is_logging_out {
        return if on_login {
            GuardDecision::Loading
        } else {
            GuardDecision::Redirect(LOGOUT_REDIRECT.to_string())
        };
    }

    if !session.is_authenticated && !on_login {
        return GuardDecision::Redirect(login_url(location));
    }

    GuardDecision::Render
}

/// Login URL that returns to `location` after signing in.
pub fn login_url(location: &Location) -> String {
    format!(
        "{}?{}={}",
        LOGIN_PATH,
        params::REDIRECT,
        urlencoding::encode(&location.href())
    )
}

/// Decision for `/`: wait for the session check, then pick a landing page.
pub fn index_redirect(session: &SessionState) -> GuardDecision {
    if session.loading {
        GuardDecision::Loading
    } else if session.is_authenticated {
        GuardDecision::Redirect(DEFAULT_REDIRECT.to_string())
    } else {
        GuardDecision::Redirect(LOGIN_PATH.to_string())
    }
}

/// Where the login page sends an already signed-in user, if anywhere.
///
/// `redirect` is validated so only in-app paths are honored.
pub fn login_page_redirect(session: &SessionState, redirect: Option<&str>) -> Option<String> {
    (session.is_authenticated && !session.is_logging_out).then(|| safe_redirect(redirect))
}
