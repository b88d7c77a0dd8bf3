//! In-memory API and navigator doubles for tests.
//!
//! Enabled for unit tests and, through the `mock` feature, for the
//! integration tests under `tests/`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::future::poll_fn;
use std::rc::Rc;
use std::task::{Poll, Waker};

use crate::api::{AuthApi, DirectoryApi, LoginResponse};
use crate::core::error::{ApiError, FetchError};
use crate::core::navigate::{NavigateOptions, Navigator};
use crate::models::DirectoryEntry;

// =============================================================================
// Deferred
// =============================================================================

struct Slot<T> {
    value: Option<T>,
    waker: Option<Waker>,
}

/// A value resolved later by the test, used to hold an API call open.
pub struct Deferred<T> {
    slot: Rc<RefCell<Slot<T>>>,
}

impl<T> Clone for Deferred<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<T> Deferred<T> {
    pub fn new() -> Self {
        Self {
            slot: Rc::new(RefCell::new(Slot {
                value: None,
                waker: None,
            })),
        }
    }

    pub fn resolve(&self, value: T) {
        let mut slot = self.slot.borrow_mut();
        slot.value = Some(value);
        if let Some(waker) = slot.waker.take() {
            waker.wake();
        }
    }

    pub async fn wait(&self) -> T {
        poll_fn(|cx| {
            let mut slot = self.slot.borrow_mut();
            match slot.value.take() {
                Some(value) => Poll::Ready(value),
                None => {
                    slot.waker = Some(cx.waker().clone());
                    Poll::Pending
                }
            }
        })
        .await
    }
}

impl<T> Default for Deferred<T> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// MockApi
// =============================================================================

type DirResult = Result<DirectoryEntry, FetchError>;

struct MockState {
    validate: Result<(), FetchError>,
    login: Result<LoginResponse, FetchError>,
    logout: Result<(), FetchError>,
    logout_gate: Option<Deferred<Result<(), FetchError>>>,
    directories: HashMap<String, DirResult>,
    directory_gates: HashMap<String, Deferred<DirResult>>,
    calls: Vec<String>,
}

/// Scripted implementation of [`AuthApi`] and [`DirectoryApi`].
///
/// Defaults: the session is valid, login succeeds as `alice`, logout
/// succeeds, unknown directories answer 404.
#[derive(Clone)]
pub struct MockApi {
    inner: Rc<RefCell<MockState>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(MockState {
                validate: Ok(()),
                login: Ok(LoginResponse {
                    username: "alice".to_string(),
                }),
                logout: Ok(()),
                logout_gate: None,
                directories: HashMap::new(),
                directory_gates: HashMap::new(),
                calls: Vec::new(),
            })),
        }
    }

    pub fn set_validate_result(&self, result: Result<(), FetchError>) {
        self.inner.borrow_mut().validate = result;
    }

    pub fn set_login_result(&self, result: Result<LoginResponse, FetchError>) {
        self.inner.borrow_mut().login = result;
    }

    pub fn set_logout_result(&self, result: Result<(), FetchError>) {
        self.inner.borrow_mut().logout = result;
    }

    /// Hold the next logout call open until `gate` resolves.
    pub fn defer_logout(&self, gate: Deferred<Result<(), FetchError>>) {
        self.inner.borrow_mut().logout_gate = Some(gate);
    }

    pub fn set_directory(&self, path: &str, result: DirResult) {
        self.inner
            .borrow_mut()
            .directories
            .insert(path.to_string(), result);
    }

    /// Hold the next listing of `path` open until `gate` resolves.
    pub fn defer_directory(&self, path: &str, gate: Deferred<DirResult>) {
        self.inner
            .borrow_mut()
            .directory_gates
            .insert(path.to_string(), gate);
    }

    /// Endpoints hit so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.inner.borrow().calls.clone()
    }

    fn record(&self, call: String) {
        self.inner.borrow_mut().calls.push(call);
    }
}

impl Default for MockApi {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthApi for MockApi {
    async fn login(&self, username: &str, _password: &str) -> Result<LoginResponse, FetchError> {
        self.record(format!("login:{}", username));
        self.inner.borrow().login.clone()
    }

    async fn logout(&self) -> Result<(), FetchError> {
        self.record("logout".to_string());
        let gate = self.inner.borrow_mut().logout_gate.take();
        match gate {
            Some(gate) => gate.wait().await,
            None => self.inner.borrow().logout.clone(),
        }
    }

    async fn validate_session(&self) -> Result<(), FetchError> {
        self.record("validate-session".to_string());
        self.inner.borrow().validate.clone()
    }
}

impl DirectoryApi for MockApi {
    async fn get_directory(&self, path: &str) -> Result<DirectoryEntry, FetchError> {
        self.record(format!("dir:{}", path));
        let gate = self.inner.borrow_mut().directory_gates.remove(path);
        if let Some(gate) = gate {
            return gate.wait().await;
        }
        self.inner
            .borrow()
            .directories
            .get(path)
            .cloned()
            .unwrap_or_else(|| Err(ApiError::new("Not found", 404).into()))
    }
}

// =============================================================================
// RecordingNavigator
// =============================================================================

/// Navigator that records every navigation instead of touching history.
#[derive(Clone, Default)]
pub struct RecordingNavigator {
    visits: Rc<RefCell<Vec<(String, NavigateOptions)>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visits(&self) -> Vec<(String, NavigateOptions)> {
        self.visits.borrow().clone()
    }

    pub fn last(&self) -> Option<(String, NavigateOptions)> {
        self.visits.borrow().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, to: &str, options: NavigateOptions) {
        self.visits.borrow_mut().push((to.to_string(), options));
    }
}
