//! Browser history navigation.
//!
//! The browser location is the source of truth for routing. Navigation goes
//! through `pushState`/`replaceState` and `popstate` keeps the signals in
//! sync on back/forward, so no router crate is involved.

use leptos::prelude::*;
use serde::Serialize;
use wasm_bindgen::JsValue;

use crate::core::navigate::{NavigateOptions, Navigator};
use crate::models::{ErrorState, Location};
use crate::utils::console;

/// Current pathname and query string of the window.
pub fn current_location() -> Location {
    let Some(window) = web_sys::window() else {
        return Location::new("/", "");
    };
    let location = window.location();
    Location::new(
        location.pathname().unwrap_or_else(|_| "/".to_string()),
        location.search().unwrap_or_default(),
    )
}

/// Error view state stored in the current history entry, if any.
pub fn current_error_state() -> Option<ErrorState> {
    let state = web_sys::window()?.history().ok()?.state().ok()?;
    if state.is_null() || state.is_undefined() {
        return None;
    }
    serde_wasm_bindgen::from_value(state).ok()
}

fn state_value(state: Option<&ErrorState>) -> JsValue {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    state
        .and_then(|s| s.serialize(&serializer).ok())
        .unwrap_or(JsValue::NULL)
}

/// [`Navigator`] backed by the History API.
///
/// Holds the reactive copy of the location and history state; the app
/// derives its route from these.
#[derive(Clone, Copy)]
pub struct BrowserNavigator {
    location: RwSignal<Location>,
    error_state: RwSignal<Option<ErrorState>>,
}

impl BrowserNavigator {
    pub fn new() -> Self {
        Self {
            location: RwSignal::new(current_location()),
            error_state: RwSignal::new(current_error_state()),
        }
    }

    pub fn location(&self) -> ReadSignal<Location> {
        self.location.read_only()
    }

    pub fn error_state(&self) -> ReadSignal<Option<ErrorState>> {
        self.error_state.read_only()
    }

    /// Re-read location and state from the window.
    pub fn sync(&self) {
        self.location.set(current_location());
        self.error_state.set(current_error_state());
    }

    /// Follow back/forward navigation. Call once at startup.
    pub fn listen(&self) {
        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::JsCast;
            use wasm_bindgen::prelude::Closure;

            let navigator = *self;
            let closure = Closure::wrap(Box::new(move || {
                navigator.sync();
            }) as Box<dyn Fn()>);

            if let Some(window) = web_sys::window() {
                let _ = window
                    .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
            }

            // Lives as long as the app
            closure.forget();
        }
    }
}

impl Default for BrowserNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for BrowserNavigator {
    fn navigate(&self, to: &str, options: NavigateOptions) {
        let Some(window) = web_sys::window() else {
            return;
        };

        let state = state_value(options.state.as_ref());
        let result = window.history().and_then(|history| {
            if options.replace {
                history.replace_state_with_url(&state, "", Some(to))
            } else {
                history.push_state_with_url(&state, "", Some(to))
            }
        });

        if let Err(err) = result {
            console::error(&format!("history update failed for {}: {:?}", to, err));
            return;
        }

        self.error_state.set(options.state);
        self.location.set(current_location());
    }
}
