//! History navigation checks that need a real browser window.
#![cfg(target_arch = "wasm32")]

use dirview::core::{NavigateOptions, Navigator};
use dirview::models::ErrorState;
use dirview::utils::history::{BrowserNavigator, current_error_state, current_location};
use leptos::prelude::GetUntracked;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test::wasm_bindgen_test]
fn push_updates_location_signal() {
    let navigator = BrowserNavigator::new();

    navigator.navigate("/files/docs?sort=size:desc", NavigateOptions::push());

    let location = navigator.location().get_untracked();
    assert_eq!(location.pathname, "/files/docs");
    assert_eq!(location.search, "?sort=size:desc");
    assert_eq!(current_location(), location);
}

#[wasm_bindgen_test::wasm_bindgen_test]
fn replace_keeps_history_length() {
    let navigator = BrowserNavigator::new();
    let history = web_sys::window().unwrap().history().unwrap();

    navigator.navigate("/files/a", NavigateOptions::push());
    let before = history.length().unwrap();
    navigator.navigate("/404", NavigateOptions::replace());

    assert_eq!(history.length().unwrap(), before);
    assert_eq!(navigator.location().get_untracked().pathname, "/404");
}

#[wasm_bindgen_test::wasm_bindgen_test]
fn error_state_travels_in_history_entry() {
    let navigator = BrowserNavigator::new();
    let state = ErrorState {
        status: Some(500),
        message: Some("Boom".to_string()),
    };

    navigator.navigate("/error", NavigateOptions::with_state(state.clone()));

    assert_eq!(current_error_state(), Some(state.clone()));
    assert_eq!(navigator.error_state().get_untracked(), Some(state));

    navigator.navigate("/files", NavigateOptions::push());
    assert_eq!(current_error_state(), None);
}
