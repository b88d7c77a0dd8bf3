//! Search box above the directory table.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/directory/search_input.module.css");

/// Controlled text input; every edit is reported through `on_change`.
#[component]
pub fn SearchInput(#[prop(into)] value: Signal<String>, on_change: Callback<String>) -> impl IntoView {
    view! {
        <label class=css::search>
            <span class=css::icon><Icon icon=ic::SEARCH /></span>
            <input
                class=css::input
                type="text"
                placeholder="Search..."
                aria-label="Search"
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
        </label>
    }
}
