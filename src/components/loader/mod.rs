//! Full-page spinner and redirect placeholder.

use leptos::prelude::*;

use crate::app::AppContext;

stylance::import_crate_style!(css, "src/components/loader/loader.module.css");

/// Blocking spinner covering the viewport.
#[component]
pub fn Loader() -> impl IntoView {
    view! {
        <div class=css::wrapper data-testid="loader">
            <div class=css::spinner></div>
        </div>
    }
}

/// Replace the current location with `to`, showing the spinner meanwhile.
#[component]
pub fn Redirect(#[prop(into)] to: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    Effect::new(move |_| ctx.replace(&to));

    view! { <Loader /> }
}
