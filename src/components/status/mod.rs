//! Not-found and error pages.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::config::LOGIN_PATH;
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/status/status.module.css");

/// Shown when an error page is reached without a message.
const DEFAULT_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again later.";

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class=css::page>
            <h1 class=css::title>"404"</h1>
            <p class=css::message>"Sorry, the page you’re looking for doesn’t exist."</p>
            <HomeButton />
        </div>
    }
}

/// Error page fed by the history entry's state (`{status?, message?}`).
#[component]
pub fn ErrorPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let state = Memo::new(move |_| match ctx.route.get() {
        AppRoute::Error(state) => state,
        _ => Default::default(),
    });

    let message = move || {
        state
            .with(|s| s.message.clone())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string())
    };

    let code = move || {
        state.with(|s| s.status).map(|status| {
            view! { <pre class=css::details>{format!("Error Code: {}", status)}</pre> }
        })
    };

    view! {
        <div class=css::page>
            <h1 class=css::title>"Something went wrong"</h1>
            <p class=css::message>{message}</p>
            {code}
            <HomeButton />
        </div>
    }
}

#[component]
fn HomeButton() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <button class=css::button on:click=move |_| ctx.push(LOGIN_PATH)>
            "Go Home"
        </button>
    }
}
