//! Username/password form.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::css;
use crate::app::AppContext;
use crate::core::{login_banner, login_error_message};
use crate::utils::safe_redirect;

/// Login form.
///
/// Errors from the login call are shown inline; with no error, the message
/// left by the last logout is shown instead. The submit button is disabled
/// while a login is in flight.
#[component]
pub fn LoginForm(redirect: Memo<Option<String>>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let message = Signal::derive(move || {
        error.with(|error| ctx.session_state.with(|s| login_banner(error, s)))
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        submitting.set(true);

        let user = username.get_untracked();
        let pass = password.get_untracked();
        let target = safe_redirect(redirect.get_untracked().as_deref());
        let session = ctx.session;

        spawn_local(async move {
            let result = session.login(&user, &pass).await;
            submitting.set(false);
            match result {
                Ok(_) => ctx.replace(&target),
                Err(err) => error.set(login_error_message(&err)),
            }
        });
    };

    view! {
        <form class=css::form on:submit=on_submit>
            <div class=css::field>
                <label class=css::label for="username">"Username"</label>
                <input
                    class=css::input
                    id="username"
                    type="text"
                    name="username"
                    placeholder="Username"
                    required=true
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
            </div>
            <div class=css::field>
                <label class=css::label for="password">"Password"</label>
                <input
                    class=css::input
                    id="password"
                    type="password"
                    name="password"
                    placeholder="Password"
                    required=true
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
            </div>
            <div class=css::actions>
                <Show when=move || !message.get().is_empty()>
                    <p class=css::error role="alert">{move || message.get()}</p>
                </Show>
                <button class=css::submit type="submit" disabled=move || submitting.get()>
                    "Log In"
                </button>
            </div>
        </form>
    }
}
