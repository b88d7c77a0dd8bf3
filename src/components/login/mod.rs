//! Login page and form.

mod form;

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::loader::Redirect;
use crate::core::guard;
use crate::models::AppRoute;

use form::LoginForm;

stylance::import_crate_style!(css, "src/components/login/login.module.css");

/// Login page.
///
/// A signed-in user is sent on to the validated `redirect` target instead
/// of seeing the form.
#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let redirect = Memo::new(move |_| match ctx.route.get() {
        AppRoute::Login { redirect } => redirect,
        _ => None,
    });
    let signed_in_target = Memo::new(move |_| {
        ctx.session_state
            .with(|session| guard::login_page_redirect(session, redirect.get().as_deref()))
    });

    move || match signed_in_target.get() {
        Some(to) => view! { <Redirect to=to /> }.into_any(),
        None => view! {
            <div class=css::page>
                <div class=css::card>
                    <h2 class=css::title>"Login"</h2>
                    <LoginForm redirect=redirect />
                </div>
            </div>
        }
        .into_any(),
    }
}
