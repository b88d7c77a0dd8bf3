//! Route guard component.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::loader::{Loader, Redirect};
use crate::core::{GuardDecision, guard};

/// Renders `children` only once the session allows it.
///
/// Shows the spinner while the session check or a logout is pending, and
/// sends signed-out users to the login page with their current URL as
/// `redirect`.
#[component]
pub fn AuthGuard(children: ChildrenFn) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let location = ctx.location();

    let decision = Memo::new(move |_| {
        ctx.session_state
            .with(|session| location.with(|loc| guard::evaluate(session, loc)))
    });

    move || match decision.get() {
        GuardDecision::Loading => view! { <Loader /> }.into_any(),
        GuardDecision::Redirect(to) => view! { <Redirect to=to /> }.into_any(),
        GuardDecision::Render => children().into_any(),
    }
}

/// Landing logic for `/`: wait for the session check, then go to the
/// directory browser or the login page.
#[component]
pub fn IndexRedirect() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let decision = Memo::new(move |_| ctx.session_state.with(guard::index_redirect));

    move || match decision.get() {
        GuardDecision::Redirect(to) => view! { <Redirect to=to /> }.into_any(),
        GuardDecision::Loading | GuardDecision::Render => view! { <Loader /> }.into_any(),
    }
}
