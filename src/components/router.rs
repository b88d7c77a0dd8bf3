//! Application router component.
//!
//! Uses History API routing with native `popstate` events instead of
//! leptos_router. The browser location is the source of truth; pages are
//! only swapped when the kind of route changes, so moving between
//! directories keeps the directory page mounted.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::auth_guard::{AuthGuard, IndexRedirect};
use crate::components::directory::DirectoryPage;
use crate::components::login::LoginPage;
use crate::components::status::{ErrorPage, NotFoundPage};
use crate::models::AppRoute;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Page {
    Index,
    Files,
    Login,
    NotFound,
    Error,
}

impl From<&AppRoute> for Page {
    fn from(route: &AppRoute) -> Self {
        match route {
            AppRoute::Index => Self::Index,
            AppRoute::Files { .. } => Self::Files,
            AppRoute::Login { .. } => Self::Login,
            AppRoute::NotFound => Self::NotFound,
            AppRoute::Error(_) => Self::Error,
        }
    }
}

/// Main application router.
///
/// - `/` → [`IndexRedirect`]
/// - `/files/*` → guarded [`DirectoryPage`]
/// - `/login` → [`LoginPage`]
/// - `/error` → [`ErrorPage`]
/// - `/404` and everything else → [`NotFoundPage`]
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let page = Memo::new(move |_| ctx.route.with(|route| Page::from(route)));

    move || match page.get() {
        Page::Index => view! { <IndexRedirect /> }.into_any(),
        Page::Files => view! {
            <AuthGuard>
                <DirectoryPage />
            </AuthGuard>
        }
        .into_any(),
        Page::Login => view! {
            <AuthGuard>
                <LoginPage />
            </AuthGuard>
        }
        .into_any(),
        Page::NotFound => view! { <NotFoundPage /> }.into_any(),
        Page::Error => view! { <ErrorPage /> }.into_any(),
    }
}
