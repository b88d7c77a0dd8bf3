//! Root application module.
//!
//! Contains the main App component and the [`AppContext`] shared by every
//! view: session controller, history navigator and the current route.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::components::AppRouter;
use crate::core::{DirectoryLoader, DirectoryView, Navigator, NavigateOptions, Session};
use crate::models::{AppRoute, Location, SessionState};
use crate::utils::history::BrowserNavigator;

/// Session controller used by the app.
pub type AppSession = Session<ApiClient, RwSignal<SessionState>>;

/// Directory loader used by the app.
pub type AppLoader = DirectoryLoader<ApiClient, RwSignal<DirectoryView>>;

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and read with
/// `use_context::<AppContext>()`. All fields are signals or `Copy` handles,
/// so the context itself is `Copy`.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Reactive session state; mutated only through [`AppContext::session`].
    pub session_state: RwSignal<SessionState>,
    pub session: AppSession,
    pub navigator: BrowserNavigator,
    /// Route resolved from the current location and history state.
    pub route: Memo<AppRoute>,
}

impl AppContext {
    pub fn new() -> Self {
        let api = ApiClient::default();
        let session_state = RwSignal::new(SessionState::new());
        let navigator = BrowserNavigator::new();
        let location = navigator.location();
        let error_state = navigator.error_state();
        let route = Memo::new(move |_| AppRoute::resolve(&location.get(), error_state.get()));

        Self {
            session_state,
            session: Session::new(api, session_state),
            navigator,
            route,
        }
    }

    pub fn location(&self) -> ReadSignal<Location> {
        self.navigator.location()
    }

    pub fn push(&self, to: &str) {
        self.navigator.navigate(to, NavigateOptions::push());
    }

    pub fn replace(&self, to: &str) {
        self.navigator.navigate(to, NavigateOptions::replace());
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// Creates the [`AppContext`], starts the one-time session check and
/// follows back/forward navigation.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    ctx.navigator.listen();

    let session = ctx.session;
    spawn_local(async move {
        session.check_session().await;
    });

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    text-align: center;
                    font-family: system-ui, sans-serif;
                ">
                    <h1 style="color: #c0392b; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <ul style="color: #666; list-style: none; padding: 0;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                        style="
                            background: #20a890;
                            color: white;
                            border: none;
                            padding: 0.75rem 2rem;
                            border-radius: 8px;
                            cursor: pointer;
                        "
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}
