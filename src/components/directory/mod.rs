//! Directory browser.
//!
//! - [`DirectoryPage`] - Loads the listing for the current path
//! - [`DataTable`] - Searchable, sortable listing
//! - [`Breadcrumbs`] - Crumb trail for the current path

mod breadcrumbs;
mod data_table;
mod search_input;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_icons::Icon;

use crate::api::ApiClient;
use crate::app::{AppContext, AppLoader};
use crate::components::icons as ic;
use crate::components::loader::Loader;
use crate::config::{APP_TITLE, params};
use crate::core::{
    DirectoryLoader, DirectoryView, LoadOutcome, directory_columns, dispatch_failure,
};
use crate::models::{AppRoute, DirectoryEntry, SortSpec, TableQuery, files_href};

pub use breadcrumbs::Breadcrumbs;
pub use data_table::DataTable;
pub use search_input::SearchInput;

stylance::import_crate_style!(css, "src/components/directory/directory.module.css");

/// Guarded directory page for `/files/*`.
///
/// Reloads whenever the path changes. Search and sort live in the query
/// string, so changing them never refetches.
#[component]
pub fn DirectoryPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let location = ctx.location();

    let view_state = RwSignal::new(DirectoryView::default());
    let loader: AppLoader = DirectoryLoader::new(ApiClient::default(), view_state);

    let path = Memo::new(move |_| match ctx.route.get() {
        AppRoute::Files { path } => Some(path),
        _ => None,
    });

    Effect::new(move |_| {
        let Some(path) = path.get() else {
            return;
        };
        let session = ctx.session;
        let navigator = ctx.navigator;
        spawn_local(async move {
            if let LoadOutcome::Failed(action) = loader.load(&path).await {
                dispatch_failure(action, &session, &navigator).await;
            }
        });
    });

    let query = Memo::new(move |_| location.with(|loc| TableQuery::from_search(&loc.search)));
    let loading = Memo::new(move |_| view_state.with(|v| v.loading));
    // Full-page spinner only until the first listing arrives
    let blocking = Memo::new(move |_| view_state.with(|v| v.loading && v.listing.is_none()));
    let rows = Signal::derive(move || view_state.with(DirectoryView::rows));

    let on_search = Callback::new(move |value: String| {
        let href = location.with_untracked(|loc| loc.with_param(params::SEARCH, &value));
        ctx.push(&href);
    });

    let on_sort = Callback::new(move |sort: SortSpec| {
        let href = location.with_untracked(|loc| loc.with_param(params::SORT, &sort.to_string()));
        ctx.push(&href);
    });

    let on_row_click = Callback::new(move |entry: DirectoryEntry| {
        if !entry.is_dir() {
            return;
        }
        let current = path.get_untracked().unwrap_or_default();
        ctx.push(&files_href(&format!("{}/{}", current, entry.name)));
    });

    let on_logout = move |_: leptos::ev::MouseEvent| {
        let session = ctx.session;
        spawn_local(async move {
            session.handle_logout(None).await;
        });
    };

    move || {
        if blocking.get() {
            return view! { <Loader /> }.into_any();
        }

        view! {
            <div class=css::page>
                <div class=css::toolbar>
                    <button class=css::logout on:click=on_logout>
                        <Icon icon=ic::LOGOUT />
                        <span>"Logout"</span>
                    </button>
                </div>
                <h2 class=css::title>{APP_TITLE}</h2>
                <Breadcrumbs />
                <DataTable
                    rows=rows
                    columns=directory_columns()
                    loading=loading
                    query=query
                    on_search=on_search
                    on_sort=on_sort
                    on_row_click=on_row_click
                />
            </div>
        }
        .into_any()
    }
}
