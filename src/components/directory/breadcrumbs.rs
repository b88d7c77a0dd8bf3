//! Breadcrumb trail for the directory browser.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{FILES_ROUTE, HOME_LABEL, MAX_VISIBLE_CRUMBS};
use crate::core::derive_breadcrumbs;
use crate::models::Breadcrumb;

stylance::import_crate_style!(css, "src/components/directory/breadcrumbs.module.css");

/// Crumb trail derived from the current pathname.
///
/// Every crumb but the last links to its prefix of the path. Renders
/// nothing outside the files route.
#[component]
pub fn Breadcrumbs() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let location = ctx.location();

    let crumbs = Memo::new(move |_| {
        location.with(|loc| {
            derive_breadcrumbs(&loc.pathname, FILES_ROUTE, HOME_LABEL, MAX_VISIBLE_CRUMBS)
        })
    });

    move || {
        crumbs.get().map(|crumbs| {
            let len = crumbs.len();
            let items = crumbs
                .into_iter()
                .enumerate()
                .map(|(idx, crumb)| {
                    let is_link = crumb.is_link(idx, len);
                    view! {
                        <li class=css::item>
                            {(idx > 0).then(|| view! {
                                <span class=css::separator>
                                    <Icon icon=ic::CHEVRON_RIGHT />
                                </span>
                            })}
                            <Crumb crumb=crumb is_home=idx == 0 is_link=is_link />
                        </li>
                    }
                })
                .collect_view();

            view! {
                <nav aria-label="Breadcrumb">
                    <ul class=css::list>{items}</ul>
                </nav>
            }
        })
    }
}

#[component]
fn Crumb(crumb: Breadcrumb, is_home: bool, is_link: bool) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let title = crumb.title();
    let label = crumb.display_label();
    let home_icon = is_home.then(|| {
        view! {
            <span class=css::icon><Icon icon=ic::HOME /></span>
        }
    });

    if !is_link {
        return view! {
            <span class=css::text title=title>
                {home_icon}
                {label}
            </span>
        }
        .into_any();
    }

    let path = crumb.path;
    let href = path.clone();
    view! {
        <a
            class=css::link
            href=href
            title=title
            on:click=move |ev| {
                ev.prevent_default();
                ctx.push(&path);
            }
        >
            {home_icon}
            {label}
        </a>
    }
    .into_any()
}
