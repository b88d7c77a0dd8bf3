//! Searchable, sortable table of directory entries.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::search_input::SearchInput;
use crate::components::icons as ic;
use crate::core::table::{Column, TableRow, directory_rows};
use crate::models::{DirectoryEntry, SortDirection, SortKey, SortSpec, TableQuery};

stylance::import_crate_style!(css, "src/components/directory/data_table.module.css");

/// Table over `rows`, filtered and sorted by `query`.
///
/// The table never owns its search or sort: edits are reported through
/// `on_search` and `on_sort` and come back in through `query`.
#[component]
pub fn DataTable(
    #[prop(into)] rows: Signal<Vec<DirectoryEntry>>,
    columns: Vec<Column<DirectoryEntry>>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] query: Signal<TableQuery>,
    on_search: Callback<String>,
    on_sort: Callback<SortSpec>,
    on_row_click: Callback<DirectoryEntry>,
) -> impl IntoView {
    let column_count = columns.len();
    let cell_columns = StoredValue::new(columns.clone());

    let visible = Memo::new(move |_| {
        let TableQuery { search, sort } = query.get();
        cell_columns.with_value(|columns| {
            rows.with(|rows| directory_rows(rows, columns, sort, &search))
        })
    });
    let search = Signal::derive(move || query.with(|q| q.search.clone()));

    let headers = columns
        .into_iter()
        .map(|column| view! { <HeaderCell column=column query=query on_sort=on_sort /> })
        .collect_view();

    let body = move || {
        if loading.get() {
            return view! { <MessageRow text="Loading..." span=column_count /> }.into_any();
        }
        let rows = visible.get();
        if rows.is_empty() {
            return view! { <MessageRow text="No Results Found" span=column_count /> }.into_any();
        }
        rows.into_iter()
            .map(|row| {
                let columns = cell_columns.get_value();
                view! { <DataRow row=row columns=columns on_click=on_row_click /> }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class=css::controls>
            <SearchInput value=search on_change=on_search />
        </div>
        <div class=css::container>
            <table class=css::table>
                <thead class=css::head>
                    <tr>{headers}</tr>
                </thead>
                <tbody class=css::body>{body}</tbody>
            </table>
        </div>
    }
}

#[component]
fn HeaderCell(
    column: Column<DirectoryEntry>,
    query: Signal<TableQuery>,
    on_sort: Callback<SortSpec>,
) -> impl IntoView {
    let key = column.key;
    let sortable = column.sortable;

    let on_click = move |_| {
        if sortable {
            on_sort.run(query.with_untracked(|q| q.sort.toggled(key)));
        }
    };

    let indicator = move || {
        let sort = query.with(|q| q.sort);
        (sortable && sort.key == key).then(|| match sort.direction {
            SortDirection::Asc => view! { <Icon icon=ic::SORT_ASC /> },
            SortDirection::Desc => view! { <Icon icon=ic::SORT_DESC /> },
        })
    };

    let class = if sortable {
        format!("{} {}", css::th, css::sortable)
    } else {
        css::th.to_string()
    };

    view! {
        <th class=class on:click=on_click>
            <span class=css::headerCell>
                <strong>{column.label}</strong>
                <span class=css::sortIcon>{indicator}</span>
            </span>
        </th>
    }
}

#[component]
fn DataRow(
    row: DirectoryEntry,
    columns: Vec<Column<DirectoryEntry>>,
    on_click: Callback<DirectoryEntry>,
) -> impl IntoView {
    let is_dir = row.is_dir();

    let cells = columns
        .iter()
        .map(|column| {
            let title = row.cell(column.key).to_string();
            let text = column.display(&row);
            let icon = (column.key == SortKey::Name).then(|| {
                let icon = if is_dir { ic::FOLDER } else { ic::FILE };
                view! { <span class=css::entryIcon><Icon icon=icon /></span> }
            });
            view! {
                <td class=css::td title=title>
                    {icon}
                    {text}
                </td>
            }
        })
        .collect_view();

    let class = if is_dir {
        format!("{} {}", css::row, css::rowLink)
    } else {
        css::row.to_string()
    };

    view! {
        <tr class=class on:click=move |_| on_click.run(row.clone())>
            {cells}
        </tr>
    }
}

#[component]
fn MessageRow(text: &'static str, span: usize) -> impl IntoView {
    view! {
        <tr>
            <td class=css::message colspan=span.to_string()>{text}</td>
        </tr>
    }
}
