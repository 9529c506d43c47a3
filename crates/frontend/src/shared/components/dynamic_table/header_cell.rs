//! Header cells: sort control + per-column filter input.

use leptos::prelude::*;
use thaw::*;

use super::schema::FilterKind;
use super::state::SortOrder;

/// Indicator glyph for a column header.
pub fn sort_indicator(sort: &Option<(String, SortOrder)>, key: &str) -> &'static str {
    match sort {
        Some((k, SortOrder::Asc)) if k == key => " ▲",
        Some((k, SortOrder::Desc)) if k == key => " ▼",
        _ => " ⇅",
    }
}

pub fn sort_class(sort: &Option<(String, SortOrder)>, key: &str) -> &'static str {
    match sort {
        Some((k, _)) if k == key => "table__sort-indicator table__sort-indicator--active",
        _ => "table__sort-indicator",
    }
}

/// Sortable, resizable column header cell.
#[component]
pub fn SortableHeaderCell(
    column_key: String,
    label: String,
    #[prop(into)] sort: Signal<Option<(String, SortOrder)>>,
    on_sort: Callback<String>,
    #[prop(into)] width: Signal<f64>,
    /// (column key, pointer x) when the resize handle is grabbed
    on_resize_start: Callback<(String, f64)>,
) -> impl IntoView {
    let key_for_click = column_key.clone();
    let key_for_indicator = column_key.clone();
    let key_for_class = column_key.clone();
    let key_for_resize = column_key;

    view! {
        <TableHeaderCell
            resizable=false
            attr:style=move || format!("width: {0}px; min-width: {0}px; position: relative;", width.get())
        >
            <div
                class="table__sortable-header"
                style="cursor: pointer; padding-right: 12px; max-width: calc(100% - 12px);"
                on:click=move |_| on_sort.run(key_for_click.clone())
            >
                {label}
                <span class=move || sort_class(&sort.get(), &key_for_class)>
                    {move || sort_indicator(&sort.get(), &key_for_indicator)}
                </span>
            </div>
            <div
                class="resize-handle"
                on:mousedown=move |ev| {
                    ev.prevent_default();
                    ev.stop_propagation();
                    on_resize_start.run((key_for_resize.clone(), ev.client_x() as f64));
                }
            ></div>
        </TableHeaderCell>
    }
}

/// Filter input for one column, rendered in the second header row.
/// Dispatches on the closed `FilterKind` set.
#[component]
pub fn FilterHeaderCell(
    kind: FilterKind,
    /// (value, label) pairs for `FilterKind::Select`
    options: Vec<(String, String)>,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    match kind {
        FilterKind::Select => view! {
            <select
                class="table__filter table__filter--select"
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="" selected=move || value.get().is_empty()>"All"</option>
                {options
                    .into_iter()
                    .map(|(val, label)| {
                        let val_clone = val.clone();
                        let is_selected = move || value.get() == val_clone;
                        view! {
                            <option value=val selected=is_selected>{label}</option>
                        }
                    })
                    .collect_view()}
            </select>
        }
        .into_any(),
        FilterKind::Number => view! {
            <input
                type="number"
                class="table__filter"
                placeholder="="
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
        }
        .into_any(),
        // Date filters match on typed prefix, so a plain text input fits
        // better than a date picker.
        FilterKind::Text | FilterKind::Date => view! {
            <input
                type="text"
                class="table__filter"
                placeholder="Filter..."
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
        }
        .into_any(),
    }
}
