//! DynamicTable — generic client-side grid.
//!
//! Given a column descriptor list and an untyped row list, renders a
//! searched, filtered, sorted, paginated, column-configurable table.
//! All interaction state lives in [`state::TableState`]; this file only
//! wires signals and events to it. The table never mutates `rows` and
//! performs no I/O; row-level actions are delegated to the caller through
//! `render_actions`.

mod column_picker;
mod header_cell;
mod pagination;
mod resize;
pub mod schema;
pub mod state;

use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;
use column_picker::ColumnPicker;
use header_cell::{FilterHeaderCell, SortableHeaderCell};
use pagination::PaginationControls;
use resize::ResizeController;
pub use schema::{
    rows_from, CellRenderer, ColumnFilter, FilterKind, FilterPredicate, Row, RowActionsRenderer,
    TableColumn,
};
pub use state::{SortOrder, TableState};

fn default_cell_text(value: Option<&serde_json::Value>) -> String {
    let text = state::display_value(value);
    if text.is_empty() {
        "-".to_string()
    } else {
        text
    }
}

#[component]
pub fn DynamicTable(
    /// Column descriptors; may change over the table's lifetime.
    #[prop(into)]
    columns: Signal<Vec<TableColumn>>,
    /// Untyped rows. Never mutated by the table.
    #[prop(into)]
    rows: Signal<Vec<Row>>,
    /// Row field holding the stable unique identity. A row without it is a
    /// configuration error: the grid is replaced by an error banner.
    key_field: &'static str,
    #[prop(optional, into)] loading: Signal<bool>,
    #[prop(optional, into)] title: MaybeProp<String>,
    /// Extra class for the scroll wrapper (height overrides).
    #[prop(optional, into)]
    height_class: MaybeProp<String>,
    /// Renders the per-row actions cell (view/edit/delete).
    #[prop(optional)]
    render_actions: Option<RowActionsRenderer>,
) -> impl IntoView {
    let state = RwSignal::new(TableState::new(&columns.get_untracked()));
    let show_picker = RwSignal::new(false);
    let resize_ctl = StoredValue::new_local(ResizeController::new());

    // Reconcile interaction state whenever the descriptor list changes.
    Effect::new(move |_| {
        let cols = columns.get();
        state.update(|s| s.sync_columns(&cols));
    });

    let key_error = Memo::new(move |_| {
        rows.get()
            .iter()
            .position(|row| matches!(row.get(key_field), None | Some(serde_json::Value::Null)))
            .map(|index| {
                format!(
                    "Table configuration error: row {} has no '{}' field",
                    index, key_field
                )
            })
    });
    Effect::new(move |_| {
        if let Some(message) = key_error.get() {
            log::error!("{}", message);
        }
    });

    // Memoized so header/body closures only re-run on real changes, not on
    // every keystroke in a filter input.
    let visible_keys = Memo::new(move |_| state.with(|s| s.visible.clone()));
    let page_size = Memo::new(move |_| state.with(|s| s.page_size));

    // filter → search → sort; pagination slices this list, never `rows`.
    let prepared = Memo::new(move |_| {
        let cols = columns.get();
        let st = state.get();
        let mut out = state::filter_rows(&rows.get(), &cols, &st.filters, &st.search);
        state::sort_rows(&mut out, &st.sort);
        out
    });

    let total_count = Memo::new(move |_| prepared.get().len());
    let page_count = Memo::new(move |_| state::total_pages(total_count.get(), page_size.get()));
    let current_page =
        Memo::new(move |_| state.with(|s| s.page).min(page_count.get()).max(1));
    let page_rows =
        Memo::new(move |_| state::page_slice(&prepared.get(), current_page.get(), page_size.get()));

    let on_sort = Callback::new(move |key: String| {
        state.update(|s| s.toggle_sort(&key));
    });

    let on_resize_start = Callback::new(move |(key, client_x): (String, f64)| {
        let cols = columns.get_untracked();
        let Some(column) = cols.iter().find(|c| c.key == key) else {
            return;
        };
        state.update(|s| s.begin_resize(column, client_x));
        resize_ctl.update_value(|ctl| {
            ctl.begin(
                move |x| state.update(|s| s.resize_to(x)),
                move || {
                    state.update(|s| s.end_resize());
                    resize_ctl.update_value(|c| c.end());
                },
            );
        });
    });
    on_cleanup(move || {
        resize_ctl.try_update_value(|ctl| ctl.end());
    });

    let on_page_change = Callback::new(move |page: usize| {
        let pages = page_count.get_untracked();
        state.update(|s| s.set_page(page, pages));
    });
    let on_page_size_change = Callback::new(move |size: usize| {
        state.update(|s| s.set_page_size(size));
    });
    let on_toggle_column = Callback::new(move |key: String| {
        let cols = columns.get_untracked();
        state.update(|s| s.toggle_column(&key, &cols));
    });

    let picker_columns = Signal::derive(move || {
        columns
            .get()
            .iter()
            .map(|c| (c.key.clone(), c.label.clone()))
            .collect::<Vec<_>>()
    });

    let has_actions = render_actions.is_some();

    // Visible descriptors in order; re-evaluated only when the descriptor
    // list or the visible-key set changes.
    let visible_columns = move || -> Vec<TableColumn> {
        let keys = visible_keys.get();
        let cols = columns.get();
        keys.iter()
            .filter_map(|key| cols.iter().find(|c| c.key == *key).cloned())
            .collect()
    };

    let header_cells = {
        let visible_columns = visible_columns.clone();
        move || {
            visible_columns()
                .into_iter()
                .map(|column| {
                    let key = column.key.clone();
                    let width_key = column.key.clone();
                    view! {
                        <SortableHeaderCell
                            column_key=key
                            label=column.label.clone()
                            sort=Signal::derive(move || state.with(|s| s.sort.clone()))
                            on_sort=on_sort
                            width=Signal::derive(move || state.with(|s| s.width_of(&width_key)))
                            on_resize_start=on_resize_start
                        />
                    }
                })
                .collect_view()
        }
    };

    let filter_cells = {
        let visible_columns = visible_columns.clone();
        move || {
            visible_columns()
                .into_iter()
                .map(|column| {
                    let cell: AnyView = match &column.filter {
                        Some(filter) => {
                            let key = column.key.clone();
                            let filter_key = column.key.clone();
                            let value = Signal::derive(move || {
                                state.with(|s| {
                                    s.filters.get(&filter_key).cloned().unwrap_or_default()
                                })
                            });
                            let on_change = Callback::new(move |v: String| {
                                state.update(|s| s.set_filter(&key, v));
                            });
                            view! {
                                <FilterHeaderCell
                                    kind=filter.kind
                                    options=filter.options.clone()
                                    value=value
                                    on_change=on_change
                                />
                            }
                            .into_any()
                        }
                        None => view! { <span></span> }.into_any(),
                    };
                    view! { <TableHeaderCell resizable=false>{cell}</TableHeaderCell> }
                })
                .collect_view()
        }
    };

    let body = {
        let visible_columns = visible_columns.clone();
        move || -> AnyView {
            let cols = visible_columns();
            let span = cols.len() + usize::from(has_actions);

            if loading.get() {
                return view! {
                    <tr class="table__placeholder-row">
                        <td colspan=span.to_string() class="table__placeholder">"Loading..."</td>
                    </tr>
                }
                .into_any();
            }

            let current = page_rows.get();
            if current.is_empty() {
                return view! {
                    <tr class="table__placeholder-row">
                        <td colspan=span.to_string() class="table__placeholder">"No data"</td>
                    </tr>
                }
                .into_any();
            }

            // Pad the last page so the grid height stays stable.
            let padding = page_size.get().saturating_sub(current.len());
            let actions: Option<RowActionsRenderer> = None;

            let data_rows = current
                .into_iter()
                .map(|row| {
                    let cells = cols
                        .iter()
                        .map(|column| {
                            let value = row.get(&column.key);
                            let content: AnyView = match &column.render {
                                Some(renderer) => renderer(value, &row),
                                None => default_cell_text(value).into_any(),
                            };
                            view! {
                                <TableCell>
                                    <TableCellLayout truncate=true>{content}</TableCellLayout>
                                </TableCell>
                            }
                        })
                        .collect_view();
                    let action_cell = actions.as_ref().map(|render| {
                        let content = render(&row);
                        view! {
                            <TableCell>
                                <TableCellLayout>
                                    <div class="table__actions">{content}</div>
                                </TableCellLayout>
                            </TableCell>
                        }
                    });
                    view! { <TableRow>{cells}{action_cell}</TableRow> }
                })
                .collect_view();

            let padding_rows = (0..padding)
                .map(|_| {
                    view! {
                        <tr class="table__padding-row">
                            <td colspan=span.to_string()>"\u{a0}"</td>
                        </tr>
                    }
                })
                .collect_view();

            view! {
                {data_rows}
                {padding_rows}
            }
            .into_any()
        }
    };

    let grid = move || -> AnyView {
        if let Some(message) = key_error.get() {
            return view! {
                <div class="alert alert--error">{message}</div>
            }
            .into_any();
        }

        view! {
            <div class="dynamic-table__toolbar">
                {move || title.get().map(|t| view! {
                    <span class="dynamic-table__title">{t}</span>
                })}
                <div class="dynamic-table__search">
                    <input
                        type="text"
                        class="form__input"
                        placeholder="Search..."
                        prop:value=move || state.with(|s| s.search.clone())
                        on:input=move |ev| {
                            let term = event_target_value(&ev);
                            state.update(|s| s.set_search(term));
                        }
                    />
                    {move || (!state.with(|s| s.search.is_empty())).then(|| view! {
                        <button
                            class="dynamic-table__clear"
                            title="Clear search"
                            on:click=move |_| state.update(|s| s.set_search(String::new()))
                        >
                            {icon("x")}
                        </button>
                    })}
                </div>
                <PaginationControls
                    current_page=Signal::derive(move || current_page.get())
                    total_pages=Signal::derive(move || page_count.get())
                    total_count=Signal::derive(move || total_count.get())
                    page_size=Signal::derive(move || page_size.get())
                    on_page_change=on_page_change
                    on_page_size_change=on_page_size_change
                />
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| show_picker.set(true)
                >
                    {icon("columns")}
                </Button>
            </div>

            <div class=move || {
                match height_class.get() {
                    Some(extra) => format!("table-wrapper {}", extra),
                    None => "table-wrapper".to_string(),
                }
            }>
                <Table attr:style="width: 100%; table-layout: fixed;">
                    <TableHeader>
                        <TableRow>
                            {header_cells.clone()}
                            {has_actions.then(|| view! {
                                <TableHeaderCell resizable=false attr:style="width: 96px;">
                                    ""
                                </TableHeaderCell>
                            })}
                        </TableRow>
                        <TableRow attr:class="table__filter-row">
                            {filter_cells.clone()}
                            {has_actions.then(|| view! {
                                <TableHeaderCell resizable=false>""</TableHeaderCell>
                            })}
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {body.clone()}
                    </TableBody>
                </Table>
            </div>

            {move || show_picker.get().then(|| view! {
                <ColumnPicker
                    columns=picker_columns
                    visible=Signal::derive(move || visible_keys.get())
                    on_toggle=on_toggle_column
                    on_close=Callback::new(move |_| show_picker.set(false))
                />
            })}
        }
        .into_any()
    };

    view! {
        <div class="dynamic-table">
            {grid}
        </div>
    }
}
