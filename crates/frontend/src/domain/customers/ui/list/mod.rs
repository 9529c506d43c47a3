use std::collections::BTreeSet;
use std::sync::Arc;

use contracts::domain::customers::Customer;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::customers::api;
use crate::shared::components::dynamic_table::{
    rows_from, DynamicTable, FilterKind, Row, RowActionsRenderer, TableColumn,
};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::nav::use_page_navigate;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::toast::use_toasts;

fn customer_columns(customers: &[Customer]) -> Vec<TableColumn> {
    // Country options are derived from the loaded data, so the column
    // descriptor list changes when the dataset does.
    let countries: BTreeSet<String> = customers.iter().map(|c| c.country.clone()).collect();
    let country_options = countries.into_iter().map(|c| (c.clone(), c)).collect();

    vec![
        TableColumn::new("name", "Name").min_width(160.0),
        TableColumn::new("email", "Email").min_width(180.0),
        TableColumn::new("phone", "Phone").width(140.0),
        TableColumn::new("country", "Country")
            .width(130.0)
            .select_filter(country_options),
        TableColumn::new("city", "City").width(120.0),
        TableColumn::new("is_active", "Status")
            .width(100.0)
            .select_filter(vec![
                ("true".to_string(), "Active".to_string()),
                ("false".to_string(), "Inactive".to_string()),
            ])
            .render_with(Arc::new(|value, _row| {
                if value.and_then(|v| v.as_bool()).unwrap_or(false) {
                    view! { <span class="badge badge--success">"Active"</span> }.into_any()
                } else {
                    view! { <span class="badge badge--neutral">"Inactive"</span> }.into_any()
                }
            })),
        TableColumn::new("created_at", "Created")
            .width(140.0)
            .filter_kind(FilterKind::Date)
            .render_with(Arc::new(|value, _row| {
                let raw = value.and_then(|v| v.as_str()).unwrap_or_default();
                format_datetime(raw).into_any()
            })),
    ]
}

#[component]
pub fn CustomersListPage() -> impl IntoView {
    let all: RwSignal<Vec<Customer>> = RwSignal::new(Vec::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let is_loaded = RwSignal::new(false);
    let navigate = use_page_navigate();
    let toasts = use_toasts();

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_all().await {
                Ok(data) => all.set(data),
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !is_loaded.get_untracked() {
            is_loaded.set(true);
            load_data();
        }
    });

    let columns = Signal::derive(move || all.with(|data| customer_columns(data)));
    let rows: Signal<Vec<Row>> = Signal::derive(move || all.with(|data| rows_from(data)));

    let on_delete = Callback::new(move |id: String| {
        spawn_local(async move {
            match api::delete(&id).await {
                Ok(()) => {
                    toasts.success("Customer deleted");
                    load_data();
                }
                Err(e) => toasts.error(e),
            }
        });
    });

    let render_actions: RowActionsRenderer = Arc::new(move |row: &Row| {
        let id = row
            .get("id")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();
        let view_id = id.clone();
        let edit_id = id.clone();
        view! {
            <button
                class="action-btn"
                title="View"
                on:click=move |_| navigate.run(format!("/customers/{}", view_id))
            >
                {icon("eye")}
            </button>
            <button
                class="action-btn"
                title="Edit"
                on:click=move |_| navigate.run(format!("/customers/{}?mode=edit", edit_id))
            >
                {icon("edit")}
            </button>
            <button
                class="action-btn action-btn--danger"
                title="Delete"
                on:click=move |_| on_delete.run(id.clone())
            >
                {icon("trash")}
            </button>
        }
        .into_any()
    });

    view! {
        <PageFrame page_id="customers--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Customers"</h1>
                    <Badge>
                        {move || all.with(|data| data.len().to_string())}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| navigate.run("/customers/new".to_string())
                    >
                        {icon("plus")}
                        " New"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <DynamicTable
                    columns=columns
                    rows=rows
                    key_field="id"
                    loading=Signal::derive(move || loading.get())
                    render_actions=render_actions.clone()
                />
            </div>
        </PageFrame>
    }
}
