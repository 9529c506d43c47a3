use std::sync::Arc;

use contracts::domain::orders::Order;
use contracts::enums::OrderStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::orders::api;
use crate::shared::components::dynamic_table::{
    rows_from, DynamicTable, FilterKind, Row, RowActionsRenderer, TableColumn,
};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::nav::use_page_navigate;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::toast::use_toasts;

fn status_badge_class(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "badge badge--neutral",
        OrderStatus::Confirmed => "badge badge--info",
        OrderStatus::Shipped => "badge badge--warning",
        OrderStatus::Delivered => "badge badge--success",
        OrderStatus::Cancelled => "badge badge--error",
    }
}

fn order_columns() -> Vec<TableColumn> {
    let status_options = OrderStatus::all()
        .into_iter()
        .map(|s| (s.code().to_string(), s.label().to_string()))
        .collect();

    vec![
        TableColumn::new("number", "Number").width(120.0),
        TableColumn::new("customer_name", "Customer").min_width(160.0),
        TableColumn::new("status", "Status")
            .width(120.0)
            .select_filter(status_options)
            .render_with(Arc::new(|value, _row| {
                let code = value.and_then(|v| v.as_str()).unwrap_or_default();
                match OrderStatus::from_code(code) {
                    Some(status) => view! {
                        <span class=status_badge_class(status)>{status.label()}</span>
                    }
                    .into_any(),
                    None => code.to_string().into_any(),
                }
            })),
        TableColumn::new("total", "Total")
            .width(110.0)
            .filter_kind(FilterKind::Number)
            .render_with(Arc::new(|value, _row| {
                let total = value.and_then(|v| v.as_f64()).unwrap_or(0.0);
                format!("{:.2}", total).into_any()
            })),
        TableColumn::new("ordered_at", "Ordered")
            .width(140.0)
            .filter_kind(FilterKind::Date)
            .render_with(Arc::new(|value, _row| {
                let raw = value.and_then(|v| v.as_str()).unwrap_or_default();
                format_datetime(raw).into_any()
            })),
    ]
}

#[component]
pub fn OrdersListPage() -> impl IntoView {
    let all: RwSignal<Vec<Order>> = RwSignal::new(Vec::new());
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

    let columns = Signal::derive(move || order_columns());
    let rows: Signal<Vec<Row>> = Signal::derive(move || all.with(|data| rows_from(data)));

    let on_delete = Callback::new(move |id: String| {
        spawn_local(async move {
            match api::delete(&id).await {
                Ok(()) => {
                    toasts.success("Order deleted");
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
                on:click=move |_| navigate.run(format!("/orders/{}", view_id))
            >
                {icon("eye")}
            </button>
            <button
                class="action-btn"
                title="Edit"
                on:click=move |_| navigate.run(format!("/orders/{}?mode=edit", edit_id))
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
        <PageFrame page_id="orders--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Orders"</h1>
                    <Badge>
                        {move || all.with(|data| data.len().to_string())}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| navigate.run("/orders/new".to_string())
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
