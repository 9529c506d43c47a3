use std::sync::Arc;

use contracts::dashboards::summary::DashboardSummary;
use contracts::enums::OrderStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::dashboards::summary::api;
use crate::shared::components::dynamic_table::{
    rows_from, DynamicTable, FilterKind, Row, TableColumn,
};
use crate::shared::components::stat_card::{StatCard, ValueFormat};
use crate::shared::date_utils::format_datetime;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DASHBOARD};

fn recent_order_columns() -> Vec<TableColumn> {
    vec![
        TableColumn::new("number", "Number").width(120.0),
        TableColumn::new("customer_name", "Customer").min_width(160.0),
        TableColumn::new("status", "Status")
            .width(120.0)
            .render_with(Arc::new(|value, _row| {
                let code = value.and_then(|v| v.as_str()).unwrap_or_default();
                OrderStatus::from_code(code)
                    .map(|s| s.label().to_string())
                    .unwrap_or_else(|| code.to_string())
                    .into_any()
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
pub fn DashboardPage() -> impl IntoView {
    let summary: RwSignal<Option<DashboardSummary>> = RwSignal::new(None);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let is_loaded = RwSignal::new(false);

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_summary().await {
                Ok(data) => summary.set(Some(data)),
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

    let columns = Signal::derive(move || recent_order_columns());
    let rows: Signal<Vec<Row>> = Signal::derive(move || {
        summary.with(|s| {
            s.as_ref()
                .map(|data| rows_from(&data.recent_orders))
                .unwrap_or_default()
        })
    });

    let customers = Signal::derive(move || {
        summary.with(|s| s.as_ref().map(|d| d.customer_count as f64))
    });
    let products = Signal::derive(move || {
        summary.with(|s| s.as_ref().map(|d| d.product_count as f64))
    });
    let orders = Signal::derive(move || {
        summary.with(|s| s.as_ref().map(|d| d.order_count as f64))
    });
    let open_inquiries = Signal::derive(move || {
        summary.with(|s| s.as_ref().map(|d| d.open_inquiry_count as f64))
    });
    let revenue = Signal::derive(move || {
        summary.with(|s| s.as_ref().map(|d| d.total_revenue))
    });

    view! {
        <PageFrame page_id="summary--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Dashboard"</h1>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="stat-grid">
                    <StatCard
                        label="Customers"
                        icon_name="customers"
                        value=customers
                        format=ValueFormat::Integer
                    />
                    <StatCard
                        label="Products"
                        icon_name="products"
                        value=products
                        format=ValueFormat::Integer
                    />
                    <StatCard
                        label="Orders"
                        icon_name="orders"
                        value=orders
                        format=ValueFormat::Integer
                    />
                    <StatCard
                        label="Open inquiries"
                        icon_name="inquiries"
                        value=open_inquiries
                        format=ValueFormat::Integer
                    />
                    <StatCard
                        label="Revenue"
                        icon_name="payments"
                        value=revenue
                        format=ValueFormat::Money
                    />
                </div>

                <DynamicTable
                    columns=columns
                    rows=rows
                    key_field="id"
                    loading=Signal::derive(move || loading.get())
                    title="Recent orders".to_string()
                    height_class="table-wrapper--short".to_string()
                />
            </div>
        </PageFrame>
    }
}
