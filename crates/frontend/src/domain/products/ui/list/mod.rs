use std::sync::Arc;

use contracts::domain::products::Product;
use contracts::enums::ProductCategory;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::products::api;
use crate::shared::components::dynamic_table::{
    rows_from, DynamicTable, FilterKind, Row, RowActionsRenderer, TableColumn,
};
use crate::shared::icons::icon;
use crate::shared::nav::use_page_navigate;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::toast::use_toasts;

fn product_columns() -> Vec<TableColumn> {
    let category_options = ProductCategory::all()
        .into_iter()
        .map(|c| (c.code().to_string(), c.label().to_string()))
        .collect();

    vec![
        TableColumn::new("name", "Name").min_width(180.0),
        TableColumn::new("sku", "SKU").width(110.0),
        TableColumn::new("category", "Category")
            .width(130.0)
            .select_filter(category_options)
            .render_with(Arc::new(|value, _row| {
                let code = value.and_then(|v| v.as_str()).unwrap_or_default();
                ProductCategory::from_code(code)
                    .map(|c| c.label().to_string())
                    .unwrap_or_else(|| code.to_string())
                    .into_any()
            })),
        TableColumn::new("price", "Price")
            .width(100.0)
            .filter_kind(FilterKind::Number)
            .render_with(Arc::new(|value, _row| {
                let price = value.and_then(|v| v.as_f64()).unwrap_or(0.0);
                format!("{:.2}", price).into_any()
            })),
        TableColumn::new("stock", "Stock")
            .width(90.0)
            .filter_kind(FilterKind::Number),
        TableColumn::new("discount_percent", "Discount")
            .width(100.0)
            .not_filterable()
            .render_with(Arc::new(|value, _row| {
                match value.and_then(|v| v.as_f64()) {
                    Some(pct) => format!("{}%", pct).into_any(),
                    None => "-".into_any(),
                }
            })),
        TableColumn::new("is_active", "Status")
            .width(100.0)
            .select_filter(vec![
                ("true".to_string(), "Active".to_string()),
                ("false".to_string(), "Archived".to_string()),
            ])
            .render_with(Arc::new(|value, _row| {
                if value.and_then(|v| v.as_bool()).unwrap_or(false) {
                    view! { <span class="badge badge--success">"Active"</span> }.into_any()
                } else {
                    view! { <span class="badge badge--neutral">"Archived"</span> }.into_any()
                }
            })),
    ]
}

#[component]
pub fn ProductsListPage() -> impl IntoView {
    let all: RwSignal<Vec<Product>> = RwSignal::new(Vec::new());
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

    let columns = Signal::derive(move || product_columns());
    let rows: Signal<Vec<Row>> = Signal::derive(move || all.with(|data| rows_from(data)));

    let on_delete = Callback::new(move |id: String| {
        spawn_local(async move {
            match api::delete(&id).await {
                Ok(()) => {
                    toasts.success("Product deleted");
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
                on:click=move |_| navigate.run(format!("/products/{}", view_id))
            >
                {icon("eye")}
            </button>
            <button
                class="action-btn"
                title="Edit"
                on:click=move |_| navigate.run(format!("/products/{}?mode=edit", edit_id))
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
        <PageFrame page_id="products--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Products"</h1>
                    <Badge>
                        {move || all.with(|data| data.len().to_string())}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| navigate.run("/products/new".to_string())
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
