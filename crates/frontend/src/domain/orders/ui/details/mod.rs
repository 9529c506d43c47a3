use std::sync::Arc;

use chrono::{NaiveDate, TimeZone, Utc};
use contracts::domain::orders::{Order, OrderDto, OrderLine};
use contracts::enums::OrderStatus;
use leptos::prelude::*;
use leptos_router::hooks::{use_params_map, use_query_map};
use serde_json::{json, Value};
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;

use crate::domain::orders::api;
use crate::shared::components::dynamic_form::{
    DynamicForm, FieldKind, FormConfig, FormData, FormField, FormMode, FormSection, SubmitHandler,
};
use crate::shared::form_values::{integer, number, opt_text, text};
use crate::shared::nav::use_page_navigate;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};

fn default_line() -> FormData {
    let mut item = FormData::new();
    item.insert("product_name".to_string(), json!(""));
    item.insert("quantity".to_string(), json!(1));
    item.insert("unit_price".to_string(), json!(0.0));
    item
}

fn order_form_config(mode: FormMode, order: Option<&Order>) -> FormConfig {
    let status_options: Vec<(String, String)> = OrderStatus::all()
        .into_iter()
        .map(|s| (s.code().to_string(), s.label().to_string()))
        .collect();

    let mut initial_data: FormData = order
        .and_then(|o| serde_json::to_value(o).ok())
        .and_then(|v| v.as_object().cloned())
        .unwrap_or_default();
    // The date input wants a plain YYYY-MM-DD, not the RFC3339 timestamp.
    if let Some(Value::String(ts)) = initial_data.get("ordered_at").cloned() {
        let date_part: String = ts.chars().take(10).collect();
        initial_data.insert("ordered_at".to_string(), Value::String(date_part));
    }

    let title = match mode {
        FormMode::Create => "New order".to_string(),
        _ => order.map(|o| o.number.clone()).unwrap_or_default(),
    };

    FormConfig::new(title, mode)
        .subtitle("Sales order")
        .initial_data(initial_data)
        .sections(vec![
            FormSection::new("general").title("General").fields(vec![
                FormField::new("number", "Number", FieldKind::Text)
                    .required()
                    .pattern(r"^ORD-\d{5}$")
                    .placeholder("ORD-00001"),
                FormField::new("customer_name", "Customer", FieldKind::Text).required(),
                FormField::new("status", "Status", FieldKind::Select)
                    .required()
                    .options(status_options),
                FormField::new("ordered_at", "Order date", FieldKind::Date),
                FormField::new("comment", "Comment", FieldKind::Textarea).full_width(),
            ]),
            FormSection::new("lines")
                .title("Lines")
                .description("One row per ordered position.")
                .array("lines", "Line", "Add line", default_line())
                .fields(vec![
                    FormField::new("product_name", "Product", FieldKind::Text).required(),
                    FormField::new("quantity", "Quantity", FieldKind::Number)
                        .required()
                        .min(1.0)
                        .step(1.0),
                    FormField::new("unit_price", "Unit price", FieldKind::Number)
                        .required()
                        .min(0.0)
                        .step(0.01),
                ]),
        ])
}

fn lines_from(data: &FormData) -> Vec<OrderLine> {
    data.get("lines")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_object)
                .map(|item| OrderLine {
                    product_name: text(item, "product_name"),
                    quantity: integer(item, "quantity"),
                    unit_price: number(item, "unit_price"),
                })
                .collect()
        })
        .unwrap_or_default()
}

fn submit_handler(id: Option<Uuid>, navigate: Callback<String>) -> SubmitHandler {
    Arc::new(move |data: FormData| {
        let ordered_at = NaiveDate::parse_from_str(&text(&data, "ordered_at"), "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| Utc.from_utc_datetime(&dt));
        let dto = OrderDto {
            id,
            number: text(&data, "number"),
            customer_name: text(&data, "customer_name"),
            status: OrderStatus::from_code(&text(&data, "status")).unwrap_or_default(),
            lines: lines_from(&data),
            ordered_at,
            comment: opt_text(&data, "comment"),
        };
        Box::pin(async move {
            api::upsert(dto).await?;
            navigate.run("/orders".to_string());
            Ok(())
        })
    })
}

#[component]
pub fn OrderDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let query = use_query_map();
    let navigate = use_page_navigate();

    let id = Memo::new(move |_| params.with(|p| p.get("id").unwrap_or_default()));
    let mode = RwSignal::new(FormMode::View);
    let entity: RwSignal<Option<Order>> = RwSignal::new(None);
    let (load_error, set_load_error) = signal(None::<String>);
    let ready = RwSignal::new(false);

    Effect::new(move |_| {
        let current = id.get();
        if current.is_empty() {
            return;
        }
        if current == "new" {
            mode.set(FormMode::Create);
            entity.set(None);
            ready.set(true);
            return;
        }
        let wants_edit =
            query.with_untracked(|q| q.get("mode").as_deref() == Some("edit"));
        mode.set(if wants_edit {
            FormMode::Edit
        } else {
            FormMode::View
        });
        ready.set(false);
        spawn_local(async move {
            match api::fetch_by_id(&current).await {
                Ok(order) => {
                    entity.set(Some(order));
                    ready.set(true);
                }
                Err(e) => set_load_error.set(Some(e)),
            }
        });
    });

    let on_edit = Callback::new(move |_: ()| mode.set(FormMode::Edit));
    let on_cancel = Callback::new(move |_: ()| navigate.run("/orders".to_string()));

    let form = move || -> AnyView {
        if let Some(message) = load_error.get() {
            return view! { <div class="alert alert--error">{message}</div> }.into_any();
        }
        if !ready.get() {
            return view! { <div class="page__loading">"Loading..."</div> }.into_any();
        }
        let current = entity.get();
        let config = order_form_config(mode.get(), current.as_ref());
        let on_submit = submit_handler(current.as_ref().map(|o| o.id), navigate);
        view! {
            <DynamicForm
                config=config
                on_submit=on_submit
                on_cancel=on_cancel
                on_edit=on_edit
            />
        }
        .into_any()
    };

    view! {
        <PageFrame page_id="orders--detail" category=PAGE_CAT_DETAIL>
            {form}
        </PageFrame>
    }
}
