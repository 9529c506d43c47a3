use std::sync::Arc;

use contracts::domain::products::{Product, ProductDto};
use contracts::enums::ProductCategory;
use leptos::prelude::*;
use leptos_router::hooks::{use_params_map, use_query_map};
use serde_json::json;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;

use crate::domain::products::api;
use crate::shared::components::dynamic_form::{
    Condition, DynamicForm, FieldKind, FormConfig, FormData, FormField, FormMode, FormSection,
    SubmitHandler,
};
use crate::shared::form_values::{flag, integer, number, opt_number, opt_text, text};
use crate::shared::nav::use_page_navigate;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};

fn product_form_config(mode: FormMode, product: Option<&Product>) -> FormConfig {
    let category_options: Vec<(String, String)> = ProductCategory::all()
        .into_iter()
        .map(|c| (c.code().to_string(), c.label().to_string()))
        .collect();

    let mut initial_data: FormData = product
        .and_then(|p| serde_json::to_value(p).ok())
        .and_then(|v| v.as_object().cloned())
        .unwrap_or_default();
    // The discount toggle is a form-only field derived from the dto.
    let discounted = product.map_or(false, |p| p.discount_percent.is_some());
    initial_data.insert("discounted".to_string(), json!(discounted));

    let title = match mode {
        FormMode::Create => "New product".to_string(),
        _ => product.map(|p| p.name.clone()).unwrap_or_default(),
    };

    // Discount percent only exists while the toggle is on.
    let discount_gate: Condition =
        Arc::new(|data: &FormData| data.get("discounted") == Some(&json!(true)));

    FormConfig::new(title, mode)
        .subtitle("Catalog item")
        .initial_data(initial_data)
        .sections(vec![
            FormSection::new("general").title("General").fields(vec![
                FormField::new("name", "Name", FieldKind::Text)
                    .required()
                    .length(2, 160),
                FormField::new("sku", "SKU", FieldKind::Text)
                    .required()
                    .pattern(r"^[A-Z]{3}-\d{3}$")
                    .placeholder("ABC-123"),
                FormField::new("category", "Category", FieldKind::Select)
                    .required()
                    .options(category_options),
                FormField::new("description", "Description", FieldKind::Textarea).full_width(),
            ]),
            FormSection::new("pricing").title("Pricing & stock").fields(vec![
                FormField::new("price", "Price", FieldKind::Number)
                    .required()
                    .min(0.0)
                    .step(0.01),
                FormField::new("stock", "Stock", FieldKind::Number).min(0.0).step(1.0),
                // Form-only toggle; the view shows the gated percent instead.
                FormField::new("discounted", "Discounted", FieldKind::Checkbox).hide_in_view(),
                FormField::new("discount_percent", "Discount %", FieldKind::Number)
                    .required()
                    .range(1.0, 90.0)
                    .condition(discount_gate),
                FormField::new("is_active", "Active", FieldKind::Checkbox)
                    .default_value(json!(true)),
            ]),
        ])
}

fn submit_handler(id: Option<Uuid>, navigate: Callback<String>) -> SubmitHandler {
    Arc::new(move |data: FormData| {
        let dto = ProductDto {
            id,
            name: text(&data, "name"),
            sku: text(&data, "sku"),
            category: ProductCategory::from_code(&text(&data, "category")).unwrap_or_default(),
            description: opt_text(&data, "description"),
            price: number(&data, "price"),
            stock: integer(&data, "stock"),
            discount_percent: if flag(&data, "discounted") {
                opt_number(&data, "discount_percent")
            } else {
                None
            },
            is_active: flag(&data, "is_active"),
        };
        Box::pin(async move {
            api::upsert(dto).await?;
            navigate.run("/products".to_string());
            Ok(())
        })
    })
}

#[component]
pub fn ProductDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let query = use_query_map();
    let navigate = use_page_navigate();

    let id = Memo::new(move |_| params.with(|p| p.get("id").unwrap_or_default()));
    let mode = RwSignal::new(FormMode::View);
    let entity: RwSignal<Option<Product>> = RwSignal::new(None);
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
                Ok(product) => {
                    entity.set(Some(product));
                    ready.set(true);
                }
                Err(e) => set_load_error.set(Some(e)),
            }
        });
    });

    let on_edit = Callback::new(move |_: ()| mode.set(FormMode::Edit));
    let on_cancel = Callback::new(move |_: ()| navigate.run("/products".to_string()));

    let form = move || -> AnyView {
        if let Some(message) = load_error.get() {
            return view! { <div class="alert alert--error">{message}</div> }.into_any();
        }
        if !ready.get() {
            return view! { <div class="page__loading">"Loading..."</div> }.into_any();
        }
        let current = entity.get();
        let config = product_form_config(mode.get(), current.as_ref());
        let on_submit = submit_handler(current.as_ref().map(|p| p.id), navigate);
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
        <PageFrame page_id="products--detail" category=PAGE_CAT_DETAIL>
            {form}
        </PageFrame>
    }
}
