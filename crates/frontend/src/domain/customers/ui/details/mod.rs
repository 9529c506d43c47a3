use std::sync::Arc;

use contracts::domain::customers::{Customer, CustomerDto};
use leptos::prelude::*;
use leptos_router::hooks::{use_params_map, use_query_map};
use serde_json::json;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;

use crate::domain::customers::api;
use crate::shared::components::dynamic_form::{
    DynamicForm, FieldKind, FormConfig, FormData, FormField, FormMode, FormSection, SubmitHandler,
};
use crate::shared::form_values::{flag, opt_text, text};
use crate::shared::nav::use_page_navigate;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};

const COUNTRIES: &[&str] = &[
    "Bulgaria", "Czechia", "Denmark", "France", "Germany", "Ireland", "Italy", "Poland",
    "Portugal", "Spain", "Sweden", "Switzerland",
];

fn customer_form_config(mode: FormMode, customer: Option<&Customer>) -> FormConfig {
    let country_options: Vec<(String, String)> = COUNTRIES
        .iter()
        .map(|c| (c.to_string(), c.to_string()))
        .collect();

    let initial_data: FormData = customer
        .and_then(|c| serde_json::to_value(c).ok())
        .and_then(|v| v.as_object().cloned())
        .unwrap_or_default();

    let title = match mode {
        FormMode::Create => "New customer".to_string(),
        _ => customer.map(|c| c.name.clone()).unwrap_or_default(),
    };

    FormConfig::new(title, mode)
        .subtitle("Customer master data")
        .initial_data(initial_data)
        .sections(vec![
            FormSection::new("profile").title("Profile").fields(vec![
                FormField::new("name", "Name", FieldKind::Text)
                    .required()
                    .length(2, 120),
                FormField::new("email", "Email", FieldKind::Email)
                    .required()
                    .pattern(r"^[^@\s]+@[^@\s]+\.[^@\s]+$"),
                FormField::new("phone", "Phone", FieldKind::Tel).placeholder("+49 ..."),
                FormField::new("company", "Company", FieldKind::Text),
                FormField::new("is_active", "Active", FieldKind::Checkbox)
                    .default_value(json!(true)),
            ]),
            FormSection::new("address").title("Address").fields(vec![
                FormField::new("country", "Country", FieldKind::Select)
                    .required()
                    .options(country_options),
                FormField::new("city", "City", FieldKind::Text),
                FormField::new("address", "Street address", FieldKind::Textarea).full_width(),
            ]),
        ])
}

fn submit_handler(id: Option<Uuid>, navigate: Callback<String>) -> SubmitHandler {
    Arc::new(move |data: FormData| {
        let dto = CustomerDto {
            id,
            name: text(&data, "name"),
            email: text(&data, "email"),
            phone: opt_text(&data, "phone"),
            company: opt_text(&data, "company"),
            country: text(&data, "country"),
            city: opt_text(&data, "city"),
            address: opt_text(&data, "address"),
            is_active: flag(&data, "is_active"),
        };
        Box::pin(async move {
            api::upsert(dto).await?;
            navigate.run("/customers".to_string());
            Ok(())
        })
    })
}

#[component]
pub fn CustomerDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let query = use_query_map();
    let navigate = use_page_navigate();

    let id = Memo::new(move |_| params.with(|p| p.get("id").unwrap_or_default()));
    let mode = RwSignal::new(FormMode::View);
    let entity: RwSignal<Option<Customer>> = RwSignal::new(None);
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
                Ok(customer) => {
                    entity.set(Some(customer));
                    ready.set(true);
                }
                Err(e) => set_load_error.set(Some(e)),
            }
        });
    });

    let on_edit = Callback::new(move |_: ()| mode.set(FormMode::Edit));
    let on_cancel = Callback::new(move |_: ()| navigate.run("/customers".to_string()));

    let form = move || -> AnyView {
        if let Some(message) = load_error.get() {
            return view! { <div class="alert alert--error">{message}</div> }.into_any();
        }
        if !ready.get() {
            return view! { <div class="page__loading">"Loading..."</div> }.into_any();
        }
        let current = entity.get();
        let config = customer_form_config(mode.get(), current.as_ref());
        let on_submit = submit_handler(current.as_ref().map(|c| c.id), navigate);
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
        <PageFrame page_id="customers--detail" category=PAGE_CAT_DETAIL>
            {form}
        </PageFrame>
    }
}
