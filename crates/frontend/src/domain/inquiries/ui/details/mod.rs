use std::sync::Arc;

use chrono::{DateTime, Utc};
use contracts::domain::inquiries::{Inquiry, InquiryDto};
use contracts::enums::{InquiryChannel, InquiryStatus};
use leptos::prelude::*;
use leptos_router::hooks::{use_params_map, use_query_map};
use serde_json::Value;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;

use crate::domain::inquiries::api;
use crate::shared::components::dynamic_form::{
    DynamicForm, FieldKind, FieldRenderer, FormConfig, FormData, FormField, FormMode,
    FormSection, SubmitHandler, ViewRenderer,
};
use crate::shared::form_values::{opt_text, text};
use crate::shared::nav::use_page_navigate;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};

fn age_text(data: &FormData) -> String {
    let received = data
        .get("received_at")
        .and_then(Value::as_str)
        .unwrap_or_default();
    DateTime::parse_from_rfc3339(received)
        .ok()
        .map(|d| {
            let days = (Utc::now() - d.with_timezone(&Utc)).num_days();
            format!("{} days", days)
        })
        .unwrap_or_else(|| "-".to_string())
}

fn inquiry_form_config(mode: FormMode, inquiry: Option<&Inquiry>) -> FormConfig {
    let status_options: Vec<(String, String)> = InquiryStatus::all()
        .into_iter()
        .map(|s| (s.code().to_string(), s.label().to_string()))
        .collect();
    let channel_options: Vec<(String, String)> = InquiryChannel::all()
        .into_iter()
        .map(|c| (c.code().to_string(), c.label().to_string()))
        .collect();

    let initial_data: FormData = inquiry
        .and_then(|i| serde_json::to_value(i).ok())
        .and_then(|v| v.as_object().cloned())
        .unwrap_or_default();

    let title = match mode {
        FormMode::Create => "New inquiry".to_string(),
        _ => inquiry.map(|i| i.subject.clone()).unwrap_or_default(),
    };

    // Computed field: same informational text in both modes.
    let age_view: ViewRenderer = Arc::new(|_value, data| {
        view! { <span class="form__value">{age_text(data)}</span> }.into_any()
    });
    let age_edit: FieldRenderer = Arc::new(|_value, _set, data| {
        view! { <span class="form__value">{age_text(data)}</span> }.into_any()
    });

    FormConfig::new(title, mode)
        .subtitle("Customer inquiry")
        .initial_data(initial_data)
        .sections(vec![
            FormSection::new("inquiry").title("Inquiry").fields(vec![
                FormField::new("subject", "Subject", FieldKind::Text)
                    .required()
                    .length(3, 200),
                FormField::new("customer_name", "Customer", FieldKind::Text).required(),
                FormField::new("channel", "Channel", FieldKind::Radio).options(channel_options),
                FormField::new("status", "Status", FieldKind::Select)
                    .required()
                    .options(status_options),
                FormField::new("age", "Age", FieldKind::Custom)
                    .render_with(age_edit)
                    .render_view_with(age_view),
                FormField::new("body", "Message", FieldKind::Textarea)
                    .required()
                    .full_width(),
            ]),
            FormSection::new("handling").title("Handling").fields(vec![
                FormField::new("assignee", "Assignee", FieldKind::Text)
                    .placeholder("Unassigned"),
            ]),
        ])
}

fn submit_handler(
    id: Option<Uuid>,
    received_at: Option<DateTime<Utc>>,
    navigate: Callback<String>,
) -> SubmitHandler {
    Arc::new(move |data: FormData| {
        let dto = InquiryDto {
            id,
            subject: text(&data, "subject"),
            customer_name: text(&data, "customer_name"),
            channel: match text(&data, "channel").as_str() {
                "phone" => InquiryChannel::Phone,
                "web" => InquiryChannel::Web,
                "chat" => InquiryChannel::Chat,
                _ => InquiryChannel::Email,
            },
            status: InquiryStatus::from_code(&text(&data, "status")).unwrap_or_default(),
            received_at,
            body: text(&data, "body"),
            assignee: opt_text(&data, "assignee"),
        };
        Box::pin(async move {
            api::upsert(dto).await?;
            navigate.run("/inquiries".to_string());
            Ok(())
        })
    })
}

#[component]
pub fn InquiryDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let query = use_query_map();
    let navigate = use_page_navigate();

    let id = Memo::new(move |_| params.with(|p| p.get("id").unwrap_or_default()));
    let mode = RwSignal::new(FormMode::View);
    let entity: RwSignal<Option<Inquiry>> = RwSignal::new(None);
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
                Ok(inquiry) => {
                    entity.set(Some(inquiry));
                    ready.set(true);
                }
                Err(e) => set_load_error.set(Some(e)),
            }
        });
    });

    let on_edit = Callback::new(move |_: ()| mode.set(FormMode::Edit));
    let on_cancel = Callback::new(move |_: ()| navigate.run("/inquiries".to_string()));

    let form = move || -> AnyView {
        if let Some(message) = load_error.get() {
            return view! { <div class="alert alert--error">{message}</div> }.into_any();
        }
        if !ready.get() {
            return view! { <div class="page__loading">"Loading..."</div> }.into_any();
        }
        let current = entity.get();
        let config = inquiry_form_config(mode.get(), current.as_ref());
        let on_submit = submit_handler(
            current.as_ref().map(|i| i.id),
            current.as_ref().map(|i| i.received_at),
            navigate,
        );
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
        <PageFrame page_id="inquiries--detail" category=PAGE_CAT_DETAIL>
            {form}
        </PageFrame>
    }
}
