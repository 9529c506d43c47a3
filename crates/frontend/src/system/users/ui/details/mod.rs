use std::sync::Arc;

use contracts::system::users::{User, UserDto};
use leptos::prelude::*;
use leptos_router::hooks::{use_params_map, use_query_map};
use serde_json::json;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;

use crate::shared::components::dynamic_form::{
    DynamicForm, FieldKind, FormConfig, FormData, FormField, FormMode, FormSection, SubmitHandler,
};
use crate::shared::form_values::{flag, opt_text, text};
use crate::shared::nav::use_page_navigate;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_SYSTEM};
use crate::system::users::api;

fn user_form_config(mode: FormMode, user: Option<&User>) -> FormConfig {
    let initial_data: FormData = user
        .and_then(|u| serde_json::to_value(u).ok())
        .and_then(|v| v.as_object().cloned())
        .unwrap_or_default();

    let title = match mode {
        FormMode::Create => "New user".to_string(),
        _ => user.map(|u| u.username.clone()).unwrap_or_default(),
    };

    FormConfig::new(title, mode)
        .subtitle("System account")
        .initial_data(initial_data)
        .sections(vec![FormSection::new("account").title("Account").fields(vec![
            FormField::new("username", "Username", FieldKind::Text)
                .required()
                .length(3, 40)
                .pattern(r"^[a-z0-9_.\-]+$")
                .placeholder("j.doe"),
            FormField::new("full_name", "Full name", FieldKind::Text),
            FormField::new("email", "Email", FieldKind::Email)
                .pattern(r"^[^@\s]+@[^@\s]+\.[^@\s]+$"),
            FormField::new("is_admin", "Administrator", FieldKind::Checkbox),
            FormField::new("is_active", "Active", FieldKind::Checkbox)
                .default_value(json!(true)),
        ])])
}

fn submit_handler(id: Option<Uuid>, navigate: Callback<String>) -> SubmitHandler {
    Arc::new(move |data: FormData| {
        let dto = UserDto {
            id,
            username: text(&data, "username"),
            full_name: opt_text(&data, "full_name"),
            email: opt_text(&data, "email"),
            is_admin: flag(&data, "is_admin"),
            is_active: flag(&data, "is_active"),
        };
        Box::pin(async move {
            api::upsert(dto).await?;
            navigate.run("/system/users".to_string());
            Ok(())
        })
    })
}

#[component]
pub fn UserDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let query = use_query_map();
    let navigate = use_page_navigate();

    let id = Memo::new(move |_| params.with(|p| p.get("id").unwrap_or_default()));
    let mode = RwSignal::new(FormMode::View);
    let entity: RwSignal<Option<User>> = RwSignal::new(None);
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
                Ok(user) => {
                    entity.set(Some(user));
                    ready.set(true);
                }
                Err(e) => set_load_error.set(Some(e)),
            }
        });
    });

    let on_edit = Callback::new(move |_: ()| mode.set(FormMode::Edit));
    let on_cancel = Callback::new(move |_: ()| navigate.run("/system/users".to_string()));

    let form = move || -> AnyView {
        if let Some(message) = load_error.get() {
            return view! { <div class="alert alert--error">{message}</div> }.into_any();
        }
        if !ready.get() {
            return view! { <div class="page__loading">"Loading..."</div> }.into_any();
        }
        let current = entity.get();
        let config = user_form_config(mode.get(), current.as_ref());
        let on_submit = submit_handler(current.as_ref().map(|u| u.id), navigate);
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
        <PageFrame page_id="sys-users--detail" category=PAGE_CAT_SYSTEM>
            {form}
        </PageFrame>
    }
}
