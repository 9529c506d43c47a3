use std::sync::Arc;

use contracts::system::users::User;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::components::dynamic_table::{
    rows_from, DynamicTable, FilterKind, Row, RowActionsRenderer, TableColumn,
};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::nav::use_page_navigate;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_SYSTEM};
use crate::shared::toast::use_toasts;
use crate::system::users::api;

fn user_columns() -> Vec<TableColumn> {
    vec![
        TableColumn::new("username", "Username").width(140.0),
        TableColumn::new("full_name", "Full name").min_width(160.0),
        TableColumn::new("email", "Email").min_width(160.0),
        TableColumn::new("is_admin", "Role")
            .width(110.0)
            .select_filter(vec![
                ("true".to_string(), "Admin".to_string()),
                ("false".to_string(), "User".to_string()),
            ])
            .render_with(Arc::new(|value, _row| {
                if value.and_then(|v| v.as_bool()).unwrap_or(false) {
                    view! { <span class="badge badge--warning">"Admin"</span> }.into_any()
                } else {
                    view! { <span class="badge badge--neutral">"User"</span> }.into_any()
                }
            })),
        TableColumn::new("is_active", "Status")
            .width(100.0)
            .select_filter(vec![
                ("true".to_string(), "Active".to_string()),
                ("false".to_string(), "Blocked".to_string()),
            ])
            .render_with(Arc::new(|value, _row| {
                if value.and_then(|v| v.as_bool()).unwrap_or(false) {
                    view! { <span class="badge badge--success">"Active"</span> }.into_any()
                } else {
                    view! { <span class="badge badge--error">"Blocked"</span> }.into_any()
                }
            })),
        TableColumn::new("last_login_at", "Last login")
            .width(140.0)
            .filter_kind(FilterKind::Date)
            .render_with(Arc::new(|value, _row| {
                match value.and_then(|v| v.as_str()) {
                    Some(raw) => format_datetime(raw).into_any(),
                    None => "-".into_any(),
                }
            })),
    ]
}

#[component]
pub fn UsersListPage() -> impl IntoView {
    let all: RwSignal<Vec<User>> = RwSignal::new(Vec::new());
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

    let columns = Signal::derive(move || user_columns());
    let rows: Signal<Vec<Row>> = Signal::derive(move || all.with(|data| rows_from(data)));

    let on_delete = Callback::new(move |id: String| {
        spawn_local(async move {
            match api::delete(&id).await {
                Ok(()) => {
                    toasts.success("User deleted");
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
                on:click=move |_| navigate.run(format!("/system/users/{}", view_id))
            >
                {icon("eye")}
            </button>
            <button
                class="action-btn"
                title="Edit"
                on:click=move |_| navigate.run(format!("/system/users/{}?mode=edit", edit_id))
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
        <PageFrame page_id="sys-users--list" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Users"</h1>
                    <Badge>
                        {move || all.with(|data| data.len().to_string())}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| navigate.run("/system/users/new".to_string())
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
