use std::sync::Arc;

use contracts::domain::inquiries::Inquiry;
use contracts::enums::{InquiryChannel, InquiryStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::inquiries::api;
use crate::shared::components::dynamic_table::{
    rows_from, state::display_value, DynamicTable, FilterKind, FilterPredicate, Row,
    RowActionsRenderer, TableColumn,
};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::nav::use_page_navigate;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::toast::use_toasts;

fn status_badge_class(status: InquiryStatus) -> &'static str {
    match status {
        InquiryStatus::Open => "badge badge--error",
        InquiryStatus::InProgress => "badge badge--warning",
        InquiryStatus::Resolved => "badge badge--success",
        InquiryStatus::Closed => "badge badge--neutral",
    }
}

/// Date filtering that ignores separators: typing "0703" or "07-03" both
/// match a value displayed as 2026-07-03.
fn digit_prefix_predicate() -> FilterPredicate {
    Arc::new(|value, filter, _column| {
        let digits: String = display_value(value)
            .chars()
            .filter(char::is_ascii_digit)
            .collect();
        let wanted: String = filter.chars().filter(char::is_ascii_digit).collect();
        !wanted.is_empty() && digits.starts_with(&wanted)
    })
}

fn inquiry_columns() -> Vec<TableColumn> {
    let status_options = InquiryStatus::all()
        .into_iter()
        .map(|s| (s.code().to_string(), s.label().to_string()))
        .collect();
    let channel_options = InquiryChannel::all()
        .into_iter()
        .map(|c| (c.code().to_string(), c.label().to_string()))
        .collect();

    vec![
        TableColumn::new("subject", "Subject").min_width(200.0),
        TableColumn::new("customer_name", "Customer").min_width(150.0),
        TableColumn::new("channel", "Channel")
            .width(110.0)
            .select_filter(channel_options),
        TableColumn::new("status", "Status")
            .width(120.0)
            .select_filter(status_options)
            .render_with(Arc::new(|value, _row| {
                let code = value.and_then(|v| v.as_str()).unwrap_or_default();
                match InquiryStatus::from_code(code) {
                    Some(status) => view! {
                        <span class=status_badge_class(status)>{status.label()}</span>
                    }
                    .into_any(),
                    None => code.to_string().into_any(),
                }
            })),
        TableColumn::new("received_at", "Received")
            .width(140.0)
            .filter_kind(FilterKind::Date)
            .filter_predicate(digit_prefix_predicate())
            .render_with(Arc::new(|value, _row| {
                let raw = value.and_then(|v| v.as_str()).unwrap_or_default();
                format_datetime(raw).into_any()
            })),
        TableColumn::new("assignee", "Assignee").width(130.0),
    ]
}

#[component]
pub fn InquiriesListPage() -> impl IntoView {
    let all: RwSignal<Vec<Inquiry>> = RwSignal::new(Vec::new());
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

    let columns = Signal::derive(move || inquiry_columns());
    let rows: Signal<Vec<Row>> = Signal::derive(move || all.with(|data| rows_from(data)));

    let on_delete = Callback::new(move |id: String| {
        spawn_local(async move {
            match api::delete(&id).await {
                Ok(()) => {
                    toasts.success("Inquiry deleted");
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
        view! {
            <button
                class="action-btn"
                title="View"
                on:click=move |_| navigate.run(format!("/inquiries/{}", view_id))
            >
                {icon("eye")}
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
        <PageFrame page_id="inquiries--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Inquiries"</h1>
                    <Badge>
                        {move || all.with(|data| data.len().to_string())}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| navigate.run("/inquiries/new".to_string())
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
