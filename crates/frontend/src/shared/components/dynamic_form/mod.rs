//! DynamicForm — schema-driven form renderer.
//!
//! Renders a `FormConfig` in one of three modes (create/edit/view), owns
//! values, validation errors and section/array state, and hands the
//! assembled value map to the caller's async submit handler. Persistence,
//! navigation and API calls all stay on the caller's side.

mod fields;
pub mod schema;
pub mod state;
pub mod validate;

use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;

pub use schema::{
    Condition, FieldKind, FieldRenderer, FieldValidator, FormConfig, FormData, FormField,
    FormMode, FormSection, SectionKind, SubmitFuture, SubmitHandler, ViewRenderer,
};
pub use state::FormState;

#[component]
pub fn DynamicForm(
    /// Form schema + mode + initial data. Read once per mount.
    config: FormConfig,
    /// Async submit handler; resolution/rejection drives the toasts.
    on_submit: SubmitHandler,
    /// Invoked on cancel; falls back to history.back() when absent.
    #[prop(optional)]
    on_cancel: Option<Callback<()>>,
    /// View-mode "Edit" button target. The mode switch itself is the
    /// caller's job.
    #[prop(optional)]
    on_edit: Option<Callback<()>>,
    /// External busy flag; disables the footer together with `submitting`.
    #[prop(optional, into)]
    loading: Signal<bool>,
) -> impl IntoView {
    let state = RwSignal::new(FormState::init(&config));
    let is_view = config.mode == FormMode::View;
    let title = config.title.clone();
    let subtitle = config.subtitle.clone();
    let sections = config.sections.clone();
    let config = StoredValue::new(config);
    let handler = StoredValue::new(on_submit);
    let toasts = use_toasts();

    let busy = Signal::derive(move || loading.get() || state.with(|s| s.submitting));

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        // View mode never validates or submits.
        if is_view {
            return;
        }

        let data = state.with_untracked(|s| s.data.clone());
        let errors = config.with_value(|cfg| validate::validate_form(cfg, &data));
        if !errors.is_empty() {
            state.update(|s| s.errors = errors);
            toasts.warning("Please fix the highlighted fields");
            return;
        }

        state.update(|s| {
            s.errors.clear();
            s.submitting = true;
        });
        spawn_local(async move {
            let result = handler.with_value(|submit| submit(data)).await;
            match result {
                Ok(()) => toasts.success("Saved"),
                Err(message) => {
                    if message.is_empty() {
                        toasts.error("Save failed");
                    } else {
                        toasts.error(message);
                    }
                }
            }
            // The submit handler may have navigated away and unmounted the
            // form; a plain update would hit a disposed signal.
            state.try_update(|s| s.submitting = false);
        });
    };

    let handle_cancel = move |_| {
        if let Some(cancel) = on_cancel {
            cancel.run(());
        } else if let Some(window) = web_sys::window() {
            if let Ok(history) = window.history() {
                let _ = history.back();
            }
        }
    };

    let rendered_sections = sections
        .into_iter()
        .map(|section| render_section(section, state, is_view))
        .collect_view();

    view! {
        <form class="dynamic-form" on:submit=handle_submit novalidate=true>
            <div class="dynamic-form__header">
                <div>
                    <h2 class="dynamic-form__title">{title}</h2>
                    {subtitle.map(|s| view! { <p class="dynamic-form__subtitle">{s}</p> })}
                </div>
                {(is_view && on_edit.is_some()).then(|| {
                    let edit = on_edit.expect("checked above");
                    view! {
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| edit.run(())
                        >
                            {icon("edit")}
                            " Edit"
                        </Button>
                    }
                })}
            </div>

            {rendered_sections}

            {(!is_view).then(|| view! {
                <div class="dynamic-form__footer">
                    <button
                        type="button"
                        class="btn-secondary"
                        on:click=handle_cancel
                        disabled=move || busy.get()
                    >
                        "Cancel"
                    </button>
                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || busy.get()
                    >
                        {move || if busy.get() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            })}
        </form>
    }
}

/// Memoized visibility gate so toggling unrelated fields does not rebuild
/// this one (rebuilding an input loses focus).
fn condition_memo(condition: Option<schema::Condition>, state: RwSignal<FormState>) -> Memo<bool> {
    Memo::new(move |_| state.with(|s| condition.as_ref().map_or(true, |check| check(&s.data))))
}

fn render_section(section: FormSection, state: RwSignal<FormState>, is_view: bool) -> AnyView {
    let visible = condition_memo(section.condition.clone(), state);
    let expanded = {
        let id = section.id.clone();
        Memo::new(move |_| state.with(|s| s.is_expanded(&id)))
    };
    let on_toggle = {
        let id = section.id.clone();
        Callback::new(move |_: ()| state.update(|s| s.toggle_section(&id)))
    };
    let title = section.title.clone();
    let description = section.description.clone();
    let grid_class = section
        .grid_cols
        .clone()
        .unwrap_or_else(|| "form__grid".to_string());
    let kind = section.kind.clone();
    let fields = section.fields.clone();

    let section_view = move || -> AnyView {
        if !visible.get() {
            return ().into_any();
        }

        let body: AnyView = if expanded.get() {
            match &kind {
                SectionKind::Standard => {
                    let blocks = fields
                        .iter()
                        .map(|field| {
                            render_field_block(field.clone(), field.name.clone(), state, is_view)
                        })
                        .collect_view();
                    view! { <div class=grid_class.clone()>{blocks}</div> }.into_any()
                }
                SectionKind::Array {
                    array_field,
                    item_label,
                    add_button_label,
                    default_item,
                } => render_array_body(
                    array_field.clone(),
                    item_label.clone(),
                    add_button_label.clone(),
                    default_item.clone(),
                    fields.clone(),
                    state,
                    is_view,
                ),
            }
        } else {
            ().into_any()
        };

        view! {
            <section class="form__section">
                <div
                    class="form__section-header"
                    on:click=move |_| on_toggle.run(())
                >
                    {title.clone().map(|t| view! { <h3>{t}</h3> })}
                    <span class=move || {
                        if expanded.get() {
                            "form__section-chevron form__section-chevron--open"
                        } else {
                            "form__section-chevron"
                        }
                    }>
                        {icon("chevron-down")}
                    </span>
                </div>
                {description.clone().map(|d| view! {
                    <p class="form__section-description">{d}</p>
                })}
                {body}
            </section>
        }
        .into_any()
    };

    view! { {section_view} }.into_any()
}

fn render_array_body(
    array_field: String,
    item_label: String,
    add_label: String,
    default_item: FormData,
    item_fields: Vec<FormField>,
    state: RwSignal<FormState>,
    is_view: bool,
) -> AnyView {
    let len = {
        let array_field = array_field.clone();
        Memo::new(move |_| state.with(|s| s.array_len(&array_field)))
    };
    let on_add = {
        let array_field = array_field.clone();
        Callback::new(move |_: ()| state.update(|s| s.array_add(&array_field, &default_item)))
    };

    let items = move || {
        let count = len.get();
        (0..count)
            .map(|index| {
                let remove_field = array_field.clone();
                let blocks = item_fields
                    .iter()
                    .map(|field| {
                        let name = state::composite_name(&array_field, index, &field.name);
                        render_field_block(field.clone(), name, state, is_view)
                    })
                    .collect_view();
                view! {
                    <div class="form__array-item">
                        <div class="form__array-item-header">
                            <span>{format!("{} {}", item_label, index + 1)}</span>
                            {(!is_view).then(|| view! {
                                <button
                                    type="button"
                                    class="form__array-remove"
                                    title="Remove"
                                    on:click=move |_| {
                                        state.update(|s| s.array_remove(&remove_field, index));
                                    }
                                >
                                    {icon("trash")}
                                </button>
                            })}
                        </div>
                        <div class="form__grid">{blocks}</div>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div class="form__array">
            {items}
            {(!is_view).then(|| view! {
                <button
                    type="button"
                    class="form__array-add"
                    on:click=move |_| on_add.run(())
                >
                    {icon("plus")}
                    " "
                    {add_label.clone()}
                </button>
            })}
        </div>
    }
    .into_any()
}

fn render_field_block(
    field: FormField,
    name: String,
    state: RwSignal<FormState>,
    is_view: bool,
) -> AnyView {
    if is_view && field.hide_in_view {
        return ().into_any();
    }

    let visible = condition_memo(field.condition.clone(), state);
    let error = {
        let name = name.clone();
        Signal::derive(move || state.with(|s| s.error_of(&name).cloned()))
    };
    let block_class = if field.full_width {
        "form__field form__field--full"
    } else {
        "form__field"
    };
    // Checkbox widgets carry their own label.
    let label = (!matches!(field.kind, FieldKind::Checkbox)).then(|| field.label.clone());

    let block = move || -> AnyView {
        if !visible.get() {
            return ().into_any();
        }
        let widget: AnyView = if is_view {
            fields::field_view(&field, &name, state)
        } else {
            fields::field_editor(&field, name.clone(), state)
        };
        view! {
            <div class=block_class>
                {label.clone().map(|l| view! {
                    <label class="form__label">{l}</label>
                })}
                {widget}
                {move || error.get().map(|message| view! {
                    <span class="form__error">{message}</span>
                })}
            </div>
        }
        .into_any()
    };

    view! { {block} }.into_any()
}
