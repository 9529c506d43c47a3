//! Field rendering: one exhaustive dispatch over `FieldKind` for edit mode,
//! one read-only text projection for view mode.

use leptos::prelude::*;
use serde_json::Value;

use crate::shared::components::ui::{Checkbox, Input, RadioGroup, Select, Textarea};

use super::schema::{FieldKind, FormField};
use super::state::FormState;

/// String form of a stored value for an `<input>`'s value attribute.
pub fn value_to_input_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

fn value_text_signal(state: RwSignal<FormState>, name: String) -> Signal<String> {
    Signal::derive(move || {
        state.with(|s| {
            s.value(&name)
                .map(value_to_input_string)
                .unwrap_or_default()
        })
    })
}

fn value_bool_signal(state: RwSignal<FormState>, name: String) -> Signal<bool> {
    Signal::derive(move || state.with(|s| s.value(&name).and_then(Value::as_bool).unwrap_or(false)))
}

fn set_string(state: RwSignal<FormState>, name: String) -> Callback<String> {
    Callback::new(move |text: String| {
        state.update(|s| s.set_value(&name, Value::String(text)));
    })
}

/// Editable widget for one field. `name` may be a composite array-item name.
pub fn field_editor(field: &FormField, name: String, state: RwSignal<FormState>) -> AnyView {
    let is_disabled = field.disabled;
    let readonly = field.read_only;
    let placeholder = field.placeholder.clone().unwrap_or_default();

    match field.kind {
        FieldKind::Text
        | FieldKind::Email
        | FieldKind::Password
        | FieldKind::Tel
        | FieldKind::Url
        | FieldKind::Date
        | FieldKind::DatetimeLocal
        | FieldKind::Time
        | FieldKind::Month
        | FieldKind::Color
        | FieldKind::Number
        | FieldKind::Range => {
            let value = value_text_signal(state, name.clone());
            let on_input = set_string(state, name);
            view! {
                <Input
                    value=value
                    on_input=on_input
                    input_type=field.kind.input_type().to_string()
                    placeholder=placeholder
                    disabled=is_disabled
                    readonly=readonly
                    min=field.min.map(|v| v.to_string())
                    max=field.max.map(|v| v.to_string())
                    step=field.step.map(|v| v.to_string())
                />
            }
            .into_any()
        }
        FieldKind::Textarea => {
            let value = value_text_signal(state, name.clone());
            let on_input = set_string(state, name);
            view! {
                <Textarea
                    value=value
                    on_input=on_input
                    placeholder=placeholder
                    disabled=is_disabled
                    readonly=readonly
                />
            }
            .into_any()
        }
        FieldKind::Select => {
            let value = value_text_signal(state, name.clone());
            let on_change = set_string(state, name);
            view! {
                <Select
                    value=value
                    on_change=on_change
                    options=field.options.clone()
                    empty_option="Select...".to_string()
                    disabled=is_disabled
                />
            }
            .into_any()
        }
        FieldKind::Checkbox => {
            let checked = value_bool_signal(state, name.clone());
            let on_change = Callback::new(move |checked: bool| {
                state.update(|s| s.set_value(&name, Value::Bool(checked)));
            });
            view! {
                <Checkbox
                    label=field.label.clone()
                    checked=checked
                    on_change=on_change
                    disabled=is_disabled
                />
            }
            .into_any()
        }
        FieldKind::Radio => {
            let value = value_text_signal(state, name.clone());
            let on_change = set_string(state, name.clone());
            view! {
                <RadioGroup
                    value=value
                    on_change=on_change
                    name=name
                    options=field.options.clone()
                    disabled=is_disabled
                />
            }
            .into_any()
        }
        FieldKind::File => {
            // The chosen file name is stored; upload handling belongs to
            // the submit handler.
            let on_input = set_string(state, name);
            view! {
                <div class="form__group">
                    <input
                        type="file"
                        class="form__input form__input--file"
                        disabled=is_disabled
                        on:change=move |ev| on_input.run(event_target_value(&ev))
                    />
                </div>
            }
            .into_any()
        }
        FieldKind::Custom => match &field.render {
            Some(render) => {
                let setter_name = name.clone();
                let setter = Callback::new(move |value: Value| {
                    state.update(|s| s.set_value(&setter_name, value));
                });
                state.with(|s| {
                    let value = s.value(&name).cloned().unwrap_or(Value::Null);
                    render(&value, setter, &s.data)
                })
            }
            None => view! { <span class="form__value">"-"</span> }.into_any(),
        },
    }
}

/// Read-only projection of a field value for view mode.
pub fn field_view(field: &FormField, name: &str, state: RwSignal<FormState>) -> AnyView {
    if let Some(render_view) = &field.render_view {
        return state.with(|s| {
            let value = s.value(name).cloned().unwrap_or(Value::Null);
            render_view(&value, &s.data)
        });
    }

    let text = state.with(|s| {
        let value = s.value(name);
        match field.kind {
            FieldKind::Checkbox => match value.and_then(Value::as_bool) {
                Some(true) => "Yes".to_string(),
                Some(false) => "No".to_string(),
                None => String::new(),
            },
            FieldKind::Select | FieldKind::Radio => {
                let raw = value.map(value_to_input_string).unwrap_or_default();
                field
                    .options
                    .iter()
                    .find(|(v, _)| *v == raw)
                    .map(|(_, label)| label.clone())
                    .unwrap_or(raw)
            }
            _ => value.map(value_to_input_string).unwrap_or_default(),
        }
    });

    let text = if text.is_empty() { "-".to_string() } else { text };
    view! { <span class="form__value">{text}</span> }.into_any()
}
