use leptos::prelude::*;

/// Radio group component: one radio per (value, label) option.
#[component]
pub fn RadioGroup(
    /// Label for the group
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current selected value
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Name attribute (for grouping)
    #[prop(into)]
    name: String,
    /// Options: Vec of (value, label) tuples
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// Disabled state
    #[prop(optional)]
    disabled: bool,
) -> impl IntoView {
    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label">{l}</label>
            })}
            <div class="form__radio-group">
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=move |(val, lbl)| {
                        let radio_id = format!("radio-{}-{}", name, val);
                        let val_for_check = val.clone();
                        let val_for_change = val.clone();
                        let is_checked = move || value.get() == val_for_check;
                        view! {
                            <div class="form__radio-wrapper">
                                <input
                                    id=radio_id.clone()
                                    type="radio"
                                    class="form__radio"
                                    name=name.clone()
                                    value=val
                                    checked=is_checked
                                    disabled=disabled
                                    on:change=move |_| {
                                        if let Some(handler) = on_change {
                                            handler.run(val_for_change.clone());
                                        }
                                    }
                                />
                                <label class="form__radio-label" for=radio_id>
                                    {lbl}
                                </label>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
