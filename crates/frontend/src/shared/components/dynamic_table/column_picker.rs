//! Column visibility picker rendered as a modal overlay.

use leptos::prelude::*;

/// Checkbox list of all configured columns. Hidden columns keep their
/// filter/width state; the picker only flips visibility.
#[component]
pub fn ColumnPicker(
    /// (key, label) of every configured column, descriptor order
    #[prop(into)]
    columns: Signal<Vec<(String, String)>>,
    #[prop(into)] visible: Signal<Vec<String>>,
    on_toggle: Callback<String>,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal-content modal-content--narrow" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h3>"Columns"</h3>
                    <button class="btn-close" on:click=move |_| on_close.run(())>"×"</button>
                </div>
                <div class="column-picker__list">
                    <For
                        each=move || columns.get()
                        key=|(key, _)| key.clone()
                        children=move |(key, label)| {
                            let key_for_check = key.clone();
                            let key_for_toggle = key.clone();
                            let checkbox_id = format!("col-pick-{}", key);
                            let is_checked =
                                move || visible.get().iter().any(|k| *k == key_for_check);
                            view! {
                                <div class="column-picker__item">
                                    <input
                                        id=checkbox_id.clone()
                                        type="checkbox"
                                        checked=is_checked
                                        on:change=move |_| on_toggle.run(key_for_toggle.clone())
                                    />
                                    <label for=checkbox_id>{label}</label>
                                </div>
                            }
                        }
                    />
                </div>
            </div>
        </div>
    }
}
