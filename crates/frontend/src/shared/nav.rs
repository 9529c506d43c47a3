//! Router navigation as a `Callback`.
//!
//! `use_navigate`'s closure is kept in local storage and exposed through a
//! plain `Callback<String>`, so pages can navigate from event handlers and
//! from `spawn_local` continuations alike.

use leptos::prelude::*;

pub fn use_page_navigate() -> Callback<String> {
    let navigate = StoredValue::new_local(leptos_router::hooks::use_navigate());
    Callback::new(move |path: String| {
        navigate.with_value(|nav| nav(&path, Default::default()));
    })
}
