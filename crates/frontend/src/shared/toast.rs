//! Transient toast notifications.
//!
//! `ToastService` lives in the leptos context (provided once in `App`);
//! any component can push a message. Toasts auto-dismiss after a few
//! seconds via a `gloo_timers` future.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const AUTO_DISMISS_MS: u32 = 4_000;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToastLevel {
    Success,
    Warning,
    Error,
}

impl ToastLevel {
    fn class(&self) -> &'static str {
        match self {
            ToastLevel::Success => "toast toast--success",
            ToastLevel::Warning => "toast toast--warning",
            ToastLevel::Error => "toast toast--error",
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ToastMessage {
    pub id: u64,
    pub level: ToastLevel,
    pub text: String,
}

/// Context service for pushing toasts from anywhere in the tree.
#[derive(Clone, Copy)]
pub struct ToastService {
    messages: RwSignal<Vec<ToastMessage>>,
    next_id: RwSignal<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            messages: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    pub fn push(&self, level: ToastLevel, text: impl Into<String>) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.messages.update(|all| {
            all.push(ToastMessage {
                id,
                level,
                text: text.into(),
            })
        });

        let messages = self.messages;
        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            messages.update(|all| all.retain(|m| m.id != id));
        });
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(ToastLevel::Success, text);
    }

    pub fn warning(&self, text: impl Into<String>) {
        self.push(ToastLevel::Warning, text);
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(ToastLevel::Error, text);
    }

    pub fn dismiss(&self, id: u64) {
        self.messages.update(|all| all.retain(|m| m.id != id));
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

/// Shortcut for components: fetch the service from context.
pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in context")
}

/// Renders the active toasts in a fixed corner stack. Mounted once in `App`.
#[component]
pub fn ToastHost() -> impl IntoView {
    let service = use_toasts();
    let messages = service.messages;

    view! {
        <div class="toast-stack">
            <For
                each=move || messages.get()
                key=|m| m.id
                children=move |message| {
                    let id = message.id;
                    view! {
                        <div class=message.level.class() on:click=move |_| service.dismiss(id)>
                            {message.text.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
