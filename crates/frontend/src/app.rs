use crate::routes::AppRoutes;
use crate::shared::toast::{ToastHost, ToastService};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide ToastService for transient notifications app-wide
    provide_context(ToastService::new());

    view! {
        <AppRoutes />
        <ToastHost />
    }
}
