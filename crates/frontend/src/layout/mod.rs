pub mod sidebar;

use leptos::prelude::*;

use sidebar::Sidebar;

/// Main application shell.
///
/// Layout structure:
/// ```text
/// +------------------------------------------+
/// |               TopHeader                  |
/// +------------------------------------------+
/// |  Sidebar  |         Content              |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <Sidebar />
                <main class="app-main">
                    {children()}
                </main>
            </div>
        </div>
    }
}

#[component]
fn TopHeader() -> impl IntoView {
    view! {
        <header class="top-header">
            <span class="top-header__brand">"Atlas ERP"</span>
            <span class="top-header__subtitle">"Administration"</span>
        </header>
    }
}
