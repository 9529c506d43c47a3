//! Sidebar component with collapsible menu groups.

use std::collections::HashSet;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::icons::icon;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (path, label, icon)
}

fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "overview",
            label: "Overview",
            items: vec![("/", "Dashboard", "dashboard")],
        },
        MenuGroup {
            id: "sales",
            label: "Sales",
            items: vec![
                ("/customers", "Customers", "customers"),
                ("/orders", "Orders", "orders"),
                ("/inquiries", "Inquiries", "inquiries"),
            ],
        },
        MenuGroup {
            id: "catalog",
            label: "Catalog",
            items: vec![("/products", "Products", "products")],
        },
        MenuGroup {
            id: "settings",
            label: "Settings",
            items: vec![("/system/users", "Users", "users")],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let collapsed: RwSignal<HashSet<&'static str>> = RwSignal::new(HashSet::new());

    let groups = menu_groups()
        .into_iter()
        .map(|group| {
            let group_id = group.id;
            let is_open = move || !collapsed.get().contains(group_id);
            let toggle = move |_| {
                collapsed.update(|set| {
                    if !set.remove(group_id) {
                        set.insert(group_id);
                    }
                });
            };

            let item_defs = group.items.clone();
            let items = move || {
                item_defs
                    .iter()
                    .map(|(path, label, icon_name)| {
                        view! {
                            <A href=*path attr:class="sidebar__item">
                                {icon(icon_name)}
                                <span class="sidebar__item-label">{*label}</span>
                            </A>
                        }
                    })
                    .collect_view()
            };

            view! {
                <div class="sidebar__group">
                    <button class="sidebar__group-header" on:click=toggle>
                        <span>{group.label}</span>
                        {move || if is_open() {
                            icon("chevron-down")
                        } else {
                            icon("chevron-right")
                        }}
                    </button>
                    {move || is_open().then(|| view! {
                        <div class="sidebar__group-items">{items.clone()}</div>
                    })}
                </div>
            }
        })
        .collect_view();

    view! {
        <nav class="sidebar">
            {groups}
        </nav>
    }
}
