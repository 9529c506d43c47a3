use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::dashboards::summary::DashboardPage;
use crate::domain::customers::ui::{CustomerDetailsPage, CustomersListPage};
use crate::domain::inquiries::ui::{InquiriesListPage, InquiryDetailsPage};
use crate::domain::orders::ui::{OrderDetailsPage, OrdersListPage};
use crate::domain::products::ui::{ProductDetailsPage, ProductsListPage};
use crate::layout::Shell;
use crate::system::users::ui::{UserDetailsPage, UsersListPage};

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <div class="page">"Page not found"</div> }>
                    <Route path=path!("/") view=DashboardPage />

                    <Route path=path!("/customers") view=CustomersListPage />
                    <Route path=path!("/customers/:id") view=CustomerDetailsPage />

                    <Route path=path!("/products") view=ProductsListPage />
                    <Route path=path!("/products/:id") view=ProductDetailsPage />

                    <Route path=path!("/orders") view=OrdersListPage />
                    <Route path=path!("/orders/:id") view=OrderDetailsPage />

                    <Route path=path!("/inquiries") view=InquiriesListPage />
                    <Route path=path!("/inquiries/:id") view=InquiryDetailsPage />

                    <Route path=path!("/system/users") view=UsersListPage />
                    <Route path=path!("/system/users/:id") view=UserDetailsPage />
                </Routes>
            </Shell>
        </Router>
    }
}
