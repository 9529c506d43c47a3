use axum::extract::State;
use axum::Json;

use contracts::dashboards::summary::DashboardSummary;
use contracts::enums::{InquiryStatus, OrderStatus};

use crate::shared::store::AppState;

/// GET /api/dashboard/summary
pub async fn summary(State(state): State<AppState>) -> Json<DashboardSummary> {
    let orders = state.orders.list().await;
    let inquiries = state.inquiries.list().await;

    let total_revenue = orders
        .iter()
        .filter(|o| o.status != OrderStatus::Cancelled)
        .map(|o| o.total)
        .sum();

    let open_inquiry_count = inquiries
        .iter()
        .filter(|i| matches!(i.status, InquiryStatus::Open | InquiryStatus::InProgress))
        .count();

    let mut recent_orders = orders;
    recent_orders.sort_by(|a, b| b.ordered_at.cmp(&a.ordered_at));
    recent_orders.truncate(5);

    Json(DashboardSummary {
        customer_count: state.customers.count().await,
        product_count: state.products.count().await,
        order_count: state.orders.count().await,
        open_inquiry_count,
        total_revenue,
        recent_orders,
    })
}
