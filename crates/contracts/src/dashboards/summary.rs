use serde::{Deserialize, Serialize};

use crate::domain::orders::Order;

/// Payload for the main dashboard page.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DashboardSummary {
    pub customer_count: usize,
    pub product_count: usize,
    pub order_count: usize,
    pub open_inquiry_count: usize,
    /// Revenue over all non-cancelled orders.
    pub total_revenue: f64,
    pub recent_orders: Vec<Order>,
}
