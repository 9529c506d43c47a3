use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common::EntityTimestamps;
use crate::enums::OrderStatus;

/// One position of an order. Edited as a repeatable form group.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OrderLine {
    pub product_name: String,
    pub quantity: i64,
    pub unit_price: f64,
}

impl OrderLine {
    pub fn total(&self) -> f64 {
        self.quantity as f64 * self.unit_price
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub number: String,
    pub customer_name: String,
    pub status: OrderStatus,
    pub lines: Vec<OrderLine>,
    pub total: f64,
    pub ordered_at: chrono::DateTime<chrono::Utc>,
    pub comment: Option<String>,
    #[serde(flatten)]
    pub timestamps: EntityTimestamps,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OrderDto {
    pub id: Option<Uuid>,
    pub number: String,
    pub customer_name: String,
    pub status: OrderStatus,
    pub lines: Vec<OrderLine>,
    pub ordered_at: Option<chrono::DateTime<chrono::Utc>>,
    pub comment: Option<String>,
}

impl OrderDto {
    /// Order total is always derived from the lines, never stored.
    pub fn total(&self) -> f64 {
        self.lines.iter().map(OrderLine::total).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_total_sums_lines() {
        let dto = OrderDto {
            lines: vec![
                OrderLine {
                    product_name: "Desk".into(),
                    quantity: 2,
                    unit_price: 150.0,
                },
                OrderLine {
                    product_name: "Lamp".into(),
                    quantity: 1,
                    unit_price: 49.5,
                },
            ],
            ..Default::default()
        };
        assert_eq!(dto.total(), 349.5);
    }
}
