//! Deterministic demo dataset for the in-memory stores.
//!
//! Uses a fixed RNG seed so restarting the backend reproduces the same
//! dataset. Ids are freshly generated each start; counts, names and amounts
//! are stable.

use chrono::{Duration, Utc};
use contracts::domain::common::EntityTimestamps;
use contracts::domain::customers::Customer;
use contracts::domain::inquiries::Inquiry;
use contracts::domain::orders::{Order, OrderLine};
use contracts::domain::products::Product;
use contracts::enums::{InquiryChannel, InquiryStatus, OrderStatus, ProductCategory};
use contracts::system::users::User;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

use super::store::AppState;

const CUSTOMER_NAMES: &[(&str, &str, &str)] = &[
    ("Ann Weber", "Germany", "Berlin"),
    ("Bob Martin", "France", "Lyon"),
    ("Carla Rossi", "Italy", "Milan"),
    ("Daniel Novak", "Czechia", "Prague"),
    ("Elena Petrova", "Bulgaria", "Sofia"),
    ("Frank Jensen", "Denmark", "Aarhus"),
    ("Greta Lindqvist", "Sweden", "Uppsala"),
    ("Hugo Fernandez", "Spain", "Seville"),
    ("Ines Costa", "Portugal", "Porto"),
    ("Jonas Meier", "Switzerland", "Bern"),
    ("Katarzyna Mazur", "Poland", "Gdansk"),
    ("Liam O'Connor", "Ireland", "Cork"),
];

const PRODUCTS: &[(&str, &str, ProductCategory, f64)] = &[
    ("Standing desk", "DSK-100", ProductCategory::Furniture, 489.0),
    ("Office chair", "CHR-220", ProductCategory::Furniture, 259.0),
    ("27\" monitor", "MON-270", ProductCategory::Electronics, 329.0),
    ("Mechanical keyboard", "KBD-055", ProductCategory::Electronics, 119.0),
    ("Laser printer", "PRT-410", ProductCategory::Electronics, 449.0),
    ("Notebook A5", "NTB-005", ProductCategory::Stationery, 4.5),
    ("Gel pen (10 pack)", "PEN-010", ProductCategory::Stationery, 8.9),
    ("Branded hoodie", "APP-330", ProductCategory::Apparel, 54.0),
    ("On-site setup", "SRV-001", ProductCategory::Services, 180.0),
    ("Extended warranty", "SRV-002", ProductCategory::Services, 99.0),
];

const INQUIRY_SUBJECTS: &[&str] = &[
    "Invoice copy request",
    "Damaged delivery",
    "Bulk pricing question",
    "Wrong item shipped",
    "Return label missing",
    "Payment terms change",
    "Delivery date confirmation",
    "Product compatibility",
];

fn days_ago(rng: &mut StdRng, max_days: i64) -> chrono::DateTime<chrono::Utc> {
    Utc::now() - Duration::days(rng.gen_range(0..max_days)) - Duration::hours(rng.gen_range(0..24))
}

fn timestamps_at(created: chrono::DateTime<chrono::Utc>) -> EntityTimestamps {
    EntityTimestamps {
        created_at: created,
        updated_at: created,
    }
}

pub async fn seed_demo_data(state: &AppState) {
    let mut rng = StdRng::seed_from_u64(42);

    for (name, country, city) in CUSTOMER_NAMES {
        let created = days_ago(&mut rng, 365);
        let customer = Customer {
            id: Uuid::new_v4(),
            name: (*name).to_string(),
            email: format!(
                "{}@example.com",
                name.to_lowercase().replace([' ', '\''], ".")
            ),
            phone: Some(format!("+49 30 {:07}", rng.gen_range(1_000_000..9_999_999))),
            company: None,
            country: (*country).to_string(),
            city: Some((*city).to_string()),
            address: None,
            is_active: rng.gen_bool(0.9),
            timestamps: timestamps_at(created),
        };
        state.customers.insert(customer).await;
    }

    for (name, sku, category, price) in PRODUCTS {
        let created = days_ago(&mut rng, 500);
        let discounted = rng.gen_bool(0.3);
        let product = Product {
            id: Uuid::new_v4(),
            name: (*name).to_string(),
            sku: (*sku).to_string(),
            category: *category,
            description: None,
            price: *price,
            stock: rng.gen_range(0..250),
            discount_percent: discounted.then(|| rng.gen_range(5..30) as f64),
            is_active: true,
            timestamps: timestamps_at(created),
        };
        state.products.insert(product).await;
    }

    let statuses = OrderStatus::all();
    for i in 0..30 {
        let created = days_ago(&mut rng, 120);
        let (customer_name, ..) = CUSTOMER_NAMES[rng.gen_range(0..CUSTOMER_NAMES.len())];
        let line_count = rng.gen_range(1..4);
        let lines: Vec<OrderLine> = (0..line_count)
            .map(|_| {
                let (name, _, _, price) = PRODUCTS[rng.gen_range(0..PRODUCTS.len())];
                OrderLine {
                    product_name: name.to_string(),
                    quantity: rng.gen_range(1..6),
                    unit_price: price,
                }
            })
            .collect();
        let total = lines.iter().map(OrderLine::total).sum();
        let order = Order {
            id: Uuid::new_v4(),
            number: format!("ORD-{:05}", 1001 + i),
            customer_name: customer_name.to_string(),
            status: statuses[rng.gen_range(0..statuses.len())],
            lines,
            total,
            ordered_at: created,
            comment: None,
            timestamps: timestamps_at(created),
        };
        state.orders.insert(order).await;
    }

    let channels = InquiryChannel::all();
    let inquiry_statuses = InquiryStatus::all();
    for subject in INQUIRY_SUBJECTS {
        let created = days_ago(&mut rng, 60);
        let (customer_name, ..) = CUSTOMER_NAMES[rng.gen_range(0..CUSTOMER_NAMES.len())];
        let inquiry = Inquiry {
            id: Uuid::new_v4(),
            subject: (*subject).to_string(),
            customer_name: customer_name.to_string(),
            channel: channels[rng.gen_range(0..channels.len())],
            status: inquiry_statuses[rng.gen_range(0..inquiry_statuses.len())],
            received_at: created,
            body: format!("{} — details pending.", subject),
            assignee: None,
            timestamps: timestamps_at(created),
        };
        state.inquiries.insert(inquiry).await;
    }

    for (username, full_name, is_admin) in [
        ("admin", "System Administrator", true),
        ("m.berger", "Maria Berger", false),
        ("t.klein", "Thomas Klein", false),
    ] {
        let created = days_ago(&mut rng, 400);
        let user = User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            full_name: Some(full_name.to_string()),
            email: Some(format!("{}@example.com", username)),
            is_admin,
            is_active: true,
            last_login_at: Some(days_ago(&mut rng, 14)),
            timestamps: timestamps_at(created),
        };
        state.users.insert(user).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seed_populates_every_store() {
        let state = AppState::new();
        seed_demo_data(&state).await;

        assert_eq!(state.customers.count().await, CUSTOMER_NAMES.len());
        assert_eq!(state.products.count().await, PRODUCTS.len());
        assert_eq!(state.orders.count().await, 30);
        assert_eq!(state.inquiries.count().await, INQUIRY_SUBJECTS.len());
        assert_eq!(state.users.count().await, 3);
    }

    #[tokio::test]
    async fn test_order_totals_match_lines() {
        let state = AppState::new();
        seed_demo_data(&state).await;

        for order in state.orders.list().await {
            let expected: f64 = order.lines.iter().map(OrderLine::total).sum();
            assert!((order.total - expected).abs() < 1e-9);
        }
    }
}
