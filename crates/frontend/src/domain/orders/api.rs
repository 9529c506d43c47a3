use contracts::domain::orders::{Order, OrderDto};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Fetch all orders
pub async fn fetch_all() -> Result<Vec<Order>, String> {
    let response = Request::get(&api_url("/api/orders"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch orders: {}", response.status()));
    }

    response
        .json::<Vec<Order>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Fetch one order by id
pub async fn fetch_by_id(id: &str) -> Result<Order, String> {
    let response = Request::get(&api_url(&format!("/api/orders/{}", id)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch order: {}", response.status()));
    }

    response
        .json::<Order>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create or update an order (id in dto decides)
pub async fn upsert(dto: OrderDto) -> Result<(), String> {
    let response = Request::post(&api_url("/api/orders"))
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to save order: {}", response.status()));
    }

    Ok(())
}

/// Delete an order
pub async fn delete(id: &str) -> Result<(), String> {
    let response = Request::delete(&api_url(&format!("/api/orders/{}", id)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete order: {}", response.status()));
    }

    Ok(())
}
