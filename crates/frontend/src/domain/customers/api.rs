use contracts::domain::customers::{Customer, CustomerDto};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Fetch all customers
pub async fn fetch_all() -> Result<Vec<Customer>, String> {
    let response = Request::get(&api_url("/api/customers"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch customers: {}", response.status()));
    }

    response
        .json::<Vec<Customer>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Fetch one customer by id
pub async fn fetch_by_id(id: &str) -> Result<Customer, String> {
    let response = Request::get(&api_url(&format!("/api/customers/{}", id)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch customer: {}", response.status()));
    }

    response
        .json::<Customer>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create or update a customer (id in dto decides)
pub async fn upsert(dto: CustomerDto) -> Result<(), String> {
    let response = Request::post(&api_url("/api/customers"))
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to save customer: {}", response.status()));
    }

    Ok(())
}

/// Delete a customer
pub async fn delete(id: &str) -> Result<(), String> {
    let response = Request::delete(&api_url(&format!("/api/customers/{}", id)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete customer: {}", response.status()));
    }

    Ok(())
}
