use contracts::domain::products::{Product, ProductDto};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Fetch all products
pub async fn fetch_all() -> Result<Vec<Product>, String> {
    let response = Request::get(&api_url("/api/products"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch products: {}", response.status()));
    }

    response
        .json::<Vec<Product>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Fetch one product by id
pub async fn fetch_by_id(id: &str) -> Result<Product, String> {
    let response = Request::get(&api_url(&format!("/api/products/{}", id)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch product: {}", response.status()));
    }

    response
        .json::<Product>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create or update a product (id in dto decides)
pub async fn upsert(dto: ProductDto) -> Result<(), String> {
    let response = Request::post(&api_url("/api/products"))
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to save product: {}", response.status()));
    }

    Ok(())
}

/// Delete a product
pub async fn delete(id: &str) -> Result<(), String> {
    let response = Request::delete(&api_url(&format!("/api/products/{}", id)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete product: {}", response.status()));
    }

    Ok(())
}
