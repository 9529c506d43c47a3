use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;
use uuid::Uuid;

use contracts::domain::common::EntityTimestamps;
use contracts::domain::products::{Product, ProductDto};

use crate::shared::store::AppState;

/// GET /api/products
pub async fn list_all(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.products.list().await)
}

/// GET /api/products/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Product>, StatusCode> {
    match state.products.get(id).await {
        Some(product) => Ok(Json(product)),
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// POST /api/products
pub async fn upsert(
    State(state): State<AppState>,
    Json(dto): Json<ProductDto>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    if dto.name.trim().is_empty() || dto.sku.trim().is_empty() || dto.price < 0.0 {
        return Err(StatusCode::BAD_REQUEST);
    }

    let id = match dto.id {
        Some(id) => {
            state
                .products
                .update(id, |product| {
                    product.name = dto.name.clone();
                    product.sku = dto.sku.clone();
                    product.category = dto.category;
                    product.description = dto.description.clone();
                    product.price = dto.price;
                    product.stock = dto.stock;
                    product.discount_percent = dto.discount_percent;
                    product.is_active = dto.is_active;
                    product.timestamps.touch();
                })
                .await
                .map_err(|_| StatusCode::NOT_FOUND)?;
            id
        }
        None => {
            let product = Product {
                id: Uuid::new_v4(),
                name: dto.name,
                sku: dto.sku,
                category: dto.category,
                description: dto.description,
                price: dto.price,
                stock: dto.stock,
                discount_percent: dto.discount_percent,
                is_active: dto.is_active,
                timestamps: EntityTimestamps::now(),
            };
            state.products.insert(product).await
        }
    };

    Ok(Json(json!({ "id": id })))
}

/// DELETE /api/products/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<(), StatusCode> {
    if state.products.remove(id).await {
        Ok(())
    } else {
        Err(StatusCode::NOT_FOUND)
    }
}
