use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;
use uuid::Uuid;

use contracts::domain::common::EntityTimestamps;
use contracts::domain::orders::{Order, OrderDto};

use crate::shared::store::AppState;

/// GET /api/orders
pub async fn list_all(State(state): State<AppState>) -> Json<Vec<Order>> {
    Json(state.orders.list().await)
}

/// GET /api/orders/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Order>, StatusCode> {
    match state.orders.get(id).await {
        Some(order) => Ok(Json(order)),
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// POST /api/orders
pub async fn upsert(
    State(state): State<AppState>,
    Json(dto): Json<OrderDto>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    if dto.number.trim().is_empty() || dto.customer_name.trim().is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }

    let total = dto.total();
    let id = match dto.id {
        Some(id) => {
            state
                .orders
                .update(id, |order| {
                    order.number = dto.number.clone();
                    order.customer_name = dto.customer_name.clone();
                    order.status = dto.status;
                    order.lines = dto.lines.clone();
                    order.total = total;
                    if let Some(ordered_at) = dto.ordered_at {
                        order.ordered_at = ordered_at;
                    }
                    order.comment = dto.comment.clone();
                    order.timestamps.touch();
                })
                .await
                .map_err(|_| StatusCode::NOT_FOUND)?;
            id
        }
        None => {
            let order = Order {
                id: Uuid::new_v4(),
                number: dto.number,
                customer_name: dto.customer_name,
                status: dto.status,
                lines: dto.lines,
                total,
                ordered_at: dto.ordered_at.unwrap_or_else(chrono::Utc::now),
                comment: dto.comment,
                timestamps: EntityTimestamps::now(),
            };
            state.orders.insert(order).await
        }
    };

    Ok(Json(json!({ "id": id })))
}

/// DELETE /api/orders/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<(), StatusCode> {
    if state.orders.remove(id).await {
        Ok(())
    } else {
        Err(StatusCode::NOT_FOUND)
    }
}
