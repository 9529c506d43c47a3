use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;
use uuid::Uuid;

use contracts::domain::common::EntityTimestamps;
use contracts::domain::customers::{Customer, CustomerDto};

use crate::shared::store::AppState;

/// GET /api/customers
pub async fn list_all(State(state): State<AppState>) -> Json<Vec<Customer>> {
    Json(state.customers.list().await)
}

/// GET /api/customers/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Customer>, StatusCode> {
    match state.customers.get(id).await {
        Some(customer) => Ok(Json(customer)),
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// POST /api/customers
pub async fn upsert(
    State(state): State<AppState>,
    Json(dto): Json<CustomerDto>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    if dto.name.trim().is_empty() || dto.email.trim().is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }

    let id = match dto.id {
        Some(id) => {
            state
                .customers
                .update(id, |customer| {
                    customer.name = dto.name.clone();
                    customer.email = dto.email.clone();
                    customer.phone = dto.phone.clone();
                    customer.company = dto.company.clone();
                    customer.country = dto.country.clone();
                    customer.city = dto.city.clone();
                    customer.address = dto.address.clone();
                    customer.is_active = dto.is_active;
                    customer.timestamps.touch();
                })
                .await
                .map_err(|_| StatusCode::NOT_FOUND)?;
            id
        }
        None => {
            let customer = Customer {
                id: Uuid::new_v4(),
                name: dto.name,
                email: dto.email,
                phone: dto.phone,
                company: dto.company,
                country: dto.country,
                city: dto.city,
                address: dto.address,
                is_active: dto.is_active,
                timestamps: EntityTimestamps::now(),
            };
            state.customers.insert(customer).await
        }
    };

    Ok(Json(json!({ "id": id })))
}

/// DELETE /api/customers/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<(), StatusCode> {
    if state.customers.remove(id).await {
        Ok(())
    } else {
        Err(StatusCode::NOT_FOUND)
    }
}
