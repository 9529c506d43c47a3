use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;
use uuid::Uuid;

use contracts::domain::common::EntityTimestamps;
use contracts::domain::inquiries::{Inquiry, InquiryDto};

use crate::shared::store::AppState;

/// GET /api/inquiries
pub async fn list_all(State(state): State<AppState>) -> Json<Vec<Inquiry>> {
    Json(state.inquiries.list().await)
}

/// GET /api/inquiries/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Inquiry>, StatusCode> {
    match state.inquiries.get(id).await {
        Some(inquiry) => Ok(Json(inquiry)),
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// POST /api/inquiries
pub async fn upsert(
    State(state): State<AppState>,
    Json(dto): Json<InquiryDto>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    if dto.subject.trim().is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }

    let id = match dto.id {
        Some(id) => {
            state
                .inquiries
                .update(id, |inquiry| {
                    inquiry.subject = dto.subject.clone();
                    inquiry.customer_name = dto.customer_name.clone();
                    inquiry.channel = dto.channel;
                    inquiry.status = dto.status;
                    if let Some(received_at) = dto.received_at {
                        inquiry.received_at = received_at;
                    }
                    inquiry.body = dto.body.clone();
                    inquiry.assignee = dto.assignee.clone();
                    inquiry.timestamps.touch();
                })
                .await
                .map_err(|_| StatusCode::NOT_FOUND)?;
            id
        }
        None => {
            let inquiry = Inquiry {
                id: Uuid::new_v4(),
                subject: dto.subject,
                customer_name: dto.customer_name,
                channel: dto.channel,
                status: dto.status,
                received_at: dto.received_at.unwrap_or_else(chrono::Utc::now),
                body: dto.body,
                assignee: dto.assignee,
                timestamps: EntityTimestamps::now(),
            };
            state.inquiries.insert(inquiry).await
        }
    };

    Ok(Json(json!({ "id": id })))
}

/// DELETE /api/inquiries/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<(), StatusCode> {
    if state.inquiries.remove(id).await {
        Ok(())
    } else {
        Err(StatusCode::NOT_FOUND)
    }
}
