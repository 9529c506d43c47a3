use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;
use uuid::Uuid;

use contracts::domain::common::EntityTimestamps;
use contracts::system::users::{User, UserDto};

use crate::shared::store::AppState;

/// GET /api/system/users
pub async fn list_all(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.users.list().await)
}

/// GET /api/system/users/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<User>, StatusCode> {
    match state.users.get(id).await {
        Some(user) => Ok(Json(user)),
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// POST /api/system/users
pub async fn upsert(
    State(state): State<AppState>,
    Json(dto): Json<UserDto>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    if dto.username.trim().is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }

    let id = match dto.id {
        Some(id) => {
            state
                .users
                .update(id, |user| {
                    user.username = dto.username.clone();
                    user.full_name = dto.full_name.clone();
                    user.email = dto.email.clone();
                    user.is_admin = dto.is_admin;
                    user.is_active = dto.is_active;
                    user.timestamps.touch();
                })
                .await
                .map_err(|_| StatusCode::NOT_FOUND)?;
            id
        }
        None => {
            let user = User {
                id: Uuid::new_v4(),
                username: dto.username,
                full_name: dto.full_name,
                email: dto.email,
                is_admin: dto.is_admin,
                is_active: dto.is_active,
                last_login_at: None,
                timestamps: EntityTimestamps::now(),
            };
            state.users.insert(user).await
        }
    };

    Ok(Json(json!({ "id": id })))
}

/// DELETE /api/system/users/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<(), StatusCode> {
    if state.users.remove(id).await {
        Ok(())
    } else {
        Err(StatusCode::NOT_FOUND)
    }
}
