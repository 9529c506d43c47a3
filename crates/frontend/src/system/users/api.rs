use contracts::system::users::{User, UserDto};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Fetch all users
pub async fn fetch_all() -> Result<Vec<User>, String> {
    let response = Request::get(&api_url("/api/system/users"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch users: {}", response.status()));
    }

    response
        .json::<Vec<User>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Fetch one user by id
pub async fn fetch_by_id(id: &str) -> Result<User, String> {
    let response = Request::get(&api_url(&format!("/api/system/users/{}", id)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch user: {}", response.status()));
    }

    response
        .json::<User>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create or update a user (id in dto decides)
pub async fn upsert(dto: UserDto) -> Result<(), String> {
    let response = Request::post(&api_url("/api/system/users"))
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to save user: {}", response.status()));
    }

    Ok(())
}

/// Delete a user
pub async fn delete(id: &str) -> Result<(), String> {
    let response = Request::delete(&api_url(&format!("/api/system/users/{}", id)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete user: {}", response.status()));
    }

    Ok(())
}
