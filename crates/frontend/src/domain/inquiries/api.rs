use contracts::domain::inquiries::{Inquiry, InquiryDto};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Fetch all inquiries
pub async fn fetch_all() -> Result<Vec<Inquiry>, String> {
    let response = Request::get(&api_url("/api/inquiries"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch inquiries: {}", response.status()));
    }

    response
        .json::<Vec<Inquiry>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Fetch one inquiry by id
pub async fn fetch_by_id(id: &str) -> Result<Inquiry, String> {
    let response = Request::get(&api_url(&format!("/api/inquiries/{}", id)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch inquiry: {}", response.status()));
    }

    response
        .json::<Inquiry>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create or update an inquiry (id in dto decides)
pub async fn upsert(dto: InquiryDto) -> Result<(), String> {
    let response = Request::post(&api_url("/api/inquiries"))
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to save inquiry: {}", response.status()));
    }

    Ok(())
}

/// Delete an inquiry
pub async fn delete(id: &str) -> Result<(), String> {
    let response = Request::delete(&api_url(&format!("/api/inquiries/{}", id)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete inquiry: {}", response.status()));
    }

    Ok(())
}
