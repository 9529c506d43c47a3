use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common::EntityTimestamps;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub country: String,
    pub city: Option<String>,
    pub address: Option<String>,
    pub is_active: bool,
    #[serde(flatten)]
    pub timestamps: EntityTimestamps,
}

/// Upsert payload: `id = None` creates, `id = Some` updates.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CustomerDto {
    pub id: Option<Uuid>,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub country: String,
    pub city: Option<String>,
    pub address: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}
