use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::EntityTimestamps;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub is_admin: bool,
    pub is_active: bool,
    pub last_login_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(flatten)]
    pub timestamps: EntityTimestamps,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UserDto {
    pub id: Option<Uuid>,
    pub username: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}
