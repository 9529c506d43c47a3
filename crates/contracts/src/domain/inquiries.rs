use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common::EntityTimestamps;
use crate::enums::{InquiryChannel, InquiryStatus};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inquiry {
    pub id: Uuid,
    pub subject: String,
    pub customer_name: String,
    pub channel: InquiryChannel,
    pub status: InquiryStatus,
    pub received_at: chrono::DateTime<chrono::Utc>,
    pub body: String,
    pub assignee: Option<String>,
    #[serde(flatten)]
    pub timestamps: EntityTimestamps,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct InquiryDto {
    pub id: Option<Uuid>,
    pub subject: String,
    pub customer_name: String,
    pub channel: InquiryChannel,
    pub status: InquiryStatus,
    pub received_at: Option<chrono::DateTime<chrono::Utc>>,
    pub body: String,
    pub assignee: Option<String>,
}
