use serde::{Deserialize, Serialize};

/// Processing status of a customer inquiry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InquiryStatus {
    #[default]
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl InquiryStatus {
    pub fn code(&self) -> &'static str {
        match self {
            InquiryStatus::Open => "open",
            InquiryStatus::InProgress => "in_progress",
            InquiryStatus::Resolved => "resolved",
            InquiryStatus::Closed => "closed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InquiryStatus::Open => "Open",
            InquiryStatus::InProgress => "In progress",
            InquiryStatus::Resolved => "Resolved",
            InquiryStatus::Closed => "Closed",
        }
    }

    pub fn all() -> Vec<InquiryStatus> {
        vec![
            InquiryStatus::Open,
            InquiryStatus::InProgress,
            InquiryStatus::Resolved,
            InquiryStatus::Closed,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "open" => Some(InquiryStatus::Open),
            "in_progress" => Some(InquiryStatus::InProgress),
            "resolved" => Some(InquiryStatus::Resolved),
            "closed" => Some(InquiryStatus::Closed),
            _ => None,
        }
    }
}
