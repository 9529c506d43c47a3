use serde::{Deserialize, Serialize};

/// Channel an inquiry arrived through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InquiryChannel {
    #[default]
    Email,
    Phone,
    Web,
    Chat,
}

impl InquiryChannel {
    pub fn code(&self) -> &'static str {
        match self {
            InquiryChannel::Email => "email",
            InquiryChannel::Phone => "phone",
            InquiryChannel::Web => "web",
            InquiryChannel::Chat => "chat",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InquiryChannel::Email => "Email",
            InquiryChannel::Phone => "Phone",
            InquiryChannel::Web => "Web form",
            InquiryChannel::Chat => "Chat",
        }
    }

    pub fn all() -> Vec<InquiryChannel> {
        vec![
            InquiryChannel::Email,
            InquiryChannel::Phone,
            InquiryChannel::Web,
            InquiryChannel::Chat,
        ]
    }
}
