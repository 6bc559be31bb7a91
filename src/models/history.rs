use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum MessageHistoryStatus {
    Sent,
    Failed,
    Pending,
}

/// One delivery attempt as recorded by the backend.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MessageHistory {
    pub id: Uuid,
    pub message_id: Uuid,
    pub status: MessageHistoryStatus,
    pub sent_at: Option<DateTime<Utc>>,
    pub recipient_count: u64,
    pub error_message: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_entry_carries_error_message() {
        let json = r#"{
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "messageId": "650e8400-e29b-41d4-a716-446655440000",
            "status": "failed",
            "sentAt": null,
            "recipientCount": 0,
            "errorMessage": "monthly quota exceeded",
            "createdAt": "2025-01-10T09:00:00Z"
        }"#;
        let entry: MessageHistory = serde_json::from_str(json).expect("should decode");
        assert_eq!(entry.status, MessageHistoryStatus::Failed);
        assert_eq!(entry.error_message.as_deref(), Some("monthly quota exceeded"));
        assert!(entry.sent_at.is_none());
    }
}
