use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::validation::{check_len, ok_or, ValidationError};
use crate::utils::constants::{BODY_MAX_LEN, NAME_MAX_LEN};

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Draft,
    Scheduled,
    Sent,
    Failed,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub image_url: Option<String>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub sent_at: Option<DateTime<Utc>>,
    pub status: CampaignStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateCampaignRequest {
    pub title: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<DateTime<Utc>>,
    pub status: CampaignStatus,
}

impl CreateCampaignRequest {
    pub fn draft(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            image_url: None,
            scheduled_at: None,
            status: CampaignStatus::Draft,
        }
    }

    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        check_len("title", &self.title, NAME_MAX_LEN, &mut errors);
        check_len("body", &self.body, BODY_MAX_LEN, &mut errors);
        // Only draft or scheduled campaigns can be created
        if !matches!(self.status, CampaignStatus::Draft | CampaignStatus::Scheduled) {
            errors.push(ValidationError::new(
                "status",
                "new campaigns must be draft or scheduled",
            ));
        }
        if self.status == CampaignStatus::Scheduled && self.scheduled_at.is_none() {
            errors.push(ValidationError::new(
                "scheduledAt",
                "scheduled campaigns need a delivery time",
            ));
        }
        ok_or(errors)
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCampaignRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CampaignStatus>,
}

impl UpdateCampaignRequest {
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        if let Some(title) = &self.title {
            check_len("title", title, NAME_MAX_LEN, &mut errors);
        }
        if let Some(body) = &self.body {
            check_len("body", body, BODY_MAX_LEN, &mut errors);
        }
        ok_or(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_shape_is_camel_case() {
        let json = r#"{
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "title": "Spring launch",
            "body": "New items in store!",
            "imageUrl": null,
            "scheduledAt": "2025-01-15T10:00:00Z",
            "sentAt": null,
            "status": "scheduled",
            "createdAt": "2025-01-10T09:00:00Z",
            "updatedAt": "2025-01-10T09:00:00Z"
        }"#;
        let campaign: Campaign = serde_json::from_str(json).expect("should decode");
        assert_eq!(campaign.status, CampaignStatus::Scheduled);
        assert!(campaign.sent_at.is_none());
        assert!(campaign.scheduled_at.is_some());
    }

    #[test]
    fn create_request_enforces_bounds() {
        assert!(CreateCampaignRequest::draft("Launch", "Hello followers").validate().is_ok());

        let errors = CreateCampaignRequest::draft("", "x".repeat(1001))
            .validate()
            .unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert!(fields.contains(&"title"));
        assert!(fields.contains(&"body"));
    }

    #[test]
    fn scheduled_without_time_is_rejected() {
        let mut req = CreateCampaignRequest::draft("Launch", "body");
        req.status = CampaignStatus::Scheduled;
        let errors = req.validate().unwrap_err();
        assert_eq!(errors[0].field, "scheduledAt");
    }

    #[test]
    fn update_request_skips_unset_fields_on_the_wire() {
        let req = UpdateCampaignRequest {
            title: Some("Renamed".to_string()),
            ..UpdateCampaignRequest::default()
        };
        let json = serde_json::to_string(&req).expect("should encode");
        assert_eq!(json, r#"{"title":"Renamed"}"#);
    }
}
