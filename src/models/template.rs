use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::validation::{check_len, ok_or, ValidationError};
use crate::utils::constants::{BODY_MAX_LEN, NAME_MAX_LEN};

/// Reusable message body a campaign can start from.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MessageTemplate {
    pub id: Uuid,
    pub name: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CreateTemplateRequest {
    pub name: String,
    pub body: String,
}

impl CreateTemplateRequest {
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        check_len("name", &self.name, NAME_MAX_LEN, &mut errors);
        check_len("body", &self.body, BODY_MAX_LEN, &mut errors);
        ok_or(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_bounds_match_campaign_bounds() {
        let ok = CreateTemplateRequest {
            name: "Welcome".to_string(),
            body: "Thanks for following us!".to_string(),
        };
        assert!(ok.validate().is_ok());

        let bad = CreateTemplateRequest {
            name: "n".repeat(101),
            body: String::new(),
        };
        assert_eq!(bad.validate().unwrap_err().len(), 2);
    }
}
