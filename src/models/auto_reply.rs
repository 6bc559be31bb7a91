use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::validation::{check_len, ok_or, ValidationError};
use crate::utils::constants::{
    BODY_MAX_LEN, MAX_BULK_RULE_UPDATES, MAX_KEYWORDS, PRIORITY_MAX, PRIORITY_MIN,
    RULE_NAME_MAX_LEN,
};

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum AutoReplyRuleType {
    /// Fires when a user adds the account as a friend.
    Follow,
    /// Fires when an incoming message matches one of the rule's keywords.
    Keyword,
}

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Exact,
    Partial,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AutoReplyRule {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub rule_type: AutoReplyRuleType,
    pub name: String,
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
    #[serde(default)]
    pub match_type: Option<MatchType>,
    pub reply_message: String,
    pub is_enabled: bool,
    pub priority: u8,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateAutoReplyRuleRequest {
    #[serde(rename = "type")]
    pub rule_type: AutoReplyRuleType,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_type: Option<MatchType>,
    pub reply_message: String,
    pub is_enabled: bool,
    pub priority: u8,
}

impl CreateAutoReplyRuleRequest {
    pub fn follow(name: impl Into<String>, reply_message: impl Into<String>) -> Self {
        Self {
            rule_type: AutoReplyRuleType::Follow,
            name: name.into(),
            keywords: None,
            match_type: None,
            reply_message: reply_message.into(),
            is_enabled: true,
            priority: PRIORITY_MIN,
        }
    }

    pub fn keyword(
        name: impl Into<String>,
        keywords: Vec<String>,
        match_type: MatchType,
        reply_message: impl Into<String>,
    ) -> Self {
        Self {
            rule_type: AutoReplyRuleType::Keyword,
            name: name.into(),
            keywords: Some(keywords),
            match_type: Some(match_type),
            reply_message: reply_message.into(),
            is_enabled: true,
            priority: PRIORITY_MIN,
        }
    }

    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        check_len("name", &self.name, RULE_NAME_MAX_LEN, &mut errors);
        check_len("replyMessage", &self.reply_message, BODY_MAX_LEN, &mut errors);

        if !(PRIORITY_MIN..=PRIORITY_MAX).contains(&self.priority) {
            errors.push(ValidationError::new(
                "priority",
                format!("must be between {} and {}", PRIORITY_MIN, PRIORITY_MAX),
            ));
        }

        match self.rule_type {
            AutoReplyRuleType::Keyword => {
                match &self.keywords {
                    None => {
                        errors.push(ValidationError::new("keywords", "keyword rules need keywords"))
                    }
                    Some(keywords) => {
                        if keywords.is_empty() {
                            errors.push(ValidationError::new(
                                "keywords",
                                "keyword rules need at least one keyword",
                            ));
                        }
                        if keywords.len() > MAX_KEYWORDS {
                            errors.push(ValidationError::new(
                                "keywords",
                                format!("at most {} keywords are allowed", MAX_KEYWORDS),
                            ));
                        }
                        if keywords.iter().any(|k| k.trim().is_empty()) {
                            errors.push(ValidationError::new("keywords", "keywords must not be empty"));
                        }
                    }
                }
                if self.match_type.is_none() {
                    errors.push(ValidationError::new("matchType", "keyword rules need a match type"));
                }
            }
            AutoReplyRuleType::Follow => {
                // Keyword fields are meaningless on follow rules
                if self.keywords.is_some() || self.match_type.is_some() {
                    errors.push(ValidationError::new(
                        "keywords",
                        "follow rules must not carry keyword settings",
                    ));
                }
            }
        }

        ok_or(errors)
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RuleEnabledUpdate {
    pub id: Uuid,
    pub is_enabled: bool,
}

/// Toggles several rules in one round-trip; the backend caps the batch.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct BulkUpdateRulesRequest {
    pub updates: Vec<RuleEnabledUpdate>,
}

impl BulkUpdateRulesRequest {
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        if self.updates.is_empty() {
            errors.push(ValidationError::new("updates", "at least one update is required"));
        }
        if self.updates.len() > MAX_BULK_RULE_UPDATES {
            errors.push(ValidationError::new(
                "updates",
                format!("at most {} updates per request", MAX_BULK_RULE_UPDATES),
            ));
        }
        ok_or(errors)
    }
}
