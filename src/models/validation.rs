use serde::{Deserialize, Serialize};

/// A single client-side contract violation, attributed to a field.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Checks a required string field against its length bounds.
pub fn check_len(field: &str, value: &str, max: usize, errors: &mut Vec<ValidationError>) {
    if value.trim().is_empty() {
        errors.push(ValidationError::new(field, "must not be empty"));
    } else if value.chars().count() > max {
        errors.push(ValidationError::new(
            field,
            format!("must be at most {} characters", max),
        ));
    }
}

pub fn ok_or(errors: Vec<ValidationError>) -> Result<(), Vec<ValidationError>> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_overlong_values_are_rejected() {
        let mut errors = Vec::new();
        check_len("title", "", 10, &mut errors);
        check_len("title", "   ", 10, &mut errors);
        check_len("title", "12345678901", 10, &mut errors);
        check_len("title", "ok", 10, &mut errors);
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().all(|e| e.field == "title"));
    }

    #[test]
    fn length_is_counted_in_characters_not_bytes() {
        let mut errors = Vec::new();
        // 10 multibyte characters fit a limit of 10
        check_len("body", "あいうえおかきくけこ", 10, &mut errors);
        assert!(errors.is_empty());
    }
}
