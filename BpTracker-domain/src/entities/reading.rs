use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Domain model for a blood pressure reading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    /// Unique identifier for the reading
    pub id: String,

    /// Systolic blood pressure (the higher number)
    pub systolic: u16,

    /// Diastolic blood pressure (the lower number)
    pub diastolic: u16,

    /// Heart rate in beats per minute
    pub heart_rate: u16,

    /// When the reading was taken
    pub measured_at: DateTime<Utc>,

    /// Free-form context labels
    #[serde(default)]
    pub tags: BTreeSet<String>,

    /// Free-form note
    #[serde(default)]
    pub note: String,
}

/// Request payload for recording a new reading
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateReadingRequest {
    /// Systolic blood pressure (the higher number)
    #[validate(range(min = 40, max = 300, message = "Systolic must be between 40 and 300"))]
    pub systolic: u16,

    /// Diastolic blood pressure (the lower number)
    #[validate(range(min = 20, max = 200, message = "Diastolic must be between 20 and 200"))]
    pub diastolic: u16,

    /// Heart rate in beats per minute
    #[validate(range(min = 20, max = 250, message = "Heart rate must be between 20 and 250"))]
    pub heart_rate: u16,

    /// When the reading was taken. Defaults to the current time if not provided.
    pub measured_at: Option<DateTime<Utc>>,

    /// Free-form context labels
    #[serde(default)]
    pub tags: BTreeSet<String>,

    /// Free-form note
    #[serde(default)]
    #[validate(length(max = 1000, message = "Notes cannot exceed 1000 characters"))]
    pub note: String,
}

impl CreateReadingRequest {
    /// Request with the three measured values and nothing else
    pub fn new(systolic: u16, diastolic: u16, heart_rate: u16) -> Self {
        Self {
            systolic,
            diastolic,
            heart_rate,
            measured_at: None,
            tags: BTreeSet::new(),
            note: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_validation() {
        assert!(CreateReadingRequest::new(120, 80, 70).validate().is_ok());

        let errors = CreateReadingRequest::new(350, 80, 70).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("systolic"));

        let errors = CreateReadingRequest::new(120, 80, 10).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("heart_rate"));
    }

    #[test]
    fn test_note_length_validation() {
        let request = CreateReadingRequest {
            note: "x".repeat(1001),
            ..CreateReadingRequest::new(120, 80, 70)
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("note"));
    }
}
