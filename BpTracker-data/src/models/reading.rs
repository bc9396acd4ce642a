use serde::{Deserialize, Serialize};

/// Storage model for a blood pressure reading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingRecord {
    /// Unique identifier for the reading
    pub id: String,

    /// Systolic blood pressure (the higher number)
    pub systolic: u16,

    /// Diastolic blood pressure (the lower number)
    pub diastolic: u16,

    /// Heart rate in beats per minute
    pub heart_rate: u16,

    /// When the reading was taken, as RFC 3339 text
    pub measured_at: String,

    /// Free-form context labels (e.g. "morning", "after-exercise")
    #[serde(default)]
    pub tags: Vec<String>,

    /// Free-form note
    #[serde(default)]
    pub note: String,
}

/// Input data for storing a new reading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReadingRecord {
    /// Systolic blood pressure (the higher number)
    pub systolic: u16,

    /// Diastolic blood pressure (the lower number)
    pub diastolic: u16,

    /// Heart rate in beats per minute
    pub heart_rate: u16,

    /// When the reading was taken, as RFC 3339 text
    pub measured_at: String,

    /// Free-form context labels
    #[serde(default)]
    pub tags: Vec<String>,

    /// Free-form note
    #[serde(default)]
    pub note: String,
}

impl NewReadingRecord {
    /// Turn the request into a stored record under the given id
    pub fn into_record(self, id: String) -> ReadingRecord {
        ReadingRecord {
            id,
            systolic: self.systolic,
            diastolic: self.diastolic,
            heart_rate: self.heart_rate,
            measured_at: self.measured_at,
            tags: self.tags,
            note: self.note,
        }
    }
}
