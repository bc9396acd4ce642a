use chrono::{DateTime, Utc};
use uuid::Uuid;

use bp_tracker_data::models::reading::{NewReadingRecord, ReadingRecord};
use crate::entities::reading::{CreateReadingRequest, Reading};

/// Conversion functions between domain entities and data records.
/// They follow the pattern convert_to_[target_layer]_[model_name].

/// Helper function to safely parse a string ID to UUID
///
/// When an invalid UUID is provided, it returns a descriptive error message.
pub fn parse_string_to_uuid(id: &str) -> Result<Uuid, String> {
    Uuid::parse_str(id).map_err(|_| format!("Invalid UUID format: {}", id))
}

/// Convert from data record to domain entity.
///
/// Fails when the stored timestamp is not valid RFC 3339.
pub fn convert_to_domain_reading(record: ReadingRecord) -> Result<Reading, String> {
    let measured_at = DateTime::parse_from_rfc3339(&record.measured_at)
        .map_err(|e| format!("Invalid timestamp '{}' on reading {}: {}", record.measured_at, record.id, e))?
        .with_timezone(&Utc);

    Ok(Reading {
        id: record.id,
        systolic: record.systolic,
        diastolic: record.diastolic,
        heart_rate: record.heart_rate,
        measured_at,
        tags: record.tags.into_iter().collect(),
        note: record.note,
    })
}

/// Convert a validated create request into the record the repository stores
pub fn convert_to_data_new_record(
    request: &CreateReadingRequest,
    measured_at: DateTime<Utc>,
) -> NewReadingRecord {
    NewReadingRecord {
        systolic: request.systolic,
        diastolic: request.diastolic,
        heart_rate: request.heart_rate,
        measured_at: measured_at.to_rfc3339(),
        tags: request.tags.iter().cloned().collect(),
        note: request.note.clone(),
    }
}

/// Convert from domain entity back to a data record
pub fn convert_to_data_record(reading: &Reading) -> ReadingRecord {
    ReadingRecord {
        id: reading.id.clone(),
        systolic: reading.systolic,
        diastolic: reading.diastolic,
        heart_rate: reading.heart_rate,
        measured_at: reading.measured_at.to_rfc3339(),
        tags: reading.tags.iter().cloned().collect(),
        note: reading.note.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_string_to_uuid() {
        assert!(parse_string_to_uuid("6c1f8f3a-3b7e-4b61-9c55-2a86b1f0a9d4").is_ok());

        let err = parse_string_to_uuid("reading-1").unwrap_err();
        assert!(err.contains("Invalid UUID format"));
    }

    #[test]
    fn test_convert_to_domain_reading_normalizes_timezone_and_tags() {
        let record = ReadingRecord {
            id: "r1".to_string(),
            systolic: 132,
            diastolic: 84,
            heart_rate: 71,
            measured_at: "2024-06-01T09:30:00+02:00".to_string(),
            tags: vec!["morning".to_string(), "coffee".to_string(), "morning".to_string()],
            note: "felt fine".to_string(),
        };

        let reading = convert_to_domain_reading(record).unwrap();
        assert_eq!(reading.measured_at, Utc.with_ymd_and_hms(2024, 6, 1, 7, 30, 0).unwrap());
        assert_eq!(reading.tags.len(), 2);
        assert_eq!(reading.tags.iter().next().map(String::as_str), Some("coffee"));
    }

    #[test]
    fn test_convert_to_domain_reading_rejects_bad_timestamp() {
        let record = ReadingRecord {
            id: "r2".to_string(),
            systolic: 120,
            diastolic: 80,
            heart_rate: 60,
            measured_at: "June 1st".to_string(),
            tags: Vec::new(),
            note: String::new(),
        };

        let err = convert_to_domain_reading(record).unwrap_err();
        assert!(err.contains("r2"));
    }

    #[test]
    fn test_record_conversion_preserves_reading() {
        let reading = Reading {
            id: Uuid::new_v4().to_string(),
            systolic: 141,
            diastolic: 92,
            heart_rate: 88,
            measured_at: Utc.with_ymd_and_hms(2024, 6, 2, 20, 15, 0).unwrap(),
            tags: ["evening".to_string()].into_iter().collect(),
            note: String::new(),
        };

        let back = convert_to_domain_reading(convert_to_data_record(&reading)).unwrap();
        assert_eq!(back, reading);
    }
}
