// Testing utilities for the domain layer
// This module is only available in unit tests or with the "mock" feature

use chrono::{DateTime, Duration, Utc};

use bp_tracker_data::models::reading::ReadingRecord;
use crate::entities::conversions::convert_to_data_record;
use crate::entities::reading::Reading;

// Re-export the data layer mock so callers need a single import
pub use bp_tracker_data::repository::tests::MockReadingRepository;

/// Reading with a fixed id and a resting heart rate of 72
pub fn reading_at(id: &str, systolic: u16, diastolic: u16, measured_at: DateTime<Utc>) -> Reading {
    Reading {
        id: id.to_string(),
        systolic,
        diastolic,
        heart_rate: 72,
        measured_at,
        tags: Default::default(),
        note: String::new(),
    }
}

/// One reading per day, the last one at `end`, in the order given.
/// Each entry is `(systolic, diastolic, heart_rate)`.
pub fn daily_readings(end: DateTime<Utc>, values: &[(u16, u16, u16)]) -> Vec<Reading> {
    let days = values.len() as i64;
    values
        .iter()
        .enumerate()
        .map(|(i, &(systolic, diastolic, heart_rate))| Reading {
            heart_rate,
            ..reading_at(
                &format!("day-{}", i),
                systolic,
                diastolic,
                end - Duration::days(days - 1 - i as i64),
            )
        })
        .collect()
}

/// Mock repository pre-loaded with the given readings
pub fn mock_repository(readings: &[Reading]) -> MockReadingRepository {
    let records: Vec<ReadingRecord> = readings.iter().map(convert_to_data_record).collect();
    MockReadingRepository::with_readings(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_daily_readings_end_on_last_day() {
        let end = Utc.with_ymd_and_hms(2024, 4, 10, 7, 30, 0).unwrap();
        let readings = daily_readings(end, &[(140, 90, 70), (130, 85, 68), (120, 80, 66)]);

        assert_eq!(readings.len(), 3);
        assert_eq!(readings[0].measured_at, end - Duration::days(2));
        assert_eq!(readings[2].measured_at, end);
        assert_eq!(readings[1].heart_rate, 68);
        assert_eq!(readings[0].id, "day-0");
    }
}
