use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::reading::{NewReadingRecord, ReadingRecord};
use super::errors::RepositoryError;

/// Repository trait for blood pressure readings.
///
/// The host application owns persistence; implementations only have to hand
/// back materialized records. Range queries return records oldest first.
#[async_trait]
pub trait ReadingRepositoryTrait {
    /// Store a new reading and return it with its generated id
    async fn create(&self, request: NewReadingRecord) -> Result<ReadingRecord, RepositoryError>;

    /// Get all readings, oldest first
    async fn get_all(&self) -> Result<Vec<ReadingRecord>, RepositoryError>;

    /// Get a reading by ID
    async fn get_by_id(&self, id: Uuid) -> Result<Option<ReadingRecord>, RepositoryError>;

    /// Get readings measured within `[start, end]`, oldest first.
    /// A missing bound leaves that side of the range open.
    async fn get_in_range(
        &self,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Result<Vec<ReadingRecord>, RepositoryError>;

    /// Delete a reading by ID
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}

/// Parse the RFC 3339 timestamp of a stored record
pub(crate) fn parse_measured_at(value: &str) -> Result<DateTime<Utc>, RepositoryError> {
    Ok(DateTime::parse_from_rfc3339(value)?.with_timezone(&Utc))
}

/// Keep the records inside `[start, end]` and sort them oldest first
pub(crate) fn select_in_range<'a, I>(
    records: I,
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
) -> Result<Vec<ReadingRecord>, RepositoryError>
where
    I: IntoIterator<Item = &'a ReadingRecord>,
{
    let mut selected = Vec::new();
    for record in records {
        let measured_at = parse_measured_at(&record.measured_at)?;

        if start.map_or(false, |start| measured_at < start) {
            continue;
        }
        if end.map_or(false, |end| measured_at > end) {
            continue;
        }

        selected.push((measured_at, record.clone()));
    }

    selected.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.id.cmp(&b.1.id)));
    Ok(selected.into_iter().map(|(_, record)| record).collect())
}

/// Mock reading repository for testing
#[cfg(any(test, feature = "mock"))]
pub mod tests {
    use super::*;

    /// Mock implementation of ReadingRepositoryTrait for testing.
    /// It serves a fixed set of readings and never mutates them.
    pub struct MockReadingRepository {
        readings: Vec<ReadingRecord>,
    }

    impl Default for MockReadingRepository {
        fn default() -> Self {
            Self::new()
        }
    }

    impl MockReadingRepository {
        /// Create a new empty mock repository
        pub fn new() -> Self {
            Self { readings: Vec::new() }
        }

        /// Create a mock repository with predefined readings
        pub fn with_readings(readings: Vec<ReadingRecord>) -> Self {
            Self { readings }
        }
    }

    #[async_trait]
    impl ReadingRepositoryTrait for MockReadingRepository {
        async fn create(&self, request: NewReadingRecord) -> Result<ReadingRecord, RepositoryError> {
            parse_measured_at(&request.measured_at)?;
            Ok(request.into_record(Uuid::new_v4().to_string()))
        }

        async fn get_all(&self) -> Result<Vec<ReadingRecord>, RepositoryError> {
            select_in_range(&self.readings, None, None)
        }

        async fn get_by_id(&self, id: Uuid) -> Result<Option<ReadingRecord>, RepositoryError> {
            let reading = self.readings.iter()
                .find(|r| r.id == id.to_string())
                .cloned();

            Ok(reading)
        }

        async fn get_in_range(
            &self,
            start: Option<DateTime<Utc>>,
            end: Option<DateTime<Utc>>,
        ) -> Result<Vec<ReadingRecord>, RepositoryError> {
            select_in_range(&self.readings, start, end)
        }

        async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
            if self.readings.iter().any(|r| r.id == id.to_string()) {
                Ok(())
            } else {
                Err(RepositoryError::NotFound(id.to_string()))
            }
        }
    }

    #[cfg(test)]
    fn record(id: &str, measured_at: &str) -> ReadingRecord {
        ReadingRecord {
            id: id.to_string(),
            systolic: 120,
            diastolic: 78,
            heart_rate: 66,
            measured_at: measured_at.to_string(),
            tags: Vec::new(),
            note: String::new(),
        }
    }

    #[test]
    fn test_select_in_range_sorts_oldest_first() {
        let records = vec![
            record("c", "2024-03-03T08:00:00+00:00"),
            record("a", "2024-03-01T08:00:00+00:00"),
            record("b", "2024-03-02T08:00:00+01:00"),
        ];

        let selected = select_in_range(&records, None, None).unwrap();
        let ids: Vec<&str> = selected.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_select_in_range_bounds_are_inclusive() {
        let records = vec![
            record("a", "2024-03-01T08:00:00+00:00"),
            record("b", "2024-03-02T08:00:00+00:00"),
            record("c", "2024-03-03T08:00:00+00:00"),
        ];
        let start = parse_measured_at("2024-03-02T08:00:00Z").unwrap();
        let end = parse_measured_at("2024-03-03T08:00:00Z").unwrap();

        let selected = select_in_range(&records, Some(start), Some(end)).unwrap();
        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0].id, "b");
        assert_eq!(selected[1].id, "c");
    }

    #[test]
    fn test_select_in_range_rejects_bad_timestamp() {
        let records = vec![record("a", "03/01/2024 08:00")];
        let result = select_in_range(&records, None, None);
        assert!(matches!(result, Err(RepositoryError::DateParse(_))));
    }

    #[cfg(test)]
    #[tokio::test]
    async fn test_mock_delete_unknown_reading() {
        let repo = MockReadingRepository::new();
        let result = repo.delete(Uuid::new_v4()).await;
        assert!(matches!(result, Err(RepositoryError::NotFound(_))));
    }
}
