use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

use crate::models::reading::{NewReadingRecord, ReadingRecord};
use super::errors::RepositoryError;
use super::readings::{parse_measured_at, select_in_range, ReadingRepositoryTrait};

/// In-memory repository for readings the host application has already loaded
#[derive(Debug, Clone)]
pub struct InMemoryReadingRepository {
    /// Readings keyed by id
    readings: Arc<Mutex<HashMap<String, ReadingRecord>>>,
}

impl Default for InMemoryReadingRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryReadingRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            readings: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Create a repository holding the given records.
    /// Records with unparsable timestamps are rejected up front.
    pub fn with_records(records: Vec<ReadingRecord>) -> Result<Self, RepositoryError> {
        let mut map = HashMap::with_capacity(records.len());
        for record in records {
            parse_measured_at(&record.measured_at)?;
            map.insert(record.id.clone(), record);
        }

        Ok(Self {
            readings: Arc::new(Mutex::new(map)),
        })
    }

    /// Number of stored readings
    pub fn len(&self) -> Result<usize, RepositoryError> {
        let store = self.readings.lock()?;
        Ok(store.len())
    }

    /// Whether the repository holds no readings
    pub fn is_empty(&self) -> Result<bool, RepositoryError> {
        Ok(self.len()? == 0)
    }
}

#[async_trait]
impl ReadingRepositoryTrait for InMemoryReadingRepository {
    async fn create(&self, request: NewReadingRecord) -> Result<ReadingRecord, RepositoryError> {
        parse_measured_at(&request.measured_at)
            .map_err(|e| RepositoryError::Validation(format!("invalid measured_at: {}", e)))?;

        let reading = request.into_record(Uuid::new_v4().to_string());

        let mut store = self.readings.lock()?;
        debug!("Storing reading in memory: {}", reading.id);
        store.insert(reading.id.clone(), reading.clone());

        Ok(reading)
    }

    async fn get_all(&self) -> Result<Vec<ReadingRecord>, RepositoryError> {
        let store = self.readings.lock()?;
        select_in_range(store.values(), None, None)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<ReadingRecord>, RepositoryError> {
        let store = self.readings.lock()?;
        Ok(store.get(&id.to_string()).cloned())
    }

    async fn get_in_range(
        &self,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Result<Vec<ReadingRecord>, RepositoryError> {
        let store = self.readings.lock()?;
        let readings = select_in_range(store.values(), start, end)?;
        debug!("Selected {} of {} readings for range", readings.len(), store.len());
        Ok(readings)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let mut store = self.readings.lock()?;
        match store.remove(&id.to_string()) {
            Some(_) => {
                debug!("Deleted reading {}", id);
                Ok(())
            }
            None => Err(RepositoryError::NotFound(id.to_string())),
        }
    }
}
