use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{debug, error, info, instrument, warn};
use validator::Validate;

use bp_tracker_data::repository::{InMemoryReadingRepository, ReadingRepositoryTrait, RepositoryError};
use crate::config::AnalysisConfig;
use crate::entities::conversions;
use crate::entities::locale::Locale;
use crate::entities::reading::{CreateReadingRequest, Reading};
use crate::entities::report::AnalysisReport;
use crate::entities::window::AnalysisWindow;
use crate::services::advice::generate_recommendations;
use crate::services::statistics::calculate_statistics;
use crate::services::trend::{aggregate_daily, analyze_trend};

/// Analysis service errors
#[derive(Debug, Error)]
pub enum AnalysisServiceError {
    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Not found error
    #[error("Reading not found: {0}")]
    NotFound(String),

    /// Repository error
    #[error("Repository error: {0}")]
    RepositoryError(String),

    /// The requested window cannot be analyzed
    #[error("Invalid analysis window: {0}")]
    InvalidWindow(String),

    /// A stored record could not be turned into a reading
    #[error("Conversion error: {0}")]
    ConversionError(String),
}

/// Build the full report for readings that already belong to `window`.
///
/// Pure: the same inputs always give the same report.
pub fn build_report(
    readings: &[Reading],
    window: AnalysisWindow,
    locale: Locale,
    generated_at: DateTime<Utc>,
) -> AnalysisReport {
    let summary = calculate_statistics(readings);
    let periods = aggregate_daily(readings);
    let trend = analyze_trend(&periods, locale);
    let recommendations = generate_recommendations(&summary, &trend, locale);

    AnalysisReport {
        window,
        summary,
        periods,
        trend,
        recommendations,
        locale,
        generated_at,
    }
}

/// Trait for reading analysis operations
#[async_trait]
pub trait ReadingAnalysisServiceTrait {
    /// Validate a create reading request
    fn validate_create_request(&self, request: &CreateReadingRequest) -> Result<(), AnalysisServiceError>;

    /// Validate and store a new reading
    async fn record_reading(&self, request: CreateReadingRequest) -> Result<Reading, AnalysisServiceError>;

    /// Get a reading by ID
    async fn get_reading(&self, id: &str) -> Result<Reading, AnalysisServiceError>;

    /// Delete a reading by ID
    async fn remove_reading(&self, id: &str) -> Result<(), AnalysisServiceError>;

    /// Readings inside the window, oldest first
    async fn get_readings_in_window(&self, window: AnalysisWindow) -> Result<Vec<Reading>, AnalysisServiceError>;

    /// Analyze the readings inside the window
    async fn analyze_window(
        &self,
        window: AnalysisWindow,
        locale: Locale,
    ) -> Result<AnalysisReport, AnalysisServiceError>;

    /// Analyze the last `days` days. `None` picks the configured defaults;
    /// the day count is capped at the configured maximum.
    async fn analyze_last_days(
        &self,
        days: Option<u32>,
        locale: Option<Locale>,
    ) -> Result<AnalysisReport, AnalysisServiceError>;
}

/// Reading analysis service over any reading repository
pub struct ReadingAnalysisService<R: ReadingRepositoryTrait> {
    repository: R,
    config: AnalysisConfig,
}

impl<R: ReadingRepositoryTrait> ReadingAnalysisService<R> {
    /// Create a new service with default configuration
    pub fn new(repository: R) -> Self {
        Self::with_config(repository, AnalysisConfig::default())
    }

    /// Create a new service with explicit configuration
    pub fn with_config(repository: R, config: AnalysisConfig) -> Self {
        Self { repository, config }
    }

    /// Configuration in use
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Map repository errors to service errors
    fn map_repo_error(&self, err: RepositoryError) -> AnalysisServiceError {
        match err {
            RepositoryError::NotFound(msg) => AnalysisServiceError::NotFound(msg),
            RepositoryError::Validation(msg) => AnalysisServiceError::ValidationError(msg),
            _ => {
                error!("Repository failure: {}", err);
                AnalysisServiceError::RepositoryError(err.to_string())
            }
        }
    }
}

#[async_trait]
impl<R: ReadingRepositoryTrait + Send + Sync> ReadingAnalysisServiceTrait for ReadingAnalysisService<R> {
    fn validate_create_request(&self, request: &CreateReadingRequest) -> Result<(), AnalysisServiceError> {
        // Use the validator crate's validation
        if let Err(validation_errors) = request.validate() {
            let mut fields: Vec<(&str, String)> = validation_errors
                .field_errors()
                .iter()
                .map(|(field, errors)| {
                    let error_msgs: Vec<String> = errors
                        .iter()
                        .map(|err| match &err.message {
                            Some(msg) => msg.to_string(),
                            None => format!("Invalid {}", field),
                        })
                        .collect();
                    (*field, error_msgs.join(", "))
                })
                .collect();
            fields.sort();

            let error_message = fields
                .into_iter()
                .map(|(field, msgs)| format!("{}: {}", field, msgs))
                .collect::<Vec<String>>()
                .join("; ");

            warn!("Rejected reading: {}", error_message);
            return Err(AnalysisServiceError::ValidationError(error_message));
        }

        if request.systolic <= request.diastolic {
            return Err(AnalysisServiceError::ValidationError(
                "Systolic pressure must be greater than diastolic pressure".to_string(),
            ));
        }

        if let Some(measured_at) = request.measured_at {
            if measured_at > Utc::now() {
                return Err(AnalysisServiceError::ValidationError(
                    "Measurement time cannot be in the future".to_string(),
                ));
            }
        }

        Ok(())
    }

    #[instrument(skip(self, request))]
    async fn record_reading(&self, request: CreateReadingRequest) -> Result<Reading, AnalysisServiceError> {
        self.validate_create_request(&request)?;

        let measured_at = request.measured_at.unwrap_or_else(Utc::now);
        let record = conversions::convert_to_data_new_record(&request, measured_at);

        let stored = self.repository.create(record)
            .await
            .map_err(|e| self.map_repo_error(e))?;

        let reading = conversions::convert_to_domain_reading(stored)
            .map_err(AnalysisServiceError::ConversionError)?;

        info!("Recorded reading {} ({}/{})", reading.id, reading.systolic, reading.diastolic);
        Ok(reading)
    }

    #[instrument(skip(self))]
    async fn get_reading(&self, id: &str) -> Result<Reading, AnalysisServiceError> {
        let id_uuid = conversions::parse_string_to_uuid(id)
            .map_err(AnalysisServiceError::ValidationError)?;

        let record = self.repository.get_by_id(id_uuid)
            .await
            .map_err(|e| self.map_repo_error(e))?
            .ok_or_else(|| AnalysisServiceError::NotFound(
                format!("Reading with ID {} not found", id)
            ))?;

        conversions::convert_to_domain_reading(record).map_err(AnalysisServiceError::ConversionError)
    }

    #[instrument(skip(self))]
    async fn remove_reading(&self, id: &str) -> Result<(), AnalysisServiceError> {
        let id_uuid = conversions::parse_string_to_uuid(id)
            .map_err(AnalysisServiceError::ValidationError)?;

        self.repository.delete(id_uuid)
            .await
            .map_err(|e| self.map_repo_error(e))?;

        info!("Removed reading {}", id);
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_readings_in_window(&self, window: AnalysisWindow) -> Result<Vec<Reading>, AnalysisServiceError> {
        let records = self.repository.get_in_range(Some(window.start), Some(window.end))
            .await
            .map_err(|e| self.map_repo_error(e))?;

        records
            .into_iter()
            .map(|record| conversions::convert_to_domain_reading(record).map_err(AnalysisServiceError::ConversionError))
            .collect()
    }

    #[instrument(skip(self))]
    async fn analyze_window(
        &self,
        window: AnalysisWindow,
        locale: Locale,
    ) -> Result<AnalysisReport, AnalysisServiceError> {
        let readings = self.get_readings_in_window(window).await?;
        debug!("Analyzing {} readings", readings.len());

        let report = build_report(&readings, window, locale, Utc::now());

        info!(
            "Generated report over {} readings, {} periods, overall trend {:?}",
            report.summary.total_count,
            report.periods.len(),
            report.trend.overall_trend
        );
        Ok(report)
    }

    #[instrument(skip(self))]
    async fn analyze_last_days(
        &self,
        days: Option<u32>,
        locale: Option<Locale>,
    ) -> Result<AnalysisReport, AnalysisServiceError> {
        if days == Some(0) {
            return Err(AnalysisServiceError::InvalidWindow(
                "Window must cover at least one day".to_string(),
            ));
        }

        let days = self.config.window_days(days);
        let locale = locale.unwrap_or(self.config.default_locale);
        let window = AnalysisWindow::last_days(days, Utc::now());

        self.analyze_window(window, locale).await
    }
}

/// Create an analysis service backed by an empty in-memory repository
pub fn create_in_memory_analysis_service(config: AnalysisConfig) -> ReadingAnalysisService<InMemoryReadingRepository> {
    ReadingAnalysisService::with_config(InMemoryReadingRepository::new(), config)
}

/// Create an analysis service over a fixed set of records for testing.
/// This function is only available when the mock feature is enabled.
#[cfg(feature = "mock")]
pub fn create_mock_analysis_service(
    records: Vec<bp_tracker_data::models::ReadingRecord>,
) -> impl ReadingAnalysisServiceTrait + Send + Sync {
    ReadingAnalysisService::new(bp_tracker_data::repository::tests::MockReadingRepository::with_readings(records))
}
