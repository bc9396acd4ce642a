pub mod advice;
pub mod analysis;
pub mod dashboard;
pub mod insights;
pub mod messages;
pub mod statistics;
pub mod trend;

// Domain services
// The analytic functions are pure; `analysis` wires them to a repository.

// Re-export the analytic entry points
pub use advice::{generate_recommendations, select_recommendations, Recommendation};
pub use insights::{categorize_blood_pressure, categorize_reading, is_hypertensive_crisis};
pub use statistics::calculate_statistics;
pub use trend::{aggregate_daily, analyze_trend};

// Re-export service traits and factory functions
pub use analysis::{
    build_report, create_in_memory_analysis_service, AnalysisServiceError, ReadingAnalysisService,
    ReadingAnalysisServiceTrait,
};
pub use dashboard::{reduce, DashboardEvent, DashboardState};

// Re-export mock service factory functions when the mock feature is enabled
#[cfg(feature = "mock")]
pub use analysis::create_mock_analysis_service;
