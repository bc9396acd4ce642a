// Domain entities and value objects
pub mod category;
pub mod conversions;
pub mod locale;
pub mod reading;
pub mod report;
pub mod statistics;
pub mod trend;
pub mod window;

// Re-export common types for easier imports
pub use category::BloodPressureCategory;
pub use locale::Locale;
pub use reading::{CreateReadingRequest, Reading};
pub use report::AnalysisReport;
pub use statistics::{CategoryCounts, StatisticsSummary};
pub use trend::{Metric, MetricChange, PeriodAggregate, TrendAnalysis, TrendDirection, TrendSuggestion};
pub use window::AnalysisWindow;
