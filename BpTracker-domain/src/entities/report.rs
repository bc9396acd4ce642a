use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::locale::Locale;
use super::statistics::StatisticsSummary;
use super::trend::{PeriodAggregate, TrendAnalysis};
use super::window::AnalysisWindow;

/// Everything computed for one analysis window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Window the readings were selected from
    pub window: AnalysisWindow,

    /// Aggregate statistics over the readings in the window
    pub summary: StatisticsSummary,

    /// Daily means, oldest first
    pub periods: Vec<PeriodAggregate>,

    /// Trend verdicts over `periods`
    pub trend: TrendAnalysis,

    /// Recommendations in display order
    pub recommendations: Vec<String>,

    /// Locale the texts were rendered in
    pub locale: Locale,

    /// Timestamp of the analysis
    pub generated_at: DateTime<Utc>,
}
