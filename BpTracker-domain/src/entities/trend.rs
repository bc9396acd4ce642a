use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Direction a metric moved over the analysis window.
/// Lower blood pressure counts as improving.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Improving,
    Stable,
    Worsening,
}

/// Metric tracked per period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Systolic,
    Diastolic,
    HeartRate,
}

/// Mean values of one time bucket (one calendar day)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodAggregate {
    /// First day of the bucket
    pub period_start: NaiveDate,

    /// Number of readings in the bucket
    pub reading_count: usize,

    /// Mean systolic pressure in the bucket
    pub average_systolic: f64,

    /// Mean diastolic pressure in the bucket
    pub average_diastolic: f64,

    /// Mean heart rate in the bucket
    pub average_heart_rate: f64,
}

impl PeriodAggregate {
    /// Mean value of `metric` in this bucket
    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Systolic => self.average_systolic,
            Metric::Diastolic => self.average_diastolic,
            Metric::HeartRate => self.average_heart_rate,
        }
    }
}

/// How much a metric changed between the early and late part of the window
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricChange {
    /// Late-segment mean relative to early-segment mean, in percent
    pub percent_change: f64,

    /// Least-squares slope, in metric units per period
    pub slope: f64,
}

/// Canned advice chosen from the overall trend
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TrendSuggestion {
    InsufficientData,
    Improving,
    Stable,
    Worsening,
}

/// Trend verdicts for one analysis window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendAnalysis {
    pub systolic_trend: TrendDirection,
    pub diastolic_trend: TrendDirection,

    /// Informational only; does not feed the overall trend
    pub heart_rate_trend: TrendDirection,

    pub overall_trend: TrendDirection,

    pub systolic_change: MetricChange,
    pub diastolic_change: MetricChange,
    pub heart_rate_change: MetricChange,

    /// Which canned suggestion applies
    pub suggestion: TrendSuggestion,

    /// The suggestion rendered in the requested locale
    pub improvement_suggestion: String,
}
