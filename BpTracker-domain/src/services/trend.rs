use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;

use crate::entities::locale::Locale;
use crate::entities::reading::Reading;
use crate::entities::trend::{
    Metric, MetricChange, PeriodAggregate, TrendAnalysis, TrendDirection, TrendSuggestion,
};
use crate::services::messages::trend_suggestion_text;
use crate::services::statistics::mean;

/// Percent change beyond which a metric counts as moving
pub const TREND_THRESHOLD_PERCENT: f64 = 3.0;

/// Fewest periods a trend is computed from
pub const MIN_TREND_PERIODS: usize = 2;

/// Bucket readings by UTC calendar day, oldest day first
pub fn aggregate_daily(readings: &[Reading]) -> Vec<PeriodAggregate> {
    let mut buckets: BTreeMap<NaiveDate, Vec<&Reading>> = BTreeMap::new();
    for reading in readings {
        buckets.entry(reading.measured_at.date_naive()).or_default().push(reading);
    }

    buckets
        .into_iter()
        .map(|(day, bucket)| {
            let count = bucket.len() as f64;
            PeriodAggregate {
                period_start: day,
                reading_count: bucket.len(),
                average_systolic: bucket.iter().map(|r| f64::from(r.systolic)).sum::<f64>() / count,
                average_diastolic: bucket.iter().map(|r| f64::from(r.diastolic)).sum::<f64>() / count,
                average_heart_rate: bucket.iter().map(|r| f64::from(r.heart_rate)).sum::<f64>() / count,
            }
        })
        .collect()
}

/// Analyze trends over chronologically ordered periods.
///
/// With fewer than two periods every trend is stable and the suggestion
/// asks for more data.
pub fn analyze_trend(periods: &[PeriodAggregate], locale: Locale) -> TrendAnalysis {
    if periods.len() < MIN_TREND_PERIODS {
        debug!("Only {} period(s) available, trend is undetermined", periods.len());
        return TrendAnalysis {
            systolic_trend: TrendDirection::Stable,
            diastolic_trend: TrendDirection::Stable,
            heart_rate_trend: TrendDirection::Stable,
            overall_trend: TrendDirection::Stable,
            systolic_change: MetricChange::default(),
            diastolic_change: MetricChange::default(),
            heart_rate_change: MetricChange::default(),
            suggestion: TrendSuggestion::InsufficientData,
            improvement_suggestion: trend_suggestion_text(TrendSuggestion::InsufficientData, locale).to_string(),
        };
    }

    let systolic_change = metric_change(periods, Metric::Systolic);
    let diastolic_change = metric_change(periods, Metric::Diastolic);
    let heart_rate_change = metric_change(periods, Metric::HeartRate);

    let systolic_trend = classify_change(systolic_change.percent_change);
    let diastolic_trend = classify_change(diastolic_change.percent_change);
    let heart_rate_trend = classify_change(heart_rate_change.percent_change);
    let overall_trend = overall_trend(systolic_trend, diastolic_trend);

    let suggestion = match overall_trend {
        TrendDirection::Improving => TrendSuggestion::Improving,
        TrendDirection::Stable => TrendSuggestion::Stable,
        TrendDirection::Worsening => TrendSuggestion::Worsening,
    };

    debug!(
        systolic = systolic_change.percent_change,
        diastolic = diastolic_change.percent_change,
        heart_rate = heart_rate_change.percent_change,
        "Trend over {} periods: {:?}",
        periods.len(),
        overall_trend
    );

    TrendAnalysis {
        systolic_trend,
        diastolic_trend,
        heart_rate_trend,
        overall_trend,
        systolic_change,
        diastolic_change,
        heart_rate_change,
        suggestion,
        improvement_suggestion: trend_suggestion_text(suggestion, locale).to_string(),
    }
}

/// Percent change and slope of one metric across the periods
pub fn metric_change(periods: &[PeriodAggregate], metric: Metric) -> MetricChange {
    let values: Vec<f64> = periods.iter().map(|p| p.value(metric)).collect();
    MetricChange {
        percent_change: segment_percent_change(&values),
        slope: linear_slope(&values),
    }
}

/// Compare the mean of the first third of the series with the mean of the
/// last third, in percent of the early mean.
///
/// Each third holds at least one value, so short series compare their first
/// and last value. A zero early mean or fewer than two values yield `0.0`.
pub fn segment_percent_change(values: &[f64]) -> f64 {
    if values.len() < MIN_TREND_PERIODS {
        return 0.0;
    }

    let segment = (values.len() / 3).max(1);
    let early = mean(&values[..segment]);
    let late = mean(&values[values.len() - segment..]);

    if early == 0.0 {
        return 0.0;
    }

    (late - early) / early * 100.0
}

/// Map a percent change onto a direction; falling pressure is improving
pub fn classify_change(percent_change: f64) -> TrendDirection {
    if percent_change < -TREND_THRESHOLD_PERCENT {
        TrendDirection::Improving
    } else if percent_change > TREND_THRESHOLD_PERCENT {
        TrendDirection::Worsening
    } else {
        TrendDirection::Stable
    }
}

/// Combine the pressure trends. Heart rate does not take part.
pub fn overall_trend(systolic: TrendDirection, diastolic: TrendDirection) -> TrendDirection {
    match (systolic, diastolic) {
        (TrendDirection::Worsening, _) | (_, TrendDirection::Worsening) => TrendDirection::Worsening,
        (TrendDirection::Improving, TrendDirection::Improving) => TrendDirection::Improving,
        _ => TrendDirection::Stable,
    }
}

/// Least-squares slope of the series against its index, `0.0` for fewer
/// than two values
pub fn linear_slope(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }

    let n = values.len() as f64;
    let mean_x = (n - 1.0) / 2.0;
    let mean_y = mean(values);

    let mut covariance = 0.0;
    let mut variance = 0.0;
    for (i, y) in values.iter().enumerate() {
        let dx = i as f64 - mean_x;
        covariance += dx * (y - mean_y);
        variance += dx * dx;
    }

    covariance / variance
}
