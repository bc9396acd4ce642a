use serde::{Deserialize, Serialize};

use crate::entities::category::BloodPressureCategory;
use crate::entities::locale::Locale;
use crate::entities::statistics::StatisticsSummary;
use crate::entities::trend::{TrendAnalysis, TrendSuggestion};
use crate::services::messages::recommendation_text;

/// Share of stage 2 readings above which treatment advice is given
pub const STAGE2_RATIO_THRESHOLD: f64 = 0.3;
/// Share of stage 1 readings above which lifestyle advice is given
pub const STAGE1_RATIO_THRESHOLD: f64 = 0.4;
/// Share of elevated readings above which prevention advice is given
pub const ELEVATED_RATIO_THRESHOLD: f64 = 0.5;
/// Average heart rate above which the pulse is flagged (bpm)
pub const HEART_RATE_HIGH: f64 = 100.0;
/// Average heart rate below which the pulse is flagged (bpm)
pub const HEART_RATE_LOW: f64 = 60.0;

/// A single piece of advice. Rendered to text by `services::messages`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    CrisisReadings,
    FrequentStage2,
    FrequentStage1,
    FrequentElevated,
    TrendImproving,
    TrendStable,
    TrendWorsening,
    KeepRecording,
    HeartRateHigh,
    HeartRateLow,
    LimitSodium,
    StayActive,
    MeasureRegularly,
}

impl Recommendation {
    /// Every recommendation in cascade order
    pub const ALL: [Recommendation; 13] = [
        Recommendation::CrisisReadings,
        Recommendation::FrequentStage2,
        Recommendation::FrequentStage1,
        Recommendation::FrequentElevated,
        Recommendation::TrendImproving,
        Recommendation::TrendStable,
        Recommendation::TrendWorsening,
        Recommendation::KeepRecording,
        Recommendation::HeartRateHigh,
        Recommendation::HeartRateLow,
        Recommendation::LimitSodium,
        Recommendation::StayActive,
        Recommendation::MeasureRegularly,
    ];

    /// Recommendations appended to every list
    pub const GENERAL: [Recommendation; 3] = [
        Recommendation::LimitSodium,
        Recommendation::StayActive,
        Recommendation::MeasureRegularly,
    ];
}

/// Select recommendations for a summary and its trend.
///
/// The cascade runs top to bottom and appends every match: crisis readings,
/// stage 2 share, stage 1 share, elevated share, one trend message, heart
/// rate range, then the general advice.
pub fn select_recommendations(summary: &StatisticsSummary, trend: &TrendAnalysis) -> Vec<Recommendation> {
    let counts = &summary.category_counts;
    let mut selected = Vec::new();

    if counts.get(BloodPressureCategory::HypertensiveCrisis) > 0 {
        selected.push(Recommendation::CrisisReadings);
    }
    if counts.ratio(BloodPressureCategory::HypertensionStage2) > STAGE2_RATIO_THRESHOLD {
        selected.push(Recommendation::FrequentStage2);
    }
    if counts.ratio(BloodPressureCategory::HypertensionStage1) > STAGE1_RATIO_THRESHOLD {
        selected.push(Recommendation::FrequentStage1);
    }
    if counts.ratio(BloodPressureCategory::Elevated) > ELEVATED_RATIO_THRESHOLD {
        selected.push(Recommendation::FrequentElevated);
    }

    selected.push(match trend.suggestion {
        TrendSuggestion::InsufficientData => Recommendation::KeepRecording,
        TrendSuggestion::Improving => Recommendation::TrendImproving,
        TrendSuggestion::Stable => Recommendation::TrendStable,
        TrendSuggestion::Worsening => Recommendation::TrendWorsening,
    });

    if !summary.is_empty() {
        if summary.average_heart_rate > HEART_RATE_HIGH {
            selected.push(Recommendation::HeartRateHigh);
        } else if summary.average_heart_rate < HEART_RATE_LOW {
            selected.push(Recommendation::HeartRateLow);
        }
    }

    selected.extend(Recommendation::GENERAL);
    selected
}

/// Recommendations rendered in `locale`, in cascade order
pub fn generate_recommendations(
    summary: &StatisticsSummary,
    trend: &TrendAnalysis,
    locale: Locale,
) -> Vec<String> {
    select_recommendations(summary, trend)
        .into_iter()
        .map(|r| recommendation_text(r, locale).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::statistics::CategoryCounts;
    use crate::entities::trend::{MetricChange, TrendDirection};

    fn summary_with(counts: CategoryCounts, average_heart_rate: f64) -> StatisticsSummary {
        StatisticsSummary {
            total_count: counts.total(),
            average_heart_rate,
            category_counts: counts,
            ..StatisticsSummary::default()
        }
    }

    fn trend_with(suggestion: TrendSuggestion) -> TrendAnalysis {
        let overall = match suggestion {
            TrendSuggestion::Improving => TrendDirection::Improving,
            TrendSuggestion::Worsening => TrendDirection::Worsening,
            _ => TrendDirection::Stable,
        };
        TrendAnalysis {
            systolic_trend: overall,
            diastolic_trend: overall,
            heart_rate_trend: TrendDirection::Stable,
            overall_trend: overall,
            systolic_change: MetricChange::default(),
            diastolic_change: MetricChange::default(),
            heart_rate_change: MetricChange::default(),
            suggestion,
            improvement_suggestion: String::new(),
        }
    }

    #[test]
    fn test_empty_summary_gets_trend_and_general_advice_only() {
        let selected = select_recommendations(
            &StatisticsSummary::default(),
            &trend_with(TrendSuggestion::InsufficientData),
        );

        assert_eq!(
            selected,
            vec![
                Recommendation::KeepRecording,
                Recommendation::LimitSodium,
                Recommendation::StayActive,
                Recommendation::MeasureRegularly,
            ]
        );
    }

    #[test]
    fn test_full_cascade_order() {
        // 10 readings: 1 crisis, 4 stage 2 (40%), 5 stage 1 (50%)
        let counts = CategoryCounts {
            hypertensive_crisis: 1,
            hypertension_stage2: 4,
            hypertension_stage1: 5,
            ..CategoryCounts::default()
        };

        let selected = select_recommendations(
            &summary_with(counts, 105.0),
            &trend_with(TrendSuggestion::Worsening),
        );

        assert_eq!(
            selected,
            vec![
                Recommendation::CrisisReadings,
                Recommendation::FrequentStage2,
                Recommendation::FrequentStage1,
                Recommendation::TrendWorsening,
                Recommendation::HeartRateHigh,
                Recommendation::LimitSodium,
                Recommendation::StayActive,
                Recommendation::MeasureRegularly,
            ]
        );
    }

    #[test]
    fn test_ratio_thresholds_are_exclusive() {
        // Exactly 30% stage 2 and exactly 50% elevated do not trigger
        let counts = CategoryCounts {
            hypertension_stage2: 3,
            elevated: 5,
            normal: 2,
            ..CategoryCounts::default()
        };

        let selected = select_recommendations(&summary_with(counts, 72.0), &trend_with(TrendSuggestion::Stable));

        assert!(!selected.contains(&Recommendation::FrequentStage2));
        assert!(!selected.contains(&Recommendation::FrequentElevated));
        assert!(selected.contains(&Recommendation::TrendStable));
    }

    #[test]
    fn test_elevated_majority_and_low_heart_rate() {
        let counts = CategoryCounts {
            elevated: 6,
            normal: 4,
            ..CategoryCounts::default()
        };

        let selected = select_recommendations(&summary_with(counts, 55.0), &trend_with(TrendSuggestion::Improving));

        assert_eq!(selected[0], Recommendation::FrequentElevated);
        assert_eq!(selected[1], Recommendation::TrendImproving);
        assert_eq!(selected[2], Recommendation::HeartRateLow);
        assert_eq!(selected.len(), 6);
    }

    #[test]
    fn test_generate_recommendations_renders_locale() {
        let summary = StatisticsSummary::default();
        let trend = trend_with(TrendSuggestion::InsufficientData);

        let english = generate_recommendations(&summary, &trend, Locale::English);
        let chinese = generate_recommendations(&summary, &trend, Locale::Chinese);

        assert_eq!(english.len(), chinese.len());
        assert_eq!(english[0], recommendation_text(Recommendation::KeepRecording, Locale::English));
        assert_ne!(english, chinese);
        assert_eq!(english, generate_recommendations(&summary, &trend, Locale::English));
    }
}
