use crate::entities::reading::Reading;
use crate::entities::statistics::{CategoryCounts, StatisticsSummary};
use crate::services::insights::{categorize_blood_pressure, categorize_reading};

/// Calculate aggregate statistics over a set of readings.
///
/// An empty slice yields [`StatisticsSummary::default`]: zero counts and
/// zero averages, never NaN. The input order does not matter.
pub fn calculate_statistics(readings: &[Reading]) -> StatisticsSummary {
    if readings.is_empty() {
        return StatisticsSummary::default();
    }

    let mut systolic_sum: f64 = 0.0;
    let mut diastolic_sum: f64 = 0.0;
    let mut heart_rate_sum: f64 = 0.0;

    let mut max_systolic: i32 = i32::MIN;
    let mut max_diastolic: i32 = i32::MIN;
    let mut max_heart_rate: i32 = i32::MIN;
    let mut min_systolic: i32 = i32::MAX;
    let mut min_diastolic: i32 = i32::MAX;
    let mut min_heart_rate: i32 = i32::MAX;

    let mut category_counts = CategoryCounts::default();

    for reading in readings {
        let systolic = i32::from(reading.systolic);
        let diastolic = i32::from(reading.diastolic);
        let heart_rate = i32::from(reading.heart_rate);

        systolic_sum += f64::from(systolic);
        diastolic_sum += f64::from(diastolic);
        heart_rate_sum += f64::from(heart_rate);

        max_systolic = max_systolic.max(systolic);
        max_diastolic = max_diastolic.max(diastolic);
        max_heart_rate = max_heart_rate.max(heart_rate);
        min_systolic = min_systolic.min(systolic);
        min_diastolic = min_diastolic.min(diastolic);
        min_heart_rate = min_heart_rate.min(heart_rate);

        category_counts.record(categorize_reading(reading));
    }

    let count = readings.len() as f64;
    let average_systolic = systolic_sum / count;
    let average_diastolic = diastolic_sum / count;
    let average_heart_rate = heart_rate_sum / count;

    let systolic: Vec<f64> = readings.iter().map(|r| f64::from(r.systolic)).collect();
    let diastolic: Vec<f64> = readings.iter().map(|r| f64::from(r.diastolic)).collect();

    // Averages are truncated, so 129.9 still counts as elevated
    let average_category = Some(categorize_blood_pressure(
        average_systolic as i32,
        average_diastolic as i32,
    ));

    StatisticsSummary {
        total_count: readings.len(),
        average_systolic,
        average_diastolic,
        average_heart_rate,
        min_systolic,
        max_systolic,
        min_diastolic,
        max_diastolic,
        min_heart_rate,
        max_heart_rate,
        median_systolic: median(&systolic),
        median_diastolic: median(&diastolic),
        std_dev_systolic: std_dev(&systolic, average_systolic),
        std_dev_diastolic: std_dev(&diastolic, average_diastolic),
        category_counts,
        average_category,
    }
}

/// Arithmetic mean, `0.0` for an empty slice
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Median, averaging the two middle values for even lengths.
/// `0.0` for an empty slice.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Population standard deviation around a precomputed mean
fn std_dev(values: &[f64], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::category::BloodPressureCategory;
    use chrono::{Duration, TimeZone, Utc};
    use rand::Rng;

    /// Create a test reading `minutes` after a fixed start time
    fn create_test_reading(systolic: u16, diastolic: u16, heart_rate: u16, minutes: i64) -> Reading {
        Reading {
            id: format!("reading-{}", minutes),
            systolic,
            diastolic,
            heart_rate,
            measured_at: Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap() + Duration::minutes(minutes),
            tags: Default::default(),
            note: String::new(),
        }
    }

    #[test]
    fn test_calculate_statistics_empty() {
        let summary = calculate_statistics(&[]);

        assert_eq!(summary.total_count, 0);
        assert_eq!(summary.average_systolic, 0.0);
        assert_eq!(summary.average_diastolic, 0.0);
        assert_eq!(summary.average_heart_rate, 0.0);
        assert_eq!(summary.max_systolic, 0);
        assert_eq!(summary.category_counts.total(), 0);
        assert!(summary.average_category.is_none());
        assert!(!summary.median_systolic.is_nan());
    }

    #[test]
    fn test_calculate_statistics_one_per_category() {
        let readings = vec![
            create_test_reading(110, 70, 60, 0),
            create_test_reading(120, 75, 65, 1),
            create_test_reading(135, 75, 70, 2),
            create_test_reading(145, 75, 75, 3),
            create_test_reading(190, 75, 80, 4),
        ];

        let summary = calculate_statistics(&readings);

        assert_eq!(summary.total_count, 5);
        assert_eq!(summary.max_systolic, 190);
        assert_eq!(summary.min_systolic, 110);
        assert_eq!(summary.average_systolic, 140.0);
        assert_eq!(summary.average_heart_rate, 70.0);
        assert_eq!(summary.median_systolic, 135.0);
        assert_eq!(summary.min_heart_rate, 60);
        assert_eq!(summary.max_heart_rate, 80);
        for category in BloodPressureCategory::ALL {
            assert_eq!(summary.category_counts.get(category), 1, "{:?}", category);
        }
        assert_eq!(summary.average_category, Some(BloodPressureCategory::HypertensionStage2));
    }

    #[test]
    fn test_calculate_statistics_spread() {
        let readings = vec![
            create_test_reading(120, 80, 70, 0),
            create_test_reading(130, 85, 75, 1),
            create_test_reading(125, 82, 70, 2),
            create_test_reading(125, 81, 65, 3),
        ];

        let summary = calculate_statistics(&readings);

        assert_eq!(summary.median_systolic, 125.0);
        assert_eq!(summary.median_diastolic, 81.5);
        // Deviations -5, 5, 0, 0 around 125
        assert!((summary.std_dev_systolic - 12.5_f64.sqrt()).abs() < 1e-9);
        assert_eq!(summary.min_diastolic, 80);
        assert_eq!(summary.max_diastolic, 85);
    }

    #[test]
    fn test_average_category_truncates() {
        let readings = vec![
            create_test_reading(129, 70, 70, 0),
            create_test_reading(130, 70, 70, 1),
            create_test_reading(130, 70, 70, 2),
        ];

        let summary = calculate_statistics(&readings);
        assert!(summary.average_systolic > 129.0);
        assert_eq!(summary.average_category, Some(BloodPressureCategory::Elevated));
    }

    #[test]
    fn test_bucket_counts_sum_to_total() {
        let mut rng = rand::thread_rng();

        for size in 1..50 {
            let readings: Vec<Reading> = (0..size)
                .map(|i| {
                    let diastolic = rng.gen_range(40..130);
                    let systolic = rng.gen_range(diastolic + 1..=250);
                    create_test_reading(systolic, diastolic, rng.gen_range(40..140), i)
                })
                .collect();

            let summary = calculate_statistics(&readings);
            assert_eq!(summary.category_counts.total(), summary.total_count);
            assert!(summary.min_systolic <= summary.max_systolic);
            assert!(summary.std_dev_systolic >= 0.0);
        }
    }

    #[test]
    fn test_calculate_statistics_is_idempotent() {
        let readings = vec![
            create_test_reading(118, 76, 64, 0),
            create_test_reading(142, 91, 83, 1),
            create_test_reading(127, 79, 71, 2),
        ];

        assert_eq!(calculate_statistics(&readings), calculate_statistics(&readings));
    }

    #[test]
    fn test_median_and_mean_helpers() {
        assert_eq!(median(&[]), 0.0);
        assert_eq!(median(&[3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), 2.5);
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean(&[1.0, 2.0, 6.0]), 3.0);
    }
}
