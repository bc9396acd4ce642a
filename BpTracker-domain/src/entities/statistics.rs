use serde::{Deserialize, Serialize};

use super::category::BloodPressureCategory;

/// Number of readings that fell into each category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts {
    pub normal: usize,
    pub elevated: usize,
    pub hypertension_stage1: usize,
    pub hypertension_stage2: usize,
    pub hypertensive_crisis: usize,
}

impl CategoryCounts {
    /// Count one more reading in `category`
    pub fn record(&mut self, category: BloodPressureCategory) {
        *self.slot_mut(category) += 1;
    }

    /// Readings counted in `category`
    pub fn get(&self, category: BloodPressureCategory) -> usize {
        match category {
            BloodPressureCategory::Normal => self.normal,
            BloodPressureCategory::Elevated => self.elevated,
            BloodPressureCategory::HypertensionStage1 => self.hypertension_stage1,
            BloodPressureCategory::HypertensionStage2 => self.hypertension_stage2,
            BloodPressureCategory::HypertensiveCrisis => self.hypertensive_crisis,
        }
    }

    /// Sum over all categories
    pub fn total(&self) -> usize {
        BloodPressureCategory::ALL.iter().map(|c| self.get(*c)).sum()
    }

    /// Share of readings in `category`, `0.0` when nothing was counted
    pub fn ratio(&self, category: BloodPressureCategory) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.get(category) as f64 / total as f64
        }
    }

    /// `(category, count)` pairs, least severe first
    pub fn iter(&self) -> impl Iterator<Item = (BloodPressureCategory, usize)> + '_ {
        BloodPressureCategory::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    fn slot_mut(&mut self, category: BloodPressureCategory) -> &mut usize {
        match category {
            BloodPressureCategory::Normal => &mut self.normal,
            BloodPressureCategory::Elevated => &mut self.elevated,
            BloodPressureCategory::HypertensionStage1 => &mut self.hypertension_stage1,
            BloodPressureCategory::HypertensionStage2 => &mut self.hypertension_stage2,
            BloodPressureCategory::HypertensiveCrisis => &mut self.hypertensive_crisis,
        }
    }
}

/// Aggregate statistics over a set of readings.
///
/// Every numeric field is `0` for an empty set. Averages are not rounded;
/// display precision is up to the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatisticsSummary {
    /// Number of readings analyzed
    pub total_count: usize,

    /// Mean systolic pressure
    pub average_systolic: f64,

    /// Mean diastolic pressure
    pub average_diastolic: f64,

    /// Mean heart rate
    pub average_heart_rate: f64,

    /// Lowest systolic pressure
    pub min_systolic: i32,

    /// Highest systolic pressure
    pub max_systolic: i32,

    /// Lowest diastolic pressure
    pub min_diastolic: i32,

    /// Highest diastolic pressure
    pub max_diastolic: i32,

    /// Lowest heart rate
    pub min_heart_rate: i32,

    /// Highest heart rate
    pub max_heart_rate: i32,

    /// Median systolic pressure
    pub median_systolic: f64,

    /// Median diastolic pressure
    pub median_diastolic: f64,

    /// Population standard deviation of systolic pressure
    pub std_dev_systolic: f64,

    /// Population standard deviation of diastolic pressure
    pub std_dev_diastolic: f64,

    /// Per-category reading counts
    pub category_counts: CategoryCounts,

    /// Category of the (truncated) average pressures
    pub average_category: Option<BloodPressureCategory>,
}

impl StatisticsSummary {
    /// Whether the summary was computed over no readings
    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_record_and_ratio() {
        let mut counts = CategoryCounts::default();
        assert_eq!(counts.ratio(BloodPressureCategory::Normal), 0.0);

        counts.record(BloodPressureCategory::Normal);
        counts.record(BloodPressureCategory::Normal);
        counts.record(BloodPressureCategory::HypertensiveCrisis);
        counts.record(BloodPressureCategory::Elevated);

        assert_eq!(counts.total(), 4);
        assert_eq!(counts.get(BloodPressureCategory::Normal), 2);
        assert_eq!(counts.ratio(BloodPressureCategory::Normal), 0.5);
        assert_eq!(counts.ratio(BloodPressureCategory::HypertensionStage2), 0.0);

        let pairs: Vec<usize> = counts.iter().map(|(_, n)| n).collect();
        assert_eq!(pairs, vec![2, 1, 0, 0, 1]);
    }

    #[test]
    fn test_default_summary_is_empty() {
        let summary = StatisticsSummary::default();
        assert!(summary.is_empty());
        assert_eq!(summary.average_systolic, 0.0);
        assert!(summary.average_category.is_none());
    }
}
