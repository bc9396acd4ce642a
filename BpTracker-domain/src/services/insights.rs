use crate::entities::category::BloodPressureCategory;
use crate::entities::reading::Reading;

/// Systolic threshold of a hypertensive crisis
pub const CRISIS_SYSTOLIC: i32 = 180;
/// Diastolic threshold of a hypertensive crisis
pub const CRISIS_DIASTOLIC: i32 = 120;
/// Systolic threshold of stage 2 hypertension
pub const STAGE2_SYSTOLIC: i32 = 140;
/// Diastolic threshold of stage 2 hypertension
pub const STAGE2_DIASTOLIC: i32 = 90;
/// Systolic threshold of stage 1 hypertension
pub const STAGE1_SYSTOLIC: i32 = 130;
/// Diastolic threshold of stage 1 hypertension
pub const STAGE1_DIASTOLIC: i32 = 80;
/// Systolic threshold of elevated pressure
pub const ELEVATED_SYSTOLIC: i32 = 120;

/// Categorize blood pressure based on measurements.
///
/// Rules are checked from most to least severe and the first match wins.
/// Any pair of integers gets a category; sanity checks belong to input
/// validation.
pub fn categorize_blood_pressure(systolic: i32, diastolic: i32) -> BloodPressureCategory {
    if systolic >= CRISIS_SYSTOLIC || diastolic >= CRISIS_DIASTOLIC {
        BloodPressureCategory::HypertensiveCrisis
    } else if systolic >= STAGE2_SYSTOLIC || diastolic >= STAGE2_DIASTOLIC {
        BloodPressureCategory::HypertensionStage2
    } else if systolic >= STAGE1_SYSTOLIC || diastolic >= STAGE1_DIASTOLIC {
        BloodPressureCategory::HypertensionStage1
    } else if systolic >= ELEVATED_SYSTOLIC && diastolic < STAGE1_DIASTOLIC {
        BloodPressureCategory::Elevated
    } else {
        BloodPressureCategory::Normal
    }
}

/// Category of a single reading
pub fn categorize_reading(reading: &Reading) -> BloodPressureCategory {
    categorize_blood_pressure(i32::from(reading.systolic), i32::from(reading.diastolic))
}

/// Check if a reading indicates a hypertensive crisis
pub fn is_hypertensive_crisis(reading: &Reading) -> bool {
    categorize_reading(reading) == BloodPressureCategory::HypertensiveCrisis
}
