use serde::{Deserialize, Serialize};

/// Blood pressure category based on measurements.
///
/// Variants are declared in order of severity, so the derived ordering
/// compares categories by how serious they are. Display labels live in
/// `services::messages`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BloodPressureCategory {
    /// Normal blood pressure (systolic < 120 and diastolic < 80)
    Normal,

    /// Elevated blood pressure (systolic 120-129 and diastolic < 80)
    Elevated,

    /// Stage 1 Hypertension (systolic 130-139 or diastolic 80-89)
    HypertensionStage1,

    /// Stage 2 Hypertension (systolic ≥ 140 or diastolic ≥ 90)
    HypertensionStage2,

    /// Hypertensive crisis (systolic ≥ 180 or diastolic ≥ 120)
    HypertensiveCrisis,
}

impl BloodPressureCategory {
    /// Every category, least severe first
    pub const ALL: [BloodPressureCategory; 5] = [
        BloodPressureCategory::Normal,
        BloodPressureCategory::Elevated,
        BloodPressureCategory::HypertensionStage1,
        BloodPressureCategory::HypertensionStage2,
        BloodPressureCategory::HypertensiveCrisis,
    ];

    /// Position on the severity scale, 0 for normal up to 4 for a crisis
    pub fn severity_rank(self) -> u8 {
        self as u8
    }

    /// Stable machine-readable code, matching the serialized form
    pub fn code(self) -> &'static str {
        match self {
            BloodPressureCategory::Normal => "normal",
            BloodPressureCategory::Elevated => "elevated",
            BloodPressureCategory::HypertensionStage1 => "hypertension_stage1",
            BloodPressureCategory::HypertensionStage2 => "hypertension_stage2",
            BloodPressureCategory::HypertensiveCrisis => "hypertensive_crisis",
        }
    }

    /// Parse a code produced by [`BloodPressureCategory::code`]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.code() == code)
    }
}
