//! Display text for categories, trends and recommendations.
//!
//! Every lookup takes the locale as an argument. Enums stay free of
//! presentation strings; this module is the only place text lives.

use crate::entities::category::BloodPressureCategory;
use crate::entities::locale::Locale;
use crate::entities::trend::{TrendDirection, TrendSuggestion};
use crate::services::advice::Recommendation;

/// Human-readable label of a category
pub fn category_label(category: BloodPressureCategory, locale: Locale) -> &'static str {
    match (locale, category) {
        (Locale::English, BloodPressureCategory::Normal) => "Normal",
        (Locale::English, BloodPressureCategory::Elevated) => "Elevated",
        (Locale::English, BloodPressureCategory::HypertensionStage1) => "Hypertension Stage 1",
        (Locale::English, BloodPressureCategory::HypertensionStage2) => "Hypertension Stage 2",
        (Locale::English, BloodPressureCategory::HypertensiveCrisis) => "Hypertensive Crisis",
        (Locale::Chinese, BloodPressureCategory::Normal) => "正常",
        (Locale::Chinese, BloodPressureCategory::Elevated) => "血压偏高",
        (Locale::Chinese, BloodPressureCategory::HypertensionStage1) => "高血压1级",
        (Locale::Chinese, BloodPressureCategory::HypertensionStage2) => "高血压2级",
        (Locale::Chinese, BloodPressureCategory::HypertensiveCrisis) => "高血压危象",
    }
}

/// Human-readable label of a trend direction
pub fn trend_label(direction: TrendDirection, locale: Locale) -> &'static str {
    match (locale, direction) {
        (Locale::English, TrendDirection::Improving) => "Improving",
        (Locale::English, TrendDirection::Stable) => "Stable",
        (Locale::English, TrendDirection::Worsening) => "Worsening",
        (Locale::Chinese, TrendDirection::Improving) => "改善",
        (Locale::Chinese, TrendDirection::Stable) => "稳定",
        (Locale::Chinese, TrendDirection::Worsening) => "恶化",
    }
}

/// Text of the suggestion attached to a trend analysis
pub fn trend_suggestion_text(suggestion: TrendSuggestion, locale: Locale) -> &'static str {
    match (locale, suggestion) {
        (Locale::English, TrendSuggestion::InsufficientData) => {
            "Not enough data to determine a trend yet. Keep recording readings on different days."
        }
        (Locale::English, TrendSuggestion::Improving) => {
            "Your blood pressure is improving. Keep up your current habits."
        }
        (Locale::English, TrendSuggestion::Stable) => {
            "Your blood pressure is stable. Keep monitoring and maintain a healthy lifestyle."
        }
        (Locale::English, TrendSuggestion::Worsening) => {
            "Your blood pressure is rising. Review your diet and activity, and consider seeing a doctor."
        }
        (Locale::Chinese, TrendSuggestion::InsufficientData) => "数据不足，暂时无法判断趋势。请在不同日期继续记录血压。",
        (Locale::Chinese, TrendSuggestion::Improving) => "您的血压正在改善，请继续保持目前的生活习惯。",
        (Locale::Chinese, TrendSuggestion::Stable) => "您的血压保持稳定，请继续监测并保持健康的生活方式。",
        (Locale::Chinese, TrendSuggestion::Worsening) => "您的血压呈上升趋势，请调整饮食和运动，必要时就医。",
    }
}

/// Text of a single recommendation
pub fn recommendation_text(recommendation: Recommendation, locale: Locale) -> &'static str {
    match locale {
        Locale::English => english_recommendation(recommendation),
        Locale::Chinese => chinese_recommendation(recommendation),
    }
}

fn english_recommendation(recommendation: Recommendation) -> &'static str {
    match recommendation {
        Recommendation::CrisisReadings => {
            "Some readings reached hypertensive crisis levels. Seek medical attention promptly if they recur."
        }
        Recommendation::FrequentStage2 => {
            "Many readings are in hypertension stage 2. Please consult a doctor about treatment."
        }
        Recommendation::FrequentStage1 => {
            "Many readings are in hypertension stage 1. Consider lifestyle changes and discuss them with a doctor."
        }
        Recommendation::FrequentElevated => {
            "Your blood pressure is often elevated. Small changes to diet and exercise can bring it back to normal."
        }
        Recommendation::TrendImproving => "Your recent trend is improving. Keep going.",
        Recommendation::TrendStable => "Your recent trend is stable.",
        Recommendation::TrendWorsening => {
            "Your recent trend is getting worse. Measure more often and look for causes such as stress or salt."
        }
        Recommendation::KeepRecording => "Record readings on more days to see your trend.",
        Recommendation::HeartRateHigh => {
            "Your average heart rate is above 100 bpm. Rest before measuring and mention it to your doctor."
        }
        Recommendation::HeartRateLow => {
            "Your average heart rate is below 60 bpm. Mention it to your doctor if you feel dizzy or tired."
        }
        Recommendation::LimitSodium => "Limit salt to less than 5 g per day and eat plenty of vegetables and fruit.",
        Recommendation::StayActive => "Aim for at least 150 minutes of moderate exercise every week.",
        Recommendation::MeasureRegularly => {
            "Measure at the same times each day, seated and after five minutes of rest."
        }
    }
}

fn chinese_recommendation(recommendation: Recommendation) -> &'static str {
    match recommendation {
        Recommendation::CrisisReadings => "部分读数达到高血压危象水平，如再次出现请立即就医。",
        Recommendation::FrequentStage2 => "较多读数处于高血压2级，请咨询医生治疗方案。",
        Recommendation::FrequentStage1 => "较多读数处于高血压1级，建议调整生活方式并咨询医生。",
        Recommendation::FrequentElevated => "您的血压经常偏高，适当调整饮食和运动有助于恢复正常。",
        Recommendation::TrendImproving => "近期趋势正在改善，请继续坚持。",
        Recommendation::TrendStable => "近期趋势保持稳定。",
        Recommendation::TrendWorsening => "近期趋势正在变差，请增加测量频率并关注压力和盐摄入等因素。",
        Recommendation::KeepRecording => "请在更多日期记录血压以查看趋势。",
        Recommendation::HeartRateHigh => "您的平均心率超过每分钟100次，测量前请先休息，并告知医生。",
        Recommendation::HeartRateLow => "您的平均心率低于每分钟60次，如感到头晕或乏力请告知医生。",
        Recommendation::LimitSodium => "每日食盐摄入量控制在5克以内，多吃蔬菜水果。",
        Recommendation::StayActive => "每周进行至少150分钟的中等强度运动。",
        Recommendation::MeasureRegularly => "每天在固定时间测量，坐姿并休息五分钟后再测。",
    }
}
