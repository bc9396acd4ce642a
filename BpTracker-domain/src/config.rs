//! Analysis configuration loaded from the environment.
//!
//! Clinical thresholds are compile-time constants and are not configurable;
//! only the analysis window and the default locale are.

use thiserror::Error;
use tracing::{debug, warn};

use crate::entities::locale::Locale;

/// Environment variable holding the default window length in days
pub const ENV_DEFAULT_WINDOW_DAYS: &str = "BP_DEFAULT_WINDOW_DAYS";
/// Environment variable holding the longest allowed window in days
pub const ENV_MAX_WINDOW_DAYS: &str = "BP_MAX_WINDOW_DAYS";
/// Environment variable holding the default locale code
pub const ENV_LOCALE: &str = "BP_LOCALE";

/// Longest window any variable may ask for, one hundred years
pub const WINDOW_DAYS_LIMIT: u32 = 36_500;

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable was set to something that could not be used
    #[error("Invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Settings for window selection and text rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Window used when the caller does not pick one
    pub default_window_days: u32,

    /// Longest window a caller may request
    pub max_window_days: u32,

    /// Locale used when the caller does not pick one
    pub default_locale: Locale,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            default_window_days: 30,
            max_window_days: 365,
            default_locale: Locale::English,
        }
    }
}

impl AnalysisConfig {
    /// Load configuration from the process environment, reading a `.env`
    /// file first if one exists
    pub fn from_env() -> Result<Self, ConfigError> {
        if dotenv::dotenv().is_err() {
            debug!(".env file not found, using process environment only");
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup. Unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let default_window_days = match lookup(ENV_DEFAULT_WINDOW_DAYS) {
            Some(value) => parse_days(ENV_DEFAULT_WINDOW_DAYS, &value)?,
            None => defaults.default_window_days,
        };

        let max_window_days = match lookup(ENV_MAX_WINDOW_DAYS) {
            Some(value) => parse_days(ENV_MAX_WINDOW_DAYS, &value)?,
            None => defaults.max_window_days,
        };

        let default_locale = match lookup(ENV_LOCALE) {
            Some(value) => Locale::from_code(&value).ok_or_else(|| ConfigError::InvalidValue {
                key: ENV_LOCALE,
                value: value.clone(),
                reason: "expected a language code such as 'en' or 'zh'".to_string(),
            })?,
            None => defaults.default_locale,
        };

        if default_window_days > max_window_days {
            warn!(
                "Default window of {} days exceeds maximum of {}, clamping",
                default_window_days, max_window_days
            );
        }

        Ok(Self {
            default_window_days: default_window_days.min(max_window_days),
            max_window_days,
            default_locale,
        })
    }

    /// Window length to use for a request: the default when none was given,
    /// otherwise the request capped at the maximum
    pub fn window_days(&self, requested: Option<u32>) -> u32 {
        requested
            .unwrap_or(self.default_window_days)
            .min(self.max_window_days)
    }
}

fn parse_days(key: &'static str, value: &str) -> Result<u32, ConfigError> {
    let days = value.trim().parse::<u32>().map_err(|e| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
        reason: e.to_string(),
    })?;

    if days == 0 {
        return Err(ConfigError::InvalidValue {
            key,
            value: value.to_string(),
            reason: "must be at least 1 day".to_string(),
        });
    }

    if days > WINDOW_DAYS_LIMIT {
        return Err(ConfigError::InvalidValue {
            key,
            value: value.to_string(),
            reason: format!("must be at most {} days", WINDOW_DAYS_LIMIT),
        });
    }

    Ok(days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AnalysisConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, AnalysisConfig::default());
        assert_eq!(config.default_window_days, 30);
        assert_eq!(config.max_window_days, 365);
    }

    #[test]
    fn test_values_from_lookup() {
        let config = AnalysisConfig::from_lookup(lookup_from(&[
            (ENV_DEFAULT_WINDOW_DAYS, "14"),
            (ENV_MAX_WINDOW_DAYS, " 90 "),
            (ENV_LOCALE, "zh-CN"),
        ]))
        .unwrap();

        assert_eq!(config.default_window_days, 14);
        assert_eq!(config.max_window_days, 90);
        assert_eq!(config.default_locale, Locale::Chinese);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = AnalysisConfig::from_lookup(lookup_from(&[(ENV_DEFAULT_WINDOW_DAYS, "thirty")])).unwrap_err();
        assert!(err.to_string().contains(ENV_DEFAULT_WINDOW_DAYS));

        let err = AnalysisConfig::from_lookup(lookup_from(&[(ENV_MAX_WINDOW_DAYS, "0")])).unwrap_err();
        assert!(err.to_string().contains("at least 1 day"));

        let err = AnalysisConfig::from_lookup(lookup_from(&[(ENV_LOCALE, "fr")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: ENV_LOCALE, .. }));
    }

    #[test]
    fn test_window_beyond_limit_is_rejected() {
        let err = AnalysisConfig::from_lookup(lookup_from(&[(ENV_MAX_WINDOW_DAYS, "4000000000")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: ENV_MAX_WINDOW_DAYS, .. }));

        let config = AnalysisConfig::from_lookup(lookup_from(&[(ENV_MAX_WINDOW_DAYS, "36500")])).unwrap();
        assert_eq!(config.max_window_days, WINDOW_DAYS_LIMIT);
    }

    #[test]
    fn test_default_window_is_clamped_to_max() {
        let config = AnalysisConfig::from_lookup(lookup_from(&[
            (ENV_DEFAULT_WINDOW_DAYS, "400"),
            (ENV_MAX_WINDOW_DAYS, "180"),
        ]))
        .unwrap();

        assert_eq!(config.default_window_days, 180);
    }

    #[test]
    fn test_window_days() {
        let config = AnalysisConfig::default();
        assert_eq!(config.window_days(None), 30);
        assert_eq!(config.window_days(Some(7)), 7);
        assert_eq!(config.window_days(Some(1000)), 365);
    }
}
