use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Inclusive time range a report is computed over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisWindow {
    /// Earliest measurement time included
    pub start: DateTime<Utc>,

    /// Latest measurement time included
    pub end: DateTime<Utc>,
}

impl AnalysisWindow {
    /// Window between two timestamps; `None` when `start` is after `end`
    pub fn between(start: DateTime<Utc>, end: DateTime<Utc>) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    /// Window covering the `days` days that end at `now`.
    /// The start saturates at the earliest representable instant.
    pub fn last_days(days: u32, now: DateTime<Utc>) -> Self {
        let start = now
            .checked_sub_signed(Duration::days(i64::from(days)))
            .unwrap_or(DateTime::<Utc>::MIN_UTC);

        Self { start, end: now }
    }

    /// Whether a measurement time falls inside the window
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }

    /// Length of the window in whole days
    pub fn whole_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_last_days() {
        let now = Utc.with_ymd_and_hms(2024, 5, 31, 12, 0, 0).unwrap();
        let window = AnalysisWindow::last_days(7, now);

        assert_eq!(window.whole_days(), 7);
        assert!(window.contains(now));
        assert!(window.contains(Utc.with_ymd_and_hms(2024, 5, 24, 12, 0, 0).unwrap()));
        assert!(!window.contains(Utc.with_ymd_and_hms(2024, 5, 24, 11, 59, 59).unwrap()));
    }

    #[test]
    fn test_last_days_saturates_instead_of_overflowing() {
        let now = Utc.with_ymd_and_hms(2024, 5, 31, 12, 0, 0).unwrap();
        let window = AnalysisWindow::last_days(u32::MAX, now);

        assert_eq!(window.start, DateTime::<Utc>::MIN_UTC);
        assert_eq!(window.end, now);
        assert!(window.contains(Utc.with_ymd_and_hms(1900, 1, 1, 0, 0, 0).unwrap()));
    }

    #[test]
    fn test_between_rejects_reversed_bounds() {
        let early = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
        let late = Utc.with_ymd_and_hms(2024, 5, 2, 0, 0, 0).unwrap();

        assert!(AnalysisWindow::between(early, late).is_some());
        assert!(AnalysisWindow::between(early, early).is_some());
        assert!(AnalysisWindow::between(late, early).is_none());
    }
}
