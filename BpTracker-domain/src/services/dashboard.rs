//! Dashboard state as an immutable value.
//!
//! A host feeds `DashboardEvent`s through `reduce` and renders the returned
//! state. The report is rebuilt from scratch on every event, so a state can
//! never hold a report that disagrees with its readings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AnalysisConfig;
use crate::entities::locale::Locale;
use crate::entities::reading::Reading;
use crate::entities::report::AnalysisReport;
use crate::entities::window::AnalysisWindow;
use crate::services::analysis::build_report;

/// Something that happened on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum DashboardEvent {
    /// Replace every reading
    ReadingsLoaded(Vec<Reading>),
    /// Add a reading, replacing any reading with the same id
    ReadingAdded(Reading),
    /// Remove the reading with this id
    ReadingRemoved(String),
    /// Show the last N days
    WindowChanged(u32),
    /// Render text in another language
    LocaleChanged(Locale),
    /// Move the dashboard clock; earlier instants are ignored
    ClockAdvanced(DateTime<Utc>),
}

/// Everything the dashboard shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardState {
    readings: Vec<Reading>,
    window_days: u32,
    max_window_days: u32,
    locale: Locale,
    now: DateTime<Utc>,
    report: AnalysisReport,
}

impl DashboardState {
    /// Empty dashboard using the configured window and locale
    pub fn new(config: &AnalysisConfig, now: DateTime<Utc>) -> Self {
        let max_window_days = config.max_window_days.max(1);
        Self::derive(
            Vec::new(),
            config.window_days(None).clamp(1, max_window_days),
            max_window_days,
            config.default_locale,
            now,
        )
    }

    /// All known readings, oldest first
    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    pub fn window_days(&self) -> u32 {
        self.window_days
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// Report over the readings inside the current window
    pub fn report(&self) -> &AnalysisReport {
        &self.report
    }

    /// Readings inside the current window, oldest first
    pub fn visible_readings(&self) -> impl Iterator<Item = &Reading> {
        let window = self.report.window;
        self.readings.iter().filter(move |r| window.contains(r.measured_at))
    }

    fn derive(
        mut readings: Vec<Reading>,
        window_days: u32,
        max_window_days: u32,
        locale: Locale,
        now: DateTime<Utc>,
    ) -> Self {
        readings.sort_by(|a, b| a.measured_at.cmp(&b.measured_at).then_with(|| a.id.cmp(&b.id)));

        let window = AnalysisWindow::last_days(window_days, now);
        let visible: Vec<Reading> = readings
            .iter()
            .filter(|r| window.contains(r.measured_at))
            .cloned()
            .collect();
        let report = build_report(&visible, window, locale, now);

        Self {
            readings,
            window_days,
            max_window_days,
            locale,
            now,
            report,
        }
    }
}

/// Apply one event and return the next state. `state` is left untouched.
pub fn reduce(state: &DashboardState, event: DashboardEvent) -> DashboardState {
    let mut readings = state.readings.clone();
    let mut window_days = state.window_days;
    let mut locale = state.locale;
    let mut now = state.now;

    match event {
        DashboardEvent::ReadingsLoaded(loaded) => readings = loaded,
        DashboardEvent::ReadingAdded(reading) => {
            readings.retain(|r| r.id != reading.id);
            readings.push(reading);
        }
        DashboardEvent::ReadingRemoved(id) => {
            let before = readings.len();
            readings.retain(|r| r.id != id);
            if readings.len() == before {
                debug!("Ignoring removal of unknown reading {}", id);
            }
        }
        DashboardEvent::WindowChanged(days) => window_days = days.clamp(1, state.max_window_days.max(1)),
        DashboardEvent::LocaleChanged(new_locale) => locale = new_locale,
        DashboardEvent::ClockAdvanced(instant) => now = now.max(instant),
    }

    DashboardState::derive(readings, window_days, state.max_window_days, locale, now)
}
