//! Calendar helpers for the weekly league boundary.
//!
//! League weeks run Monday through Sunday. The promotion cycle marker is keyed by the ISO
//! week of the run date so that a retried run in the same week is recognised.

use chrono::{Datelike, Duration, NaiveDate};

/// Inclusive Monday..=Sunday date range of one league week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl WeekWindow {
    /// Returns the Monday-to-Sunday window containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        let start = date - Duration::days(date.weekday().num_days_from_monday() as i64);
        Self {
            start,
            end: start + Duration::days(6),
        }
    }
}

/// ISO week key of `date`, e.g. `2026-W42`.
pub fn cycle_key(date: NaiveDate) -> String {
    let iso = date.iso_week();
    format!("{}-W{:02}", iso.year(), iso.week())
}
