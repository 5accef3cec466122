//! Week and work-week ranges.

use chrono::{Datelike, Days, NaiveDate};

use crate::config::ViewConfig;
use crate::dates::{self, DayRange};
use crate::error::ValidationError;
use crate::localizer::{format_keys, Localizer};

use super::NavigateAction;

/// The seven-day range containing `date`, starting on the configured
/// week-start day.
pub fn week_range(date: NaiveDate, week_start: u8) -> DayRange {
    let dow = date.weekday().num_days_from_sunday() as u64;
    let back = (dow + 7 - u64::from(week_start) % 7) % 7;
    let first = date - Days::new(back);
    DayRange::span(first, 7).expect("a seven-day span is never empty")
}

/// The week range with non-working days removed.
///
/// # Errors
///
/// Returns an error when the configured working days are not contiguous,
/// since the layout engine requires gap-free ranges.
pub fn work_week_range(date: NaiveDate, config: &ViewConfig) -> Result<DayRange, ValidationError> {
    let days = week_range(date, config.week_start)
        .days()
        .iter()
        .copied()
        .filter(|d| {
            config
                .work_week_days
                .contains(&(d.weekday().num_days_from_sunday() as u8))
        })
        .collect();
    DayRange::new(days)
}

/// Step a week view backwards or forwards.
pub fn week_navigate(date: NaiveDate, action: NavigateAction) -> NaiveDate {
    match action {
        NavigateAction::Previous => date - Days::new(7),
        NavigateAction::Next => date + Days::new(7),
        NavigateAction::Today => date,
    }
}

/// Header title spanning the whole range.
pub fn week_title(range: &DayRange, localizer: &dyn Localizer) -> String {
    localizer.format_range(
        dates::day_instant(range.first()),
        dates::day_instant(range.last()),
        format_keys::DAY_RANGE_HEADER,
    )
}
