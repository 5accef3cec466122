//! Single-day range.

use chrono::{Days, NaiveDate};

use crate::dates::{self, DayRange};
use crate::localizer::{format_keys, Localizer};

use super::NavigateAction;

/// The one-day range for `date`.
pub fn day_range(date: NaiveDate) -> DayRange {
    DayRange::span(date, 1).expect("a one-day span is never empty")
}

/// Step a day view backwards or forwards.
pub fn day_navigate(date: NaiveDate, action: NavigateAction) -> NaiveDate {
    match action {
        NavigateAction::Previous => date - Days::new(1),
        NavigateAction::Next => date + Days::new(1),
        NavigateAction::Today => date,
    }
}

/// Header title for the day.
pub fn day_title(date: NaiveDate, localizer: &dyn Localizer) -> String {
    localizer.format(dates::day_instant(date), format_keys::DAY_HEADER)
}
