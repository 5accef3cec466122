//! Calendar arithmetic shared by every layout component.
//!
//! All instants are `DateTime<Utc>`; callers are expected to have normalized
//! their appointments to a single reference calendar before layout. Day
//! markers are `NaiveDate` since they carry no time of day.

use chrono::{DateTime, Days, Duration, DurationRound, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Comparison granularity for instant comparators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Day,
    Minutes,
}

/// Midnight at the start of the instant's day.
pub fn start_of_day(t: DateTime<Utc>) -> DateTime<Utc> {
    t.date_naive().and_time(NaiveTime::MIN).and_utc()
}

/// Last representable millisecond of the instant's day.
pub fn end_of_day(t: DateTime<Utc>) -> DateTime<Utc> {
    start_of_day(t) + Duration::days(1) - Duration::milliseconds(1)
}

/// Round up to the next midnight; an instant already at midnight stays put.
pub fn ceil_to_day(t: DateTime<Utc>) -> DateTime<Utc> {
    let floored = start_of_day(t);
    if t == floored {
        floored
    } else {
        floored + Duration::days(1)
    }
}

/// Whole calendar days from `from` to `to` (negative when `to` is earlier).
pub fn day_diff(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    (to.date_naive() - from.date_naive()).num_days()
}

/// Minutes from `from` to `to`.
pub fn minute_diff(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    (to - from).num_minutes()
}

/// True when the instant has no time-of-day component.
pub fn is_just_date(t: DateTime<Utc>) -> bool {
    t == start_of_day(t)
}

/// The date of `date` combined with the time-of-day of `time`.
pub fn merge(date: DateTime<Utc>, time: DateTime<Utc>) -> DateTime<Utc> {
    date.date_naive().and_time(time.time()).and_utc()
}

/// Midnight of a day marker as an instant.
pub fn day_instant(day: NaiveDate) -> DateTime<Utc> {
    day.and_time(NaiveTime::MIN).and_utc()
}

fn truncate(t: DateTime<Utc>, granularity: Granularity) -> DateTime<Utc> {
    match granularity {
        Granularity::Day => start_of_day(t),
        Granularity::Minutes => t.duration_trunc(Duration::minutes(1)).unwrap_or(t),
    }
}

/// Equal at the given granularity.
pub fn eq(a: DateTime<Utc>, b: DateTime<Utc>, granularity: Granularity) -> bool {
    truncate(a, granularity) == truncate(b, granularity)
}

/// Strictly earlier at the given granularity.
pub fn lt(a: DateTime<Utc>, b: DateTime<Utc>, granularity: Granularity) -> bool {
    truncate(a, granularity) < truncate(b, granularity)
}

/// Earlier or equal at the given granularity.
pub fn lte(a: DateTime<Utc>, b: DateTime<Utc>, granularity: Granularity) -> bool {
    truncate(a, granularity) <= truncate(b, granularity)
}

/// Strictly later at the given granularity.
pub fn gt(a: DateTime<Utc>, b: DateTime<Utc>, granularity: Granularity) -> bool {
    truncate(a, granularity) > truncate(b, granularity)
}

/// Later or equal at the given granularity.
pub fn gte(a: DateTime<Utc>, b: DateTime<Utc>, granularity: Granularity) -> bool {
    truncate(a, granularity) >= truncate(b, granularity)
}

/// True when `t` falls inside `[start, end]` at the given granularity.
pub fn within(
    t: DateTime<Utc>,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    granularity: Granularity,
) -> bool {
    gte(t, start, granularity) && lte(t, end, granularity)
}

/// Unit used when extending a day range past its last marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeUnit {
    Day,
    Week,
}

impl RangeUnit {
    fn days(self) -> u64 {
        match self {
            RangeUnit::Day => 1,
            RangeUnit::Week => 7,
        }
    }
}

/// Exclusive bounds of a day range: its first day and one unit past its last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeEnds {
    pub first: DateTime<Utc>,
    pub last: DateTime<Utc>,
}

/// Bounds of `range` with the upper end pushed one `unit` past the last day,
/// so segment math can treat the final day as a half-open interval.
pub fn end_of_range(range: &DayRange, unit: RangeUnit) -> RangeEnds {
    let first = range.first().and_time(NaiveTime::MIN).and_utc();
    let last = (range.last() + Days::new(unit.days()))
        .and_time(NaiveTime::MIN)
        .and_utc();
    RangeEnds { first, last }
}

/// An ordered, contiguous sequence of day markers.
///
/// Construction validates the ascending, gap-free invariant once; the layout
/// code downstream relies on it without re-checking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<NaiveDate>", into = "Vec<NaiveDate>")]
pub struct DayRange {
    days: Vec<NaiveDate>,
}

impl DayRange {
    /// Build a range from explicit day markers.
    ///
    /// # Errors
    ///
    /// Returns an error if `days` is empty, not ascending, or has gaps.
    pub fn new(days: Vec<NaiveDate>) -> Result<Self, ValidationError> {
        if days.is_empty() {
            return Err(ValidationError::EmptyRange);
        }
        for (index, pair) in days.windows(2).enumerate() {
            if pair[1] <= pair[0] {
                return Err(ValidationError::UnorderedRange { index: index + 1 });
            }
            if pair[1] - pair[0] != Duration::days(1) {
                return Err(ValidationError::NonContiguousRange {
                    prev: pair[0],
                    next: pair[1],
                });
            }
        }
        Ok(Self { days })
    }

    /// Enumerate `count` consecutive days starting at `first`.
    ///
    /// # Errors
    ///
    /// Returns an error if `count` is zero.
    pub fn span(first: NaiveDate, count: usize) -> Result<Self, ValidationError> {
        if count == 0 {
            return Err(ValidationError::EmptyRange);
        }
        let days = (0..count as u64)
            .map(|offset| first + Days::new(offset))
            .collect();
        Ok(Self { days })
    }

    /// Number of day columns in the range.
    pub fn slots(&self) -> usize {
        self.days.len()
    }

    pub fn first(&self) -> NaiveDate {
        debug_assert!(!self.days.is_empty());
        self.days[0]
    }

    pub fn last(&self) -> NaiveDate {
        debug_assert!(!self.days.is_empty());
        self.days[self.days.len() - 1]
    }

    /// Midnight of the first day.
    pub fn first_instant(&self) -> DateTime<Utc> {
        self.first().and_time(NaiveTime::MIN).and_utc()
    }

    /// Midnight of the last day.
    pub fn last_instant(&self) -> DateTime<Utc> {
        self.last().and_time(NaiveTime::MIN).and_utc()
    }

    pub fn days(&self) -> &[NaiveDate] {
        &self.days
    }

    /// Zero-based position of a day within the range.
    pub fn index_of(&self, day: NaiveDate) -> Option<usize> {
        self.days.iter().position(|d| *d == day)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NaiveDate> {
        self.days.iter()
    }
}

impl TryFrom<Vec<NaiveDate>> for DayRange {
    type Error = ValidationError;

    fn try_from(days: Vec<NaiveDate>) -> Result<Self, Self::Error> {
        Self::new(days)
    }
}

impl From<DayRange> for Vec<NaiveDate> {
    fn from(range: DayRange) -> Self {
        range.days
    }
}

impl<'a> IntoIterator for &'a DayRange {
    type Item = &'a NaiveDate;
    type IntoIter = std::slice::Iter<'a, NaiveDate>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn start_and_end_of_day() {
        let t = utc(2017, 1, 8, 13, 45);
        assert_eq!(start_of_day(t), utc(2017, 1, 8, 0, 0));
        assert_eq!(end_of_day(t), utc(2017, 1, 9, 0, 0) - Duration::milliseconds(1));
    }

    #[test]
    fn ceil_keeps_midnight_and_rounds_up_anything_else() {
        assert_eq!(ceil_to_day(utc(2017, 1, 8, 0, 0)), utc(2017, 1, 8, 0, 0));
        assert_eq!(ceil_to_day(utc(2017, 1, 8, 0, 1)), utc(2017, 1, 9, 0, 0));
        assert_eq!(ceil_to_day(utc(2017, 1, 8, 23, 59)), utc(2017, 1, 9, 0, 0));
    }

    #[test]
    fn granular_comparisons() {
        let morning = utc(2017, 1, 8, 9, 0);
        let evening = utc(2017, 1, 8, 21, 30);
        assert!(eq(morning, evening, Granularity::Day));
        assert!(!eq(morning, evening, Granularity::Minutes));
        assert!(lt(morning, evening, Granularity::Minutes));
        assert!(lte(morning, evening, Granularity::Day));
        assert!(!gt(evening, morning, Granularity::Day));
    }

    #[test]
    fn merge_takes_date_from_one_and_time_from_the_other() {
        let date = utc(2017, 1, 8, 0, 0);
        let time = utc(2020, 6, 1, 7, 30);
        assert_eq!(merge(date, time), utc(2017, 1, 8, 7, 30));
    }

    #[test]
    fn day_range_rejects_bad_input() {
        assert_eq!(DayRange::new(vec![]), Err(ValidationError::EmptyRange));

        let d = |day| NaiveDate::from_ymd_opt(2017, 1, day).unwrap();
        assert!(matches!(
            DayRange::new(vec![d(2), d(1)]),
            Err(ValidationError::UnorderedRange { index: 1 })
        ));
        assert!(matches!(
            DayRange::new(vec![d(1), d(3)]),
            Err(ValidationError::NonContiguousRange { .. })
        ));
    }

    #[test]
    fn day_range_span_enumerates_consecutive_days() {
        let first = NaiveDate::from_ymd_opt(2017, 1, 8).unwrap();
        let range = DayRange::span(first, 4).unwrap();
        assert_eq!(range.slots(), 4);
        assert_eq!(range.first(), first);
        assert_eq!(range.last(), NaiveDate::from_ymd_opt(2017, 1, 11).unwrap());
        assert_eq!(range.index_of(NaiveDate::from_ymd_opt(2017, 1, 10).unwrap()), Some(2));
    }

    #[test]
    fn end_of_range_adds_one_day_by_default() {
        let range = DayRange::span(NaiveDate::from_ymd_opt(2017, 1, 1).unwrap(), 2).unwrap();
        let ends = end_of_range(&range, RangeUnit::Day);
        assert_eq!(ends.first, utc(2017, 1, 1, 0, 0));
        assert_eq!(ends.last, utc(2017, 1, 3, 0, 0));
    }

    #[test]
    fn end_of_range_respects_week_unit() {
        let range = DayRange::span(NaiveDate::from_ymd_opt(2017, 1, 1).unwrap(), 2).unwrap();
        let ends = end_of_range(&range, RangeUnit::Week);
        assert_eq!(ends.last, utc(2017, 1, 9, 0, 0));
    }
}
