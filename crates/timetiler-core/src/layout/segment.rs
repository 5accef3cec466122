//! Appointment-to-column projection for day ranges.
//!
//! A segment is an appointment's footprint on an ordered range of days: the
//! 1-based `left..=right` columns it occupies and the number of columns it
//! spans, clipped at the range boundaries.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::appointment::AppointmentLike;
use crate::dates::{self, DayRange, Granularity, RangeUnit};

/// An appointment's projection onto a day range.
///
/// `left` and `right` are 1-based inclusive column indices. Invariant:
/// `1 <= left <= right <= range.slots()`.
#[derive(Debug, Serialize)]
pub struct Segment<'a, A> {
    pub appointment: &'a A,
    pub span: usize,
    pub left: usize,
    pub right: usize,
}

impl<'a, A> Segment<'a, A> {
    /// Fraction of the range width this segment occupies, as a percentage.
    pub fn width_percent(&self, slots: usize) -> f64 {
        debug_assert!(slots > 0);
        (self.span as f64 / slots as f64) * 100.0
    }
}

impl<'a, A> Clone for Segment<'a, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, A> Copy for Segment<'a, A> {}

/// Whether the appointment's occupied interval intersects `[range_start,
/// range_end]` at day granularity.
///
/// The appointment occupies `[start_of_day(start), end]`. An appointment
/// ending exactly at midnight does not bleed into the next day, while a
/// zero-duration appointment sitting on the boundary day is still included.
pub fn in_range<A: AppointmentLike>(
    appointment: &A,
    range_start: DateTime<Utc>,
    range_end: DateTime<Utc>,
) -> bool {
    let e_start = dates::start_of_day(appointment.start());
    let e_end = appointment.end();

    let starts_before_end = dates::lte(e_start, range_end, Granularity::Day);
    let zero_duration = dates::eq(e_start, e_end, Granularity::Minutes);
    let ends_after_start = if zero_duration {
        dates::gte(e_end, range_start, Granularity::Minutes)
    } else {
        dates::gt(e_end, range_start, Granularity::Minutes)
    };

    starts_before_end && ends_after_start
}

/// Project one appointment onto a day range.
///
/// Callers pre-filter with [`in_range`]; an appointment entirely outside the
/// range degrades to a clipped single-column segment rather than failing.
pub fn appointment_segments<'a, A: AppointmentLike>(
    appointment: &'a A,
    range: &DayRange,
) -> Segment<'a, A> {
    let ends = dates::end_of_range(range, RangeUnit::Day);
    let slots = range.slots();

    let seg_start = dates::start_of_day(appointment.start()).max(ends.first);
    let seg_end = dates::ceil_to_day(appointment.end()).min(ends.last);

    let padding = range.index_of(seg_start.date_naive()).unwrap_or(0);
    let span = dates::day_diff(seg_start, seg_end).clamp(1, slots as i64) as usize;

    Segment {
        appointment,
        span,
        left: padding + 1,
        right: (padding + span).max(1),
    }
}

/// Inclusive-interval overlap against a set of placed segments.
///
/// Two segments on the exact same single column overlap.
pub fn segments_overlap<A>(segment: &Segment<'_, A>, others: &[Segment<'_, A>]) -> bool {
    others
        .iter()
        .any(|other| other.left <= segment.right && other.right >= segment.left)
}

/// Whether the appointment starts before the first day of the range.
pub fn continues_prior<A: AppointmentLike>(appointment: &A, range: &DayRange) -> bool {
    dates::start_of_day(appointment.start()) < range.first_instant()
}

/// Whether the appointment runs past the last day of the range.
pub fn continues_after<A: AppointmentLike>(appointment: &A, range: &DayRange) -> bool {
    let ends = dates::end_of_range(range, RangeUnit::Day);
    dates::ceil_to_day(appointment.end()) > ends.last
}
