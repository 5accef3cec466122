//! Stacking order for appointments feeding the level assignment.

use std::cmp::Ordering;

use crate::appointment::AppointmentLike;
use crate::dates;

/// Day-granular duration, floored at one day.
///
/// Sub-day appointments all count as one day here, so among them the
/// tie-break falls through to the all-day flag and the wall-clock start.
/// A reversed range (`end < start`) floors to one day as well.
fn duration_days<A: AppointmentLike>(appointment: &A) -> i64 {
    dates::day_diff(appointment.start(), dates::ceil_to_day(appointment.end())).max(1)
}

/// Total order used before layout so stacking is deterministic and
/// user-sensible: earlier start days first, then longer appointments, then
/// all-day ones, then earlier wall-clock starts.
///
/// Fully tied appointments compare equal; callers use a stable sort so the
/// underlying sequence order is preserved.
pub fn sort_appointments<A: AppointmentLike>(a: &A, b: &A) -> Ordering {
    let start_day_a = dates::start_of_day(a.start());
    let start_day_b = dates::start_of_day(b.start());

    start_day_a
        .cmp(&start_day_b)
        .then_with(|| duration_days(b).cmp(&duration_days(a)))
        .then_with(|| b.all_day().cmp(&a.all_day()))
        .then_with(|| a.start().cmp(&b.start()))
}
