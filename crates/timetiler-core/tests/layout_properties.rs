//! Property tests for the layout laws.

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use proptest::prelude::*;
use std::cmp::Ordering;
use timetiler_core::layout::{
    appointment_levels, appointment_segments, in_range, segments_overlap, sort_appointments,
};
use timetiler_core::{Appointment, AppointmentLevels, DayRange};

fn arb_appointment() -> impl Strategy<Value = Appointment> {
    (0i64..14, 0i64..24, 0i64..96, any::<bool>()).prop_map(
        |(day, start_hour, duration_hours, all_day)| {
            let start = Utc.with_ymd_and_hms(2017, 1, 1, 0, 0, 0).unwrap()
                + Duration::days(day)
                + Duration::hours(start_hour);
            let end = start + Duration::hours(duration_hours);
            Appointment::new("appointment", start, end).with_all_day(all_day)
        },
    )
}

fn range() -> DayRange {
    DayRange::span(NaiveDate::from_ymd_opt(2017, 1, 4).unwrap(), 7).unwrap()
}

fn leveled(
    appointments: &[Appointment],
    limit: Option<usize>,
) -> AppointmentLevels<'_, Appointment> {
    let range = range();
    let start = range.first_instant();
    let end = range.last_instant();

    let mut visible: Vec<&Appointment> = appointments
        .iter()
        .filter(|a| in_range(*a, start, end))
        .collect();
    visible.sort_by(|a, b| sort_appointments(a, b));

    let segments = visible
        .iter()
        .map(|a| appointment_segments(*a, &range))
        .collect();
    appointment_levels(segments, limit)
}

proptest! {
    #[test]
    fn sort_is_antisymmetric(a in arb_appointment(), b in arb_appointment()) {
        prop_assert_eq!(sort_appointments(&a, &b), sort_appointments(&b, &a).reverse());
    }

    #[test]
    fn sort_is_transitive(
        a in arb_appointment(),
        b in arb_appointment(),
        c in arb_appointment(),
    ) {
        let ab = sort_appointments(&a, &b);
        let bc = sort_appointments(&b, &c);
        if ab != Ordering::Greater && bc != Ordering::Greater {
            prop_assert_ne!(sort_appointments(&a, &c), Ordering::Greater);
        }
    }

    #[test]
    fn segments_stay_within_the_range(a in arb_appointment()) {
        let range = range();
        if in_range(&a, range.first_instant(), range.last_instant()) {
            let segment = appointment_segments(&a, &range);
            prop_assert!(segment.left >= 1);
            prop_assert!(segment.left <= segment.right);
            prop_assert!(segment.right <= range.slots());
            prop_assert_eq!(segment.span, segment.right - segment.left + 1);
        }
    }

    #[test]
    fn no_level_contains_an_overlapping_pair(
        appointments in prop::collection::vec(arb_appointment(), 0..24),
    ) {
        let result = leveled(&appointments, None);
        for level in &result.levels {
            for (i, segment) in level.iter().enumerate() {
                let rest: Vec<_> = level
                    .iter()
                    .enumerate()
                    .filter(|(j, _)| *j != i)
                    .map(|(_, s)| *s)
                    .collect();
                prop_assert!(!segments_overlap(segment, &rest));
            }
        }
        prop_assert!(result.extra.is_empty());
    }

    #[test]
    fn limit_bounds_the_level_count(
        appointments in prop::collection::vec(arb_appointment(), 0..24),
        limit in 0usize..5,
    ) {
        let result = leveled(&appointments, Some(limit));
        prop_assert!(result.levels.len() <= limit);

        let placed: usize = result.levels.iter().map(Vec::len).sum();
        let unlimited = leveled(&appointments, None);
        let total: usize = unlimited.levels.iter().map(Vec::len).sum();
        prop_assert_eq!(placed + result.extra.len(), total);
    }

    #[test]
    fn relayout_is_byte_identical(
        appointments in prop::collection::vec(arb_appointment(), 0..16),
    ) {
        let shape = |r: &AppointmentLevels<'_, Appointment>| -> Vec<Vec<(usize, usize)>> {
            r.levels
                .iter()
                .map(|level| level.iter().map(|s| (s.left, s.right)).collect())
                .collect()
        };
        let first = leveled(&appointments, Some(3));
        let second = leveled(&appointments, Some(3));
        prop_assert_eq!(shape(&first), shape(&second));
    }
}
