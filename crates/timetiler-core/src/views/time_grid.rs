//! Time-grid view: the all-day header row plus one timed column per day.
//!
//! Backs the day, week, and work-week views; they differ only in the range
//! they pass in.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::appointment::AppointmentLike;
use crate::config::ViewConfig;
use crate::dates::{self, DayRange, Granularity};
use crate::error::Result;
use crate::layout::{
    appointment_levels, appointment_segments, in_range, sort_appointments, styled_appointments,
    Segment, StyledAppointment, TimeSlotMetrics,
};
use crate::localizer::{format_keys, Localizer};

/// One header cell per displayed day.
#[derive(Debug, Serialize)]
pub struct HeaderCell {
    pub date: NaiveDate,
    pub label: String,
    pub is_today: bool,
}

/// The leveled all-day row across the whole range.
#[derive(Debug, Serialize)]
pub struct AllDayRow<'a, A> {
    pub levels: Vec<Vec<Segment<'a, A>>>,
    /// Appointments deferred past the level limit ("+N more").
    pub extra_count: usize,
    /// Rows the host reserves even when fewer levels exist.
    pub min_rows: usize,
    pub slots: usize,
}

/// One day's timed column.
#[derive(Debug, Serialize)]
pub struct DayColumn<'a, A> {
    pub date: NaiveDate,
    pub is_now: bool,
    pub appointments: Vec<StyledAppointment<'a, A>>,
    /// Percent offset of the now-indicator, present only on today's column.
    pub current_time_position: Option<f64>,
}

/// The fully laid out time grid.
#[derive(Debug, Serialize)]
pub struct TimeGridView<'a, A> {
    pub header: Vec<HeaderCell>,
    pub all_day: AllDayRow<'a, A>,
    pub columns: Vec<DayColumn<'a, A>>,
}

impl<'a, A: AppointmentLike> TimeGridView<'a, A> {
    /// Lay out `appointments` over `range`.
    ///
    /// # Errors
    ///
    /// Returns an error when the configured day span or slot geometry is
    /// invalid.
    pub fn build(
        appointments: &'a [A],
        range: &DayRange,
        now: DateTime<Utc>,
        config: &ViewConfig,
        localizer: &dyn Localizer,
    ) -> Result<Self> {
        let start = range.first_instant();
        let end = range.last_instant();

        // Partition into the all-day row and the timed columns. Timed
        // multi-day appointments join the all-day row unless the host asked
        // to see their times in the columns.
        let mut all_day: Vec<&'a A> = Vec::new();
        let mut timed: Vec<&'a A> = Vec::new();
        for appointment in appointments {
            if !in_range(appointment, start, end) {
                continue;
            }
            let a_start = appointment.start();
            let a_end = appointment.end();
            let whole_days = dates::is_just_date(a_start) && dates::is_just_date(a_end);
            let multi_day = !dates::eq(a_start, a_end, Granularity::Day);
            if appointment.all_day()
                || whole_days
                || (!config.show_multi_day_times && multi_day)
            {
                all_day.push(appointment);
            } else {
                timed.push(appointment);
            }
        }

        all_day.sort_by(|a, b| sort_appointments(a, b));

        let segments: Vec<Segment<'a, A>> = all_day
            .iter()
            .map(|appointment| appointment_segments(*appointment, range))
            .collect();
        let leveled = appointment_levels(segments, config.max_all_day_levels);
        let all_day = AllDayRow {
            extra_count: leveled.extra.len(),
            levels: leveled.levels,
            min_rows: 2,
            slots: range.slots(),
        };

        let today = now.date_naive();
        let header = range
            .iter()
            .map(|&date| HeaderCell {
                date,
                label: localizer.format(dates::day_instant(date), format_keys::DAY),
                is_today: date == today,
            })
            .collect();

        let minimum_start_difference = config.minimum_start_difference();
        let mut columns = Vec::with_capacity(range.slots());
        for &date in range {
            let (min, max) = config.day_bounds(date)?;
            let metrics =
                TimeSlotMetrics::new(min, max, config.slots.step, config.slots.timeslots)?;

            let day = dates::day_instant(date);
            let in_column = timed
                .iter()
                .copied()
                .filter(|a| dates::within(day, a.start(), a.end(), Granularity::Day));
            let styled = styled_appointments(
                in_column,
                &metrics,
                minimum_start_difference,
                config.day_layout_algorithm,
            );

            let is_now = date == today;
            columns.push(DayColumn {
                date,
                is_now,
                current_time_position: if is_now {
                    metrics.current_time_position(now)
                } else {
                    None
                },
                appointments: styled,
            });
        }

        Ok(Self {
            header,
            all_day,
            columns,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appointment::Appointment;
    use crate::localizer::ChronoLocalizer;
    use chrono::TimeZone;

    fn jan(d: u32, h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2017, 1, d, h, m, 0).unwrap()
    }

    fn week() -> DayRange {
        DayRange::span(NaiveDate::from_ymd_opt(2017, 1, 8).unwrap(), 7).unwrap()
    }

    fn build<'a>(
        appointments: &'a [Appointment],
        config: &ViewConfig,
    ) -> TimeGridView<'a, Appointment> {
        let localizer = ChronoLocalizer::new();
        TimeGridView::build(appointments, &week(), jan(9, 12, 0), config, &localizer).unwrap()
    }

    #[test]
    fn partitions_all_day_from_timed() {
        let appointments = vec![
            Appointment::new("flagged", jan(9, 9, 0), jan(9, 10, 0)).with_all_day(true),
            Appointment::new("whole days", jan(10, 0, 0), jan(11, 0, 0)),
            Appointment::new("timed multi-day", jan(10, 15, 0), jan(12, 11, 0)),
            Appointment::new("timed", jan(9, 9, 0), jan(9, 10, 0)),
        ];
        let view = build(&appointments, &ViewConfig::default());

        let leveled: usize = view.all_day.levels.iter().map(Vec::len).sum();
        assert_eq!(leveled, 3);

        let in_columns: usize = view.columns.iter().map(|c| c.appointments.len()).sum();
        assert_eq!(in_columns, 1);
    }

    #[test]
    fn show_multi_day_times_moves_timed_spans_into_columns() {
        let appointments = vec![Appointment::new(
            "timed multi-day",
            jan(10, 15, 0),
            jan(12, 11, 0),
        )];
        let mut config = ViewConfig::default();
        config.show_multi_day_times = true;
        let view = build(&appointments, &config);

        assert!(view.all_day.levels.is_empty());
        // One styled entry per touched day column.
        let in_columns: usize = view.columns.iter().map(|c| c.appointments.len()).sum();
        assert_eq!(in_columns, 3);
    }

    #[test]
    fn all_day_row_honors_the_level_limit() {
        let appointments: Vec<Appointment> = (0..4)
            .map(|i| {
                Appointment::new(format!("a{i}"), jan(9, 0, 0), jan(10, 0, 0)).with_all_day(true)
            })
            .collect();
        let mut config = ViewConfig::default();
        config.max_all_day_levels = Some(2);
        let view = build(&appointments, &config);

        assert_eq!(view.all_day.levels.len(), 2);
        assert_eq!(view.all_day.extra_count, 2);
    }

    #[test]
    fn header_marks_today() {
        let view = build(&[], &ViewConfig::default());
        assert_eq!(view.header.len(), 7);
        let today: Vec<_> = view.header.iter().filter(|h| h.is_today).collect();
        assert_eq!(today.len(), 1);
        assert_eq!(today[0].date, NaiveDate::from_ymd_opt(2017, 1, 9).unwrap());
    }

    #[test]
    fn now_indicator_only_on_todays_column() {
        let view = build(&[], &ViewConfig::default());
        for column in &view.columns {
            assert_eq!(
                column.current_time_position.is_some(),
                column.is_now,
                "column {}",
                column.date
            );
        }
    }

    #[test]
    fn anchors_keep_their_level_as_short_appointments_arrive() {
        // The week-long appointment sorts first and stays on level one no
        // matter how many short ones join it.
        let appointments = vec![
            Appointment::new("short", jan(9, 0, 0), jan(10, 0, 0)),
            Appointment::new("anchor", jan(8, 0, 0), jan(15, 0, 0)),
        ];
        let view = build(&appointments, &ViewConfig::default());

        assert_eq!(view.all_day.levels.len(), 2);
        assert_eq!(view.all_day.levels[0][0].span, 7);
    }
}
