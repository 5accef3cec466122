//! Agenda view: a flat, day-grouped listing of a window of appointments.

use chrono::{Days, Duration, NaiveDate};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::appointment::AppointmentLike;
use crate::dates::{self, DayRange, Granularity};
use crate::error::Result;
use crate::layout::in_range;
use crate::localizer::{format_keys, Localizer};

use super::NavigateAction;

/// One appointment line in the agenda.
#[derive(Debug, Serialize)]
pub struct AgendaRow<'a, A> {
    pub appointment: &'a A,
    /// Rendered time column: a single time, a range, or the all-day label.
    pub time_label: String,
    pub continues_prior: bool,
    pub continues_after: bool,
}

/// One day's worth of agenda rows. Days with no appointments are omitted.
#[derive(Debug, Serialize)]
pub struct AgendaDay<'a, A> {
    pub date: NaiveDate,
    pub label: String,
    pub rows: Vec<AgendaRow<'a, A>>,
}

/// The agenda window.
#[derive(Debug, Serialize)]
pub struct AgendaView<'a, A> {
    pub title: String,
    pub days: Vec<AgendaDay<'a, A>>,
}

impl<'a, A: AppointmentLike> AgendaView<'a, A> {
    /// Collect `length_days` of agenda starting at `start`.
    ///
    /// # Errors
    ///
    /// Returns an error if `length_days` is zero.
    pub fn build(
        appointments: &'a [A],
        start: DateTime<Utc>,
        length_days: u32,
        localizer: &dyn Localizer,
    ) -> Result<Self> {
        let end = start + Duration::days(i64::from(length_days));
        let range = DayRange::span(start.date_naive(), length_days as usize)?;

        let mut in_window: Vec<&'a A> = appointments
            .iter()
            .filter(|a| in_range(*a, start, end))
            .collect();
        in_window.sort_by_key(|a| a.start());

        let mut days = Vec::new();
        for &date in &range {
            let day_start = dates::day_instant(date);
            let day_end = dates::end_of_day(day_start);

            let rows: Vec<AgendaRow<'a, A>> = in_window
                .iter()
                .copied()
                .filter(|a| in_range(a, day_start, day_end))
                .map(|appointment| AgendaRow {
                    appointment,
                    time_label: time_label(appointment, day_start, localizer),
                    continues_prior: dates::gt(day_start, appointment.start(), Granularity::Day),
                    continues_after: dates::lt(day_start, appointment.end(), Granularity::Day),
                })
                .collect();

            if rows.is_empty() {
                continue;
            }
            days.push(AgendaDay {
                date,
                label: localizer.format(day_start, format_keys::AGENDA_DATE),
                rows,
            });
        }

        Ok(Self {
            title: localizer.format_range(start, end, format_keys::AGENDA_HEADER),
            days,
        })
    }

    /// True when no day in the window has any appointment; hosts show
    /// `messages().no_appointments_in_range` instead.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

fn time_label<A: AppointmentLike>(
    appointment: &A,
    day: DateTime<Utc>,
    localizer: &dyn Localizer,
) -> String {
    let messages = localizer.messages();
    if appointment.all_day() {
        return messages.all_day.clone();
    }

    let start = appointment.start();
    let end = appointment.end();
    if start == end {
        localizer.format(start, format_keys::AGENDA_TIME)
    } else if dates::eq(start, end, Granularity::Day) {
        localizer.format_range(start, end, format_keys::AGENDA_TIME_RANGE)
    } else if dates::eq(day, start, Granularity::Day) {
        localizer.format(start, format_keys::AGENDA_TIME)
    } else if dates::eq(day, end, Granularity::Day) {
        localizer.format(end, format_keys::AGENDA_TIME)
    } else {
        // Interior day of a multi-day appointment.
        messages.all_day.clone()
    }
}

/// Step an agenda window by its own length.
pub fn agenda_navigate(date: NaiveDate, action: NavigateAction, length_days: u32) -> NaiveDate {
    match action {
        NavigateAction::Previous => date - Days::new(u64::from(length_days)),
        NavigateAction::Next => date + Days::new(u64::from(length_days)),
        NavigateAction::Today => date,
    }
}
