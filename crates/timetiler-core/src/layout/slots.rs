//! Time-slot metrics for a single day column.
//!
//! The continuous-time counterpart of a day range: the displayed span
//! `[min, max]` cut into slots of `step` minutes, grouped into gutter rows
//! of `timeslots` slots each, with projections from instants to percentage
//! offsets within the column.

use chrono::{DateTime, Duration, Utc};

use crate::dates;
use crate::error::ValidationError;

/// Percent-based projection of an interval onto a day column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotRange {
    /// Offset of the interval start, percent of the column height.
    pub top: f64,
    /// Interval extent, percent of the column height.
    pub height: f64,
    /// Interval start in minutes from the column start, clamped.
    pub start_minutes: i64,
    /// Interval end in minutes from the column start, clamped.
    pub end_minutes: i64,
    /// Interval start clamped to the displayed span.
    pub start: DateTime<Utc>,
    /// Interval end clamped to the displayed span.
    pub end: DateTime<Utc>,
}

/// Slot geometry for one displayed day.
#[derive(Debug, Clone)]
pub struct TimeSlotMetrics {
    min: DateTime<Utc>,
    max: DateTime<Utc>,
    step: i64,
    timeslots: usize,
    /// Displayed minutes, inclusive of the final one.
    total_minutes: i64,
    /// Rendered minutes: full groups, >= total_minutes.
    slot_minutes: i64,
    groups: Vec<Vec<DateTime<Utc>>>,
}

impl TimeSlotMetrics {
    /// Build metrics for the span `[min, max]` with `step`-minute slots
    /// grouped `timeslots` at a time.
    ///
    /// # Errors
    ///
    /// Returns an error if `max` is not after `min` or `step`/`timeslots`
    /// is zero.
    pub fn new(
        min: DateTime<Utc>,
        max: DateTime<Utc>,
        step: u32,
        timeslots: u32,
    ) -> Result<Self, ValidationError> {
        if max <= min {
            return Err(ValidationError::InvalidTimeRange {
                start: min,
                end: max,
            });
        }
        if step == 0 || timeslots == 0 {
            return Err(ValidationError::EmptyRange);
        }

        let step = i64::from(step);
        let timeslots = timeslots as usize;
        let total_minutes = dates::minute_diff(min, max) + 1;
        let group_minutes = step * timeslots as i64;
        let num_groups = (total_minutes + group_minutes - 1) / group_minutes;
        let num_slots = num_groups as usize * timeslots;

        // Every slot instant is derived from `min` rather than from the
        // previous slot, which keeps the grid aligned across DST-shifted
        // local calendars the caller may have normalized away.
        let mut groups = Vec::with_capacity(num_groups as usize);
        for group in 0..num_groups as usize {
            let mut slots = Vec::with_capacity(timeslots);
            for slot in 0..timeslots {
                let index = (group * timeslots + slot) as i64;
                slots.push(min + Duration::minutes(index * step));
            }
            groups.push(slots);
        }

        Ok(Self {
            min,
            max,
            step,
            timeslots,
            total_minutes,
            slot_minutes: num_slots as i64 * step,
            groups,
        })
    }

    pub fn min(&self) -> DateTime<Utc> {
        self.min
    }

    pub fn max(&self) -> DateTime<Utc> {
        self.max
    }

    pub fn step(&self) -> i64 {
        self.step
    }

    pub fn timeslots(&self) -> usize {
        self.timeslots
    }

    /// Gutter rows; each inner vector holds the slot instants of one group.
    pub fn groups(&self) -> &[Vec<DateTime<Utc>>] {
        &self.groups
    }

    /// Minutes from the column start, clamped to the displayed span.
    pub fn position_of(&self, instant: DateTime<Utc>) -> i64 {
        let clamped = instant.clamp(self.min, self.max);
        dates::minute_diff(self.min, clamped).min(self.total_minutes)
    }

    /// Project an interval onto the column as percentages.
    pub fn range_of(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> SlotRange {
        let start = start.clamp(self.min, self.max);
        let end = end.clamp(self.min, self.max);
        let start_minutes = self.position_of(start);
        let end_minutes = self.position_of(end);

        let top = (start_minutes as f64 / self.slot_minutes as f64) * 100.0;
        let bottom = (end_minutes as f64 / self.slot_minutes as f64) * 100.0;

        SlotRange {
            top,
            height: bottom - top,
            start_minutes,
            end_minutes,
            start,
            end,
        }
    }

    /// Whether an appointment starting at `instant` began before this day's
    /// displayed span.
    pub fn starts_before_day(&self, instant: DateTime<Utc>) -> bool {
        instant < self.min
    }

    /// Whether an appointment ending at `instant` runs past this day's
    /// displayed span.
    pub fn starts_after_day(&self, instant: DateTime<Utc>) -> bool {
        instant > self.max
    }

    /// Whether the time-of-day of `instant` falls before the displayed span.
    pub fn starts_before(&self, instant: DateTime<Utc>) -> bool {
        dates::merge(self.min, instant) < self.min
    }

    /// Whether the time-of-day of `instant` falls after the displayed span.
    pub fn starts_after(&self, instant: DateTime<Utc>) -> bool {
        dates::merge(self.min, instant) > self.max
    }

    /// The slot instant closest to a percent offset within the column.
    pub fn closest_slot_to(&self, percent: f64) -> DateTime<Utc> {
        let minutes = (percent.clamp(0.0, 100.0) / 100.0) * self.slot_minutes as f64;
        let slot = (minutes / self.step as f64).floor() as i64;
        self.min + Duration::minutes(slot * self.step)
    }

    /// The slot immediately after `slot`, clamped to the displayed span.
    pub fn next_slot(&self, slot: DateTime<Utc>) -> DateTime<Utc> {
        (slot + Duration::minutes(self.step)).min(self.max)
    }

    /// Percent offset of the now-indicator, or `None` when `now` is outside
    /// the displayed span.
    pub fn current_time_position(&self, now: DateTime<Utc>) -> Option<f64> {
        if now < self.min || now > self.max {
            return None;
        }
        Some((self.position_of(now) as f64 / self.slot_minutes as f64) * 100.0)
    }
}
