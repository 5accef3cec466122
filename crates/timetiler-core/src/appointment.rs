//! Appointment types and the accessor capability trait.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Capability-based access to appointment fields.
///
/// The layout engine never assumes a concrete appointment shape; any type
/// that can produce a start, an end, and an all-day flag can be laid out.
pub trait AppointmentLike {
    fn start(&self) -> DateTime<Utc>;
    fn end(&self) -> DateTime<Utc>;
    fn all_day(&self) -> bool;
}

impl<T: AppointmentLike + ?Sized> AppointmentLike for &T {
    fn start(&self) -> DateTime<Utc> {
        (**self).start()
    }

    fn end(&self) -> DateTime<Utc> {
        (**self).end()
    }

    fn all_day(&self) -> bool {
        (**self).all_day()
    }
}

/// A time-bounded item to lay out on the calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(default)]
    pub all_day: bool,
    #[serde(default)]
    pub resource: Option<String>,
}

impl Appointment {
    /// Create a new appointment with a generated id.
    ///
    /// No time-range validation happens here: the layout engine treats an
    /// appointment with `end < start` as zero-duration rather than rejecting
    /// it, so rendering stays resilient to bad data. Use
    /// [`try_new`](Self::try_new) when the caller wants the check.
    pub fn new(title: impl Into<String>, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            start,
            end,
            all_day: false,
            resource: None,
        }
    }

    /// Create a new appointment, validating the time range.
    ///
    /// # Errors
    ///
    /// Returns an error if `end` is earlier than `start`.
    pub fn try_new(
        title: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        if end < start {
            return Err(ValidationError::InvalidTimeRange { start, end });
        }
        Ok(Self::new(title, start, end))
    }

    /// Mark as an all-day appointment.
    pub fn with_all_day(mut self, all_day: bool) -> Self {
        self.all_day = all_day;
        self
    }

    /// Attach a resource identifier.
    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    /// Get duration in minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

impl AppointmentLike for Appointment {
    fn start(&self) -> DateTime<Utc> {
        self.start
    }

    fn end(&self) -> DateTime<Utc> {
        self.end
    }

    fn all_day(&self) -> bool {
        self.all_day
    }
}
