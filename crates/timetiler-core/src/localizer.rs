//! Localization surface for the view adapters.
//!
//! The engine never interprets format names; they are opaque keys handed to
//! whatever localizer the host supplies. [`ChronoLocalizer`] is the built-in
//! mapping onto chrono format strings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Known format keys. Hosts may define additional ones; the engine only
/// passes them through.
pub mod format_keys {
    pub const DAY: &str = "day_format";
    pub const DAY_HEADER: &str = "day_header_format";
    pub const DAY_RANGE_HEADER: &str = "day_range_header_format";
    pub const AGENDA_DATE: &str = "agenda_date_format";
    pub const AGENDA_TIME: &str = "agenda_time_format";
    pub const AGENDA_TIME_RANGE: &str = "agenda_time_range_format";
    pub const AGENDA_HEADER: &str = "agenda_header_format";
    pub const TIME_RANGE: &str = "time_range_format";
    pub const TIME_RANGE_START: &str = "time_range_start_format";
    pub const TIME_RANGE_END: &str = "time_range_end_format";
}

/// Display strings used by the view adapters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Messages {
    pub date: String,
    pub time: String,
    pub appointment: String,
    pub all_day: String,
    pub no_appointments_in_range: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            date: "Date".to_string(),
            time: "Time".to_string(),
            appointment: "Appointment".to_string(),
            all_day: "all day".to_string(),
            no_appointments_in_range: "There are no appointments in this range.".to_string(),
        }
    }
}

impl Messages {
    /// Label for segments deferred past the level limit.
    pub fn show_more(&self, count: usize) -> String {
        format!("+{count} more")
    }
}

/// Formats instants and ranges for display.
pub trait Localizer {
    fn format(&self, instant: DateTime<Utc>, key: &str) -> String;

    fn format_range(&self, start: DateTime<Utc>, end: DateTime<Utc>, key: &str) -> String {
        format!("{} \u{2013} {}", self.format(start, key), self.format(end, key))
    }

    fn messages(&self) -> &Messages;
}

/// Localizer backed by chrono format strings.
#[derive(Debug, Clone, Default)]
pub struct ChronoLocalizer {
    messages: Messages,
}

impl ChronoLocalizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_messages(messages: Messages) -> Self {
        Self { messages }
    }

    fn pattern(key: &str) -> &'static str {
        match key {
            format_keys::DAY => "%a %d",
            format_keys::DAY_HEADER => "%A, %B %d",
            format_keys::DAY_RANGE_HEADER | format_keys::AGENDA_HEADER => "%B %d, %Y",
            format_keys::AGENDA_DATE => "%a %b %d",
            format_keys::AGENDA_TIME
            | format_keys::AGENDA_TIME_RANGE
            | format_keys::TIME_RANGE
            | format_keys::TIME_RANGE_START
            | format_keys::TIME_RANGE_END => "%H:%M",
            _ => "%Y-%m-%d %H:%M",
        }
    }
}

impl Localizer for ChronoLocalizer {
    fn format(&self, instant: DateTime<Utc>, key: &str) -> String {
        instant.format(Self::pattern(key)).to_string()
    }

    fn messages(&self) -> &Messages {
        &self.messages
    }
}
