//! Shared helpers for the CLI commands.

use std::io::Read;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use timetiler_core::Appointment;

/// Parse a `YYYY-MM-DD` argument.
pub fn parse_date(value: &str) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| format!("'{value}' is not a YYYY-MM-DD date: {e}").into())
}

/// Midnight of a parsed date.
pub fn date_instant(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Read a JSON array of appointments from a file, or stdin for `-`.
pub fn read_appointments(path: &str) -> Result<Vec<Appointment>, Box<dyn std::error::Error>> {
    let content = if path == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(path)?
    };
    let appointments: Vec<Appointment> = serde_json::from_str(&content)?;
    Ok(appointments)
}
