//! Continuous-time layout for a single day column.
//!
//! Projects each appointment onto the column's vertical span via
//! [`TimeSlotMetrics`] and hands horizontal packing to a pluggable
//! strategy: the default overlap packing lets appointments cascade over
//! one another, while the no-overlap packing tiles them strictly side by
//! side.

mod no_overlap;
mod overlap;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::appointment::AppointmentLike;
use crate::layout::slots::TimeSlotMetrics;

/// Packing strategy for a day column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DayLayoutAlgorithm {
    /// Cascading packing: later appointments overlay earlier ones, widened
    /// so every title stays readable.
    #[default]
    Overlap,
    /// Strict tiling: overlapping appointments split the column evenly.
    NoOverlap,
}

impl DayLayoutAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Overlap => "overlap",
            Self::NoOverlap => "no-overlap",
        }
    }
}

impl fmt::Display for DayLayoutAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DayLayoutAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "overlap" => Ok(Self::Overlap),
            "no-overlap" | "no_overlap" => Ok(Self::NoOverlap),
            other => Err(format!("unknown day layout algorithm: {other}")),
        }
    }
}

/// Percent-based geometry of one appointment within its day column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SlotStyle {
    pub top: f64,
    pub height: f64,
    pub width: f64,
    pub x_offset: f64,
}

/// An appointment paired with its computed column geometry.
#[derive(Debug, Serialize)]
pub struct StyledAppointment<'a, A> {
    pub appointment: &'a A,
    pub style: SlotStyle,
}

/// Lay out one day column.
///
/// Input must already be filtered to appointments touching the column's
/// displayed span. `minimum_start_difference` (minutes) treats appointments
/// starting within the threshold as concurrent, so near-simultaneous short
/// appointments don't render as slivers; callers usually derive it as
/// `ceil(step * timeslots / 2)`.
pub fn styled_appointments<'a, A: AppointmentLike>(
    appointments: impl IntoIterator<Item = &'a A>,
    metrics: &TimeSlotMetrics,
    minimum_start_difference: i64,
    algorithm: DayLayoutAlgorithm,
) -> Vec<StyledAppointment<'a, A>> {
    let appointments: Vec<&'a A> = appointments.into_iter().collect();
    match algorithm {
        DayLayoutAlgorithm::Overlap => {
            overlap::layout(appointments, metrics, minimum_start_difference)
        }
        DayLayoutAlgorithm::NoOverlap => {
            no_overlap::layout(appointments, metrics, minimum_start_difference)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algorithm_parses_from_kebab_case() {
        assert_eq!(
            "overlap".parse::<DayLayoutAlgorithm>().unwrap(),
            DayLayoutAlgorithm::Overlap
        );
        assert_eq!(
            "no-overlap".parse::<DayLayoutAlgorithm>().unwrap(),
            DayLayoutAlgorithm::NoOverlap
        );
        assert!("stacked".parse::<DayLayoutAlgorithm>().is_err());
    }

    #[test]
    fn algorithm_serde_uses_kebab_case() {
        let json = serde_json::to_string(&DayLayoutAlgorithm::NoOverlap).unwrap();
        assert_eq!(json, "\"no-overlap\"");
        let parsed: DayLayoutAlgorithm = serde_json::from_str("\"overlap\"").unwrap();
        assert_eq!(parsed, DayLayoutAlgorithm::Overlap);
    }
}
