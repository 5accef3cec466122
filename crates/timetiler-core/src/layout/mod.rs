//! The appointment layout engine.
//!
//! This module holds the one piece of real algorithmic work in the crate:
//! - Segment building: projecting appointments onto day-range columns
//! - Level assignment: greedy first-fit tiling of overlapping segments
//! - Sort policy: the deterministic stacking order feeding the levels
//! - Continuous-time layout: percent geometry for single-day time grids
//!
//! Everything here is pure and synchronous; each call owns its output and
//! only borrows the appointments it was handed.

mod day_layout;
mod levels;
mod segment;
mod slots;
mod sort;

pub use day_layout::{styled_appointments, DayLayoutAlgorithm, SlotStyle, StyledAppointment};
pub use levels::{appointment_levels, AppointmentLevels};
pub use segment::{
    appointment_segments, continues_after, continues_prior, in_range, segments_overlap, Segment,
};
pub use slots::{SlotRange, TimeSlotMetrics};
pub use sort::sort_appointments;
