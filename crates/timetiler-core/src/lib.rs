//! # Timetiler Core Library
//!
//! This library provides the appointment layout engine behind a scheduling
//! calendar: given time-bounded appointments and a display range, it
//! computes the non-overlapping visual arrangement (which level each
//! appointment occupies, how many day columns it spans, and the fractional
//! geometry it should render at) so overlapping appointments tile legibly
//! instead of occluding one another.
//!
//! ## Architecture
//!
//! - **Layout**: interval segmentation, greedy first-fit level assignment,
//!   the stacking sort policy, and the continuous-time day-column packer
//!   with pluggable strategies
//! - **Views**: pure data transforms behind the agenda, day, week, and
//!   work-week views
//! - **Dates**: day-granularity calendar arithmetic and the validated
//!   [`DayRange`]
//! - **Config**: TOML-based view configuration
//!
//! The engine is purely functional: no I/O, no shared state, idempotent
//! per call, so hosts can safely recompute on every frame.
//!
//! ## Key Components
//!
//! - [`layout::appointment_segments`] / [`layout::appointment_levels`]:
//!   day-range tiling
//! - [`layout::styled_appointments`]: day-column geometry
//! - [`views::TimeGridView`] / [`views::AgendaView`]: renderable view data
//! - [`AppointmentLike`]: capability trait for custom appointment shapes

pub mod appointment;
pub mod config;
pub mod dates;
pub mod error;
pub mod layout;
pub mod localizer;
pub mod views;

pub use appointment::{Appointment, AppointmentLike};
pub use config::{SlotConfig, ViewConfig};
pub use dates::{DayRange, Granularity};
pub use error::{ConfigError, CoreError, ValidationError};
pub use layout::{
    appointment_levels, appointment_segments, in_range, segments_overlap, sort_appointments,
    styled_appointments, AppointmentLevels, DayLayoutAlgorithm, Segment, SlotStyle,
    StyledAppointment, TimeSlotMetrics,
};
pub use localizer::{ChronoLocalizer, Localizer, Messages};
