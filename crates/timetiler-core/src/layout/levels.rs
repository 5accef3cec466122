//! Greedy first-fit level assignment for day-range segments.
//!
//! Classic interval-graph coloring, processed in caller-supplied order:
//! segments are expected to arrive pre-sorted (see [`sort_appointments`])
//! so that long and all-day appointments anchor the top levels. The greedy
//! placement is deliberately kept as-is rather than replaced with an optimal
//! coloring: visual stability depends on its exact, order-preserving
//! behavior.
//!
//! [`sort_appointments`]: crate::layout::sort_appointments

use serde::Serialize;

use super::segment::{segments_overlap, Segment};

/// The leveled arrangement of one row of segments.
///
/// Within each level segments are sorted by ascending `left`; ties keep
/// their arrival order. When a `limit` is set, segments that would need a
/// level beyond it land in `extra` (the "+N more" affordance).
#[derive(Debug, Serialize)]
pub struct AppointmentLevels<'a, A> {
    pub levels: Vec<Vec<Segment<'a, A>>>,
    pub limit: Option<usize>,
    pub extra: Vec<Segment<'a, A>>,
}

impl<'a, A> AppointmentLevels<'a, A> {
    /// Number of segments deferred past the level limit.
    pub fn extra_count(&self) -> usize {
        self.extra.len()
    }
}

/// Assign each segment to the first level where it fits without overlap.
///
/// Deterministic: the same input order produces the identical arrangement.
/// `limit = Some(0)` is degenerate but valid; every segment goes to `extra`.
pub fn appointment_levels<'a, A>(
    segments: Vec<Segment<'a, A>>,
    limit: Option<usize>,
) -> AppointmentLevels<'a, A> {
    let max_levels = limit.unwrap_or(usize::MAX);
    let mut levels: Vec<Vec<Segment<'a, A>>> = Vec::new();
    let mut extra: Vec<Segment<'a, A>> = Vec::new();

    for segment in segments {
        match levels
            .iter()
            .position(|level| !segments_overlap(&segment, level))
        {
            Some(index) => levels[index].push(segment),
            None if levels.len() < max_levels => levels.push(vec![segment]),
            None => extra.push(segment),
        }
    }

    for level in &mut levels {
        // Stable: equal lefts keep first-fit arrival order.
        level.sort_by_key(|segment| segment.left);
    }

    AppointmentLevels {
        levels,
        limit,
        extra,
    }
}
