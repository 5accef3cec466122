//! Strict tiling day-column packing.
//!
//! Starts from the cascading pass's vertical geometry, then reassigns the
//! horizontal axis: appointments whose vertical extents intersect become
//! "friends", each takes the smallest column index unused among its placed
//! friends, and every transitive friend cluster splits the column width
//! evenly among its columns.

use crate::appointment::AppointmentLike;
use crate::layout::slots::TimeSlotMetrics;

use super::{overlap, SlotStyle, StyledAppointment};

pub(super) fn layout<'a, A: AppointmentLike>(
    appointments: Vec<&'a A>,
    metrics: &TimeSlotMetrics,
    minimum_start_difference: i64,
) -> Vec<StyledAppointment<'a, A>> {
    let mut styled = overlap::layout(appointments, metrics, minimum_start_difference);

    styled.sort_by(|a, b| {
        a.style.top.total_cmp(&b.style.top).then_with(|| {
            let bottom_a = a.style.top + a.style.height;
            let bottom_b = b.style.top + b.style.height;
            bottom_b.total_cmp(&bottom_a)
        })
    });

    let n = styled.len();
    let mut friends: Vec<Vec<usize>> = vec![Vec::new(); n];
    for i in 0..n {
        for j in (i + 1)..n {
            if vertically_intersect(&styled[i].style, &styled[j].style) {
                friends[i].push(j);
                friends[j].push(i);
            }
        }
    }

    // Smallest column index not taken by an already-placed friend.
    let mut column = vec![0usize; n];
    let mut placed = vec![false; n];
    for i in 0..n {
        let mut taken = vec![false; n.max(1)];
        for &friend in &friends[i] {
            if placed[friend] {
                taken[column[friend]] = true;
            }
        }
        column[i] = taken.iter().position(|t| !t).unwrap_or(0);
        placed[i] = true;
    }

    // A transitive friend cluster shares one column count, so every member
    // of the cluster renders at the same width.
    let mut visited = vec![false; n];
    for i in 0..n {
        if visited[i] {
            continue;
        }
        visited[i] = true;
        let mut members = vec![i];
        let mut head = 0;
        while head < members.len() {
            let current = members[head];
            head += 1;
            for &friend in &friends[current] {
                if !visited[friend] {
                    visited[friend] = true;
                    members.push(friend);
                }
            }
        }

        let columns = members.iter().map(|&m| column[m]).max().unwrap_or(0) + 1;
        let width = 100.0 / columns as f64;
        for &member in &members {
            styled[member].style.width = width;
            styled[member].style.x_offset = column[member] as f64 * width;
        }
    }

    styled
}

fn vertically_intersect(a: &SlotStyle, b: &SlotStyle) -> bool {
    let (a_top, a_bottom) = (a.top, a.top + a.height);
    let (b_top, b_bottom) = (b.top, b.top + b.height);
    (b_top <= a_top && a_top < b_bottom) || (a_top <= b_top && b_top < a_bottom)
}

#[cfg(test)]
mod tests {
    use super::super::{styled_appointments, DayLayoutAlgorithm};
    use crate::appointment::Appointment;
    use crate::layout::slots::TimeSlotMetrics;
    use chrono::{DateTime, TimeZone, Utc};

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2017, 1, 8, h, m, 0).unwrap()
    }

    fn metrics() -> TimeSlotMetrics {
        TimeSlotMetrics::new(at(0, 0), at(23, 59), 30, 2).unwrap()
    }

    fn tile(appointments: &[Appointment]) -> Vec<(String, f64, f64)> {
        styled_appointments(
            appointments.iter(),
            &metrics(),
            30,
            DayLayoutAlgorithm::NoOverlap,
        )
        .into_iter()
        .map(|s| (s.appointment.title.clone(), s.style.width, s.style.x_offset))
        .collect()
    }

    #[test]
    fn two_overlapping_appointments_split_the_column() {
        let tiles = tile(&[
            Appointment::new("a", at(9, 0), at(11, 0)),
            Appointment::new("b", at(10, 0), at(12, 0)),
        ]);

        for (_, width, _) in &tiles {
            assert!((width - 50.0).abs() < 1e-9);
        }
        assert_eq!(tiles[0].2, 0.0);
        assert!((tiles[1].2 - 50.0).abs() < 1e-9);
    }

    #[test]
    fn chained_overlaps_share_one_cluster_width() {
        // a overlaps b, b overlaps c, but a and c are disjoint; the chain
        // still forms one cluster of two columns.
        let tiles = tile(&[
            Appointment::new("a", at(9, 0), at(10, 30)),
            Appointment::new("b", at(10, 0), at(12, 0)),
            Appointment::new("c", at(11, 30), at(13, 0)),
        ]);

        for (_, width, _) in &tiles {
            assert!((width - 50.0).abs() < 1e-9);
        }
        // a and c reuse column zero around b.
        assert_eq!(tiles[0].2, 0.0);
        assert!((tiles[1].2 - 50.0).abs() < 1e-9);
        assert_eq!(tiles[2].2, 0.0);
    }

    #[test]
    fn disjoint_appointments_keep_the_full_width() {
        let tiles = tile(&[
            Appointment::new("a", at(9, 0), at(10, 0)),
            Appointment::new("b", at(14, 0), at(15, 0)),
        ]);

        for (_, width, x_offset) in &tiles {
            assert!((width - 100.0).abs() < 1e-9);
            assert_eq!(*x_offset, 0.0);
        }
    }

    #[test]
    fn touching_appointments_do_not_become_friends() {
        let tiles = tile(&[
            Appointment::new("a", at(9, 0), at(10, 0)),
            Appointment::new("b", at(10, 0), at(11, 0)),
        ]);

        for (_, width, _) in &tiles {
            assert!((width - 100.0).abs() < 1e-9);
        }
    }
}
