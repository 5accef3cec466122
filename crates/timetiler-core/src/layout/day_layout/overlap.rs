//! Cascading day-column packing.
//!
//! Every appointment takes exactly one of three roles. A *container* is the
//! first appointment of an overlap group and spans the group's whole
//! duration; a *row* is an appointment that overlaps its container but no
//! earlier row; *leaves* share a start bucket (or overlap) with their row.
//! Widths divide the column among the roles, then grow by a fixed factor so
//! each appointment peeks out from under the one covering it.

use std::collections::VecDeque;

use crate::appointment::AppointmentLike;
use crate::layout::slots::TimeSlotMetrics;

use super::{SlotStyle, StyledAppointment};

/// Growth factor applied to every element with a neighbor to its right.
const GROW: f64 = 1.7;

#[derive(Debug, Clone, Copy)]
struct Proxy {
    /// Index into the caller's appointment list.
    index: usize,
    /// Start offset in minutes from the column start, clamped.
    start: i64,
    /// End offset in minutes from the column start, clamped.
    end: i64,
    start_ms: i64,
    end_ms: i64,
    top: f64,
    height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Role {
    Container,
    Row,
    Leaf,
}

pub(super) fn layout<'a, A: AppointmentLike>(
    appointments: Vec<&'a A>,
    metrics: &TimeSlotMetrics,
    minimum_start_difference: i64,
) -> Vec<StyledAppointment<'a, A>> {
    let proxies = appointments
        .iter()
        .enumerate()
        .map(|(index, appointment)| {
            let range = metrics.range_of(appointment.start(), appointment.end());
            Proxy {
                index,
                start: range.start_minutes,
                end: range.end_minutes,
                start_ms: range.start.timestamp_millis(),
                end_ms: range.end.timestamp_millis(),
                top: range.top,
                height: range.height,
            }
        })
        .collect();

    let order = sort_by_render(proxies);
    let n = order.len();

    // Group overlapping appointments while keeping render order.
    let mut role = vec![Role::Container; n];
    let mut container_of = vec![0usize; n];
    let mut row_of = vec![0usize; n];
    let mut rows: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut leaves: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut containers: Vec<usize> = Vec::new();

    for i in 0..n {
        let found = containers.iter().copied().find(|&c| {
            order[c].end > order[i].start
                || (order[i].start - order[c].start).abs() < minimum_start_difference
        });

        let Some(container) = found else {
            containers.push(i);
            continue;
        };
        container_of[i] = container;

        // Latest row that shares a start bucket or overlaps wins.
        let mut placed = None;
        for &row in rows[container].iter().rev() {
            if on_same_row(&order[row], &order[i], minimum_start_difference) {
                placed = Some(row);
                break;
            }
        }

        match placed {
            Some(row) => {
                role[i] = Role::Leaf;
                row_of[i] = row;
                leaves[row].push(i);
            }
            None => {
                role[i] = Role::Row;
                rows[container].push(i);
            }
        }
    }

    // Base widths: the container divides the column by its widest row; each
    // row divides what the container leaves among itself and its leaves;
    // leaves inherit their row's share.
    let mut base = vec![0.0f64; n];
    for &c in &containers {
        let columns = rows[c]
            .iter()
            .map(|&row| leaves[row].len() + 1)
            .max()
            .unwrap_or(0)
            + 1;
        base[c] = 100.0 / columns as f64;

        let available = 100.0 - base[c];
        for &row in &rows[c] {
            base[row] = available / (leaves[row].len() + 1) as f64;
            for &leaf in &leaves[row] {
                base[leaf] = base[row];
            }
        }
    }

    order
        .iter()
        .enumerate()
        .map(|(i, proxy)| {
            let grown = (base[i] * GROW).min(100.0);
            let width = match role[i] {
                // Containers can always grow.
                Role::Container => grown,
                // Rows grow only over their own leaves.
                Role::Row => {
                    if leaves[i].is_empty() {
                        base[i]
                    } else {
                        grown
                    }
                }
                // The last leaf of a row has nothing to grow over.
                Role::Leaf => {
                    if leaves[row_of[i]].last() == Some(&i) {
                        base[i]
                    } else {
                        grown
                    }
                }
            };

            let x_offset = match role[i] {
                Role::Container => 0.0,
                Role::Row => base[container_of[i]],
                Role::Leaf => {
                    let row = row_of[i];
                    let slot = leaves[row].iter().position(|&l| l == i).unwrap_or(0) + 1;
                    base[container_of[row]] + slot as f64 * base[row]
                }
            };

            StyledAppointment {
                appointment: appointments[proxy.index],
                style: SlotStyle {
                    top: proxy.top,
                    height: proxy.height,
                    width,
                    x_offset: x_offset.max(0.0),
                },
            }
        })
        .collect()
}

/// Sort for render: by start, longest first, then regroup so each overlap
/// group stays contiguous. The first appointment past the current one's
/// end is pulled forward next to it.
fn sort_by_render(mut proxies: Vec<Proxy>) -> Vec<Proxy> {
    proxies.sort_by(|a, b| a.start_ms.cmp(&b.start_ms).then(b.end_ms.cmp(&a.end_ms)));

    let mut queue: VecDeque<Proxy> = proxies.into();
    let mut sorted = Vec::with_capacity(queue.len());

    while let Some(proxy) = queue.pop_front() {
        let end_ms = proxy.end_ms;
        sorted.push(proxy);

        for i in 0..queue.len() {
            // Still inside the current group, keep looking.
            if end_ms > queue[i].start_ms {
                continue;
            }
            // Found the start of the next group; move it forward if it is
            // not already adjacent.
            if i > 0 {
                if let Some(next) = queue.remove(i) {
                    sorted.push(next);
                }
            }
            break;
        }
    }

    sorted
}

fn on_same_row(row: &Proxy, proxy: &Proxy, minimum_start_difference: i64) -> bool {
    // Same start bucket, or the candidate starts inside the row.
    (proxy.start - row.start).abs() < minimum_start_difference
        || (proxy.start > row.start && proxy.start < row.end)
}
