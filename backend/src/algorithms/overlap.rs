//! Overlap layout for a single column.
//!
//! Tasks are clipped to the visible window, ordered by start and swept into
//! overlap groups. Grouping keeps exactly one group open at a time: a task
//! joins the open group when it overlaps any member, otherwise the group is
//! closed for good and the task opens the next one. This is not interval
//! graph clustering; a later task that would bridge two closed groups does
//! not merge them, and the renderer relies on those exact boundaries.

use serde::Serialize;
use std::ops::Range;

use crate::models::{time_to_minutes, Task, TimeWindow, MINUTES_PER_HOUR};

/// Slot of a task inside an overlap group with more than one member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSlot {
    /// 0-based position in the group, in start order.
    pub group_index: usize,
    /// Number of tasks in the group (always > 1).
    pub group_count: usize,
}

/// Vertical geometry of one task, produced fresh by every layout pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPosition<'a, X> {
    pub task: &'a Task<X>,
    /// Offset from the top of the window, in hour-height units.
    pub top: f64,
    /// Never negative; degenerate tasks get zero height.
    pub height: f64,
    pub column_index: usize,
    /// Start after clipping to the window, in minutes since midnight.
    pub start_minutes: f64,
    /// End after clipping to the window, in minutes since midnight.
    pub end_minutes: f64,
    /// `None` when the task is alone in its group and spans the full width.
    #[serde(flatten)]
    pub group: Option<GroupSlot>,
}

impl<X> TaskPosition<'_, X> {
    pub fn group_index(&self) -> Option<usize> {
        self.group.map(|slot| slot.group_index)
    }

    pub fn group_count(&self) -> Option<usize> {
        self.group.map(|slot| slot.group_count)
    }
}

struct Span<'a, X> {
    task: &'a Task<X>,
    start: f64,
    end: f64,
}

/// Strict half-open overlap: touching intervals do not overlap.
///
/// Comparisons against `NaN` are false, so a span with an unparseable bound
/// is considered overlapping.
fn overlaps(start: f64, end: f64, other_start: f64, other_end: f64) -> bool {
    !(end <= other_start || start >= other_end)
}

// `f64::max`/`min` swallow NaN; clipping must keep it.
fn clip_start(start: f64, window_start: f64) -> f64 {
    if start < window_start {
        window_start
    } else {
        start
    }
}

fn clip_end(end: f64, window_end: f64) -> f64 {
    if end > window_end {
        window_end
    } else {
        end
    }
}

fn sort_key(start: f64) -> f64 {
    if start.is_nan() {
        f64::INFINITY
    } else {
        start
    }
}

/// Sweep start-ordered intervals into overlap groups.
///
/// Returns contiguous index ranges into `intervals`. Only the currently open
/// group is compared against; closed groups never reopen.
pub fn partition_overlap_groups(intervals: &[(f64, f64)]) -> Vec<Range<usize>> {
    let mut groups = Vec::new();
    let mut open = 0..0;

    for (index, &(start, end)) in intervals.iter().enumerate() {
        let joins = intervals[open.clone()]
            .iter()
            .any(|&(member_start, member_end)| overlaps(start, end, member_start, member_end));

        if open.is_empty() || joins {
            if open.is_empty() {
                open.start = index;
            }
            open.end = index + 1;
        } else {
            groups.push(open);
            open = index..index + 1;
        }
    }
    if !open.is_empty() {
        groups.push(open);
    }
    groups
}

/// Lay out the tasks of one column.
///
/// Tasks that do not intersect the window are skipped; the rest are clipped
/// to it, sorted by clipped start (stable, so ties keep input order) and
/// grouped with [`partition_overlap_groups`]. `hour_height` converts minutes
/// into the caller's unit.
///
/// Malformed times never panic: spans with `NaN` bounds sort after every
/// valid span and are placed with zero height at the top of the window.
pub fn compute_task_positions<'a, X>(
    tasks: &[&'a Task<X>],
    column_index: usize,
    window: TimeWindow,
    hour_height: f64,
) -> Vec<TaskPosition<'a, X>> {
    if window.is_empty() {
        return Vec::new();
    }
    let window_start = window.start_minutes();
    let window_end = window.end_minutes();

    let mut spans: Vec<Span<'a, X>> = tasks
        .iter()
        .map(|task| Span {
            task: *task,
            start: time_to_minutes(&task.start_time),
            end: time_to_minutes(&task.end_time),
        })
        .filter(|span| overlaps(span.start, span.end, window_start, window_end))
        .map(|span| Span {
            start: clip_start(span.start, window_start),
            end: clip_end(span.end, window_end),
            ..span
        })
        .collect();

    spans.sort_by(|a, b| sort_key(a.start).total_cmp(&sort_key(b.start)));

    let bounds: Vec<(f64, f64)> = spans.iter().map(|span| (span.start, span.end)).collect();
    let groups = partition_overlap_groups(&bounds);

    let mut positions = Vec::with_capacity(spans.len());
    for group in groups {
        let group_count = group.len();
        for (group_index, span) in spans[group].iter().enumerate() {
            let top = (span.start - window_start) / MINUTES_PER_HOUR * hour_height;
            let height = (span.end - span.start) / MINUTES_PER_HOUR * hour_height;

            positions.push(TaskPosition {
                task: span.task,
                top: if top.is_finite() { top } else { 0.0 },
                height: if height > 0.0 { height } else { 0.0 },
                column_index,
                start_minutes: span.start,
                end_minutes: span.end,
                group: (group_count > 1).then_some(GroupSlot {
                    group_index,
                    group_count,
                }),
            });
        }
    }
    positions
}

#[cfg(test)]
#[path = "overlap_tests.rs"]
mod tests;
