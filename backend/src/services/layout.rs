//! Grid geometry for a whole scheduling view.
//!
//! [`compute_layout`] drives the per-column overlap layout across every
//! column and derives the grid sizing directives the presentation layer
//! consumes. The result borrows the caller's tasks and is meant to be thrown
//! away after one render.

use serde::Serialize;

use crate::algorithms::{compute_task_positions, group_tasks_by_column, GroupSlot, TaskPosition};
use crate::models::{Column, ColumnId, ColumnMap, Task, TimeWindow};

/// Width of the leading time-label column.
pub const TIME_COLUMN_WIDTH_PX: u32 = 96;

/// Share of a column's width available to tasks; the rest is a margin.
pub const TASK_AREA_PERCENT: f64 = 90.0;

pub const DEFAULT_HOUR_HEIGHT: f64 = 60.0;
pub const DEFAULT_START_HOUR: u32 = 0;
pub const DEFAULT_END_HOUR: u32 = 23;

/// Everything one render of the grid needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShadulerCalculations<'a, X> {
    pub hours: Vec<u32>,
    pub tasks_by_column: ColumnMap<Vec<&'a Task<X>>>,
    pub task_positions: ColumnMap<Vec<TaskPosition<'a, X>>>,
    /// CSS grid template for columns, e.g. `96px repeat(3, 1fr)`.
    pub grid_template_columns: String,
    /// CSS grid template for rows, e.g. `repeat(23, 60px)`.
    pub grid_template_rows: String,
    #[serde(skip)]
    pub window: TimeWindow,
    #[serde(skip)]
    pub hour_height: f64,
    /// Number of columns as given, duplicates included.
    #[serde(skip)]
    pub total_columns: usize,
}

/// Horizontal slice of the tasks area, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HorizontalPlacement {
    pub left_percent: f64,
    pub width_percent: f64,
}

/// A task box with absolute coordinates inside the tasks overlay.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedTask<'a, X> {
    pub task: &'a Task<X>,
    pub column_id: ColumnId,
    pub column_index: usize,
    pub left_percent: f64,
    pub width_percent: f64,
    pub top: f64,
    pub height: f64,
    #[serde(flatten)]
    pub group: Option<GroupSlot>,
}

/// Lay out every column of the grid.
///
/// Columns are placed left to right in slice order; each column's index is
/// handed to the overlap layout so placements can be translated into
/// absolute coordinates. Inputs are never validated: see
/// [`compute_task_positions`] for how malformed tasks are handled.
pub fn compute_layout<'a, X, C>(
    columns: &[Column<C>],
    tasks: &'a [Task<X>],
    window: TimeWindow,
    hour_height: f64,
) -> ShadulerCalculations<'a, X> {
    let hours: Vec<u32> = window.hours().collect();
    let tasks_by_column = group_tasks_by_column(tasks, columns);

    let mut task_positions = ColumnMap::with_capacity(columns.len());
    for (column_index, column) in columns.iter().enumerate() {
        let bucket = tasks_by_column
            .get(&column.id)
            .map(Vec::as_slice)
            .unwrap_or_default();
        let positions = compute_task_positions(bucket, column_index, window, hour_height);
        task_positions.insert(column.id.clone(), positions);
    }

    ShadulerCalculations {
        hours,
        tasks_by_column,
        task_positions,
        grid_template_columns: column_template(columns.len()),
        grid_template_rows: row_template(window, hour_height),
        window,
        hour_height,
        total_columns: columns.len(),
    }
}

/// Fixed time-label column followed by one equal unit per resource column.
pub fn column_template(column_count: usize) -> String {
    format!("{}px repeat({}, 1fr)", TIME_COLUMN_WIDTH_PX, column_count)
}

/// One fixed-height row per hour of the window.
pub fn row_template(window: TimeWindow, hour_height: f64) -> String {
    format!("repeat({}, {}px)", window.len_hours(), hour_height)
}

/// Translate a column index and group slot into a slice of the tasks area.
///
/// Column `n` of `total_columns` owns `[n/total, (n+1)/total)` of the width.
/// Inside it, ungrouped tasks take [`TASK_AREA_PERCENT`]; grouped tasks split
/// that share evenly in group order.
pub fn horizontal_placement(
    column_index: usize,
    total_columns: usize,
    group: Option<GroupSlot>,
) -> HorizontalPlacement {
    if total_columns == 0 {
        return HorizontalPlacement {
            left_percent: 0.0,
            width_percent: 0.0,
        };
    }
    let column_left = column_index as f64 / total_columns as f64 * 100.0;
    let column_width = 100.0 / total_columns as f64;

    let (task_left, task_width) = match group {
        Some(slot) if slot.group_count > 1 => {
            let width = TASK_AREA_PERCENT / slot.group_count as f64;
            (slot.group_index as f64 * width, width)
        }
        _ => (0.0, TASK_AREA_PERCENT),
    };

    HorizontalPlacement {
        left_percent: column_left + task_left * column_width / 100.0,
        width_percent: task_width * column_width / 100.0,
    }
}

impl<X> TaskPosition<'_, X> {
    pub fn horizontal(&self, total_columns: usize) -> HorizontalPlacement {
        horizontal_placement(self.column_index, total_columns, self.group)
    }
}

impl<'a, X> ShadulerCalculations<'a, X> {
    /// Height of the tasks overlay in hour-height units.
    pub fn overlay_height(&self) -> f64 {
        self.window.len_hours() as f64 * self.hour_height
    }

    pub fn positions_for(&self, column: &ColumnId) -> &[TaskPosition<'a, X>] {
        self.task_positions
            .get(column)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Flatten all positions into absolute boxes, column by column.
    pub fn placements(&self) -> Vec<PlacedTask<'a, X>> {
        let total_columns = self.total_columns;
        self.task_positions
            .iter()
            .flat_map(|(column_id, positions)| {
                positions.iter().map(move |position| {
                    let horizontal = position.horizontal(total_columns);
                    PlacedTask {
                        task: position.task,
                        column_id: column_id.clone(),
                        column_index: position.column_index,
                        left_percent: horizontal.left_percent,
                        width_percent: horizontal.width_percent,
                        top: position.top,
                        height: position.height,
                        group: position.group,
                    }
                })
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
