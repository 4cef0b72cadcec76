//! Server-side rendering of a whole scheduler page.
//!
//! Combines a [`ScheduleView`](super::views::ScheduleView) with the layout
//! engine and flattens the result into owned [`LayoutData`] that can be sent
//! to a client.

use crate::db::models::DayData;
use crate::models::{format_time, ColumnId, TimeFormat, TimeWindow};
use crate::routes::layout::{ColumnData, HourLabel, LayoutData, TaskBox};

use super::layout::{compute_layout, DEFAULT_END_HOUR, DEFAULT_HOUR_HEIGHT, DEFAULT_START_HOUR, TIME_COLUMN_WIDTH_PX};
use super::views::{
    build_view, cell_defaults, next_index, previous_index, range_label, status_color_class,
    HeaderLayout, NewTaskDefaults, ViewMode,
};

/// Which view to render and how.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageParams {
    pub selected: usize,
    pub view: ViewMode,
    pub layout: HeaderLayout,
    pub window: TimeWindow,
    pub hour_height: f64,
    pub time_format: TimeFormat,
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            selected: 0,
            view: ViewMode::Day,
            layout: HeaderLayout::Inline,
            window: TimeWindow::clamped(DEFAULT_START_HOUR, DEFAULT_END_HOUR),
            hour_height: DEFAULT_HOUR_HEIGHT,
            time_format: TimeFormat::H24,
        }
    }
}

/// Lay out the selected view of `days`.
pub fn build_page(days: &[DayData], params: &PageParams) -> LayoutData {
    let view = build_view(days, params.selected, params.view, params.layout);
    let calc = compute_layout(&view.columns, &view.tasks, params.window, params.hour_height);

    let tasks = calc
        .placements()
        .into_iter()
        .map(|placed| TaskBox {
            id: placed.task.id.clone(),
            column: placed.column_id,
            name: placed.task.name.clone(),
            start_time: placed.task.start_time.clone(),
            end_time: placed.task.end_time.clone(),
            status: placed.task.extra.status,
            color: status_color_class(placed.task.extra.status).to_string(),
            column_index: placed.column_index,
            left_percent: placed.left_percent,
            width_percent: placed.width_percent,
            top: placed.top,
            height: placed.height,
            group_index: placed.group.map(|slot| slot.group_index),
            group_count: placed.group.map(|slot| slot.group_count),
        })
        .collect();

    LayoutData {
        view: params.view,
        layout: params.layout,
        selected: params.selected,
        previous: previous_index(params.selected),
        next: next_index(params.selected, days.len(), params.view),
        range_label: range_label(days, params.selected, params.view),
        start_hour: params.window.start_hour(),
        end_hour: params.window.end_hour(),
        hour_height: params.hour_height,
        hours: calc
            .hours
            .iter()
            .map(|&hour| HourLabel {
                hour,
                label: format_time(hour, params.time_format),
            })
            .collect(),
        columns: view
            .columns
            .iter()
            .map(|column| ColumnData {
                id: column.id.clone(),
                label: column.label.clone(),
                date: column.extra.date.clone(),
                work_place_id: column.extra.work_place_id,
            })
            .collect(),
        date_headers: view.date_headers.clone(),
        grid_template_columns: calc.grid_template_columns.clone(),
        grid_template_rows: calc.grid_template_rows.clone(),
        time_column_width: TIME_COLUMN_WIDTH_PX,
        overlay_height: calc.overlay_height(),
        tasks,
    }
}

/// Defaults for clicking `column` at `hour` in the selected view.
pub fn page_cell_defaults(
    days: &[DayData],
    params: &PageParams,
    column: &ColumnId,
    hour: u32,
) -> Option<NewTaskDefaults> {
    let view = build_view(days, params.selected, params.view, params.layout);
    cell_defaults(&view, column, hour)
}
