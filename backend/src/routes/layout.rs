use serde::{Deserialize, Serialize};

use crate::db::models::{TaskStatus, WorkPlaceId};
use crate::models::{ColumnId, TaskId};
use crate::services::views::{DateHeader, HeaderLayout, ViewMode};

// =========================================================
// Page layout types
// =========================================================

/// A column header as rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnData {
    pub id: ColumnId,
    pub label: String,
    pub date: String,
    pub work_place_id: WorkPlaceId,
}

/// One hour row of the time column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourLabel {
    pub hour: u32,
    pub label: String,
}

/// A task box with absolute coordinates in the tasks overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskBox {
    pub id: TaskId,
    pub column: ColumnId,
    pub name: String,
    pub start_time: String,
    pub end_time: String,
    pub status: TaskStatus,
    pub color: String,
    pub column_index: usize,
    pub left_percent: f64,
    pub width_percent: f64,
    pub top: f64,
    pub height: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_count: Option<usize>,
}

/// Everything the page needs to draw one view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutData {
    pub view: ViewMode,
    pub layout: HeaderLayout,
    pub selected: usize,
    pub previous: usize,
    pub next: usize,
    pub range_label: String,
    pub start_hour: u32,
    pub end_hour: u32,
    pub hour_height: f64,
    pub hours: Vec<HourLabel>,
    pub columns: Vec<ColumnData>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub date_headers: Vec<DateHeader>,
    pub grid_template_columns: String,
    pub grid_template_rows: String,
    pub time_column_width: u32,
    pub overlay_height: f64,
    pub tasks: Vec<TaskBox>,
}

/// Route function name constant for the page layout
pub const GET_LAYOUT: &str = "get_layout";
/// Route function name constant for cell-click defaults
pub const GET_CELL_DEFAULTS: &str = "get_cell_defaults";
