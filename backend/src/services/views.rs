//! Schedule views over the task store.
//!
//! Turns stored days into the columns and tasks the layout engine consumes,
//! for either a single day or a three-day window, and answers the small
//! navigation questions the page asks (range label, previous/next day,
//! defaults for a clicked cell).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::db::models::{DayData, TaskStatus, WorkPlaceId};
use crate::models::{default_end_time, Column, ColumnId, Task, TaskId, HOURS_PER_DAY};

/// Number of days shown side by side in the multi-day view.
pub const MULTI_DAY_SPAN: usize = 3;

/// First grid line available to date headers; line 1 is the time column.
const FIRST_DATE_GRID_LINE: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ViewMode {
    #[default]
    #[serde(rename = "day")]
    Day,
    #[serde(rename = "3days")]
    ThreeDays,
}

impl ViewMode {
    /// How many consecutive days this mode shows.
    pub fn span(self) -> usize {
        match self {
            ViewMode::Day => 1,
            ViewMode::ThreeDays => MULTI_DAY_SPAN,
        }
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(ViewMode::Day),
            "3days" => Ok(ViewMode::ThreeDays),
            other => Err(format!("Unknown view mode: {}", other)),
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Day => write!(f, "day"),
            ViewMode::ThreeDays => write!(f, "3days"),
        }
    }
}

/// Header arrangement of the multi-day view.
///
/// `Inline` prefixes each column label with its date; `Separate` adds a
/// row of date headers spanning each day's columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderLayout {
    #[default]
    Inline,
    Separate,
}

impl FromStr for HeaderLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inline" => Ok(HeaderLayout::Inline),
            "separate" => Ok(HeaderLayout::Separate),
            other => Err(format!("Unknown header layout: {}", other)),
        }
    }
}

/// Where a column's tasks are stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnRef {
    pub date: String,
    pub work_place_id: WorkPlaceId,
}

/// Task attributes the layout engine passes through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskMeta {
    pub status: TaskStatus,
    pub date: String,
    pub work_place_id: WorkPlaceId,
}

/// A date label spanning grid lines `[grid_column_start, grid_column_end)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateHeader {
    pub date: String,
    pub grid_column_start: usize,
    pub grid_column_end: usize,
}

/// Columns and tasks for one rendering of the page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleView {
    pub mode: ViewMode,
    pub layout: HeaderLayout,
    pub selected: usize,
    pub dates: Vec<String>,
    pub columns: Vec<Column<ColumnRef>>,
    pub tasks: Vec<Task<TaskMeta>>,
    /// Only populated for the separate multi-day layout.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub date_headers: Vec<DateHeader>,
}

/// Days visible from `selected`: one day, or up to three in a row.
///
/// An out-of-range `selected` yields no days.
pub fn visible_days(days: &[DayData], selected: usize, mode: ViewMode) -> &[DayData] {
    if selected >= days.len() {
        return &[];
    }
    let end = (selected + mode.span()).min(days.len());
    &days[selected..end]
}

/// Build the columns and tasks for the selected day(s).
///
/// Column and task ids are unique within the view:
/// * day view: column id is the work place id, task id `"{selected}-{wp}-{task}"`
/// * inline: column id `"{day index}-{wp}"`, label `"{date} - {label}"`
/// * separate: column id `"{date}-{wp}"`, with date headers over each day
pub fn build_view(
    days: &[DayData],
    selected: usize,
    mode: ViewMode,
    layout: HeaderLayout,
) -> ScheduleView {
    let shown = visible_days(days, selected, mode);
    let mut columns = Vec::new();
    let mut tasks = Vec::new();
    let mut date_headers = Vec::new();
    let mut next_line = FIRST_DATE_GRID_LINE;

    for (offset, day) in shown.iter().enumerate() {
        let day_index = selected + offset;
        for wp in &day.work_places {
            let (column_id, label, task_prefix): (ColumnId, String, String) = match (mode, layout) {
                (ViewMode::Day, _) => (
                    wp.id.value().into(),
                    wp.label.clone(),
                    format!("{}-{}", day_index, wp.id),
                ),
                (ViewMode::ThreeDays, HeaderLayout::Inline) => {
                    let key = format!("{}-{}", day_index, wp.id);
                    (key.clone().into(), format!("{} - {}", day.date, wp.label), key)
                }
                (ViewMode::ThreeDays, HeaderLayout::Separate) => {
                    let key = format!("{}-{}", day.date, wp.id);
                    (key.clone().into(), wp.label.clone(), key)
                }
            };

            for stored in &wp.tasks {
                tasks.push(Task {
                    id: TaskId::from(format!("{}-{}", task_prefix, stored.id)),
                    column: column_id.clone(),
                    name: stored.name.clone(),
                    start_time: stored.start_time.clone(),
                    end_time: stored.end_time.clone(),
                    extra: TaskMeta {
                        status: stored.status,
                        date: day.date.clone(),
                        work_place_id: wp.id,
                    },
                });
            }

            columns.push(Column {
                id: column_id,
                label,
                extra: ColumnRef {
                    date: day.date.clone(),
                    work_place_id: wp.id,
                },
            });
        }

        if mode == ViewMode::ThreeDays && layout == HeaderLayout::Separate {
            let span = day.work_places.len();
            date_headers.push(DateHeader {
                date: day.date.clone(),
                grid_column_start: next_line,
                grid_column_end: next_line + span,
            });
            next_line += span;
        }
    }

    ScheduleView {
        mode,
        layout,
        selected,
        dates: shown.iter().map(|day| day.date.clone()).collect(),
        columns,
        tasks,
        date_headers,
    }
}

/// Header text for the shown range.
///
/// Day view shows the selected date; the multi-day view shows
/// `"first - last"` where the last date is clamped to the final stored day.
/// Missing dates render as empty strings.
pub fn range_label(days: &[DayData], selected: usize, mode: ViewMode) -> String {
    let date_at = |index: usize| days.get(index).map(|day| day.date.as_str()).unwrap_or("");
    match mode {
        ViewMode::Day => date_at(selected).to_string(),
        ViewMode::ThreeDays => {
            let last = (selected + MULTI_DAY_SPAN - 1).min(days.len().saturating_sub(1));
            format!("{} - {}", date_at(selected), date_at(last))
        }
    }
}

/// Index of the last day a view can start on.
pub fn max_start_index(day_count: usize, mode: ViewMode) -> usize {
    day_count.saturating_sub(mode.span())
}

/// Step back one day, stopping at the first.
pub fn previous_index(current: usize) -> usize {
    current.saturating_sub(1)
}

/// Step forward one day, wrapping to the first once the last start is reached.
pub fn next_index(current: usize, day_count: usize, mode: ViewMode) -> usize {
    if current >= max_start_index(day_count, mode) {
        0
    } else {
        current + 1
    }
}

/// Prefilled values for the add-task dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTaskDefaults {
    pub date: String,
    pub work_place_id: WorkPlaceId,
    pub start_time: String,
    pub end_time: String,
}

/// Defaults for a click on `column` at `hour`: a one-hour slot on that
/// column's date and work place. `None` when the column is not in the view
/// or `hour` is past the end of the day.
pub fn cell_defaults(view: &ScheduleView, column: &ColumnId, hour: u32) -> Option<NewTaskDefaults> {
    if hour >= HOURS_PER_DAY {
        return None;
    }
    let column = view.columns.iter().find(|c| &c.id == column)?;
    let start_time = format!("{:02}:00", hour);
    let end_time = default_end_time(&start_time)?;
    Some(NewTaskDefaults {
        date: column.extra.date.clone(),
        work_place_id: column.extra.work_place_id,
        start_time,
        end_time,
    })
}

/// Colour class used to draw a task of the given status.
pub fn status_color_class(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Approved => "blue",
        TaskStatus::Pending => "yellow",
        TaskStatus::Rejected => "red",
    }
}

#[cfg(test)]
#[path = "views_tests.rs"]
mod tests;
