use super::*;
use crate::db::models::{StoredTask, StoredTaskId, WorkPlace};

fn stored(id: i64, name: &str, start: &str, end: &str, status: TaskStatus) -> StoredTask {
    StoredTask {
        id: StoredTaskId::new(id),
        name: name.to_string(),
        start_time: start.to_string(),
        end_time: end.to_string(),
        status,
    }
}

fn sample_days() -> Vec<DayData> {
    let mut first = DayData::with_default_work_places("2025-01-01");
    first.work_places[0]
        .tasks
        .push(stored(1, "Check-in", "08:00", "09:00", TaskStatus::Approved));
    first.work_places[2]
        .tasks
        .push(stored(4, "Audit", "10:00", "12:00", TaskStatus::Rejected));

    let mut second = DayData::new("2025-01-02");
    second.work_places.push(WorkPlace::new(1, "Front desk"));
    second.work_places.push(WorkPlace::new(5, "Back office"));
    second.work_places[1]
        .tasks
        .push(stored(2, "Filing", "13:00", "14:30", TaskStatus::Pending));

    let third = DayData::with_default_work_places("2025-01-03");
    let fourth = DayData::with_default_work_places("2025-01-04");
    vec![first, second, third, fourth]
}

#[test]
fn test_day_view_uses_work_place_ids() {
    let days = sample_days();
    let view = build_view(&days, 0, ViewMode::Day, HeaderLayout::Inline);

    assert_eq!(view.dates, vec!["2025-01-01"]);
    let ids: Vec<_> = view.columns.iter().map(|c| c.id.clone()).collect();
    assert_eq!(ids, vec![ColumnId::from(1), ColumnId::from(2), ColumnId::from(3)]);
    assert_eq!(view.columns[0].label, "Radno mesto 1");

    assert_eq!(view.tasks.len(), 2);
    assert_eq!(view.tasks[0].id, TaskId::from("0-1-1"));
    assert_eq!(view.tasks[0].column, ColumnId::from(1));
    assert_eq!(view.tasks[1].id, TaskId::from("0-3-4"));
    assert_eq!(view.tasks[1].extra.status, TaskStatus::Rejected);
    assert!(view.date_headers.is_empty());
}

#[test]
fn test_day_view_selected_index_in_task_ids() {
    let days = sample_days();
    let view = build_view(&days, 1, ViewMode::Day, HeaderLayout::Inline);
    assert_eq!(view.tasks[0].id, TaskId::from("1-5-2"));
    assert_eq!(view.tasks[0].extra.date, "2025-01-02");
    assert_eq!(view.tasks[0].extra.work_place_id, WorkPlaceId::new(5));
}

#[test]
fn test_inline_three_day_view() {
    let days = sample_days();
    let view = build_view(&days, 0, ViewMode::ThreeDays, HeaderLayout::Inline);

    assert_eq!(view.dates, vec!["2025-01-01", "2025-01-02", "2025-01-03"]);
    assert_eq!(view.columns.len(), 3 + 2 + 3);
    assert_eq!(view.columns[3].id, ColumnId::from("1-1"));
    assert_eq!(view.columns[3].label, "2025-01-02 - Front desk");
    assert_eq!(view.columns[4].extra.work_place_id, WorkPlaceId::new(5));

    let filing = view.tasks.iter().find(|t| t.name == "Filing").unwrap();
    assert_eq!(filing.id, TaskId::from("1-5-2"));
    assert_eq!(filing.column, ColumnId::from("1-5"));
    assert!(view.date_headers.is_empty());
}

#[test]
fn test_separate_three_day_view_headers() {
    let days = sample_days();
    let view = build_view(&days, 0, ViewMode::ThreeDays, HeaderLayout::Separate);

    assert_eq!(view.columns[0].id, ColumnId::from("2025-01-01-1"));
    assert_eq!(view.columns[0].label, "Radno mesto 1");
    assert_eq!(view.tasks[0].id, TaskId::from("2025-01-01-1-1"));

    let spans: Vec<_> = view
        .date_headers
        .iter()
        .map(|h| (h.date.as_str(), h.grid_column_start, h.grid_column_end))
        .collect();
    assert_eq!(
        spans,
        vec![("2025-01-01", 2, 5), ("2025-01-02", 5, 7), ("2025-01-03", 7, 10)]
    );
}

#[test]
fn test_three_day_view_truncates_at_end() {
    let days = sample_days();
    let view = build_view(&days, 3, ViewMode::ThreeDays, HeaderLayout::Inline);
    assert_eq!(view.dates, vec!["2025-01-04"]);
    assert_eq!(view.columns.len(), 3);
}

#[test]
fn test_out_of_range_selection_is_empty() {
    let days = sample_days();
    let view = build_view(&days, 10, ViewMode::Day, HeaderLayout::Inline);
    assert!(view.columns.is_empty());
    assert!(view.tasks.is_empty());
    assert!(build_view(&[], 0, ViewMode::ThreeDays, HeaderLayout::Separate)
        .columns
        .is_empty());
}

#[test]
fn test_range_labels() {
    let days = sample_days();
    assert_eq!(range_label(&days, 1, ViewMode::Day), "2025-01-02");
    assert_eq!(range_label(&days, 0, ViewMode::ThreeDays), "2025-01-01 - 2025-01-03");
    assert_eq!(range_label(&days, 2, ViewMode::ThreeDays), "2025-01-03 - 2025-01-04");
    assert_eq!(range_label(&days, 9, ViewMode::Day), "");
    assert_eq!(range_label(&[], 0, ViewMode::ThreeDays), " - ");
}

#[test]
fn test_previous_stops_at_zero() {
    assert_eq!(previous_index(0), 0);
    assert_eq!(previous_index(3), 2);
}

#[test]
fn test_next_wraps_at_last_start() {
    assert_eq!(next_index(0, 4, ViewMode::Day), 1);
    assert_eq!(next_index(2, 4, ViewMode::Day), 3);
    assert_eq!(next_index(3, 4, ViewMode::Day), 0);

    assert_eq!(next_index(0, 4, ViewMode::ThreeDays), 1);
    assert_eq!(next_index(1, 4, ViewMode::ThreeDays), 0);
    assert_eq!(next_index(0, 2, ViewMode::ThreeDays), 0);
    assert_eq!(next_index(0, 0, ViewMode::Day), 0);
}

#[test]
fn test_cell_defaults_from_column() {
    let days = sample_days();
    let view = build_view(&days, 0, ViewMode::ThreeDays, HeaderLayout::Inline);

    let defaults = cell_defaults(&view, &ColumnId::from("1-5"), 9).unwrap();
    assert_eq!(defaults.date, "2025-01-02");
    assert_eq!(defaults.work_place_id, WorkPlaceId::new(5));
    assert_eq!(defaults.start_time, "09:00");
    assert_eq!(defaults.end_time, "10:00");

    let late = cell_defaults(&view, &ColumnId::from("0-1"), 23).unwrap();
    assert_eq!(late.end_time, "24:00");

    assert!(cell_defaults(&view, &ColumnId::from(1), 9).is_none());
}

#[test]
fn test_cell_defaults_rejects_hour_past_end_of_day() {
    let days = sample_days();
    let view = build_view(&days, 0, ViewMode::Day, HeaderLayout::Inline);

    assert!(cell_defaults(&view, &ColumnId::from(1), 24).is_none());
    assert!(cell_defaults(&view, &ColumnId::from(1), u32::MAX).is_none());
    assert!(cell_defaults(&view, &ColumnId::from(1), 23).is_some());
}

#[test]
fn test_cell_defaults_day_view_integer_column() {
    let days = sample_days();
    let view = build_view(&days, 0, ViewMode::Day, HeaderLayout::Inline);
    let defaults = cell_defaults(&view, &ColumnId::parse_lossy("2"), 0).unwrap();
    assert_eq!(defaults.date, "2025-01-01");
    assert_eq!(defaults.work_place_id, WorkPlaceId::new(2));
    assert_eq!(defaults.start_time, "00:00");
}

#[test]
fn test_view_mode_parsing() {
    assert_eq!("3days".parse::<ViewMode>().unwrap(), ViewMode::ThreeDays);
    assert_eq!("day".parse::<ViewMode>().unwrap(), ViewMode::Day);
    assert!("week".parse::<ViewMode>().is_err());
    assert_eq!(ViewMode::ThreeDays.to_string(), "3days");
    assert_eq!(serde_json::to_string(&ViewMode::ThreeDays).unwrap(), "\"3days\"");
    assert_eq!("separate".parse::<HeaderLayout>().unwrap(), HeaderLayout::Separate);
}

#[test]
fn test_status_colours() {
    assert_eq!(status_color_class(TaskStatus::Approved), "blue");
    assert_eq!(status_color_class(TaskStatus::Pending), "yellow");
    assert_eq!(status_color_class(TaskStatus::Rejected), "red");
}

#[test]
fn test_view_feeds_layout() {
    use crate::models::TimeWindow;
    use crate::services::layout::compute_layout;

    let days = sample_days();
    let view = build_view(&days, 0, ViewMode::Day, HeaderLayout::Inline);
    let calc = compute_layout(&view.columns, &view.tasks, TimeWindow::clamped(0, 23), 60.0);

    let audit = &calc.positions_for(&ColumnId::from(3))[0];
    assert_eq!(audit.task.name, "Audit");
    assert_eq!(audit.top, 600.0);
    assert_eq!(audit.height, 120.0);
    assert_eq!(audit.column_index, 2);
}

#[test]
fn test_task_json_includes_meta() {
    let days = sample_days();
    let view = build_view(&days, 0, ViewMode::Day, HeaderLayout::Inline);
    let value = serde_json::to_value(&view.tasks[0]).unwrap();
    assert_eq!(value["status"], "approved");
    assert_eq!(value["workPlaceId"], 1);
    assert_eq!(value["column"], 1);
}
