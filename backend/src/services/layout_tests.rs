use super::*;
use crate::models::{NoExtra, TaskId};

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn columns(ids: &[i64]) -> Vec<Column> {
    ids.iter()
        .map(|id| Column::new(*id, format!("Work place {}", id)))
        .collect()
}

#[test]
fn test_end_to_end_single_task() {
    let columns = columns(&[1, 2]);
    let tasks: Vec<Task> = vec![Task::new("a", 1, "Inspection", "08:00", "09:00")];
    let window = TimeWindow::new(0, 24).unwrap();

    let layout = compute_layout(&columns, &tasks, window, 60.0);

    let first = layout.positions_for(&ColumnId::from(1));
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].task.id, TaskId::from("a"));
    assert_eq!(first[0].top, 480.0);
    assert_eq!(first[0].height, 60.0);
    assert_eq!(first[0].column_index, 0);
    assert_eq!(first[0].group_index(), None);
    assert_eq!(first[0].group_count(), None);

    assert!(layout.positions_for(&ColumnId::from(2)).is_empty());
    assert_eq!(layout.hours.len(), 24);
}

#[test]
fn test_grid_templates() {
    let columns = columns(&[1, 2, 3]);
    let tasks: Vec<Task> = Vec::new();
    let window = TimeWindow::new(0, 23).unwrap();

    let layout = compute_layout(&columns, &tasks, window, 60.0);

    assert_eq!(layout.grid_template_columns, "96px repeat(3, 1fr)");
    assert_eq!(layout.grid_template_rows, "repeat(23, 60px)");
    assert_eq!(layout.hours, (0..23).collect::<Vec<u32>>());
    assert_eq!(layout.overlay_height(), 1380.0);
}

#[test]
fn test_row_template_keeps_fractional_height() {
    let window = TimeWindow::new(8, 10).unwrap();
    assert_eq!(row_template(window, 42.5), "repeat(2, 42.5px)");
    assert_eq!(column_template(0), "96px repeat(0, 1fr)");
}

#[test]
fn test_column_index_follows_column_order() {
    let columns = columns(&[7, 3]);
    let tasks: Vec<Task> = vec![
        Task::new("x", 3, "x", "10:00", "11:00"),
        Task::new("y", 7, "y", "10:00", "11:00"),
    ];
    let window = TimeWindow::new(0, 24).unwrap();

    let layout = compute_layout(&columns, &tasks, window, 60.0);

    assert_eq!(layout.positions_for(&ColumnId::from(7))[0].column_index, 0);
    assert_eq!(layout.positions_for(&ColumnId::from(3))[0].column_index, 1);
}

#[test]
fn test_duplicate_column_keeps_first_slot_and_last_index() {
    let columns = columns(&[1, 2, 1]);
    let tasks: Vec<Task> = vec![Task::new("x", 1, "x", "10:00", "11:00")];
    let window = TimeWindow::new(0, 24).unwrap();

    let layout = compute_layout(&columns, &tasks, window, 60.0);

    let keys: Vec<&ColumnId> = layout.task_positions.keys().collect();
    assert_eq!(keys, vec![&ColumnId::from(1), &ColumnId::from(2)]);
    assert_eq!(layout.positions_for(&ColumnId::from(1))[0].column_index, 2);
    assert_eq!(layout.total_columns, 3);
    assert_eq!(layout.grid_template_columns, "96px repeat(3, 1fr)");
}

#[test]
fn test_horizontal_placement_ungrouped() {
    let placement = horizontal_placement(1, 2, None);
    assert!(approx_eq(placement.left_percent, 50.0));
    assert!(approx_eq(placement.width_percent, 45.0));
}

#[test]
fn test_horizontal_placement_grouped() {
    let slot = GroupSlot {
        group_index: 2,
        group_count: 3,
    };
    let placement = horizontal_placement(0, 1, Some(slot));
    assert!(approx_eq(placement.left_percent, 60.0));
    assert!(approx_eq(placement.width_percent, 30.0));

    let placement = horizontal_placement(1, 4, Some(slot));
    assert!(approx_eq(placement.left_percent, 25.0 + 60.0 * 25.0 / 100.0));
    assert!(approx_eq(placement.width_percent, 30.0 * 25.0 / 100.0));
}

#[test]
fn test_horizontal_placement_without_columns() {
    let placement = horizontal_placement(0, 0, None);
    assert_eq!(placement.left_percent, 0.0);
    assert_eq!(placement.width_percent, 0.0);
}

#[test]
fn test_placements_are_flattened_in_column_order() {
    let columns = columns(&[1, 2]);
    let tasks: Vec<Task> = vec![
        Task::new("b1", 2, "b1", "09:00", "10:00"),
        Task::new("a1", 1, "a1", "09:00", "10:00"),
        Task::new("a2", 1, "a2", "09:30", "10:30"),
    ];
    let window = TimeWindow::new(0, 24).unwrap();

    let layout = compute_layout(&columns, &tasks, window, 60.0);
    let placements = layout.placements();

    let order: Vec<&TaskId> = placements.iter().map(|p| &p.task.id).collect();
    assert_eq!(
        order,
        vec![&TaskId::from("a1"), &TaskId::from("a2"), &TaskId::from("b1")]
    );
    assert!(approx_eq(placements[1].left_percent, 22.5));
    assert!(approx_eq(placements[1].width_percent, 22.5));
    assert!(approx_eq(placements[2].left_percent, 50.0));
    assert!(approx_eq(placements[2].width_percent, 45.0));
}

#[test]
fn test_layout_is_idempotent() {
    let columns = columns(&[1, 2]);
    let tasks: Vec<Task> = vec![
        Task::new("a", 1, "a", "09:00", "10:00"),
        Task::new("b", 1, "b", "09:30", "10:30"),
        Task::new("c", 2, "c", "13:00", "12:00"),
    ];
    let window = TimeWindow::new(6, 20).unwrap();

    let first = compute_layout(&columns, &tasks, window, 48.0);
    let second = compute_layout(&columns, &tasks, window, 48.0);
    assert_eq!(first, second);
}

#[test]
fn test_layout_serializes_like_widget_props() {
    let columns = columns(&[1]);
    let tasks: Vec<Task<NoExtra>> = vec![Task::new("a", 1, "a", "01:00", "02:00")];
    let window = TimeWindow::new(0, 4).unwrap();

    let layout = compute_layout(&columns, &tasks, window, 60.0);
    let json = serde_json::to_value(&layout).unwrap();

    assert_eq!(json["gridTemplateColumns"], "96px repeat(1, 1fr)");
    assert_eq!(json["gridTemplateRows"], "repeat(4, 60px)");
    assert_eq!(json["taskPositions"]["1"][0]["top"], 60.0);
    assert_eq!(json["tasksByColumn"]["1"][0]["id"], "a");
    assert!(json.get("window").is_none());
}
