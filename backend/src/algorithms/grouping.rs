//! Column bucketing.

use crate::models::{Column, ColumnMap, Task};

/// Bucket tasks by the column they reference.
///
/// Every column gets an entry, in column order, holding its tasks in input
/// order. Columns without tasks map to an empty list. Tasks whose column
/// reference matches no column are dropped.
pub fn group_tasks_by_column<'a, X, C>(
    tasks: &'a [Task<X>],
    columns: &[Column<C>],
) -> ColumnMap<Vec<&'a Task<X>>> {
    let mut grouped = ColumnMap::with_capacity(columns.len());
    for column in columns {
        let bucket: Vec<&Task<X>> = tasks
            .iter()
            .filter(|task| task.column == column.id)
            .collect();
        grouped.insert(column.id.clone(), bucket);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ColumnId, NoExtra, TaskId};

    fn task(id: &str, column: i64) -> Task {
        Task::new(id, column, id, "08:00", "09:00")
    }

    #[test]
    fn test_groups_in_column_order_preserving_task_order() {
        let columns: Vec<Column<NoExtra>> = vec![Column::new(2, "B"), Column::new(1, "A")];
        let tasks = vec![task("x", 1), task("y", 2), task("z", 1)];

        let grouped = group_tasks_by_column(&tasks, &columns);

        let keys: Vec<_> = grouped.keys().cloned().collect();
        assert_eq!(keys, vec![ColumnId::from(2), ColumnId::from(1)]);

        let first: Vec<&TaskId> = grouped
            .get(&ColumnId::from(1))
            .unwrap()
            .iter()
            .map(|t| &t.id)
            .collect();
        assert_eq!(first, vec![&TaskId::from("x"), &TaskId::from("z")]);
    }

    #[test]
    fn test_empty_column_gets_empty_bucket() {
        let columns: Vec<Column<NoExtra>> = vec![Column::new(1, "A"), Column::new(2, "B")];
        let tasks = vec![task("x", 1)];

        let grouped = group_tasks_by_column(&tasks, &columns);
        assert!(grouped.get(&ColumnId::from(2)).unwrap().is_empty());
    }

    #[test]
    fn test_unmatched_tasks_are_dropped() {
        let columns: Vec<Column<NoExtra>> = vec![Column::new(1, "A")];
        let tasks = vec![task("x", 1), task("orphan", 9)];

        let grouped = group_tasks_by_column(&tasks, &columns);
        let total: usize = grouped.values().map(Vec::len).sum();
        assert_eq!(total, 1);
        assert!(!grouped.contains_key(&ColumnId::from(9)));
    }

    #[test]
    fn test_integer_and_string_ids_do_not_match() {
        let columns: Vec<Column<NoExtra>> = vec![Column::new("1", "A")];
        let tasks = vec![task("x", 1)];

        let grouped = group_tasks_by_column(&tasks, &columns);
        assert!(grouped.get(&ColumnId::from("1")).unwrap().is_empty());
    }
}
