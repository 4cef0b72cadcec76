//! Layout algorithms for the scheduling grid.
//!
//! # Components
//!
//! - [`grouping`]: Partitioning a flat task list into per-column buckets
//! - [`overlap`]: Clipping, ordering and side-by-side grouping of the tasks
//!   in one column
//!
//! Both are pure functions of their inputs. A layout pass recomputes
//! everything from scratch; nothing is cached between calls.

pub mod grouping;
pub mod overlap;

pub use grouping::group_tasks_by_column;
pub use overlap::{compute_task_positions, partition_overlap_groups, GroupSlot, TaskPosition};
