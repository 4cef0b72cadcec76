//! Public API surface for the scheduler backend.
//!
//! This file consolidates the types exchanged with clients.
//! All types derive Serialize for JSON serialization.

pub use crate::db::models::{
    DayData, NewTask, StoredTask, StoredTaskId, TaskStatus, WorkPlace, WorkPlaceId,
};
pub use crate::models::{Column, ColumnId, NoExtra, Task, TaskId, TimeFormat, TimeWindow};
pub use crate::routes::data::{CreateTaskRequest, CreateTaskResponse};
pub use crate::routes::layout::{ColumnData, HourLabel, LayoutData, TaskBox};
pub use crate::services::views::{
    ColumnRef, DateHeader, HeaderLayout, NewTaskDefaults, TaskMeta, ViewMode,
};
