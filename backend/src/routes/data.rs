use serde::{Deserialize, Serialize};

use crate::db::models::{NewTask, StoredTask, WorkPlaceId};

/// Body of a task creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTaskRequest {
    /// Day the task belongs to, `YYYY-MM-DD`.
    pub date: String,
    pub work_place_id: WorkPlaceId,
    pub task: NewTask,
}

/// Reply to a successful task creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTaskResponse {
    pub success: bool,
    pub task: StoredTask,
}

impl CreateTaskResponse {
    pub fn created(task: StoredTask) -> Self {
        Self {
            success: true,
            task,
        }
    }
}

pub const LIST_DAYS: &str = "list_days";
pub const CREATE_TASK: &str = "create_task";
