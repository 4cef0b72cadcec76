//! Stored task data: days, work places and their tasks.
//!
//! The on-disk shape is a JSON array of [`DayData`], one entry per date,
//! kept sorted by date.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::repository::{ErrorContext, RepositoryError, RepositoryResult};

crate::define_id_type!(i64, WorkPlaceId);
crate::define_id_type!(i64, StoredTaskId);

/// Work places every newly created day starts with.
pub const DEFAULT_WORK_PLACES: [(i64, &str); 3] = [
    (1, "Radno mesto 1"),
    (2, "Radno mesto 2"),
    (3, "Radno mesto 3"),
];

/// Approval state of a stored task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Approved,
    #[default]
    Pending,
    Rejected,
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Approved => write!(f, "approved"),
            Self::Pending => write!(f, "pending"),
            Self::Rejected => write!(f, "rejected"),
        }
    }
}

/// A task as persisted in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredTask {
    pub id: StoredTaskId,
    pub name: String,
    pub start_time: String,
    pub end_time: String,
    pub status: TaskStatus,
}

/// A task submitted for creation; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    pub name: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub status: TaskStatus,
}

impl NewTask {
    pub fn into_stored(self, id: StoredTaskId) -> StoredTask {
        StoredTask {
            id,
            name: self.name,
            start_time: self.start_time,
            end_time: self.end_time,
            status: self.status,
        }
    }
}

/// A schedulable resource on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkPlace {
    pub id: WorkPlaceId,
    pub label: String,
    #[serde(default)]
    pub tasks: Vec<StoredTask>,
}

impl WorkPlace {
    pub fn new(id: impl Into<WorkPlaceId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            tasks: Vec::new(),
        }
    }

    /// Next task id: the largest id in this work place plus one.
    ///
    /// Ids are only unique within one work place on one day.
    pub fn next_task_id(&self) -> RepositoryResult<StoredTaskId> {
        let max = self
            .tasks
            .iter()
            .map(|task| task.id.value())
            .fold(0, i64::max);
        max.checked_add(1).map(StoredTaskId::new).ok_or_else(|| {
            RepositoryError::validation_with_context(
                format!("Work place {} has no task ids left", self.id),
                ErrorContext::new("create_task")
                    .with_entity("work_place")
                    .with_entity_id(self.id)
                    .with_details(format!("max_task_id={}", max)),
            )
        })
    }
}

/// All work places and tasks of one date (`YYYY-MM-DD`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayData {
    pub date: String,
    #[serde(default)]
    pub work_places: Vec<WorkPlace>,
}

impl DayData {
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            work_places: Vec::new(),
        }
    }

    /// A day populated with [`DEFAULT_WORK_PLACES`].
    pub fn with_default_work_places(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            work_places: DEFAULT_WORK_PLACES
                .iter()
                .map(|(id, label)| WorkPlace::new(*id, *label))
                .collect(),
        }
    }

    pub fn work_place(&self, id: WorkPlaceId) -> Option<&WorkPlace> {
        self.work_places.iter().find(|wp| wp.id == id)
    }

    pub fn task_count(&self) -> usize {
        self.work_places.iter().map(|wp| wp.tasks.len()).sum()
    }
}

/// Add a task to a snapshot of the store.
///
/// A missing date is created with the default work places and the snapshot
/// is re-sorted by date. A missing work place is a `NotFound` error and
/// leaves the snapshot untouched apart from the new day.
pub fn insert_task(
    days: &mut Vec<DayData>,
    date: &str,
    work_place_id: WorkPlaceId,
    task: NewTask,
) -> RepositoryResult<StoredTask> {
    if !days.iter().any(|day| day.date == date) {
        days.push(DayData::with_default_work_places(date));
        days.sort_by(|a, b| a.date.cmp(&b.date));
    }

    let work_place = days
        .iter_mut()
        .find(|day| day.date == date)
        .and_then(|day| day.work_places.iter_mut().find(|wp| wp.id == work_place_id))
        .ok_or_else(|| {
            RepositoryError::not_found_with_context(
                format!("Work place with id {} not found", work_place_id),
                ErrorContext::new("create_task")
                    .with_entity("work_place")
                    .with_entity_id(work_place_id)
                    .with_details(format!("date={}", date)),
            )
        })?;

    let stored = task.into_stored(work_place.next_task_id()?);
    work_place.tasks.push(stored.clone());
    Ok(stored)
}
