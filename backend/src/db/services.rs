//! High-level task store service layer.
//!
//! Repository-agnostic operations used by the HTTP layer. Request validation
//! lives here so every backend rejects the same inputs.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  HTTP handlers (http/handlers.rs)           │
//! └───────────────────┬─────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────┐
//! │  Service Layer (services.rs)                │
//! │  - Input validation                         │
//! │  - Logging                                  │
//! └───────────────────┬─────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────┐
//! │  TaskRepository (repository/)               │
//! └───────────────────┬─────────────────────────┘
//!         ┌───────────┴───────────┐
//! ┌───────▼────────┐     ┌────────▼────────┐
//! │ FileRepository │     │ LocalRepository │
//! └────────────────┘     └─────────────────┘
//! ```

use chrono::NaiveDate;
use log::{info, warn};

use super::models::{DayData, NewTask, StoredTask, WorkPlaceId};
use super::repository::{ErrorContext, RepositoryError, RepositoryResult, TaskRepository};
use crate::models::is_valid_clock_time;

/// Date format of day keys.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Check if the store is healthy.
pub async fn health_check<R: TaskRepository + ?Sized>(repo: &R) -> RepositoryResult<bool> {
    repo.health_check().await
}

/// List every stored day, sorted by date.
pub async fn list_days<R: TaskRepository + ?Sized>(repo: &R) -> RepositoryResult<Vec<DayData>> {
    let days = repo.fetch_days().await?;
    info!("Loaded {} day(s) from store", days.len());
    Ok(days)
}

/// Get one day by date.
pub async fn get_day<R: TaskRepository + ?Sized>(
    repo: &R,
    date: &str,
) -> RepositoryResult<Option<DayData>> {
    validate_date(date)?;
    repo.fetch_day(date).await
}

/// Validate and store a new task.
///
/// # Errors
/// * `ValidationError` for an empty name, a malformed date or clock time
/// * `NotFound` when the work place does not exist on that day
/// * storage errors from the backend
pub async fn create_task<R: TaskRepository + ?Sized>(
    repo: &R,
    date: &str,
    work_place_id: WorkPlaceId,
    task: NewTask,
) -> RepositoryResult<StoredTask> {
    validate_date(date)?;
    validate_task(&task)?;

    match repo.create_task(date, work_place_id, task).await {
        Ok(created) => {
            info!(
                "Created task {} '{}' on {} work place {}",
                created.id, created.name, date, work_place_id
            );
            Ok(created)
        }
        Err(e) => {
            warn!("Failed to create task on {} work place {}: {}", date, work_place_id, e);
            Err(e)
        }
    }
}

/// Reject dates that are not `YYYY-MM-DD` calendar dates.
pub fn validate_date(date: &str) -> RepositoryResult<()> {
    NaiveDate::parse_from_str(date, DATE_FORMAT)
        .map(|_| ())
        .map_err(|_| {
            RepositoryError::validation_with_context(
                format!("Invalid date '{}', expected YYYY-MM-DD", date),
                ErrorContext::new("validate_date").with_entity("day"),
            )
        })
}

/// Reject tasks with an empty name or malformed `HH:MM` times.
pub fn validate_task(task: &NewTask) -> RepositoryResult<()> {
    let context = || ErrorContext::new("validate_task").with_entity("task");

    if task.name.trim().is_empty() {
        return Err(RepositoryError::validation_with_context(
            "Task name must not be empty",
            context(),
        ));
    }
    for (field, value) in [("start_time", &task.start_time), ("end_time", &task.end_time)] {
        if !is_valid_clock_time(value) {
            return Err(RepositoryError::validation_with_context(
                format!("Invalid {} '{}', expected HH:MM", field, value),
                context().with_details(field),
            ));
        }
    }
    Ok(())
}
