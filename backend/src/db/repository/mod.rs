//! Repository trait for the task store.
//!
//! - [`error`]: Error types for repository operations
//!
//! Backends implement [`TaskRepository`]; application code goes through
//! [`crate::db::services`] which adds request validation and logging.

pub mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use async_trait::async_trait;

use super::models::{DayData, NewTask, StoredTask, WorkPlaceId};

/// Storage operations over the snapshot of scheduled days.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Check whether the backing store is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Fetch every stored day, sorted by date.
    async fn fetch_days(&self) -> RepositoryResult<Vec<DayData>>;

    /// Fetch a single day by its `YYYY-MM-DD` date.
    async fn fetch_day(&self, date: &str) -> RepositoryResult<Option<DayData>> {
        let days = self.fetch_days().await?;
        Ok(days.into_iter().find(|day| day.date == date))
    }

    /// Append a task to a work place, creating the day if needed.
    ///
    /// Returns the stored task with its generated id.
    async fn create_task(
        &self,
        date: &str,
        work_place_id: WorkPlaceId,
        task: NewTask,
    ) -> RepositoryResult<StoredTask>;
}
