//! In-memory local repository implementation.
//!
//! Suitable for unit testing and local development. All days are kept in a
//! single `Vec` behind a lock, giving fast and isolated execution.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::db::models::{insert_task, DayData, NewTask, StoredTask, WorkPlaceId};
use crate::db::repository::*;

/// In-memory local repository.
///
/// # Example
/// ```
/// use shaduler::db::repositories::LocalRepository;
/// use shaduler::db::models::DayData;
///
/// let repo = LocalRepository::with_days(vec![DayData::with_default_work_places("2025-01-01")]);
/// assert_eq!(repo.day_count(), 1);
/// ```
#[derive(Clone, Default)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    days: Vec<DayData>,
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            days: Vec::new(),
            is_healthy: true,
        }
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with days. They are sorted by date.
    pub fn with_days(mut days: Vec<DayData>) -> Self {
        days.sort_by(|a, b| a.date.cmp(&b.date));
        Self {
            data: Arc::new(RwLock::new(LocalData {
                days,
                is_healthy: true,
            })),
        }
    }

    /// Simulate the store going up or down.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().is_healthy = healthy;
    }

    /// Clear all data from the repository.
    pub fn clear(&self) {
        self.data.write().days.clear();
    }

    /// Get the number of days stored.
    pub fn day_count(&self) -> usize {
        self.data.read().days.len()
    }

    fn check_health(&self, operation: &str) -> RepositoryResult<()> {
        if !self.data.read().is_healthy {
            return Err(RepositoryError::storage_with_context(
                "Store is not healthy",
                ErrorContext::new(operation),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl TaskRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().is_healthy)
    }

    async fn fetch_days(&self) -> RepositoryResult<Vec<DayData>> {
        self.check_health("fetch_days")?;
        Ok(self.data.read().days.clone())
    }

    async fn create_task(
        &self,
        date: &str,
        work_place_id: WorkPlaceId,
        task: NewTask,
    ) -> RepositoryResult<StoredTask> {
        self.check_health("create_task")?;
        let mut data = self.data.write();
        insert_task(&mut data.days, date, work_place_id, task)
    }
}
