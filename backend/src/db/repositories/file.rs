//! JSON file repository.
//!
//! The whole store is one JSON array of days. Every create reads the file,
//! applies the change and writes the full snapshot back, so writes are
//! serialized through an async mutex held for the read-modify-write cycle.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

use crate::db::models::{insert_task, DayData, NewTask, StoredTask, WorkPlaceId};
use crate::db::repository::*;

/// Default location of the data file, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "data/data.json";

/// Task store backed by a JSON file.
#[derive(Debug)]
pub struct FileRepository {
    path: PathBuf,
    pretty: bool,
    write_lock: Mutex<()>,
}

impl FileRepository {
    /// Create a repository over `path`. The file is not touched until the
    /// first operation.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pretty: true,
            write_lock: Mutex::new(()),
        }
    }

    /// Toggle indented output when writing the file.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_days(&self, operation: &str) -> RepositoryResult<Vec<DayData>> {
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| self.io_error(e, "reading", operation))?;
        serde_json::from_str(&contents).map_err(|e| RepositoryError::from(e).with_operation(operation))
    }

    /// Read the store, treating a missing file as empty.
    async fn read_days_or_empty(&self, operation: &str) -> RepositoryResult<Vec<DayData>> {
        match tokio::fs::try_exists(&self.path).await {
            Ok(false) => {
                log::debug!("Data file {} missing, starting empty", self.path.display());
                Ok(Vec::new())
            }
            Ok(true) => self.read_days(operation).await,
            Err(e) => Err(self.io_error(e, "checking", operation)),
        }
    }

    async fn write_days(&self, days: &[DayData], operation: &str) -> RepositoryResult<()> {
        let contents = if self.pretty {
            serde_json::to_string_pretty(days)
        } else {
            serde_json::to_string(days)
        }
        .map_err(|e| RepositoryError::from(e).with_operation(operation))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| self.io_error(e, "creating directory for", operation))?;
        }
        tokio::fs::write(&self.path, contents)
            .await
            .map_err(|e| self.io_error(e, "writing", operation))
    }

    /// `action` completes "Error ... data file", e.g. `"reading"`.
    fn io_error(&self, err: std::io::Error, action: &str, operation: &str) -> RepositoryError {
        RepositoryError::storage_with_context(
            format!("Error {} data file {}: {}", action, self.path.display(), err),
            ErrorContext::new(operation)
                .with_entity("data_file")
                .with_entity_id(self.path.display())
                .with_details(format!("io_error_kind={:?}", err.kind())),
        )
    }
}

#[async_trait]
impl TaskRepository for FileRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        match tokio::fs::metadata(&self.path).await {
            Ok(meta) => Ok(meta.is_file()),
            // A store that has never been written to is still usable.
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(true),
            Err(e) => Err(self.io_error(e, "checking", "health_check")),
        }
    }

    async fn fetch_days(&self) -> RepositoryResult<Vec<DayData>> {
        self.read_days("fetch_days").await
    }

    async fn create_task(
        &self,
        date: &str,
        work_place_id: WorkPlaceId,
        task: NewTask,
    ) -> RepositoryResult<StoredTask> {
        let _guard = self.write_lock.lock().await;

        let mut days = self.read_days_or_empty("create_task").await?;
        let created = insert_task(&mut days, date, work_place_id, task)?;
        self.write_days(&days, "create_task").await?;

        log::debug!(
            "Wrote {} day(s) to {}",
            days.len(),
            self.path.display()
        );
        Ok(created)
    }
}
