//! Repository factory for dependency injection.
//!
//! Creates the configured [`TaskRepository`] from the environment or from
//! `repository.toml`.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use super::repo_config::RepositoryConfig;
use super::repositories::file::DEFAULT_DATA_FILE;
use super::repositories::{FileRepository, LocalRepository};
use super::repository::{RepositoryError, RepositoryResult, TaskRepository};

/// Repository type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryType {
    /// JSON file on disk
    File,
    /// In-memory local repository
    Local,
}

impl FromStr for RepositoryType {
    type Err = String;

    /// Parse repository type from string ("file", "json", "local", "memory").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "file" | "json" => Ok(Self::File),
            "local" | "memory" => Ok(Self::Local),
            _ => Err(format!("Unknown repository type: {}", s)),
        }
    }
}

impl RepositoryType {
    /// Get repository type from the `REPOSITORY_TYPE` environment variable.
    ///
    /// Defaults to [`RepositoryType::File`] when unset or unparsable.
    pub fn from_env() -> Self {
        std::env::var("REPOSITORY_TYPE")
            .ok()
            .and_then(|val| val.parse().ok())
            .unwrap_or(Self::File)
    }
}

/// Data file path from `DATA_FILE`, falling back to `data/data.json`.
pub fn data_file_from_env() -> PathBuf {
    std::env::var("DATA_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_FILE))
}

/// Repository factory for creating repository instances.
///
/// # Example
/// ```
/// use shaduler::db::RepositoryFactory;
///
/// let repo = RepositoryFactory::create_file("data/data.json", true);
/// ```
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create an in-memory local repository.
    pub fn create_local() -> Arc<dyn TaskRepository> {
        Arc::new(LocalRepository::new())
    }

    /// Create a JSON file repository.
    pub fn create_file(path: impl Into<PathBuf>, pretty: bool) -> Arc<dyn TaskRepository> {
        Arc::new(FileRepository::new(path).with_pretty(pretty))
    }

    /// Create repository from environment configuration.
    ///
    /// Reads `REPOSITORY_TYPE` and, for the file store, `DATA_FILE`.
    pub fn from_env() -> Arc<dyn TaskRepository> {
        match RepositoryType::from_env() {
            RepositoryType::File => Self::create_file(data_file_from_env(), true),
            RepositoryType::Local => Self::create_local(),
        }
    }

    /// Create repository from a TOML configuration file.
    pub fn from_config_file<P: AsRef<Path>>(
        config_path: P,
    ) -> RepositoryResult<Arc<dyn TaskRepository>> {
        let config = RepositoryConfig::from_file(config_path)?;
        Self::from_repository_config(&config)
    }

    /// Create repository from the default configuration file location.
    pub fn from_default_config() -> RepositoryResult<Arc<dyn TaskRepository>> {
        let config = RepositoryConfig::from_default_location()?;
        Self::from_repository_config(&config)
    }

    /// Create repository from a RepositoryConfig instance.
    pub fn from_repository_config(
        config: &RepositoryConfig,
    ) -> RepositoryResult<Arc<dyn TaskRepository>> {
        let repo_type = config.repository_type().map_err(|e| {
            RepositoryError::configuration(format!("Invalid repository type: {}", e))
        })?;

        Ok(match repo_type {
            RepositoryType::File => Self::create_file(config.file.path.clone(), config.file.pretty),
            RepositoryType::Local => Self::create_local(),
        })
    }
}
