//! Repository configuration file support.
//!
//! Reads `repository.toml`:
//!
//! ```toml
//! [repository]
//! type = "file"
//!
//! [file]
//! path = "data/data.json"
//! pretty = true
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::factory::RepositoryType;
use super::repositories::file::DEFAULT_DATA_FILE;
use super::repository::{ErrorContext, RepositoryError};

/// Repository configuration from file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryConfig {
    pub repository: RepositorySettings,
    #[serde(default)]
    pub file: FileSettings,
}

/// Repository type settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositorySettings {
    #[serde(rename = "type")]
    pub repo_type: String,
}

/// JSON file store settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileSettings {
    #[serde(default = "default_path")]
    pub path: PathBuf,
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for FileSettings {
    fn default() -> Self {
        Self {
            path: default_path(),
            pretty: default_pretty(),
        }
    }
}

fn default_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_pretty() -> bool {
    true
}

impl RepositoryConfig {
    /// Load repository configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RepositoryError> {
        let path = path.as_ref();
        let context = || {
            ErrorContext::new("load_config")
                .with_entity("config_file")
                .with_entity_id(path.display())
        };

        let content = fs::read_to_string(path).map_err(|e| RepositoryError::ConfigurationError {
            message: format!("Failed to read config file: {}", e),
            context: context(),
        })?;

        toml::from_str(&content).map_err(|e| RepositoryError::ConfigurationError {
            message: format!("Failed to parse config file: {}", e),
            context: context(),
        })
    }

    /// First existing `repository.toml` among the standard locations:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    pub fn default_location() -> Option<PathBuf> {
        [
            PathBuf::from("repository.toml"),
            PathBuf::from("backend/repository.toml"),
            PathBuf::from("../repository.toml"),
        ]
        .into_iter()
        .find(|path| path.exists())
    }

    /// Load repository configuration from the default location.
    pub fn from_default_location() -> Result<Self, RepositoryError> {
        match Self::default_location() {
            Some(path) => Self::from_file(path),
            None => Err(RepositoryError::configuration(
                "No repository.toml found in standard locations",
            )),
        }
    }

    /// Get the repository type from configuration.
    pub fn repository_type(&self) -> Result<RepositoryType, String> {
        RepositoryType::from_str(&self.repository.repo_type)
    }
}
