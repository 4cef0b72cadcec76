//! Task store for the scheduling widget.
//!
//! Storage goes through the Repository pattern so the JSON file store used in
//! production and the in-memory store used in tests are interchangeable.
//!
//! - `models`: days, work places and stored tasks
//! - `services`: validated operations (use these in your application!)
//! - `repository`: the `TaskRepository` trait and error types
//! - `repositories::file`: JSON file implementation
//! - `repositories::local`: in-memory implementation for tests and local development
//! - `factory`: repository construction from env or `repository.toml`
//!
//! # Recommended Usage
//!
//! ```no_run
//! use shaduler::db::{services, RepositoryFactory};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let repo = RepositoryFactory::from_env();
//! let days = services::list_days(repo.as_ref()).await?;
//! # Ok(())
//! # }
//! ```

pub mod factory;
pub mod models;
pub mod repo_config;
pub mod repositories;
pub mod repository;
pub mod services;


pub use services::{create_task, get_day, health_check, list_days};

pub use factory::{RepositoryFactory, RepositoryType};
pub use models::{DayData, NewTask, StoredTask, StoredTaskId, TaskStatus, WorkPlace, WorkPlaceId};
pub use repo_config::RepositoryConfig;
pub use repositories::{FileRepository, LocalRepository};
pub use repository::{ErrorContext, RepositoryError, RepositoryResult, TaskRepository};
