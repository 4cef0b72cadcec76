//! Repository implementations module.
//!
//! This module contains the implementations of the `TaskRepository` trait:
//! - `file`: JSON file on disk, the production store
//! - `local`: In-memory implementation for unit testing and local development
pub mod file;
pub mod local;

pub use file::FileRepository;
pub use local::LocalRepository;
