//! # Shaduler
//!
//! Layout engine and task store for a resource-by-time scheduling grid.
//!
//! Tasks are assigned to resource columns ("work places") and drawn on a
//! grid of hour rows. The engine places each task vertically by its time
//! range, splits the width of a column among tasks whose times overlap, and
//! produces the grid sizing directives a renderer needs. A JSON file store
//! and an axum REST API serve the same layout to web clients.
//!
//! ## Architecture
//!
//! - [`models`]: tasks, columns, time window and clock helpers
//! - [`algorithms`]: column grouping and per-column overlap layout
//! - [`services`]: grid geometry, day/multi-day views, whole-page layout
//! - [`db`]: task store, repository pattern and persistence
//! - [`routes`]: route-specific data types
//! - [`api`]: public DTO re-exports
//! - [`http`]: axum-based HTTP server and request handlers

// Allow large error types - RepositoryError contains rich context for debugging
#![allow(clippy::result_large_err)]

pub mod algorithms;
pub mod api;
pub mod db;
pub mod models;
pub mod routes;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
