//! Shaduler HTTP Server Binary
//!
//! Initializes the task store, sets up the HTTP router and starts serving.
//!
//! # Usage
//!
//! ```bash
//! # JSON file store at data/data.json (default)
//! cargo run --bin shaduler-server
//!
//! # In-memory store
//! REPOSITORY_TYPE=local cargo run --bin shaduler-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `REPOSITORY_TYPE`: `file` or `local`, overrides `repository.toml`
//! - `DATA_FILE`: JSON store path for the file repository
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use shaduler::db::{RepositoryConfig, RepositoryFactory, TaskRepository};
use shaduler::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting Shaduler HTTP Server");

    let repository = init_repository()?;
    if !repository.health_check().await? {
        warn!("Task store reported unhealthy at startup");
    }
    info!("Repository initialized successfully");

    let state = AppState::new(repository);
    let app = create_router(state);

    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Environment wins over `repository.toml`; with neither, the file store
/// at `data/data.json` is used.
fn init_repository() -> anyhow::Result<Arc<dyn TaskRepository>> {
    if env::var("REPOSITORY_TYPE").is_ok() || env::var("DATA_FILE").is_ok() {
        return Ok(RepositoryFactory::from_env());
    }
    match RepositoryConfig::default_location() {
        Some(path) => {
            info!("Loading repository configuration from {}", path.display());
            Ok(RepositoryFactory::from_config_file(path)?)
        }
        None => Ok(RepositoryFactory::from_env()),
    }
}
