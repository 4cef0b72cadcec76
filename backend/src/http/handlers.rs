//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};

use super::dto::{
    CellQuery, CreateTaskRequest, CreateTaskResponse, DayData, HealthResponse, LayoutData,
    LayoutQuery, NewTaskDefaults,
};
use super::error::AppError;
use super::state::AppState;
use crate::db::services as db_services;
use crate::models::ColumnId;
use crate::services::page::{build_page, page_cell_defaults};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the store is reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let storage = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "available".to_string(),
        Ok(false) => "unavailable".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        storage,
    }))
}

// =============================================================================
// Task store
// =============================================================================

/// GET /api/data
///
/// The full store: every day with its work places and tasks.
pub async fn list_data(State(state): State<AppState>) -> HandlerResult<Vec<DayData>> {
    let days = db_services::list_days(state.repository.as_ref()).await?;
    Ok(Json(days))
}

/// POST /api/data
///
/// Add a task to a work place, creating the day when needed.
pub async fn create_task(
    State(state): State<AppState>,
    payload: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> HandlerResult<CreateTaskResponse> {
    let Json(request) =
        payload.map_err(|e| AppError::BadRequest(format!("Invalid request body: {}", e)))?;

    let task = db_services::create_task(
        state.repository.as_ref(),
        &request.date,
        request.work_place_id,
        request.task,
    )
    .await?;

    Ok(Json(CreateTaskResponse::created(task)))
}

// =============================================================================
// Layout
// =============================================================================

/// GET /v1/layout
///
/// Run the layout engine for the selected view and return the grid geometry.
pub async fn get_layout(
    State(state): State<AppState>,
    query: Result<Query<LayoutQuery>, QueryRejection>,
) -> HandlerResult<LayoutData> {
    let Query(query) =
        query.map_err(|e| AppError::BadRequest(format!("Invalid query: {}", e)))?;
    let params = query.to_params()?;

    let days = db_services::list_days(state.repository.as_ref()).await?;
    check_selected(params.selected, days.len())?;

    Ok(Json(build_page(&days, &params)))
}

/// GET /v1/cell
///
/// Defaults for the add-task dialog after clicking a grid cell.
pub async fn get_cell_defaults(
    State(state): State<AppState>,
    query: Result<Query<CellQuery>, QueryRejection>,
) -> HandlerResult<NewTaskDefaults> {
    let Query(query) =
        query.map_err(|e| AppError::BadRequest(format!("Invalid query: {}", e)))?;
    let params = query.to_params()?;

    let days = db_services::list_days(state.repository.as_ref()).await?;
    check_selected(params.selected, days.len())?;

    let column = ColumnId::parse_lossy(&query.column);
    page_cell_defaults(&days, &params, &column, query.hour)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Column {} is not in the selected view", column)))
}

/// An empty store still renders an empty grid at index 0.
fn check_selected(selected: usize, day_count: usize) -> Result<(), AppError> {
    if selected > 0 && selected >= day_count {
        return Err(AppError::NotFound(format!(
            "Day index {} out of range ({} day(s) stored)",
            selected, day_count
        )));
    }
    Ok(())
}
