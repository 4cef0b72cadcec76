//! Data Transfer Objects for the HTTP API.
//!
//! Response bodies are re-exported from the routes module; query strings
//! are parsed here and checked before reaching the service layer.

use serde::{Deserialize, Serialize};

pub use crate::db::models::{DayData, NewTask, StoredTask};
pub use crate::routes::data::{CreateTaskRequest, CreateTaskResponse};
pub use crate::routes::layout::{ColumnData, HourLabel, LayoutData, TaskBox};
pub use crate::services::views::NewTaskDefaults;

use super::error::AppError;
use crate::models::{TimeFormat, TimeWindow, HOURS_PER_DAY};
use crate::services::page::PageParams;
use crate::services::views::{HeaderLayout, ViewMode};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Task store status
    pub storage: String,
}

/// Query parameters for the layout endpoint. Every field is optional and
/// falls back to the page defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LayoutQuery {
    /// Index of the first shown day
    #[serde(default)]
    pub selected: Option<usize>,
    /// `day` or `3days`
    #[serde(default)]
    pub view: Option<ViewMode>,
    /// `inline` or `separate`
    #[serde(default)]
    pub layout: Option<HeaderLayout>,
    #[serde(default)]
    pub start_hour: Option<u32>,
    #[serde(default)]
    pub end_hour: Option<u32>,
    /// Pixel height of one hour row
    #[serde(default)]
    pub hour_height: Option<f64>,
    /// `24h` or `12h`
    #[serde(default)]
    pub time_format: Option<TimeFormat>,
}

impl LayoutQuery {
    /// Resolve the query against the defaults, rejecting impossible windows
    /// and hour heights.
    pub fn to_params(&self) -> Result<PageParams, AppError> {
        let defaults = PageParams::default();

        let window = TimeWindow::new(
            self.start_hour.unwrap_or(defaults.window.start_hour()),
            self.end_hour.unwrap_or(defaults.window.end_hour()),
        )
        .map_err(|e| AppError::BadRequest(format!("Invalid time window: {}", e)))?;

        let hour_height = self.hour_height.unwrap_or(defaults.hour_height);
        if !hour_height.is_finite() || hour_height <= 0.0 {
            return Err(AppError::BadRequest(format!(
                "hour_height must be a positive number, got {}",
                hour_height
            )));
        }

        Ok(PageParams {
            selected: self.selected.unwrap_or(defaults.selected),
            view: self.view.unwrap_or(defaults.view),
            layout: self.layout.unwrap_or(defaults.layout),
            window,
            hour_height,
            time_format: self.time_format.unwrap_or(defaults.time_format),
        })
    }
}

/// Query parameters for the cell-click endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CellQuery {
    #[serde(default)]
    pub selected: Option<usize>,
    #[serde(default)]
    pub view: Option<ViewMode>,
    #[serde(default)]
    pub layout: Option<HeaderLayout>,
    /// Column id as shown in the layout; integers select day-view columns
    pub column: String,
    /// Clicked hour row, 0-23
    pub hour: u32,
}

impl CellQuery {
    pub fn to_params(&self) -> Result<PageParams, AppError> {
        if self.hour >= HOURS_PER_DAY {
            return Err(AppError::BadRequest(format!(
                "hour must be between 0 and 23, got {}",
                self.hour
            )));
        }
        let defaults = PageParams::default();
        Ok(PageParams {
            selected: self.selected.unwrap_or(defaults.selected),
            view: self.view.unwrap_or(defaults.view),
            layout: self.layout.unwrap_or(defaults.layout),
            ..defaults
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_query_defaults() {
        let params = LayoutQuery::default().to_params().unwrap();
        assert_eq!(params.window.start_hour(), 0);
        assert_eq!(params.window.end_hour(), 23);
        assert_eq!(params.hour_height, 60.0);
        assert_eq!(params.view, ViewMode::Day);
    }

    #[test]
    fn test_layout_query_rejects_inverted_window() {
        let query = LayoutQuery {
            start_hour: Some(10),
            end_hour: Some(8),
            ..LayoutQuery::default()
        };
        assert!(matches!(query.to_params(), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_layout_query_rejects_bad_hour_height() {
        for hour_height in [0.0, -5.0, f64::NAN] {
            let query = LayoutQuery {
                hour_height: Some(hour_height),
                ..LayoutQuery::default()
            };
            assert!(query.to_params().is_err());
        }
    }

    #[test]
    fn test_cell_query_hour_bounds() {
        let query = CellQuery {
            selected: None,
            view: None,
            layout: None,
            column: "1".to_string(),
            hour: 24,
        };
        assert!(query.to_params().is_err());
        let query = CellQuery { hour: 23, ..query };
        assert!(query.to_params().is_ok());
    }
}
