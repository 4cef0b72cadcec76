//! Input types of the scheduling grid: tasks, columns and the visible window.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::time::{generate_hours, HOURS_PER_DAY, MINUTES_PER_HOUR};

crate::define_key_type!(ColumnId);
crate::define_key_type!(TaskId);

/// Values keyed by [`ColumnId`] in column display order.
///
/// Re-inserting an existing id replaces its value in place, so the first
/// occurrence of a column decides its position. Serializes as a JSON object.
pub type ColumnMap<T> = IndexMap<ColumnId, T>;

/// Placeholder payload for tasks and columns that carry no extra attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NoExtra {}

/// A task placed in one column of the grid.
///
/// `extra` is an opaque payload owned by the caller; the layout engine never
/// inspects it. It is flattened into the task's JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task<X = NoExtra> {
    pub id: TaskId,
    /// Must match the `id` of some [`Column`]; unmatched tasks are not laid out.
    pub column: ColumnId,
    pub name: String,
    /// `"HH:MM"`, 24-hour clock.
    pub start_time: String,
    /// `"HH:MM"`, 24-hour clock. Expected to be on the same day as the start.
    pub end_time: String,
    #[serde(flatten)]
    pub extra: X,
}

impl<X: Default> Task<X> {
    pub fn new(
        id: impl Into<TaskId>,
        column: impl Into<ColumnId>,
        name: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            column: column.into(),
            name: name.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            extra: X::default(),
        }
    }
}

impl<X> Task<X> {
    /// Replace the payload, possibly changing its type.
    pub fn with_extra<Y>(self, extra: Y) -> Task<Y> {
        Task {
            id: self.id,
            column: self.column,
            name: self.name,
            start_time: self.start_time,
            end_time: self.end_time,
            extra,
        }
    }
}

/// A resource column. Columns are laid out left to right in the order given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column<C = NoExtra> {
    pub id: ColumnId,
    pub label: String,
    #[serde(flatten)]
    pub extra: C,
}

impl<C: Default> Column<C> {
    pub fn new(id: impl Into<ColumnId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            extra: C::default(),
        }
    }
}

impl<C> Column<C> {
    pub fn with_extra<D>(self, extra: D) -> Column<D> {
        Column {
            id: self.id,
            label: self.label,
            extra,
        }
    }
}

/// Rejected window bounds.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WindowError {
    #[error("end hour {end_hour} must be greater than start hour {start_hour}")]
    Inverted { start_hour: u32, end_hour: u32 },
    #[error("end hour {0} is past the end of the day")]
    PastMidnight(u32),
}

/// Visible time range `[start_hour, end_hour)` in whole hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeWindow {
    start_hour: u32,
    end_hour: u32,
}

impl TimeWindow {
    /// Create a window, rejecting empty, inverted or out-of-day bounds.
    pub fn new(start_hour: u32, end_hour: u32) -> Result<Self, WindowError> {
        if end_hour <= start_hour {
            return Err(WindowError::Inverted {
                start_hour,
                end_hour,
            });
        }
        if end_hour > HOURS_PER_DAY {
            return Err(WindowError::PastMidnight(end_hour));
        }
        Ok(Self {
            start_hour,
            end_hour,
        })
    }

    /// Create a window without failing: inverted bounds collapse to an empty
    /// window at `start_hour`.
    pub fn clamped(start_hour: u32, end_hour: u32) -> Self {
        Self {
            start_hour,
            end_hour: end_hour.max(start_hour),
        }
    }

    pub fn start_hour(&self) -> u32 {
        self.start_hour
    }

    pub fn end_hour(&self) -> u32 {
        self.end_hour
    }

    pub fn is_empty(&self) -> bool {
        self.end_hour <= self.start_hour
    }

    /// Number of hour rows in the window.
    pub fn len_hours(&self) -> u32 {
        self.end_hour.saturating_sub(self.start_hour)
    }

    pub fn start_minutes(&self) -> f64 {
        self.start_hour as f64 * MINUTES_PER_HOUR
    }

    pub fn end_minutes(&self) -> f64 {
        self.end_hour as f64 * MINUTES_PER_HOUR
    }

    pub fn hours(&self) -> std::ops::Range<u32> {
        generate_hours(self.start_hour, self.end_hour)
    }
}
