//! Service layer for business logic and orchestration.
//!
//! - [`layout`]: grid geometry for one render of the scheduler
//! - [`views`]: day and multi-day views built from the task store
//! - [`page`]: a whole page rendered server-side from the two above

pub mod layout;
pub mod page;
pub mod views;

pub use layout::{
    column_template, compute_layout, horizontal_placement, row_template, HorizontalPlacement,
    PlacedTask, ShadulerCalculations,
};
pub use page::{build_page, page_cell_defaults, PageParams};
pub use views::{
    build_view, cell_defaults, next_index, previous_index, range_label, status_color_class,
    visible_days, ColumnRef, DateHeader, HeaderLayout, NewTaskDefaults, ScheduleView, TaskMeta,
    ViewMode,
};
