//! Stream calendar
//!
//! Pure computation over caller-supplied values: a month grid, the history
//! grouped by day, and the marker for each cell. Nothing here performs I/O
//! or can fail; malformed history entries degrade to "no marker".

pub mod classify;
pub mod grid;
pub mod grouping;
pub mod navigation;
pub mod view;

pub use classify::{classify_cell, StreamSchedule};
pub use grid::{build_month_grid, build_month_grid_now, days_in_month, normalize_month};
pub use grouping::group_events_by_date;
pub use navigation::{months_between, MonthStep};
pub use view::{annotate_month, CalendarCell, MonthView};
