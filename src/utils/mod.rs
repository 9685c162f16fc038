pub mod calendar;
pub mod format;

pub use calendar::{ScheduleWindow, compute_tomorrow, compute_week_range, to_iso};
pub use format::{format_countdown, to_twelve_hour};
