use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};

/// Inclusive range of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleWindow {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl ScheduleWindow {
    /// Number of calendar days covered, both ends included.
    pub fn len_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> {
        self.start_date.iter_days().take_while({
            let end = self.end_date;
            move |d| *d <= end
        })
    }
}

/// Sunday-to-Saturday week containing `now`.
pub fn compute_week_range(now: NaiveDateTime) -> ScheduleWindow {
    let today = now.date();
    let since_sunday = today.weekday().num_days_from_sunday() as i64;
    let start_date = today - Duration::days(since_sunday);
    ScheduleWindow {
        start_date,
        end_date: start_date + Duration::days(6),
    }
}

pub fn compute_tomorrow(now: NaiveDateTime) -> NaiveDate {
    let today = now.date();
    today.succ_opt().unwrap_or(today)
}

pub fn is_friday(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Fri
}

/// Format a date as "YYYY-MM-DD"
pub fn to_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
