use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{PrayerName, PrayerRow, RawPrayerDayRecord};
use crate::utils::calendar::is_friday;
use crate::utils::format::{clip_time, to_twelve_hour};

/// How the Jummah row is combined with the daily rows on a Friday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FridayPolicy {
    /// Six rows, with Jummah standing in the Zuhr slot.
    #[default]
    ReplaceZuhr,
    /// Jummah is the only row for the day.
    ReplaceDay,
    /// Six daily rows followed by Jummah.
    Append,
}

impl FridayPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            FridayPolicy::ReplaceZuhr => "replace_zuhr",
            FridayPolicy::ReplaceDay => "replace_day",
            FridayPolicy::Append => "append",
        }
    }
}

fn build_row(name: PrayerName, record: Option<&RawPrayerDayRecord>) -> PrayerRow {
    let Some(record) = record else {
        return PrayerRow::empty(name);
    };
    let start = clip_time(record.start_of(name));
    let jamat = if name.has_jamat() {
        to_twelve_hour(record.jamat_of(name))
    } else {
        String::new()
    };
    PrayerRow {
        name,
        start_time_12: to_twelve_hour(Some(start.as_str())),
        start_time_24: start,
        jamat_time_12: jamat,
    }
}

/// The six daily rows for a record. Always six, always in canonical order.
pub fn project(record: Option<&RawPrayerDayRecord>) -> Vec<PrayerRow> {
    PrayerName::canonical()
        .into_iter()
        .map(|name| build_row(name, record))
        .collect()
}

/// The Friday congregational row, from `jummah_1` and `jummah_2`.
pub fn project_jummah(record: Option<&RawPrayerDayRecord>) -> PrayerRow {
    build_row(PrayerName::Jummah, record)
}

pub fn project_daily(record: Option<&RawPrayerDayRecord>, date: NaiveDate) -> Vec<PrayerRow> {
    project_daily_with(record, date, FridayPolicy::default())
}

pub fn project_daily_with(
    record: Option<&RawPrayerDayRecord>,
    date: NaiveDate,
    policy: FridayPolicy,
) -> Vec<PrayerRow> {
    if !is_friday(date) {
        return project(record);
    }

    let jummah = project_jummah(record);
    match policy {
        FridayPolicy::ReplaceDay => vec![jummah],
        FridayPolicy::ReplaceZuhr => {
            let mut rows = project(record);
            if let Some(slot) = rows.iter_mut().find(|r| r.name == PrayerName::Zuhr) {
                *slot = jummah;
            }
            rows
        }
        FridayPolicy::Append => {
            let mut rows = project(record);
            rows.push(jummah);
            rows
        }
    }
}

/// Project each fetched record by its own date. Records without a usable
/// date fall back to the six daily rows.
pub fn project_week(
    records: &[RawPrayerDayRecord],
    policy: FridayPolicy,
) -> Vec<(Option<NaiveDate>, Vec<PrayerRow>)> {
    records
        .iter()
        .map(|record| {
            let date = record.calendar_date();
            let rows = match date {
                Some(d) => project_daily_with(Some(record), d, policy),
                None => project(Some(record)),
            };
            (date, rows)
        })
        .collect()
}
