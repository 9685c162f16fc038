use chrono::{NaiveTime, Timelike};

use crate::models::{PrayerName, PrayerRow};

fn start_time(row: &PrayerRow) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(&row.start_time_24, "%H:%M").ok()
}

/// Returns (next prayer, seconds until its start).
///
/// Sunrise is skipped. Rows are compared by start time, not list position,
/// so an appended Jummah row is found before a later Asr. Once every row of
/// `today` has started, the earliest prayer in `tomorrow` is counted across
/// midnight.
pub fn next_prayer(
    today: &[PrayerRow],
    tomorrow: &[PrayerRow],
    now: NaiveTime,
) -> Option<(PrayerName, i64)> {
    let prayers = |rows: &[PrayerRow]| -> Vec<(PrayerName, NaiveTime)> {
        rows.iter()
            .filter(|r| r.name != PrayerName::Sunrise)
            .filter_map(|r| start_time(r).map(|t| (r.name, t)))
            .collect()
    };

    let upcoming = prayers(today)
        .into_iter()
        .filter(|(_, t)| *t > now)
        .min_by_key(|(_, t)| *t);
    if let Some((name, time)) = upcoming {
        return Some((name, (time - now).num_seconds()));
    }

    let (name, time) = prayers(tomorrow).into_iter().min_by_key(|(_, t)| *t)?;
    let until_midnight = 86_400 - i64::from(now.num_seconds_from_midnight());
    let after_midnight = i64::from(time.num_seconds_from_midnight());
    Some((name, until_midnight + after_midnight))
}
