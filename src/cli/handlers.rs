use anyhow::{Result, anyhow};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::api::Transport;
use crate::config::AppConfig;
use crate::models::{PrayerName, PrayerRow, RawPrayerDayRecord};
use crate::schedule::{next_prayer, project_week};
use crate::store::ScheduleStore;
use crate::utils::calendar::{compute_tomorrow, compute_week_range, to_iso};
use crate::utils::format::format_countdown;

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const AMBER: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const GOLD: &str = "\x1b[38;2;196;160;68m";

// ─── Day views ───────────────────────────────────────────────────────────────

pub async fn handle_today<T: Transport>(
    store: &ScheduleStore<T>,
    now: NaiveDateTime,
    json: bool,
) -> Result<()> {
    let rows = store.fetch_today_data(now).await;
    ensure_loaded(store)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    print_day(&format!("Today ({})", to_iso(now.date())), &rows, Some(now));
    Ok(())
}

pub async fn handle_tomorrow<T: Transport>(
    store: &ScheduleStore<T>,
    now: NaiveDateTime,
    json: bool,
) -> Result<()> {
    let rows = store.fetch_tomorrow_data(now).await;
    ensure_loaded(store)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    let tomorrow = compute_tomorrow(now);
    print_day(&format!("Tomorrow ({})", to_iso(tomorrow)), &rows, None);
    Ok(())
}

// ─── Week ────────────────────────────────────────────────────────────────────

pub async fn handle_week<T: Transport>(
    store: &ScheduleStore<T>,
    now: NaiveDateTime,
    json: bool,
) -> Result<()> {
    let records = store.fetch_week_data(now).await;
    ensure_loaded(store)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    let window = compute_week_range(now);
    let days = week_days(store, &records);

    println!();
    println_colored!(
        GOLD,
        "  Week of {} to {}",
        to_iso(window.start_date),
        to_iso(window.end_date)
    );

    for date in window.dates() {
        let heading = date.format("%A %d %b").to_string();
        match days.iter().find(|(d, _)| *d == Some(date)) {
            Some((_, rows)) => {
                let when = (date == now.date()).then_some(now);
                print_day(&heading, rows, when);
            }
            None => {
                println!();
                println_colored!(BOLD, "  {}", heading);
                println_colored!(DIM, "  no timetable published");
            }
        }
    }
    println!();
    Ok(())
}

// ─── Next prayer ─────────────────────────────────────────────────────────────

pub async fn handle_next<T: Transport>(store: &ScheduleStore<T>, now: NaiveDateTime) -> Result<()> {
    let (today, tomorrow) = load_next_inputs(store, now).await?;

    println!();
    match next_prayer(&today, &tomorrow, now.time()) {
        Some((name, secs)) => {
            let at = (now + Duration::seconds(secs)).format("%-I:%M");
            println_colored!(
                AMBER,
                "  Next: {} at {} in {}",
                name.display_name(),
                at,
                format_countdown(secs)
            );
        }
        None => println_colored!(DIM, "  No upcoming prayer in the timetable"),
    }
    println!();
    Ok(())
}

/// Today's and tomorrow's rows, fetched one after the other so a failure on
/// either day is reported before the next fetch resets `error`.
pub async fn load_next_inputs<T: Transport>(
    store: &ScheduleStore<T>,
    now: NaiveDateTime,
) -> Result<(Vec<PrayerRow>, Vec<PrayerRow>)> {
    let today = store.fetch_today_data(now).await;
    ensure_loaded(store)?;
    let tomorrow = store.fetch_tomorrow_data(now).await;
    ensure_loaded(store)?;
    Ok((today, tomorrow))
}

// ─── Config ──────────────────────────────────────────────────────────────────

pub fn handle_config(config: &AppConfig, init: bool) -> Result<()> {
    let path = AppConfig::config_path()?;
    if init {
        config.save_to(&path)?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    println!("Config file:   {}", path.display());
    println!("API URL:       {}", config.api.base_url);
    println!("Collection:    {}", config.api.collection);
    println!(
        "API token:     {}",
        if config.api.token.is_empty() { "EMPTY" } else { "SET" }
    );
    println!("Friday policy: {}", config.display.friday_policy.as_str());
    Ok(())
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// Week records projected with the store's own Friday policy.
fn week_days<T: Transport>(
    store: &ScheduleStore<T>,
    records: &[RawPrayerDayRecord],
) -> Vec<(Option<NaiveDate>, Vec<PrayerRow>)> {
    project_week(records, store.friday_policy())
}

fn ensure_loaded<T: Transport>(store: &ScheduleStore<T>) -> Result<()> {
    match store.state().error {
        Some(message) => Err(anyhow!("Could not load timetable: {}", message)),
        None => Ok(()),
    }
}

/// One table line: name, start and jamat columns.
pub fn format_row(row: &PrayerRow) -> String {
    let blank = |s: &str| if s.is_empty() { "--:--".to_string() } else { s.to_string() };
    let jamat = if row.name == PrayerName::Sunrise {
        String::new()
    } else {
        blank(&row.jamat_time_12)
    };
    format!("  {:<10}{:<8}{}", row.name.display_name(), blank(&row.start_time_12), jamat)
        .trim_end()
        .to_string()
}

/// Print a day; rows whose start is before `now` are dimmed.
fn print_day(title: &str, rows: &[PrayerRow], now: Option<NaiveDateTime>) {
    println!();
    println_colored!(GOLD, "  {}", title);
    println_colored!(DIM, "  {:<10}{:<8}{}", "", "Start", "Jamat");

    if rows.iter().all(|r| !r.has_start()) {
        println_colored!(RED, "  no times published for this day");
        return;
    }

    for row in rows {
        let started = NaiveTime::parse_from_str(&row.start_time_24, "%H:%M").ok();
        let is_past = matches!((started, now), (Some(t), Some(n)) if t < n.time());
        if is_past {
            println_colored!(DIM, "{}", format_row(row));
        } else {
            println_colored!(BOLD, "{}", format_row(row));
        }
    }
}
