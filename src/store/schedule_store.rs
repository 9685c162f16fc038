use chrono::{NaiveDate, NaiveDateTime};
use log::{debug, error, info};
use tokio::sync::watch;

use crate::api::query::{collection_url, day_query, records_from_body, week_query};
use crate::api::{Transport, TransportError};
use crate::config::ApiConfig;
use crate::models::{PrayerRow, RawPrayerDayRecord};
use crate::schedule::{FridayPolicy, project_daily_with};
use crate::store::state::StoreState;
use crate::utils::calendar::{compute_tomorrow, compute_week_range, to_iso};

/// Fetches timetable records and keeps the projected schedule in memory.
///
/// Each store owns its state; nothing is shared between instances. Fetches
/// take `&self` and may run concurrently, in which case `loading` and `error`
/// reflect whichever fetch finished last.
pub struct ScheduleStore<T> {
    transport: T,
    api: ApiConfig,
    friday_policy: FridayPolicy,
    state: watch::Sender<StoreState>,
}

impl<T: Transport> ScheduleStore<T> {
    pub fn new(transport: T, api: ApiConfig, friday_policy: FridayPolicy) -> Self {
        let (state, _) = watch::channel(StoreState::default());
        Self {
            transport,
            api,
            friday_policy,
            state,
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> StoreState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<StoreState> {
        self.state.subscribe()
    }

    /// The Friday composition every projection from this store uses.
    pub fn friday_policy(&self) -> FridayPolicy {
        self.friday_policy
    }

    /// Load this week's records (Sunday to Saturday around `now`).
    ///
    /// On failure the previous week is kept and `error` is set.
    pub async fn fetch_week_data(&self, now: NaiveDateTime) -> Vec<RawPrayerDayRecord> {
        self.begin();
        let window = compute_week_range(now);
        debug!(
            "Fetching week {} .. {}",
            to_iso(window.start_date),
            to_iso(window.end_date)
        );

        match self.fetch_records(&week_query(&window)).await {
            Ok(records) => {
                info!("Loaded {} records for week of {}", records.len(), window.start_date);
                self.state.send_modify(|s| {
                    s.week_rows = records.clone();
                    s.loading = false;
                });
                records
            }
            Err(err) => {
                error!("Error fetching week data: {}", err);
                self.fail(err, |_| {});
                Vec::new()
            }
        }
    }

    /// Load and project tomorrow's rows.
    ///
    /// On failure `tomorrow_rows` is cleared so a previous day is never shown
    /// as tomorrow.
    pub async fn fetch_tomorrow_data(&self, now: NaiveDateTime) -> Vec<PrayerRow> {
        self.begin();
        let tomorrow = compute_tomorrow(now);

        match self.fetch_day(tomorrow).await {
            Ok(rows) => {
                self.state.send_modify(|s| {
                    s.tomorrow_rows = rows.clone();
                    s.loading = false;
                });
                rows
            }
            Err(err) => {
                error!("Error fetching tomorrow data: {}", err);
                self.fail(err, |s| s.tomorrow_rows.clear());
                Vec::new()
            }
        }
    }

    /// Load and project today's rows into both today slots.
    ///
    /// On failure both slots are left as they were.
    pub async fn fetch_today_data(&self, now: NaiveDateTime) -> Vec<PrayerRow> {
        self.begin();

        match self.fetch_day(now.date()).await {
            Ok(rows) => {
                self.state.send_modify(|s| {
                    s.original_today_rows = rows.clone();
                    s.updated_today_rows = rows.clone();
                    s.loading = false;
                });
                rows
            }
            Err(err) => {
                error!("Error fetching today data: {}", err);
                self.fail(err, |_| {});
                Vec::new()
            }
        }
    }

    pub fn set_today_data(&self, original: Vec<PrayerRow>, updated: Vec<PrayerRow>) {
        self.state.send_modify(|s| {
            s.original_today_rows = original;
            s.updated_today_rows = updated;
        });
    }

    /// Drop local edits to today's rows.
    pub fn revert_today(&self) {
        self.state.send_modify(|s| {
            s.updated_today_rows = s.original_today_rows.clone();
        });
    }

    fn begin(&self) {
        self.state.send_modify(|s| {
            s.loading = true;
            s.error = None;
        });
    }

    fn fail(&self, err: TransportError, clear: impl FnOnce(&mut StoreState)) {
        self.state.send_modify(|s| {
            clear(s);
            s.error = Some(err.to_string());
            s.loading = false;
        });
    }

    async fn fetch_day(&self, date: NaiveDate) -> Result<Vec<PrayerRow>, TransportError> {
        let records = self.fetch_records(&day_query(date)).await?;
        Ok(project_daily_with(records.first(), date, self.friday_policy))
    }

    async fn fetch_records(&self, query: &str) -> Result<Vec<RawPrayerDayRecord>, TransportError> {
        let url = collection_url(&self.api.base_url, &self.api.collection, query);
        let body = self.transport.fetch_data(&url, &self.api.token).await?;
        records_from_body(body)
    }
}
