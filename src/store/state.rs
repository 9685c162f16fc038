use serde::Serialize;

use crate::models::{PrayerRow, RawPrayerDayRecord};

/// Everything the store currently holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StoreState {
    /// This week's records, unprojected
    pub week_rows: Vec<RawPrayerDayRecord>,
    /// Today's rows as fetched
    pub original_today_rows: Vec<PrayerRow>,
    /// Today's rows after local edits
    pub updated_today_rows: Vec<PrayerRow>,
    pub tomorrow_rows: Vec<PrayerRow>,
    pub loading: bool,
    pub error: Option<String>,
}

impl StoreState {
    /// Updated rows whose fetched row of the same name is missing or different.
    pub fn today_edits(&self) -> Vec<&PrayerRow> {
        self.updated_today_rows
            .iter()
            .filter(|updated| {
                self.original_today_rows
                    .iter()
                    .find(|original| original.name == updated.name)
                    != Some(*updated)
            })
            .collect()
    }

    /// Fetched rows whose name no longer appears in the updated rows.
    pub fn today_removed(&self) -> Vec<&PrayerRow> {
        self.original_today_rows
            .iter()
            .filter(|original| {
                !self
                    .updated_today_rows
                    .iter()
                    .any(|updated| updated.name == original.name)
            })
            .collect()
    }

    pub fn has_today_edits(&self) -> bool {
        !self.today_edits().is_empty() || !self.today_removed().is_empty()
    }
}
