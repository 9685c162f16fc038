use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;

use crate::api::error::TransportError;
use crate::models::RawPrayerDayRecord;
use crate::utils::calendar::{ScheduleWindow, to_iso};

/// Query selecting every record inside `window`.
pub fn week_query(window: &ScheduleWindow) -> String {
    format!(
        "filters[date][$gte]={}&filters[date][$lte]={}&populate=*",
        to_iso(window.start_date),
        to_iso(window.end_date)
    )
}

/// Query selecting the record for a single date.
pub fn day_query(date: NaiveDate) -> String {
    format!("filters[date][$eq]={}&populate=*", to_iso(date))
}

/// `{base}/api/{collection}?{query}`, tolerating a trailing slash on `base`.
pub fn collection_url(base_url: &str, collection: &str, query: &str) -> String {
    format!(
        "{}/api/{}?{}",
        base_url.trim_end_matches('/'),
        collection.trim_matches('/'),
        query
    )
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    data: Option<Vec<RawPrayerDayRecord>>,
}

/// Pull the record list out of a `{ "data": [...] }` body.
pub fn records_from_body(body: Value) -> Result<Vec<RawPrayerDayRecord>, TransportError> {
    let envelope: Envelope = serde_json::from_value(body).map_err(TransportError::decode)?;
    Ok(envelope.data.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_week_query() {
        let window = ScheduleWindow {
            start_date: NaiveDate::from_ymd_opt(2026, 10, 11).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 10, 17).unwrap(),
        };
        assert_eq!(
            week_query(&window),
            "filters[date][$gte]=2026-10-11&filters[date][$lte]=2026-10-17&populate=*"
        );
    }

    #[test]
    fn test_day_query() {
        let date = NaiveDate::from_ymd_opt(2027, 1, 1).unwrap();
        assert_eq!(day_query(date), "filters[date][$eq]=2027-01-01&populate=*");
    }

    #[test]
    fn test_collection_url() {
        assert_eq!(
            collection_url("https://cms.example.org/", "salaah-times", "populate=*"),
            "https://cms.example.org/api/salaah-times?populate=*"
        );
    }

    #[test]
    fn test_records_from_body() {
        let records = records_from_body(json!({
            "data": [{ "date": "2026-10-16", "fajr_start": "05:31" }],
            "meta": { "pagination": { "total": 1 } }
        }))
        .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].fajr_start.as_deref(), Some("05:31"));

        assert!(records_from_body(json!({ "data": null })).unwrap().is_empty());
        assert!(records_from_body(json!({})).unwrap().is_empty());
        assert!(records_from_body(json!({ "data": "nope" })).is_err());
    }
}
