use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::models::PrayerName;

/// One day of the timetable exactly as the content store returns it.
///
/// Times are "HH:MM" or "HH:MM:SS.mmm" strings. Any field may be absent, and
/// a field carrying a non-string value is treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPrayerDayRecord {
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub fajr_start: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub fajr_jamat: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub sunrise: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub zohar_start: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub zohar_jamat: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub asr_start: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub asr_jamat: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub maghrib_start: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub maghrib_jamat: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub isha_start: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub isha_jamat: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub jummah_1: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub jummah_2: Option<String>,
}

impl RawPrayerDayRecord {
    /// Calendar date of the record, if present and ISO formatted.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        let raw = self.date.as_deref()?;
        let head = raw.get(..10).unwrap_or(raw);
        NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
    }

    pub fn start_of(&self, name: PrayerName) -> Option<&str> {
        match name {
            PrayerName::Fajr => self.fajr_start.as_deref(),
            PrayerName::Sunrise => self.sunrise.as_deref(),
            PrayerName::Zuhr => self.zohar_start.as_deref(),
            PrayerName::Asr => self.asr_start.as_deref(),
            PrayerName::Maghrib => self.maghrib_start.as_deref(),
            PrayerName::Isha => self.isha_start.as_deref(),
            PrayerName::Jummah => self.jummah_1.as_deref(),
        }
    }

    pub fn jamat_of(&self, name: PrayerName) -> Option<&str> {
        match name {
            PrayerName::Fajr => self.fajr_jamat.as_deref(),
            PrayerName::Sunrise => None,
            PrayerName::Zuhr => self.zohar_jamat.as_deref(),
            PrayerName::Asr => self.asr_jamat.as_deref(),
            PrayerName::Maghrib => self.maghrib_jamat.as_deref(),
            PrayerName::Isha => self.isha_jamat.as_deref(),
            PrayerName::Jummah => self.jummah_2.as_deref(),
        }
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Ok(Some(s)),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_strapi_entry() {
        let record: RawPrayerDayRecord = serde_json::from_value(json!({
            "id": 12,
            "documentId": "abc123",
            "date": "2026-10-16",
            "fajr_start": "05:31:00.000",
            "fajr_jamat": "06:00:00.000",
            "sunrise": "07:24:00.000",
            "zohar_start": "12:49:00.000",
            "jummah_1": "13:15:00.000",
            "jummah_2": "13:45:00.000",
            "publishedAt": "2026-01-01T00:00:00.000Z"
        }))
        .unwrap();

        assert_eq!(record.fajr_start.as_deref(), Some("05:31:00.000"));
        assert_eq!(record.asr_start, None);
        assert_eq!(record.calendar_date(), NaiveDate::from_ymd_opt(2026, 10, 16));
        assert_eq!(record.start_of(PrayerName::Jummah), Some("13:15:00.000"));
        assert_eq!(record.jamat_of(PrayerName::Sunrise), None);
    }

    #[test]
    fn test_non_string_fields_are_absent() {
        let record: RawPrayerDayRecord = serde_json::from_value(json!({
            "date": null,
            "fajr_start": 531,
            "isha_start": { "nested": true },
            "isha_jamat": "20:30"
        }))
        .unwrap();

        assert_eq!(record.date, None);
        assert_eq!(record.fajr_start, None);
        assert_eq!(record.isha_start, None);
        assert_eq!(record.isha_jamat.as_deref(), Some("20:30"));
        assert_eq!(record.calendar_date(), None);
    }

    #[test]
    fn test_calendar_date_accepts_timestamp_suffix() {
        let record = RawPrayerDayRecord {
            date: Some("2026-12-31T00:00:00.000Z".to_string()),
            ..Default::default()
        };
        assert_eq!(record.calendar_date(), NaiveDate::from_ymd_opt(2026, 12, 31));

        let bad = RawPrayerDayRecord {
            date: Some("31/12/2026".to_string()),
            ..Default::default()
        };
        assert_eq!(bad.calendar_date(), None);
    }
}
