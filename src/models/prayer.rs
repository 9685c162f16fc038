use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrayerName {
    Fajr,
    Sunrise,
    Zuhr,
    Asr,
    Maghrib,
    Isha,
    Jummah,
}

impl PrayerName {
    /// The six daily rows, in display order. Jummah is not part of it.
    pub fn canonical() -> [PrayerName; 6] {
        [
            PrayerName::Fajr,
            PrayerName::Sunrise,
            PrayerName::Zuhr,
            PrayerName::Asr,
            PrayerName::Maghrib,
            PrayerName::Isha,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PrayerName::Fajr => "fajr",
            PrayerName::Sunrise => "sunrise",
            PrayerName::Zuhr => "zuhr",
            PrayerName::Asr => "asr",
            PrayerName::Maghrib => "maghrib",
            PrayerName::Isha => "isha",
            PrayerName::Jummah => "jummah",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PrayerName::Fajr => "Fajr",
            PrayerName::Sunrise => "Sunrise",
            PrayerName::Zuhr => "Zuhr",
            PrayerName::Asr => "Asr",
            PrayerName::Maghrib => "Maghrib",
            PrayerName::Isha => "Isha",
            PrayerName::Jummah => "Jummah",
        }
    }

    /// Sunrise marks the end of Fajr; it is never prayed in congregation.
    pub fn has_jamat(&self) -> bool {
        !matches!(self, PrayerName::Sunrise)
    }
}

impl std::fmt::Display for PrayerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for PrayerName {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fajr" => Ok(PrayerName::Fajr),
            "sunrise" | "shuruq" => Ok(PrayerName::Sunrise),
            "zuhr" | "zohar" | "dhuhr" | "dhuhur" => Ok(PrayerName::Zuhr),
            "asr" => Ok(PrayerName::Asr),
            "maghrib" => Ok(PrayerName::Maghrib),
            "isha" => Ok(PrayerName::Isha),
            "jummah" | "jumuah" | "jumma" => Ok(PrayerName::Jummah),
            _ => Err(anyhow::anyhow!("Unknown prayer name: {}", s)),
        }
    }
}

/// One display-ready line of a day's timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrayerRow {
    pub name: PrayerName,
    /// Raw "HH:MM" as stored upstream, or empty
    pub start_time_24: String,
    pub start_time_12: String,
    pub jamat_time_12: String,
}

impl PrayerRow {
    pub fn empty(name: PrayerName) -> Self {
        Self {
            name,
            start_time_24: String::new(),
            start_time_12: String::new(),
            jamat_time_12: String::new(),
        }
    }

    pub fn has_start(&self) -> bool {
        !self.start_time_24.is_empty()
    }
}
