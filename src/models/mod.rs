pub mod prayer;
pub mod record;

pub use prayer::{PrayerName, PrayerRow};
pub use record::RawPrayerDayRecord;
