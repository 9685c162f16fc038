/// Format a countdown in seconds as "Xh Ym", "Xm Ys" or "Xs".
///
/// Negative input is clamped to zero.
pub fn format_countdown(secs: i64) -> String {
    let secs = secs.max(0);
    if secs >= 3600 {
        let hours = secs / 3600;
        let minutes = (secs % 3600) / 60;
        format!("{}h {}m", hours, minutes)
    } else if secs >= 60 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}s", secs)
    }
}

/// First five characters of a stored time ("13:05:00.000" -> "13:05").
pub fn clip_time(raw: Option<&str>) -> String {
    raw.map(|s| s.chars().take(5).collect())
        .unwrap_or_default()
}

/// Convert "HH:MM" to 12-hour display form without am/pm ("13:30" -> "1:30").
///
/// Minutes are kept verbatim. Both sides of the colon must be plain digits;
/// anything else yields "".
pub fn to_twelve_hour(raw: Option<&str>) -> String {
    let clipped = clip_time(raw);
    let Some((hh, mm)) = clipped.split_once(':') else {
        return String::new();
    };
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(hh) || !all_digits(mm) {
        return String::new();
    }
    let Ok(hour) = hh.parse::<u32>() else {
        return String::new();
    };
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{}", display_hour, mm)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_countdown_boundaries() {
        assert_eq!(format_countdown(0), "0s");
        assert_eq!(format_countdown(59), "59s");
        assert_eq!(format_countdown(60), "1m 0s");
        assert_eq!(format_countdown(61), "1m 1s");
        assert_eq!(format_countdown(3599), "59m 59s");
        assert_eq!(format_countdown(3600), "1h 0m");
        assert_eq!(format_countdown(3661), "1h 1m");
        assert_eq!(format_countdown(90000), "25h 0m");
    }

    #[test]
    fn test_format_countdown_clamps_negative() {
        assert_eq!(format_countdown(-1), "0s");
        assert_eq!(format_countdown(i64::MIN), "0s");
    }

    #[test]
    fn test_to_twelve_hour() {
        assert_eq!(to_twelve_hour(Some("00:05")), "12:05");
        assert_eq!(to_twelve_hour(Some("12:00")), "12:00");
        assert_eq!(to_twelve_hour(Some("13:30")), "1:30");
        assert_eq!(to_twelve_hour(Some("23:59")), "11:59");
        assert_eq!(to_twelve_hour(Some("05:07")), "5:07");
        assert_eq!(to_twelve_hour(Some("")), "");
        assert_eq!(to_twelve_hour(None), "");
    }

    #[test]
    fn test_to_twelve_hour_uses_first_five_chars() {
        assert_eq!(to_twelve_hour(Some("18:45:00.000")), "6:45");
        assert_eq!(to_twelve_hour(Some("9:15")), "9:15");
    }

    #[test]
    fn test_to_twelve_hour_rejects_garbage() {
        assert_eq!(to_twelve_hour(Some("ab:cd")), "");
        assert_eq!(to_twelve_hour(Some("1230")), "");
        assert_eq!(to_twelve_hour(Some("12:")), "");
        assert_eq!(to_twelve_hour(Some("--:--")), "");
    }

    #[test]
    fn test_to_twelve_hour_rejects_signs_and_spaces() {
        assert_eq!(to_twelve_hour(Some("12:+5")), "");
        assert_eq!(to_twelve_hour(Some("+1:30")), "");
        assert_eq!(to_twelve_hour(Some(" 9:15")), "");
        assert_eq!(to_twelve_hour(Some("09: 5")), "");
    }

    #[test]
    fn test_clip_time() {
        assert_eq!(clip_time(Some("06:00:00.000")), "06:00");
        assert_eq!(clip_time(Some("6:0")), "6:0");
        assert_eq!(clip_time(None), "");
    }
}
