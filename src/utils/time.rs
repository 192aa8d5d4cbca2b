//! Time utilities: parsing HH:MM, 12h → 24h normalization, duration computations
//! and formatting minutes.
//!
//! All comparisons happen on `NaiveTime`, i.e. on one shared reference day.
//! Overnight spans are not supported: an end time earlier than the start is
//! simply an invalid range.

use crate::errors::{AppError, AppResult};
use crate::models::period::Period;
use chrono::{NaiveTime, Timelike};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

/// Map a 12-hour clock reading to 24-hour `HH:MM`.
///
/// `AM` + 12 → `00`, `PM` + anything but 12 → `hour + 12`.
/// The minute string is passed through, zero-padded to two digits.
pub fn normalize_time(hour: u32, minute: &str, period: Period) -> AppResult<String> {
    if !(1..=12).contains(&hour) {
        return Err(AppError::InvalidTime(format!(
            "hour {hour} is outside the 12-hour clock range 1-12"
        )));
    }

    let minute = minute.trim();
    let mins: u32 = minute
        .parse()
        .map_err(|_| AppError::InvalidTime(format!("invalid minutes '{minute}'")))?;
    if mins > 59 {
        return Err(AppError::InvalidTime(format!("invalid minutes '{minute}'")));
    }

    let hour24 = match period {
        Period::Am if hour == 12 => 0,
        Period::Pm if hour != 12 => hour + 12,
        _ => hour,
    };

    Ok(format!("{:02}:{:02}", hour24, mins))
}

/// Parse user input that may be either `HH:MM` (24h) or `H:MM AM|PM` (12h),
/// returning the normalized 24-hour `HH:MM` form.
pub fn parse_user_time(input: &str) -> AppResult<String> {
    let s = input.trim();

    if let Some(t) = parse_time(s) {
        return Ok(t.format("%H:%M").to_string());
    }

    // 12-hour form: the period is the trailing alphabetic part, "7:15pm" or "7:15 PM"
    let split_at = s
        .find(|c: char| c.is_ascii_alphabetic())
        .ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
    let (clock, suffix) = s.split_at(split_at);
    let period = Period::from_str_opt(suffix).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;

    let (h, m) = clock
        .trim()
        .split_once(':')
        .ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
    let hour: u32 = h.parse().map_err(|_| AppError::InvalidTime(s.to_string()))?;

    normalize_time(hour, m, period)
}

/// Minutes from `start` to `end` on the same reference day.
///
/// Does not validate: callers check `is_valid_range` first.
/// Drop seconds and sub-second parts; entries are kept at minute precision.
pub fn truncate_to_minute(t: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt(t.hour(), t.minute(), 0).unwrap_or(t)
}

pub fn duration_minutes(start: NaiveTime, end: NaiveTime) -> i64 {
    let duration = end - start;
    duration.num_minutes()
}

/// `true` iff `end` is strictly after `start`.
pub fn is_valid_range(start: NaiveTime, end: NaiveTime) -> bool {
    end > start
}

/// Render minutes as `"{h}h {m}m"`, e.g. 90 → `"1h 30m"`.
pub fn format_duration(minutes: i64) -> String {
    let hours = minutes.div_euclid(60);
    let mins = minutes.rem_euclid(60);
    format!("{}h {}m", hours, mins)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> NaiveTime {
        parse_time(s).unwrap()
    }

    #[test]
    fn duration_is_wall_clock_difference() {
        assert_eq!(duration_minutes(t("09:00"), t("17:30")), 510);
        assert_eq!(duration_minutes(t("09:00"), t("10:30")), 90);
        assert_eq!(duration_minutes(t("00:00"), t("23:59")), 1439);
    }

    #[test]
    fn range_rejects_equal_and_reversed_times() {
        assert!(!is_valid_range(t("09:00"), t("09:00")));
        assert!(!is_valid_range(t("10:00"), t("09:59")));
        assert!(is_valid_range(t("09:00"), t("09:01")));
    }

    #[test]
    fn normalize_twelve_hour_clock() {
        assert_eq!(normalize_time(12, "00", Period::Am).unwrap(), "00:00");
        assert_eq!(normalize_time(12, "00", Period::Pm).unwrap(), "12:00");
        assert_eq!(normalize_time(7, "15", Period::Pm).unwrap(), "19:15");
        assert_eq!(normalize_time(7, "5", Period::Am).unwrap(), "07:05");
    }

    #[test]
    fn normalize_rejects_out_of_range_input() {
        assert!(normalize_time(0, "00", Period::Am).is_err());
        assert!(normalize_time(13, "00", Period::Pm).is_err());
        assert!(normalize_time(9, "60", Period::Am).is_err());
        assert!(normalize_time(9, "xx", Period::Am).is_err());
    }

    #[test]
    fn format_duration_examples() {
        assert_eq!(format_duration(90), "1h 30m");
        assert_eq!(format_duration(45), "0h 45m");
        assert_eq!(format_duration(0), "0h 0m");
        assert_eq!(format_duration(600), "10h 0m");
    }

    #[test]
    fn user_time_accepts_both_clocks() {
        assert_eq!(parse_user_time("9:05").unwrap(), "09:05");
        assert_eq!(parse_user_time("17:30").unwrap(), "17:30");
        assert_eq!(parse_user_time("7:15 PM").unwrap(), "19:15");
        assert_eq!(parse_user_time("12:00am").unwrap(), "00:00");
        assert!(parse_user_time("25:00").is_err());
        assert!(parse_user_time("half past nine").is_err());
    }
}
