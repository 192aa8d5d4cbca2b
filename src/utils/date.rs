//! Calendar helpers. Dates are plain calendar days (`NaiveDate`), never instants,
//! so no time-zone shift can move an entry to the neighbouring day.

use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse an ISO `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Zero-padded ISO form, the only form dates are stored in.
pub fn to_iso(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// First and last calendar day of the month containing `d`.
pub fn month_bounds(d: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = d.with_day(1).unwrap_or(d);
    let last_day = month_last_day(d.year(), d.month()).unwrap_or(first.day());
    let last = d.with_day(last_day).unwrap_or(d);
    (first, last)
}

pub fn month_last_day(y: i32, m: u32) -> Option<u32> {
    match m {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => {
            let leap = (y % 4 == 0 && y % 100 != 0) || (y % 400 == 0);
            Some(if leap { 29 } else { 28 })
        }
        _ => None,
    }
}

/// Short en-US display form, e.g. `Mar 1, 2024`.
pub fn format_display(d: NaiveDate) -> String {
    d.format("%b %-d, %Y").to_string()
}
