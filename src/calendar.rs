//! Calendar Utilities
//!
//! Which days the strip shows and how they are labelled.

use chrono::{Duration, Local};

use crate::models::DayKey;

/// Today in the browser's local time zone
pub fn today() -> DayKey {
    DayKey::new(Local::now().date_naive())
}

/// `count` consecutive days starting `offset` weeks from `today`
pub fn week_days(today: DayKey, offset: i32, count: usize) -> Vec<DayKey> {
    let start = today.date() + Duration::weeks(i64::from(offset));
    start
        .iter_days()
        .take(count)
        .map(DayKey::new)
        .collect()
}

/// `Monday, June 3, 2024`
pub fn long_label(day: DayKey) -> String {
    day.date().format("%A, %B %-d, %Y").to_string()
}

/// `Jun 3 - Jun 9, 2024`
pub fn range_label(first: DayKey, last: DayKey) -> String {
    format!(
        "{} - {}",
        first.date().format("%b %-d"),
        last.date().format("%b %-d, %Y")
    )
}

/// Label for the strip shown by `days`
pub fn strip_label(days: &[DayKey]) -> String {
    match (days.first(), days.last()) {
        (Some(first), Some(last)) => range_label(*first, *last),
        _ => String::new(),
    }
}
